use super::GatewayError;
use super::http::{client, ensure_success};
use super::sentences::{MAX_SENTENCES, SentenceCorpus, SentencePair};
use crate::model::Language;
use reqwest::blocking::Client;
use serde::Deserialize;

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    #[serde(default)]
    text: String,
    /// Groups of translations (direct, indirect), each a list.
    #[serde(default)]
    translations: Vec<Vec<Translation>>,
}

#[derive(Deserialize)]
struct Translation {
    #[serde(default)]
    text: String,
    #[serde(default)]
    lang: Option<String>,
}

pub struct TatoebaClient {
    http: Client,
    endpoint: String,
}

impl TatoebaClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: client(),
            endpoint: endpoint.to_string(),
        }
    }
}

fn collect_pairs(response: SearchResponse, source: Language, target: Language) -> Vec<SentencePair> {
    let target_code = target.tatoeba_code();
    response
        .results
        .into_iter()
        .filter(|r| !r.text.trim().is_empty())
        .filter_map(|r| {
            let translation = r
                .translations
                .into_iter()
                .flatten()
                .find(|t| t.lang.as_deref() == Some(target_code) && !t.text.trim().is_empty())?;
            Some(SentencePair {
                source_text: r.text,
                target_text: translation.text,
                source_language: source,
                target_language: target,
            })
        })
        .take(MAX_SENTENCES)
        .collect()
}

impl SentenceCorpus for TatoebaClient {
    fn search(
        &self,
        word: &str,
        source: Language,
        target: Language,
    ) -> Result<Vec<SentencePair>, GatewayError> {
        let from = source.tatoeba_code();
        let to = target.tatoeba_code();
        let limit = MAX_SENTENCES.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .query(&[
                ("query", word),
                ("from", from),
                ("to", to),
                ("orphans", "no"),
                ("unapproved", "no"),
                ("sort", "relevance"),
                ("trans_filter", "limit"),
                ("trans_to", to),
                ("trans_link", "direct"),
                ("limit", limit.as_str()),
            ])
            .send()?;
        let parsed: SearchResponse = ensure_success(response)?.json()?;
        Ok(collect_pairs(parsed, source, target))
    }
}
