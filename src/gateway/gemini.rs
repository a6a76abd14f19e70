use super::http::{client, ensure_success};
use super::sentences::SentenceGenerator;
use super::translate::TranslationProvider;
use super::GatewayError;
use crate::model::Language;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Gemini `generateContent`, used for translation and example sentences.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            http: client(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    fn generate_text(&self, prompt: &str) -> Result<String, GatewayError> {
        let url = format!("{BASE_URL}/{}:generateContent", self.model);
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };
        let response = self
            .http
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()?;
        let parsed: GenerateResponse = ensure_success(response)?.json()?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| GatewayError::Malformed("no candidate text".into()))
    }
}

fn translation_prompt(text: &str, source: Language, target: Language) -> String {
    format!(
        "You are a helpful translation assistant. Translate the following text from {source} to {target}.\n\
         Provide only the translated text itself, without any additional explanations, apologies, or conversational filler.\n\n\
         Original text ({source}):\n{text}\n\n\
         Translated text ({target}):"
    )
}

fn sentences_prompt(word: &str, language: Language) -> String {
    format!(
        "You are an expert linguist. Generate at least 3 example sentences in {language} that use \
         the word or phrase \"{word}\" in different contexts. The sentences must be grammatically \
         correct and natural-sounding.\n\
         Answer with a JSON array of strings and nothing else."
    )
}

/// Reads a list of sentences out of model output: a JSON array (optionally in
/// a code fence) or, failing that, one sentence per line.
pub(crate) fn parse_sentence_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();
    if let Ok(list) = serde_json::from_str::<Vec<String>>(unfenced) {
        return list;
    }
    unfenced
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '.' | ')' | '-' | '*'))
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

impl TranslationProvider for GeminiClient {
    fn name(&self) -> &str {
        "Gemini"
    }

    fn translate(&self, text: &str, source: Language, target: Language) -> Result<String, GatewayError> {
        self.generate_text(&translation_prompt(text, source, target))
            .map(|t| t.trim().to_string())
    }
}

impl SentenceGenerator for GeminiClient {
    fn generate(&self, word: &str, language: Language) -> Result<Vec<String>, GatewayError> {
        let raw = self.generate_text(&sentences_prompt(word, language))?;
        Ok(parse_sentence_list(&raw))
    }
}
