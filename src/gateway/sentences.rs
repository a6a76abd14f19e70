use super::GatewayError;
use crate::model::Language;
use serde::{Deserialize, Serialize};

pub const MAX_SENTENCES: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    pub source_text: String,
    pub target_text: String,
    pub source_language: Language,
    pub target_language: Language,
}

/// Writes new example sentences for a word (generative AI).
pub trait SentenceGenerator: Send + Sync {
    fn generate(&self, word: &str, language: Language) -> Result<Vec<String>, GatewayError>;
}

/// Looks up existing translated sentence pairs (Tatoeba).
pub trait SentenceCorpus: Send + Sync {
    fn search(
        &self,
        word: &str,
        source: Language,
        target: Language,
    ) -> Result<Vec<SentencePair>, GatewayError>;
}

pub struct ExampleSentences {
    generator: Option<Box<dyn SentenceGenerator>>,
    corpus: Option<Box<dyn SentenceCorpus>>,
}

impl ExampleSentences {
    pub fn new(
        generator: Option<Box<dyn SentenceGenerator>>,
        corpus: Option<Box<dyn SentenceCorpus>>,
    ) -> Self {
        Self { generator, corpus }
    }

    pub fn can_generate(&self) -> bool {
        self.generator.is_some()
    }

    pub fn fetch_example_sentences(&self, word: &str, language: Language) -> Vec<String> {
        let word = word.trim();
        let Some(generator) = self.generator.as_ref().filter(|_| !word.is_empty()) else {
            return Vec::new();
        };
        match generator.generate(word, language) {
            Ok(sentences) => sentences
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .take(MAX_SENTENCES)
                .collect(),
            Err(e) => {
                log::warn!("Example sentences for '{word}' failed: {e}");
                Vec::new()
            }
        }
    }

    pub fn fetch_bilingual_example_sentences(
        &self,
        word: &str,
        source: Language,
        target: Language,
    ) -> Vec<SentencePair> {
        let word = word.trim();
        if word.is_empty() || source == target {
            return Vec::new();
        }
        let Some(corpus) = self.corpus.as_ref() else {
            return Vec::new();
        };
        match corpus.search(word, source, target) {
            Ok(mut pairs) => {
                pairs.truncate(MAX_SENTENCES);
                pairs
            }
            Err(e) => {
                log::warn!("Sentence lookup for '{word}' failed: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Chatty;

    impl SentenceGenerator for Chatty {
        fn generate(&self, word: &str, _: Language) -> Result<Vec<String>, GatewayError> {
            Ok((1..=8).map(|i| format!(" {word} #{i} ")).chain([String::new()]).collect())
        }
    }

    struct Broken;

    impl SentenceCorpus for Broken {
        fn search(&self, _: &str, _: Language, _: Language) -> Result<Vec<SentencePair>, GatewayError> {
            Err(GatewayError::Malformed("html instead of json".into()))
        }
    }

    struct Many;

    impl SentenceCorpus for Many {
        fn search(&self, word: &str, source: Language, target: Language) -> Result<Vec<SentencePair>, GatewayError> {
            Ok((0..9)
                .map(|i| SentencePair {
                    source_text: format!("{word} {i}"),
                    target_text: format!("{i}"),
                    source_language: source,
                    target_language: target,
                })
                .collect())
        }
    }

    #[test]
    fn generated_sentences_are_trimmed_and_capped() {
        let flow = ExampleSentences::new(Some(Box::new(Chatty)), None);
        let out = flow.fetch_example_sentences("tubig", Language::Tagalog);
        assert_eq!(out.len(), MAX_SENTENCES);
        assert_eq!(out[0], "tubig #1");
    }

    #[test]
    fn missing_generator_or_blank_word_is_empty() {
        let flow = ExampleSentences::new(None, None);
        assert!(flow.fetch_example_sentences("tubig", Language::Tagalog).is_empty());
        let flow = ExampleSentences::new(Some(Box::new(Chatty)), None);
        assert!(flow.fetch_example_sentences("  ", Language::Tagalog).is_empty());
    }

    #[test]
    fn corpus_failures_and_same_language_are_empty() {
        let flow = ExampleSentences::new(None, Some(Box::new(Broken)));
        assert!(flow
            .fetch_bilingual_example_sentences("water", Language::English, Language::Tagalog)
            .is_empty());
        let flow = ExampleSentences::new(None, Some(Box::new(Many)));
        assert!(flow
            .fetch_bilingual_example_sentences("water", Language::English, Language::English)
            .is_empty());
    }

    #[test]
    fn corpus_results_are_capped() {
        let flow = ExampleSentences::new(None, Some(Box::new(Many)));
        let out = flow.fetch_bilingual_example_sentences("water", Language::English, Language::Bisaya);
        assert_eq!(out.len(), MAX_SENTENCES);
        assert_eq!(out[0].target_language, Language::Bisaya);
    }
}
