//! Wrappers around the external translation, speech and sentence services.
//!
//! Every flow takes its providers as trait objects, so the order and set of
//! providers is plain data. HTTP providers only exist in native builds; the
//! web build gets the offline fallbacks.

pub mod sentences;
pub mod speech;
pub mod translate;

#[cfg(not(target_arch = "wasm32"))]
pub mod elevenlabs;
#[cfg(not(target_arch = "wasm32"))]
pub mod gemini;
#[cfg(not(target_arch = "wasm32"))]
pub mod google_tts;
#[cfg(not(target_arch = "wasm32"))]
mod http;
#[cfg(not(target_arch = "wasm32"))]
pub mod tatoeba;

pub use sentences::{ExampleSentences, MAX_SENTENCES, SentenceCorpus, SentenceGenerator, SentencePair};
pub use speech::{FallbackReason, SpeechProvider, SpeechResult, SpeechSource, SpeechSynthesizer};
pub use translate::{TranslationError, TranslationProvider, Translator};

use crate::config::AppConfig;
use std::sync::Arc;
use thiserror::Error;

/// Failure talking to a remote service.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service answered HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Malformed(String),
}

/// The three flows, shareable with background jobs.
#[derive(Clone)]
pub struct Gateways {
    pub translator: Arc<Translator>,
    pub speech: Arc<SpeechSynthesizer>,
    pub sentences: Arc<ExampleSentences>,
}

impl Gateways {
    pub fn new(translator: Translator, speech: SpeechSynthesizer, sentences: ExampleSentences) -> Self {
        Self {
            translator: Arc::new(translator),
            speech: Arc::new(speech),
            sentences: Arc::new(sentences),
        }
    }

    /// No remote providers at all: translation reports "not configured",
    /// speech always falls back to local synthesis, sentence lookups are empty.
    pub fn offline() -> Self {
        Self::new(
            Translator::new(None),
            SpeechSynthesizer::new(Vec::new()),
            ExampleSentences::new(None, None),
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_config(config: &AppConfig) -> Self {
        let gemini = config.gemini_api_key.as_deref().map(|key| {
            gemini::GeminiClient::new(key, &config.gemini_model)
        });

        let mut speech: Vec<Box<dyn SpeechProvider>> = Vec::new();
        if let Some(key) = config.elevenlabs_api_key.as_deref() {
            speech.push(Box::new(elevenlabs::ElevenLabsClient::new(
                key,
                &config.elevenlabs_voice_id,
            )));
        }
        if let Some(key) = config.google_tts_api_key.as_deref() {
            speech.push(Box::new(google_tts::GoogleTtsClient::new(key)));
        }

        log::info!(
            "Gateways: translation {}, {} speech provider(s), sentence generator {}",
            if gemini.is_some() { "on" } else { "off" },
            speech.len(),
            if gemini.is_some() { "on" } else { "off" },
        );

        let translator = Translator::new(
            gemini
                .clone()
                .map(|g| Box::new(g) as Box<dyn TranslationProvider>),
        );
        let sentences = ExampleSentences::new(
            gemini.map(|g| Box::new(g) as Box<dyn SentenceGenerator>),
            Some(Box::new(tatoeba::TatoebaClient::new(&config.tatoeba_endpoint))),
        );
        Self::new(translator, SpeechSynthesizer::new(speech), sentences)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_config(_config: &AppConfig) -> Self {
        log::info!("Web build: remote providers disabled, using local fallbacks");
        Self::offline()
    }
}
