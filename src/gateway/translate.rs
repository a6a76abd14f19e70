use super::GatewayError;
use crate::model::Language;
use thiserror::Error;

pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> &str;
    fn translate(&self, text: &str, source: Language, target: Language) -> Result<String, GatewayError>;
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("no translation service is configured")]
    NotConfigured,
    #[error("translation failed: {0}")]
    Provider(#[from] GatewayError),
}

pub struct Translator {
    provider: Option<Box<dyn TranslationProvider>>,
}

impl Translator {
    pub fn new(provider: Option<Box<dyn TranslationProvider>>) -> Self {
        Self { provider }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Blank text and same-language requests are answered without a provider call.
    pub fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        if source == target {
            return Ok(text.to_string());
        }
        let provider = self.provider.as_ref().ok_or(TranslationError::NotConfigured)?;
        match provider.translate(text, source, target) {
            Ok(translated) => {
                log::info!("Translated {source} -> {target} via {}", provider.name());
                Ok(translated)
            }
            Err(e) => {
                log::warn!("{} translation failed: {e}", provider.name());
                Err(e.into())
            }
        }
    }
}
