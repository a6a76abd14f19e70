use super::GatewayError;
use crate::model::Language;
use thiserror::Error;

/// Why a provider passed on a request; the next provider is tried.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error("{0} is not supported by this provider")]
    UnsupportedLanguage(Language),
    #[error("provider returned no audio")]
    EmptyAudio,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeechSource {
    ElevenLabs,
    Google,
    /// No cloud audio; the caller should use local/browser synthesis.
    Local,
    /// Nothing to say.
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeechResult {
    /// MP3 bytes.
    pub audio: Option<Vec<u8>>,
    pub source: SpeechSource,
}

pub trait SpeechProvider: Send + Sync {
    fn source(&self) -> SpeechSource;
    fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, FallbackReason>;
}

/// Providers in priority order; the first one returning audio wins.
pub struct SpeechSynthesizer {
    providers: Vec<Box<dyn SpeechProvider>>,
}

impl SpeechSynthesizer {
    pub fn new(providers: Vec<Box<dyn SpeechProvider>>) -> Self {
        Self { providers }
    }

    pub fn synthesize(&self, text: &str, language: Language) -> SpeechResult {
        if text.trim().is_empty() {
            return SpeechResult {
                audio: None,
                source: SpeechSource::None,
            };
        }
        for provider in &self.providers {
            match provider.synthesize(text, language) {
                Ok(audio) if !audio.is_empty() => {
                    log::info!("Synthesized {language} speech with {:?}", provider.source());
                    return SpeechResult {
                        audio: Some(audio),
                        source: provider.source(),
                    };
                }
                Ok(_) => log::warn!("{:?}: {}", provider.source(), FallbackReason::EmptyAudio),
                Err(FallbackReason::UnsupportedLanguage(_)) => {}
                Err(reason) => log::warn!("{:?} fell back: {reason}", provider.source()),
            }
        }
        log::debug!("No cloud audio for {language}, using local speech");
        SpeechResult {
            audio: None,
            source: SpeechSource::Local,
        }
    }
}
