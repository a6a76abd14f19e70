use super::http::{client, ensure_success};
use super::speech::{FallbackReason, SpeechProvider, SpeechSource};
use crate::model::Language;
use reqwest::blocking::Client;
use serde::Serialize;

const BASE_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";
const MODEL_ID: &str = "eleven_multilingual_v2";

#[derive(Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

/// ElevenLabs text-to-speech; only used for Tagalog.
pub struct ElevenLabsClient {
    http: Client,
    api_key: String,
    voice_id: String,
}

impl ElevenLabsClient {
    pub fn new(api_key: &str, voice_id: &str) -> Self {
        Self {
            http: client(),
            api_key: api_key.to_string(),
            voice_id: voice_id.to_string(),
        }
    }
}

impl SpeechProvider for ElevenLabsClient {
    fn source(&self) -> SpeechSource {
        SpeechSource::ElevenLabs
    }

    fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, FallbackReason> {
        if language != Language::Tagalog {
            return Err(FallbackReason::UnsupportedLanguage(language));
        }
        let body = SpeechRequest {
            text,
            model_id: MODEL_ID,
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.75,
            },
        };
        let response = self
            .http
            .post(format!("{BASE_URL}/{}", self.voice_id))
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(super::GatewayError::from)?;
        let bytes = ensure_success(response)?
            .bytes()
            .map_err(super::GatewayError::from)?;
        Ok(bytes.to_vec())
    }
}
