use super::GatewayError;
use super::http::{client, ensure_success};
use super::speech::{FallbackReason, SpeechProvider, SpeechSource};
use crate::model::Language;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const ENDPOINT: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: Input<'a>,
    voice: Voice<'a>,
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct Input<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Voice<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: String,
}

pub struct GoogleTtsClient {
    http: Client,
    api_key: String,
}

impl GoogleTtsClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            http: client(),
            api_key: api_key.to_string(),
        }
    }
}

fn decode_audio(audio_content: &str) -> Result<Vec<u8>, FallbackReason> {
    if audio_content.is_empty() {
        return Err(FallbackReason::EmptyAudio);
    }
    STANDARD
        .decode(audio_content)
        .map_err(|e| GatewayError::Malformed(format!("audioContent is not base64: {e}")).into())
}

impl SpeechProvider for GoogleTtsClient {
    fn source(&self) -> SpeechSource {
        SpeechSource::Google
    }

    fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, FallbackReason> {
        let (language_code, name) = language
            .google_tts_voice()
            .ok_or(FallbackReason::UnsupportedLanguage(language))?;
        let body = SynthesizeRequest {
            input: Input { text },
            voice: Voice { language_code, name },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
            },
        };
        let response = self
            .http
            .post(ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(GatewayError::from)?;
        let parsed: SynthesizeResponse = ensure_success(response)?
            .json()
            .map_err(GatewayError::from)?;
        decode_audio(&parsed.audio_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_google_field_names() {
        let body = SynthesizeRequest {
            input: Input { text: "Salamat" },
            voice: Voice {
                language_code: "fil-PH",
                name: "fil-PH-Standard-A",
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["voice"]["languageCode"], "fil-PH");
        assert_eq!(json["audioConfig"]["audioEncoding"], "MP3");
    }

    #[test]
    fn decodes_base64_audio() {
        assert_eq!(decode_audio("SUQz").unwrap(), b"ID3".to_vec());
        assert!(matches!(decode_audio(""), Err(FallbackReason::EmptyAudio)));
        assert!(decode_audio("not base64!").is_err());
    }

    #[test]
    fn unsupported_language_falls_back_without_request() {
        let client = GoogleTtsClient::new("unused");
        assert!(matches!(
            client.synthesize("Maayong buntag", Language::Bisaya),
            Err(FallbackReason::UnsupportedLanguage(Language::Bisaya))
        ));
    }
}
