use std::path::PathBuf;

pub const APP_NAME: &str = "LeyText Learn";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_ELEVENLABS_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
pub const DEFAULT_TATOEBA_ENDPOINT: &str = "https://tatoeba.org/eng/api_v0/search";

/// Runtime settings, read from the environment. Blank variables count as unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_voice_id: String,
    pub google_tts_api_key: Option<String>,
    pub tatoeba_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_data_dir() -> PathBuf {
    eframe::storage_dir(APP_NAME).unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(target_arch = "wasm32")]
fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| non_blank(lookup(key));
        Self {
            data_dir: var("LEYTEXT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            gemini_api_key: var("GEMINI_API_KEY").or_else(|| var("GOOGLE_API_KEY")),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            elevenlabs_api_key: var("ELEVENLABS_API_KEY"),
            elevenlabs_voice_id: var("ELEVENLABS_VOICE_ID")
                .unwrap_or_else(|| DEFAULT_ELEVENLABS_VOICE_ID.to_string()),
            google_tts_api_key: var("GOOGLE_TTS_API_KEY"),
            tatoeba_endpoint: var("TATOEBA_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_TATOEBA_ENDPOINT.to_string()),
        }
    }
}
