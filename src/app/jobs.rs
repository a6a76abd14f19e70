//! Slow gateway calls run off the UI thread; results are picked up by
//! [`LearnApp::poll_jobs`] once per frame. One job per kind, last request wins.

use super::*;
use crate::gateway::{SpeechResult, SpeechSource, TranslationError};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

#[derive(Default)]
pub struct Jobs {
    translation: Option<Receiver<Result<String, TranslationError>>>,
    speech: Option<Receiver<(String, Language, SpeechResult)>>,
    ai_sentences: Option<Receiver<(String, Vec<String>)>>,
    bilingual: Option<Receiver<(String, Vec<SentencePair>)>>,
}

impl Jobs {
    pub fn translating(&self) -> bool {
        self.translation.is_some()
    }

    pub fn speaking(&self) -> bool {
        self.speech.is_some()
    }

    pub fn generating_sentences(&self) -> bool {
        self.ai_sentences.is_some()
    }

    pub fn fetching_bilingual(&self) -> bool {
        self.bilingual.is_some()
    }

    pub fn any_pending(&self) -> bool {
        self.translating() || self.speaking() || self.generating_sentences() || self.fetching_bilingual()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_job<T, F>(work: F) -> Receiver<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(work());
    });
    rx
}

// The web build has no HTTP providers, every flow answers immediately.
#[cfg(target_arch = "wasm32")]
fn spawn_job<T, F>(work: F) -> Receiver<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let _ = tx.send(work());
    rx
}

fn take_ready<T>(slot: &mut Option<Receiver<T>>) -> Option<T> {
    let rx = slot.as_ref()?;
    match rx.try_recv() {
        Ok(value) => {
            *slot = None;
            Some(value)
        }
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => {
            log::warn!("Background job ended without a result");
            *slot = None;
            None
        }
    }
}

impl LearnApp {
    pub fn request_translation(&mut self) {
        let text = self.translate_input.trim().to_string();
        if text.is_empty() {
            self.message = "Type something to translate first.".into();
            return;
        }
        let pair = self.learning.pair();
        let translator = Arc::clone(&self.gateways.translator);
        self.message = "⏳ Translating...".into();
        self.jobs.translation = Some(spawn_job(move || {
            translator.translate(&text, pair.learned, pair.meaning)
        }));
    }

    pub fn speak(&mut self, text: &str, language: Language) {
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }
        let speech = Arc::clone(&self.gateways.speech);
        self.jobs.speech = Some(spawn_job(move || {
            let result = speech.synthesize(&text, language);
            (text, language, result)
        }));
    }

    /// Asks the sentence generator for examples of the stored word `id`.
    pub fn request_ai_sentences(&mut self, id: &str) {
        let Some(entry) = self.learning.words().get(id) else {
            return;
        };
        if !self.gateways.sentences.can_generate() {
            self.message = "Example sentences need a GEMINI_API_KEY.".into();
            return;
        }
        let (id, word, language) = (entry.id.clone(), entry.word.clone(), entry.language);
        let sentences = Arc::clone(&self.gateways.sentences);
        self.message = format!("⏳ Generating sentences for \"{word}\"...");
        self.jobs.ai_sentences = Some(spawn_job(move || {
            let found = sentences.fetch_example_sentences(&word, language);
            (id, found)
        }));
    }

    /// Looks up real sentence pairs for `bilingual_word` in the current pair.
    pub fn request_bilingual_sentences(&mut self) {
        let word = self.bilingual_word.trim().to_string();
        if word.is_empty() {
            self.bilingual_sentences.clear();
            return;
        }
        let pair = self.learning.pair();
        let sentences = Arc::clone(&self.gateways.sentences);
        self.jobs.bilingual = Some(spawn_job(move || {
            let found = sentences.fetch_bilingual_example_sentences(&word, pair.learned, pair.meaning);
            (word, found)
        }));
    }

    pub fn poll_jobs(&mut self) {
        if let Some(result) = take_ready(&mut self.jobs.translation) {
            match result {
                Ok(text) => {
                    self.translate_output = text;
                    self.message.clear();
                }
                Err(TranslationError::NotConfigured) => {
                    self.message = "Translation is not configured. Set GEMINI_API_KEY.".into();
                }
                Err(_) => {
                    self.message = "Translation failed. Please try again.".into();
                }
            }
        }

        if let Some((text, language, result)) = take_ready(&mut self.jobs.speech) {
            self.play_speech(&text, language, result);
        }

        if let Some((id, sentences)) = take_ready(&mut self.jobs.ai_sentences) {
            if sentences.is_empty() {
                self.message = "No example sentences could be generated.".into();
            } else {
                let count = sentences.len();
                if self.learning.attach_ai_sentences(&id, sentences) {
                    self.message = format!("Added {count} example sentence(s).");
                }
            }
        }

        if let Some((word, pairs)) = take_ready(&mut self.jobs.bilingual) {
            if word == self.bilingual_word.trim() {
                if pairs.is_empty() {
                    self.message = format!("No example sentences found for \"{word}\".");
                }
                self.bilingual_sentences = pairs;
            }
        }
    }

    fn play_speech(&mut self, text: &str, language: Language, result: SpeechResult) {
        match (result.source, result.audio) {
            (SpeechSource::None, _) => {}
            (SpeechSource::Local, _) | (_, None) => {
                if let Err(e) = speak_locally(text, language) {
                    log::debug!("Local speech unavailable: {e}");
                    self.message = format!("No voice available for {language}.");
                }
            }
            (source, Some(audio)) => match self.save_audio(&audio) {
                Ok(path) => {
                    self.message = format!("🔊 {source:?} audio saved to {path}");
                }
                Err(e) => {
                    log::error!("Could not save speech audio: {e}");
                    self.message = "Could not play the audio.".into();
                }
            },
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_audio(&self, audio: &[u8]) -> std::io::Result<String> {
        std::fs::create_dir_all(&self.config.data_dir)?;
        let path = self.config.data_dir.join("last_speech.mp3");
        std::fs::write(&path, audio)?;
        Ok(path.display().to_string())
    }

    #[cfg(target_arch = "wasm32")]
    fn save_audio(&self, _audio: &[u8]) -> std::io::Result<String> {
        Err(std::io::Error::other("cloud audio is not played in the browser"))
    }
}

#[cfg(target_arch = "wasm32")]
fn speak_locally(text: &str, language: Language) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let synth = window.speech_synthesis().map_err(|e| format!("{e:?}"))?;
    let utterance =
        web_sys::SpeechSynthesisUtterance::new_with_text(text).map_err(|e| format!("{e:?}"))?;
    utterance.set_lang(language.speech_tag());
    synth.speak(&utterance);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn speak_locally(_text: &str, _language: Language) -> Result<(), String> {
    Err("no local speech engine on desktop".into())
}
