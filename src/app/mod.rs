use crate::config::AppConfig;
use crate::context::LearningContext;
use crate::flashcards::Deck;
use crate::gateway::{Gateways, SentencePair};
use crate::learning_path::LearningPath;
use crate::model::{AppState, Language, QuizScore};
use crate::monolingual::MonolingualDictionary;
use crate::quiz::{AnswerFeedback, QuizSession};
use eframe::egui;
use serde::{Deserialize, Serialize};

// Submodules
pub mod actions;
pub mod jobs;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod words;

pub use crate::view_models::{LessonInfo, ScoreRow, UnitInfo};
pub use jobs::Jobs;
pub use words::WordForm;

/// What eframe persists for us; everything else lives in the learning store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

pub struct LearnApp {
    pub learning: LearningContext,
    pub gateways: Gateways,
    pub path: LearningPath,
    pub monolingual: MonolingualDictionary,
    pub config: AppConfig,
    pub state: AppState,
    pub dark_mode: bool,
    pub message: String,

    // word list / dictionary
    pub word_form: WordForm,
    pub word_search: String,
    pub dictionary_search: String,
    pub selected_category: Option<String>,
    pub bilingual_word: String,
    pub bilingual_sentences: Vec<SentencePair>,

    // monolingual dictionary
    pub monolingual_language: Language,
    pub monolingual_search: String,

    // practice
    pub quiz: Option<QuizSession>,
    pub quiz_return: AppState,
    pub last_feedback: Option<AnswerFeedback>,
    pub last_score: Option<QuizScore>,
    pub deck: Option<Deck>,

    // translate
    pub translate_input: String,
    pub translate_output: String,

    // learning path
    pub lesson: Option<(String, String)>,

    pub confirm_clear_words: bool,
    pub confirm_clear_scores: bool,
    pub jobs: Jobs,
}

impl LearnApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::from_env();
        let learning = LearningContext::open(&config);
        let gateways = Gateways::from_config(&config);
        let prefs: UiPrefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let mut app = Self::with_parts(config, learning, gateways);
        app.dark_mode = prefs.dark_mode;
        cc.egui_ctx.set_visuals(app.visuals());
        app
    }

    /// App around already-built parts, without any window.
    pub fn with_parts(config: AppConfig, learning: LearningContext, gateways: Gateways) -> Self {
        let monolingual_language = learning.preferences().source_language();
        Self {
            learning,
            gateways,
            path: LearningPath::embedded(),
            monolingual: MonolingualDictionary::embedded(),
            config,
            state: AppState::Home,
            dark_mode: true,
            message: String::new(),
            word_form: WordForm::default(),
            word_search: String::new(),
            dictionary_search: String::new(),
            selected_category: None,
            bilingual_word: String::new(),
            bilingual_sentences: Vec::new(),
            monolingual_language,
            monolingual_search: String::new(),
            quiz: None,
            quiz_return: AppState::QuizSetup,
            last_feedback: None,
            last_score: None,
            deck: None,
            translate_input: String::new(),
            translate_output: String::new(),
            lesson: None,
            confirm_clear_words: false,
            confirm_clear_scores: false,
            jobs: Jobs::default(),
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }

    pub fn ui_prefs(&self) -> UiPrefs {
        UiPrefs {
            dark_mode: self.dark_mode,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn app() -> LearnApp {
        LearnApp::with_parts(
            AppConfig::default(),
            LearningContext::in_memory(11),
            Gateways::offline(),
        )
    }
}
