use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Language {
    English,
    Tagalog,
    Bisaya,
    #[serde(rename = "Waray-Waray")]
    WarayWaray,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Tagalog,
        Language::Bisaya,
        Language::WarayWaray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Tagalog => "Tagalog",
            Language::Bisaya => "Bisaya",
            Language::WarayWaray => "Waray-Waray",
        }
    }

    /// ISO 639-3 code used by the Tatoeba sentence corpus.
    pub fn tatoeba_code(self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Tagalog => "tgl",
            Language::Bisaya => "ceb",
            Language::WarayWaray => "war",
        }
    }

    /// Google Cloud TTS `(languageCode, voice)`; only Tagalog has a cloud voice.
    pub fn google_tts_voice(self) -> Option<(&'static str, &'static str)> {
        match self {
            Language::Tagalog => Some(("fil-PH", "fil-PH-Standard-A")),
            _ => None,
        }
    }

    /// BCP-47 tag handed to local speech synthesis.
    pub fn speech_tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Tagalog => "fil-PH",
            Language::Bisaya => "ceb-PH",
            Language::WarayWaray => "war-PH",
        }
    }

    /// First supported language that is not `self`.
    pub fn complement(self) -> Language {
        Language::ALL
            .into_iter()
            .find(|l| *l != self)
            .unwrap_or(Language::Tagalog)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Learned language plus the language its meanings are shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    pub learned: Language,
    pub meaning: Language,
}

impl LanguagePair {
    pub fn new(learned: Language, meaning: Language) -> Self {
        Self { learned, meaning }
    }

    pub fn reversed(self) -> Self {
        Self {
            learned: self.meaning,
            meaning: self.learned,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub id: String,
    pub word: String,    // in `language`
    pub meaning: String, // in `target_language`
    pub language: Language,
    pub target_language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_sentence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_sentences: Option<Vec<String>>,
    pub created_at: i64,
}

impl WordEntry {
    pub fn pair(&self) -> LanguagePair {
        LanguagePair::new(self.language, self.target_language)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == category.to_lowercase())
    }

    /// Same entry seen from the other side: word and meaning swapped.
    pub fn flipped(&self) -> WordEntry {
        WordEntry {
            word: self.meaning.clone(),
            meaning: self.word.clone(),
            language: self.target_language,
            target_language: self.language,
            ..self.clone()
        }
    }

    pub fn to_draft(&self) -> WordDraft {
        WordDraft {
            word: self.word.clone(),
            meaning: self.meaning.clone(),
            language: self.language,
            target_language: self.target_language,
            user_sentence: self.user_sentence.clone(),
            pronunciation: self.pronunciation.clone(),
            category: self.category.clone(),
        }
    }
}

/// User-supplied part of a [`WordEntry`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordDraft {
    pub word: String,
    pub meaning: String,
    pub language: Language,
    pub target_language: Language,
    #[serde(default)]
    pub user_sentence: Option<String>,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl WordDraft {
    pub fn new(word: &str, meaning: &str, language: Language, target_language: Language) -> Self {
        Self {
            word: word.to_string(),
            meaning: meaning.to_string(),
            language,
            target_language,
            user_sentence: None,
            pronunciation: None,
            category: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Trims every field and turns blank optionals into `None`.
    pub fn normalized(self) -> Self {
        fn opt(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            word: self.word.trim().to_string(),
            meaning: self.meaning.trim().to_string(),
            language: self.language,
            target_language: self.target_language,
            user_sentence: opt(self.user_sentence),
            pronunciation: opt(self.pronunciation),
            category: opt(self.category),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub score: u32,
    pub total_questions: u32,
    pub date: i64,
}

impl QuizScore {
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            0
        } else {
            ((self.score as f64 / self.total_questions as f64) * 100.0).round() as u32
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionType {
    WordToMeaning,
    MeaningToWord,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizQuestion {
    pub source_word: WordEntry,
    pub question_type: QuestionType,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    WordList,
    Dictionary,
    MonolingualDictionary,
    Flashcards,
    QuizSetup,
    Quiz,
    QuizSummary,
    Translate,
    LearningPath,
    Lesson,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}
