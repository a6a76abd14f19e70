//! Everything the learner owns, behind one object handed to the UI.

use crate::config::AppConfig;
use crate::data::read_seed_drafts;
use crate::flashcards::Deck;
use crate::history::QuizHistory;
use crate::model::{Language, LanguagePair, QuizScore, WordDraft, WordEntry};
use crate::preferences::LanguagePreferences;
use crate::quiz::{QuizError, QuizOutcome, QuizSession};
use crate::repository::{ValidationError, WordRepository};
use crate::store::{self, KeyValueStore, MemoryStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// RNG seeded from the clock; avoids an OS entropy source in the web build.
pub fn clock_rng() -> StdRng {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now_ms().saturating_mul(1_000_000));
    StdRng::seed_from_u64(nanos as u64)
}

pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    uuid::Builder::from_random_bytes(rng.random())
        .into_uuid()
        .to_string()
}

/// Seed drafts as entries with fresh ids, `created_at` one second apart so
/// the bank keeps its order when sorted by age.
fn seed_entries<R: Rng + ?Sized>(rng: &mut R, now: i64) -> Vec<WordEntry> {
    let drafts = read_seed_drafts().unwrap_or_else(|e| {
        log::error!("Embedded word bank is invalid: {e}");
        Vec::new()
    });
    let count = drafts.len() as i64;
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, d)| WordEntry {
            id: random_id(rng),
            word: d.word,
            meaning: d.meaning,
            language: d.language,
            target_language: d.target_language,
            user_sentence: d.user_sentence,
            pronunciation: d.pronunciation,
            category: d.category,
            ai_sentences: None,
            created_at: now - (count - i as i64) * 1000,
        })
        .collect()
}

pub struct LearningContext {
    store: Box<dyn KeyValueStore>,
    words: WordRepository,
    preferences: LanguagePreferences,
    history: QuizHistory,
    rng: StdRng,
}

impl LearningContext {
    pub fn new(mut store: Box<dyn KeyValueStore>, mut rng: StdRng) -> Self {
        let preferences = LanguagePreferences::load(store.as_ref());
        let history = QuizHistory::load(store.as_ref());
        let words = WordRepository::load(store.as_mut(), || seed_entries(&mut rng, now_ms()));
        Self {
            store,
            words,
            preferences,
            history,
            rng,
        }
    }

    pub fn open(config: &AppConfig) -> Self {
        Self::new(store::open_default_store(&config.data_dir), clock_rng())
    }

    /// Seeded, store-less context for tests and demos.
    pub fn in_memory(seed: u64) -> Self {
        Self::new(Box::new(MemoryStore::new()), StdRng::seed_from_u64(seed))
    }

    pub fn flush(&mut self) {
        if let Err(e) = self.store.flush() {
            log::error!("Failed to flush store: {e}");
        }
    }

    // --- languages ---

    pub fn preferences(&self) -> &LanguagePreferences {
        &self.preferences
    }

    pub fn pair(&self) -> LanguagePair {
        self.preferences.pair()
    }

    pub fn set_source_language(&mut self, language: Language) {
        self.preferences.set_source(self.store.as_mut(), language);
    }

    pub fn set_target_language(&mut self, language: Language) {
        self.preferences.set_target(self.store.as_mut(), language);
    }

    pub fn swap_languages(&mut self) {
        self.preferences.swap(self.store.as_mut());
    }

    // --- words ---

    pub fn words(&self) -> &WordRepository {
        &self.words
    }

    pub fn add_word(&mut self, draft: WordDraft) -> Result<WordEntry, ValidationError> {
        let id = random_id(&mut self.rng);
        self.words.add_word(self.store.as_mut(), draft, id, now_ms())
    }

    pub fn edit_word(&mut self, entry: WordEntry) -> Result<bool, ValidationError> {
        self.words.edit_word(self.store.as_mut(), entry)
    }

    pub fn delete_word(&mut self, id: &str) -> bool {
        self.words.delete_word(self.store.as_mut(), id)
    }

    pub fn attach_ai_sentences(&mut self, id: &str, sentences: Vec<String>) -> bool {
        self.words.attach_ai_sentences(self.store.as_mut(), id, sentences)
    }

    pub fn clear_words(&mut self) {
        self.words.clear_all(self.store.as_mut());
    }

    // --- practice ---

    pub fn study_pool(&self, category: Option<&str>) -> Vec<WordEntry> {
        self.words.study_pool(self.pair(), category)
    }

    pub fn start_quiz(&mut self, category: Option<String>) -> Result<QuizSession, QuizError> {
        let pool = self.study_pool(category.as_deref());
        QuizSession::start(pool, self.pair(), category, &mut self.rng)
    }

    pub fn restart_quiz(&mut self, session: &mut QuizSession) {
        session.restart(&mut self.rng);
    }

    pub fn record_outcome(&mut self, outcome: QuizOutcome) -> QuizScore {
        let score = outcome.into_score(now_ms());
        self.history.append(self.store.as_mut(), score.clone());
        score
    }

    pub fn history(&self) -> &QuizHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear(self.store.as_mut());
    }

    pub fn new_deck(&mut self, category: Option<&str>) -> Deck {
        let pool = self.study_pool(category);
        Deck::new(pool, &mut self.rng)
    }

    pub fn shuffle_deck(&mut self, deck: &mut Deck) {
        deck.shuffle(&mut self.rng);
    }
}
