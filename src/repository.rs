//! The learner's word list, written through to the store on every change.

use crate::model::{Language, LanguagePair, WordDraft, WordEntry};
use crate::store::{self, KeyValueStore, WORD_LIST_KEY};
use crate::text_utils::contains_normalized;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The word cannot be empty.")]
    EmptyWord,
    #[error("The meaning cannot be empty.")]
    EmptyMeaning,
    #[error("Word and meaning must be in different languages (both are {0}).")]
    SameLanguage(Language),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchOrder {
    #[default]
    Alphabetical,
    NewestFirst,
}

pub fn validate(draft: &WordDraft) -> Result<(), ValidationError> {
    if draft.word.trim().is_empty() {
        return Err(ValidationError::EmptyWord);
    }
    if draft.meaning.trim().is_empty() {
        return Err(ValidationError::EmptyMeaning);
    }
    if draft.language == draft.target_language {
        return Err(ValidationError::SameLanguage(draft.language));
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct WordRepository {
    words: Vec<WordEntry>,
}

impl WordRepository {
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self { words }
    }

    /// Reads the stored list. A store without one gets `seed()` written to it;
    /// an unreadable list is replaced by the seed in memory only.
    pub fn load(store: &mut dyn KeyValueStore, seed: impl FnOnce() -> Vec<WordEntry>) -> Self {
        if let Some(words) = store::read_optional::<Vec<WordEntry>>(store, WORD_LIST_KEY) {
            log::info!("Loaded {} words", words.len());
            return Self { words };
        }
        let absent = store.get_string(WORD_LIST_KEY).is_none();
        let repo = Self { words: seed() };
        if absent {
            log::info!("No saved word list, seeding {} words", repo.words.len());
            repo.persist(store);
        }
        repo
    }

    fn persist(&self, store: &mut dyn KeyValueStore) -> bool {
        store::write(store, WORD_LIST_KEY, &self.words)
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&WordEntry> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn add_word(
        &mut self,
        store: &mut dyn KeyValueStore,
        draft: WordDraft,
        id: String,
        now: i64,
    ) -> Result<WordEntry, ValidationError> {
        let draft = draft.normalized();
        validate(&draft)?;
        let entry = WordEntry {
            id,
            word: draft.word,
            meaning: draft.meaning,
            language: draft.language,
            target_language: draft.target_language,
            user_sentence: draft.user_sentence,
            pronunciation: draft.pronunciation,
            category: draft.category,
            ai_sentences: None,
            created_at: now,
        };
        self.words.push(entry.clone());
        self.persist(store);
        Ok(entry)
    }

    /// Replaces the entry with the same id. `Ok(false)` when there is none.
    pub fn edit_word(
        &mut self,
        store: &mut dyn KeyValueStore,
        entry: WordEntry,
    ) -> Result<bool, ValidationError> {
        let draft = entry.to_draft().normalized();
        validate(&draft)?;
        let Some(slot) = self.words.iter_mut().find(|w| w.id == entry.id) else {
            return Ok(false);
        };
        *slot = WordEntry {
            word: draft.word,
            meaning: draft.meaning,
            language: draft.language,
            target_language: draft.target_language,
            user_sentence: draft.user_sentence,
            pronunciation: draft.pronunciation,
            category: draft.category,
            ..entry
        };
        self.persist(store);
        Ok(true)
    }

    pub fn attach_ai_sentences(
        &mut self,
        store: &mut dyn KeyValueStore,
        id: &str,
        sentences: Vec<String>,
    ) -> bool {
        let Some(slot) = self.words.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        slot.ai_sentences = (!sentences.is_empty()).then_some(sentences);
        self.persist(store);
        true
    }

    pub fn delete_word(&mut self, store: &mut dyn KeyValueStore, id: &str) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w.id != id);
        if self.words.len() == before {
            return false;
        }
        self.persist(store);
        true
    }

    pub fn clear_all(&mut self, store: &mut dyn KeyValueStore) {
        self.words.clear();
        self.persist(store);
    }

    pub fn filter_by_language_pair(
        &self,
        language: Language,
        target_language: Language,
        category: Option<&str>,
    ) -> Vec<WordEntry> {
        self.words
            .iter()
            .filter(|w| w.language == language && w.target_language == target_language)
            .filter(|w| category.is_none_or(|c| w.has_category(c)))
            .cloned()
            .collect()
    }

    /// Distinct categories across all words, sorted.
    pub fn list_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .words
            .iter()
            .filter_map(|w| w.category.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        categories.sort_by_key(|c| c.to_lowercase());
        categories.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        categories
    }

    /// Entries for `pair` stored in either direction, turned so that `word`
    /// is in the learned language and `meaning` in the meaning language.
    pub fn study_pool(&self, pair: LanguagePair, category: Option<&str>) -> Vec<WordEntry> {
        self.words
            .iter()
            .filter(|w| category.is_none_or(|c| w.has_category(c)))
            .filter_map(|w| {
                if w.pair() == pair {
                    Some(w.clone())
                } else if w.pair() == pair.reversed() {
                    Some(w.flipped())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Case-insensitive search over word, meaning, category and pronunciation.
    /// With a pair, only that pair's study pool is searched; without one, every
    /// stored entry as saved.
    pub fn search(
        &self,
        pair: Option<LanguagePair>,
        term: &str,
        category: Option<&str>,
        order: SearchOrder,
    ) -> Vec<WordEntry> {
        let candidates = match pair {
            Some(pair) => self.study_pool(pair, category),
            None => self
                .words
                .iter()
                .filter(|w| category.is_none_or(|c| w.has_category(c)))
                .cloned()
                .collect(),
        };
        let term = term.trim();
        let mut hits: Vec<WordEntry> = candidates
            .into_iter()
            .filter(|w| {
                term.is_empty()
                    || contains_normalized(&w.word, term)
                    || contains_normalized(&w.meaning, term)
                    || w.category.as_deref().is_some_and(|c| contains_normalized(c, term))
                    || w
                        .pronunciation
                        .as_deref()
                        .is_some_and(|p| contains_normalized(p, term))
            })
            .collect();
        match order {
            SearchOrder::Alphabetical => hits.sort_by_key(|w| w.word.to_lowercase()),
            SearchOrder::NewestFirst => hits.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
        hits
    }
}
