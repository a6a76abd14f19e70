use super::*;
use crate::model::{LanguagePair, WordDraft, WordEntry};

/// Text fields of the add/edit form on the word list screen.
#[derive(Clone, Debug, PartialEq)]
pub struct WordForm {
    pub editing_id: Option<String>,
    pub word: String,
    pub meaning: String,
    pub language: Language,
    pub target_language: Language,
    pub category: String,
    pub pronunciation: String,
    pub user_sentence: String,
}

impl Default for WordForm {
    fn default() -> Self {
        Self::for_pair(LanguagePair::new(Language::English, Language::Tagalog))
    }
}

impl WordForm {
    pub fn for_pair(pair: LanguagePair) -> Self {
        Self {
            editing_id: None,
            word: String::new(),
            meaning: String::new(),
            language: pair.learned,
            target_language: pair.meaning,
            category: String::new(),
            pronunciation: String::new(),
            user_sentence: String::new(),
        }
    }

    pub fn from_entry(entry: &WordEntry) -> Self {
        Self {
            editing_id: Some(entry.id.clone()),
            word: entry.word.clone(),
            meaning: entry.meaning.clone(),
            language: entry.language,
            target_language: entry.target_language,
            category: entry.category.clone().unwrap_or_default(),
            pronunciation: entry.pronunciation.clone().unwrap_or_default(),
            user_sentence: entry.user_sentence.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn to_draft(&self) -> WordDraft {
        WordDraft {
            word: self.word.clone(),
            meaning: self.meaning.clone(),
            language: self.language,
            target_language: self.target_language,
            user_sentence: Some(self.user_sentence.clone()),
            pronunciation: Some(self.pronunciation.clone()),
            category: Some(self.category.clone()),
        }
        .normalized()
    }
}

impl LearnApp {
    pub fn reset_word_form(&mut self) {
        self.word_form = WordForm::for_pair(self.learning.pair());
    }

    pub fn begin_edit_word(&mut self, id: &str) {
        if let Some(entry) = self.learning.words().get(id) {
            self.word_form = WordForm::from_entry(entry);
            self.message.clear();
        }
    }

    /// Adds the form as a new entry, or saves it over the entry being edited.
    pub fn save_word_form(&mut self) {
        let draft = self.word_form.to_draft();
        let result = match self.word_form.editing_id.clone() {
            None => self
                .learning
                .add_word(draft)
                .map(|entry| format!("Added \"{}\".", entry.word)),
            Some(id) => {
                let Some(existing) = self.learning.words().get(&id).cloned() else {
                    self.message = "That word no longer exists.".into();
                    self.reset_word_form();
                    return;
                };
                let updated = WordEntry {
                    word: draft.word,
                    meaning: draft.meaning,
                    language: draft.language,
                    target_language: draft.target_language,
                    user_sentence: draft.user_sentence,
                    pronunciation: draft.pronunciation,
                    category: draft.category,
                    ..existing
                };
                let word = updated.word.clone();
                self.learning
                    .edit_word(updated)
                    .map(|_| format!("Saved \"{word}\"."))
            }
        };
        match result {
            Ok(message) => {
                self.message = message;
                self.reset_word_form();
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    pub fn delete_word(&mut self, id: &str) {
        if self.learning.delete_word(id) {
            if self.word_form.editing_id.as_deref() == Some(id) {
                self.reset_word_form();
            }
            self.message = "Word deleted.".into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    #[test]
    fn add_then_edit_then_delete() {
        let mut app = app();
        app.reset_word_form();
        app.word_form.word = "  Bridge ".into();
        app.word_form.meaning = "Tulay".into();
        app.word_form.category = "Travel".into();
        app.save_word_form();
        assert!(app.message.starts_with("Added"));
        assert!(app.word_form.word.is_empty());

        let id = app.word_list_rows()[0].id.clone();
        assert_eq!(app.learning.words().get(&id).unwrap().word, "Bridge");

        app.begin_edit_word(&id);
        assert!(app.word_form.is_editing());
        app.word_form.pronunciation = "tu-LAY".into();
        app.save_word_form();
        let edited = app.learning.words().get(&id).unwrap();
        assert_eq!(edited.pronunciation.as_deref(), Some("tu-LAY"));
        assert_eq!(edited.category.as_deref(), Some("Travel"));

        app.delete_word(&id);
        assert!(app.learning.words().get(&id).is_none());
    }

    #[test]
    fn invalid_form_keeps_its_contents() {
        let mut app = app();
        let before = app.learning.words().len();
        app.word_form.word = "Bridge".into();
        app.word_form.meaning = "   ".into();
        app.save_word_form();
        assert_eq!(app.learning.words().len(), before);
        assert_eq!(app.word_form.word, "Bridge");
        assert!(!app.message.is_empty());
    }

    #[test]
    fn blank_optionals_are_dropped() {
        let form = WordForm {
            word: "a".into(),
            meaning: "b".into(),
            ..WordForm::default()
        };
        let draft = form.to_draft();
        assert_eq!(draft.category, None);
        assert_eq!(draft.pronunciation, None);
    }
}
