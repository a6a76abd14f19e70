use crate::data::read_monolingual_entries;
use crate::model::Language;
use crate::text_utils::contains_normalized;
use serde::{Deserialize, Serialize};

/// A word defined in its own language.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MonolingualEntry {
    pub id: String,
    pub language: Language,
    pub word: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct MonolingualDictionary {
    entries: Vec<MonolingualEntry>,
}

impl MonolingualDictionary {
    pub fn new(entries: Vec<MonolingualEntry>) -> Self {
        Self { entries }
    }

    pub fn embedded() -> Self {
        match read_monolingual_entries() {
            Ok(entries) => Self::new(entries),
            Err(e) => {
                log::error!("Embedded monolingual dictionary is invalid: {e}");
                Self::default()
            }
        }
    }

    pub fn count_for(&self, language: Language) -> usize {
        self.entries.iter().filter(|e| e.language == language).count()
    }

    /// Entries of `language` whose word or definition contains `term`, sorted by word.
    pub fn search(&self, language: Language, term: &str) -> Vec<&MonolingualEntry> {
        let term = term.trim();
        let mut hits: Vec<&MonolingualEntry> = self
            .entries
            .iter()
            .filter(|e| e.language == language)
            .filter(|e| {
                term.is_empty()
                    || contains_normalized(&e.word, term)
                    || contains_normalized(&e.definition, term)
            })
            .collect();
        hits.sort_by_key(|e| e.word.to_lowercase());
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, language: Language, word: &str, definition: &str) -> MonolingualEntry {
        MonolingualEntry {
            id: id.into(),
            language,
            word: word.into(),
            definition: definition.into(),
            pronunciation: None,
        }
    }

    #[test]
    fn search_filters_by_language_and_sorts() {
        let dict = MonolingualDictionary::new(vec![
            entry("1", Language::English, "water", "A clear liquid."),
            entry("2", Language::English, "house", "A building to live in."),
            entry("3", Language::Tagalog, "bahay", "Tirahan."),
        ]);
        let all: Vec<_> = dict.search(Language::English, "").into_iter().map(|e| e.word.as_str()).collect();
        assert_eq!(all, ["house", "water"]);
        let hits = dict.search(Language::English, "LIQUID");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
        assert_eq!(dict.count_for(Language::Tagalog), 1);
    }

    #[test]
    fn embedded_dictionary_has_tagalog_words() {
        let dict = MonolingualDictionary::embedded();
        assert!(!dict.search(Language::Tagalog, "tubig").is_empty());
    }
}
