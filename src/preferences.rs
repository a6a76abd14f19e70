use crate::model::{Language, LanguagePair};
use crate::store::{self, KeyValueStore, SOURCE_LANGUAGE_KEY, TARGET_LANGUAGE_KEY};

/// Source/target language selection. The two are never equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguagePreferences {
    source_language: Language,
    target_language: Language,
}

impl Default for LanguagePreferences {
    fn default() -> Self {
        Self {
            source_language: Language::English,
            target_language: Language::Tagalog,
        }
    }
}

impl LanguagePreferences {
    pub fn new(source: Language, target: Language) -> Self {
        let mut prefs = Self {
            source_language: source,
            target_language: target,
        };
        prefs.correct();
        prefs
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        let defaults = Self::default();
        Self::new(
            store::read(store, SOURCE_LANGUAGE_KEY, defaults.source_language),
            store::read(store, TARGET_LANGUAGE_KEY, defaults.target_language),
        )
    }

    pub fn source_language(&self) -> Language {
        self.source_language
    }

    pub fn target_language(&self) -> Language {
        self.target_language
    }

    pub fn pair(&self) -> LanguagePair {
        LanguagePair::new(self.source_language, self.target_language)
    }

    pub fn set_source(&mut self, store: &mut dyn KeyValueStore, language: Language) {
        self.source_language = language;
        self.correct();
        self.persist(store);
    }

    pub fn set_target(&mut self, store: &mut dyn KeyValueStore, language: Language) {
        self.target_language = language;
        self.correct();
        self.persist(store);
    }

    pub fn swap(&mut self, store: &mut dyn KeyValueStore) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        self.persist(store);
    }

    fn correct(&mut self) {
        if self.source_language == self.target_language {
            self.target_language = self.source_language.complement();
            log::debug!(
                "Target language equal to source, switched to {}",
                self.target_language
            );
        }
    }

    fn persist(&self, store: &mut dyn KeyValueStore) {
        store::write(store, SOURCE_LANGUAGE_KEY, &self.source_language);
        store::write(store, TARGET_LANGUAGE_KEY, &self.target_language);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn defaults_to_english_tagalog() {
        let prefs = LanguagePreferences::load(&MemoryStore::new());
        assert_eq!(prefs.source_language(), Language::English);
        assert_eq!(prefs.target_language(), Language::Tagalog);
    }

    #[test]
    fn equal_languages_are_corrected() {
        let mut store = MemoryStore::new();
        let mut prefs = LanguagePreferences::default();
        prefs.set_target(&mut store, Language::English);
        assert_eq!(prefs.source_language(), Language::English);
        assert_ne!(prefs.target_language(), Language::English);

        prefs.set_source(&mut store, prefs.target_language());
        assert_ne!(prefs.source_language(), prefs.target_language());
    }

    #[test]
    fn corrupt_saved_pair_is_corrected_on_load() {
        let mut store = MemoryStore::new();
        store::write(&mut store, SOURCE_LANGUAGE_KEY, &Language::Bisaya);
        store::write(&mut store, TARGET_LANGUAGE_KEY, &Language::Bisaya);
        let prefs = LanguagePreferences::load(&store);
        assert_eq!(prefs.source_language(), Language::Bisaya);
        assert_eq!(prefs.target_language(), Language::English);
    }

    #[test]
    fn swap_persists() {
        let mut store = MemoryStore::new();
        let mut prefs = LanguagePreferences::default();
        prefs.swap(&mut store);
        let reloaded = LanguagePreferences::load(&store);
        assert_eq!(reloaded.source_language(), Language::Tagalog);
        assert_eq!(reloaded.target_language(), Language::English);
    }
}
