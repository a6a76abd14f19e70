// src/data.rs

use crate::learning_path::UnitConfig;
use crate::model::{Language, WordDraft};
use crate::monolingual::MonolingualEntry;
use serde::Deserialize;

#[derive(Deserialize)]
struct SeedCategory {
    category: String,
    words: Vec<SeedRow>,
}

#[derive(Deserialize)]
struct SeedRow {
    english: String,
    tagalog: String,
    bisaya: String,
    waray: String,
}

#[derive(Deserialize)]
struct MonolingualBlock {
    language: Language,
    entries: Vec<MonolingualRow>,
}

#[derive(Deserialize)]
struct MonolingualRow {
    id: String,
    word: String,
    definition: String,
    #[serde(default)]
    pronunciation: Option<String>,
}

/// Starter word bank: every English row expanded into one draft per target
/// language, grouped by category, then by target language.
pub fn read_seed_drafts() -> Result<Vec<WordDraft>, serde_yaml::Error> {
    let categories: Vec<SeedCategory> = serde_yaml::from_str(include_str!("data/seed_words.yaml"))?;
    let mut drafts = Vec::new();
    for cat in &categories {
        for target in [Language::Tagalog, Language::Bisaya, Language::WarayWaray] {
            for row in &cat.words {
                let meaning = match target {
                    Language::Tagalog => &row.tagalog,
                    Language::Bisaya => &row.bisaya,
                    _ => &row.waray,
                };
                drafts.push(
                    WordDraft::new(&row.english, meaning, Language::English, target)
                        .with_category(&cat.category),
                );
            }
        }
    }
    Ok(drafts)
}

pub fn read_learning_path() -> Result<Vec<UnitConfig>, serde_yaml::Error> {
    serde_yaml::from_str(include_str!("data/learning_path.yaml"))
}

pub fn read_monolingual_entries() -> Result<Vec<MonolingualEntry>, serde_yaml::Error> {
    let blocks: Vec<MonolingualBlock> = serde_yaml::from_str(include_str!("data/monolingual.yaml"))?;
    Ok(blocks
        .into_iter()
        .flat_map(|block| {
            let language = block.language;
            block.entries.into_iter().map(move |row| MonolingualEntry {
                id: row.id,
                language,
                word: row.word,
                definition: row.definition,
                pronunciation: row.pronunciation,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::validate;

    #[test]
    fn seed_bank_parses_and_is_valid() {
        let drafts = read_seed_drafts().unwrap();
        assert!(drafts.len() > 100);
        assert!(drafts.iter().all(|d| validate(d).is_ok()));
        assert!(drafts.iter().all(|d| d.category.is_some()));
    }

    #[test]
    fn seed_bank_covers_every_target_language() {
        let drafts = read_seed_drafts().unwrap();
        for target in [Language::Tagalog, Language::Bisaya, Language::WarayWaray] {
            assert!(drafts.iter().any(|d| d.target_language == target));
        }
    }

    #[test]
    fn learning_path_parses() {
        let units = read_learning_path().unwrap();
        assert_eq!(units[0].id, "unit1");
        assert_eq!(units[0].lessons[0].category, "Greetings");
    }

    #[test]
    fn monolingual_entries_cover_every_language() {
        let entries = read_monolingual_entries().unwrap();
        for lang in Language::ALL {
            assert!(entries.iter().any(|e| e.language == lang), "{lang} missing");
        }
    }
}
