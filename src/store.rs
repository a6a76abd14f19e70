//! Key/value persistence behind every piece of learner data.
//!
//! Values are JSON strings under fixed keys, the same layout the browser
//! build keeps in `localStorage`. Reads never fail: a missing or corrupt value
//! falls back to the caller's default. Writes report failure but the caller's
//! in-memory copy stays authoritative for the session.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SOURCE_LANGUAGE_KEY: &str = "sourceLanguage";
pub const TARGET_LANGUAGE_KEY: &str = "targetLanguage";
pub const WORD_LIST_KEY: &str = "wordList";
pub const QUIZ_SCORES_KEY: &str = "quizScores";

pub const STORE_FILE_NAME: &str = "leytext_store.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("browser storage rejected the write: {0}")]
    Browser(String),
}

pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Deserialized value under `key`, or `None` when absent or malformed.
pub fn read_optional<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_string(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed value under '{key}': {e}");
            None
        }
    }
}

pub fn read<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    read_optional(store, key).unwrap_or(default)
}

/// Serializes and stores `value`. Returns `false` (after logging) on failure.
pub fn write<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> bool {
    let result = serde_json::to_string(value)
        .map_err(StoreError::from)
        .and_then(|json| store.set_string(key, json));
    match result {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to persist '{key}': {e}");
            false
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One JSON object on disk mapping key to value, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Store file {} is corrupt, starting empty: {e}", path.display());
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Could not read store file {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json).map_err(io_err)
    }
}

impl KeyValueStore for FileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        self.save()
    }
}

#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_string(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.storage
            .set_item(key, &value)
            .map_err(|e| StoreError::Browser(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Browser(format!("{e:?}")))
    }
}

/// Store used by the app: a file in `data_dir` natively, `localStorage` on the web.
#[cfg(not(target_arch = "wasm32"))]
pub fn open_default_store(data_dir: &Path) -> Box<dyn KeyValueStore> {
    let store = FileStore::open(data_dir.join(STORE_FILE_NAME));
    log::info!("Using store file {}", store.path().display());
    Box::new(store)
}

#[cfg(target_arch = "wasm32")]
pub fn open_default_store(_data_dir: &Path) -> Box<dyn KeyValueStore> {
    match LocalStorageStore::open() {
        Some(store) => Box::new(store),
        None => {
            log::warn!("localStorage unavailable, progress will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}

/// Remove `key`, logging instead of failing.
pub fn remove(store: &mut dyn KeyValueStore, key: &str) -> bool {
    match store.remove(key) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to remove '{key}': {e}");
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Store that rejects every change, like a full `localStorage`.
    pub struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_string(&self, _key: &str) -> Option<String> {
            None
        }
        fn set_string(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Browser("quota exceeded".into()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Browser("storage locked".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FailingStore;
    use super::*;
    use crate::model::Language;

    #[test]
    fn read_falls_back_to_default_when_absent() {
        let store = MemoryStore::new();
        let lang: Language = read(&store, SOURCE_LANGUAGE_KEY, Language::Bisaya);
        assert_eq!(lang, Language::Bisaya);
    }

    #[test]
    fn read_falls_back_to_default_when_malformed() {
        let mut store = MemoryStore::new();
        store
            .set_string(SOURCE_LANGUAGE_KEY, "not json".into())
            .unwrap();
        let lang: Language = read(&store, SOURCE_LANGUAGE_KEY, Language::English);
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn write_then_read_sees_value() {
        let mut store = MemoryStore::new();
        assert!(write(&mut store, TARGET_LANGUAGE_KEY, &Language::WarayWaray));
        assert_eq!(
            store.get_string(TARGET_LANGUAGE_KEY).as_deref(),
            Some("\"Waray-Waray\"")
        );
    }

    #[test]
    fn failed_write_is_reported_not_raised() {
        let mut store = FailingStore;
        assert!(!write(&mut store, WORD_LIST_KEY, &Vec::<String>::new()));
        assert!(!remove(&mut store, WORD_LIST_KEY));
    }

    #[test]
    fn remove_drops_key() {
        let mut store = MemoryStore::new();
        assert!(write(&mut store, QUIZ_SCORES_KEY, &Vec::<String>::new()));
        assert!(remove(&mut store, QUIZ_SCORES_KEY));
        assert_eq!(store.get_string(QUIZ_SCORES_KEY), None);
        assert!(store.is_empty());
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("leytext-store-{}", std::process::id()));
        let path = dir.join(STORE_FILE_NAME);
        let _ = std::fs::remove_file(&path);

        let mut store = FileStore::open(&path);
        assert!(write(&mut store, SOURCE_LANGUAGE_KEY, &Language::Tagalog));

        let reopened = FileStore::open(&path);
        let lang: Language = read(&reopened, SOURCE_LANGUAGE_KEY, Language::English);
        assert_eq!(lang, Language::Tagalog);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = std::env::temp_dir().join(format!("leytext-corrupt-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(STORE_FILE_NAME);
        std::fs::write(&path, "{ nope").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get_string(WORD_LIST_KEY), None);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
