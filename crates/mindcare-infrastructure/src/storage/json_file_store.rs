//! File-backed key/value store: one `<key>.json` file per key.

use super::AtomicFile;
use mindcare_core::MindcareError;
use mindcare_core::error::Result;
use mindcare_core::storage::KeyValueStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores each key as `<dir>/<key>.json`, written atomically.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(MindcareError::data_access(format!(
                "invalid storage key '{key}'"
            )));
        }
        Ok(AtomicFile::new(self.dir.join(format!("{key}.json"))))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let file = self.file_for(key)?;
        debug!(path = %file.path().display(), "reading stored value");
        Ok(file.load()?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let file = self.file_for(key)?;
        debug!(path = %file.path().display(), bytes = value.len(), "writing stored value");
        Ok(file.save(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcare_core::storage::{MOOD_JOURNAL_KEY, MOOD_TRACKER_KEY};
    use tempfile::TempDir;

    #[test]
    fn test_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path());
        assert!(store.get(MOOD_TRACKER_KEY).unwrap().is_none());
    }

    #[test]
    fn test_set_writes_one_file_per_key() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("data"));

        store.set(MOOD_TRACKER_KEY, r#"{"2024-01-01":"Happy"}"#).unwrap();
        store.set(MOOD_JOURNAL_KEY, r#"["note"]"#).unwrap();

        assert!(temp.path().join("data/moodTracker.json").exists());
        assert!(temp.path().join("data/moodJournal.json").exists());
        assert_eq!(
            store.get(MOOD_JOURNAL_KEY).unwrap().as_deref(),
            Some(r#"["note"]"#)
        );
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path());
        assert!(store.set("../escape", "{}").is_err());
        assert!(store.get("").is_err());
    }
}
