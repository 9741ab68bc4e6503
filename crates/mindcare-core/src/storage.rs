//! Key/value storage seam for the mood tracker and journal.
//!
//! Values are raw JSON strings, one per key, with no schema versioning.

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

/// Storage key holding the date → mood label map.
pub const MOOD_TRACKER_KEY: &str = "moodTracker";

/// Storage key holding the journal entry array.
pub const MOOD_JOURNAL_KEY: &str = "moodJournal";

/// A string key/value store.
pub trait KeyValueStore: Send + Sync {
    /// Raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Reads `key` as JSON, falling back to `T::default()` when the key is
/// missing or its content does not parse.
pub fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(key, error = %err, "stored value is malformed, starting empty");
            Ok(T::default())
        }
    }
}

/// Serializes `value` as JSON under `key`.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory store, mainly for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| crate::MindcareError::internal(format!("store lock poisoned: {e}")))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| crate::MindcareError::internal(format!("store lock poisoned: {e}")))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Memory store whose writes can be switched to fail.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FlakyStore {
    inner: MemoryStore,
    fail_writes: std::sync::atomic::AtomicBool,
}

#[cfg(test)]
impl FlakyStore {
    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(crate::MindcareError::data_access("disk full"));
        }
        self.inner.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_default() {
        let store = MemoryStore::new();
        let value: Vec<String> = load_or_default(&store, MOOD_JOURNAL_KEY).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_malformed_value_is_default() {
        let store = MemoryStore::new();
        store.set(MOOD_JOURNAL_KEY, "{oops").unwrap();
        let value: Vec<String> = load_or_default(&store, MOOD_JOURNAL_KEY).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save_json(&store, MOOD_JOURNAL_KEY, &vec!["a", "b"]).unwrap();
        assert_eq!(
            store.get(MOOD_JOURNAL_KEY).unwrap().as_deref(),
            Some(r#"["a","b"]"#)
        );
    }
}
