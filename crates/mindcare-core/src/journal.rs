//! Append-only journal.
//!
//! Entries are persisted under [`MOOD_JOURNAL_KEY`] as a JSON array of
//! strings. There is no edit or delete.

use crate::error::Result;
use crate::storage::{KeyValueStore, MOOD_JOURNAL_KEY, load_or_default, save_json};
use crate::view::ModalState;
use std::sync::Arc;
use tracing::info;

/// Number of entries shown in the history view.
pub const JOURNAL_HISTORY_LIMIT: usize = 3;

/// Journal widget state.
pub struct Journal {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<String>,
    modal: ModalState,
}

impl Journal {
    /// Loads existing entries; malformed stored data starts an empty journal.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let entries = load_or_default(store.as_ref(), MOOD_JOURNAL_KEY)?;
        Ok(Self {
            store,
            entries,
            modal: ModalState::default(),
        })
    }

    /// Appends the trimmed `text` and persists the journal.
    ///
    /// Returns `false` without touching storage when `text` is blank.
    pub fn save_entry(&mut self, text: &str) -> Result<bool> {
        let note = text.trim();
        if note.is_empty() {
            return Ok(false);
        }

        let mut entries = self.entries.clone();
        entries.push(note.to_string());
        save_json(self.store.as_ref(), MOOD_JOURNAL_KEY, &entries)?;
        self.entries = entries;
        info!(total = self.entries.len(), "journal entry saved");
        Ok(true)
    }

    /// The last [`JOURNAL_HISTORY_LIMIT`] entries, most recent first.
    pub fn history(&self) -> Vec<&str> {
        self.entries
            .iter()
            .rev()
            .take(JOURNAL_HISTORY_LIMIT)
            .map(String::as_str)
            .collect()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.modal.toggle()
    }

    pub fn is_visible(&self) -> bool {
        self.modal.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FlakyStore, MemoryStore};

    fn journal() -> (Arc<MemoryStore>, Journal) {
        let store = Arc::new(MemoryStore::new());
        let journal = Journal::load(store.clone()).unwrap();
        (store, journal)
    }

    #[test]
    fn test_history_last_three_reversed() {
        let (_, mut journal) = journal();
        for note in ["a", "b", "c", "d"] {
            assert!(journal.save_entry(note).unwrap());
        }
        assert_eq!(journal.history(), vec!["d", "c", "b"]);
    }

    #[test]
    fn test_short_history() {
        let (_, mut journal) = journal();
        journal.save_entry("only").unwrap();
        assert_eq!(journal.history(), vec!["only"]);
    }

    #[test]
    fn test_blank_entry_is_noop() {
        let (store, mut journal) = journal();
        journal.save_entry("first").unwrap();
        let before = store.get(MOOD_JOURNAL_KEY).unwrap();

        assert!(!journal.save_entry("").unwrap());
        assert!(!journal.save_entry(" \n\t ").unwrap());

        assert_eq!(journal.entries(), &["first".to_string()]);
        assert_eq!(store.get(MOOD_JOURNAL_KEY).unwrap(), before);
    }

    #[test]
    fn test_entries_are_trimmed_and_persisted() {
        let (store, mut journal) = journal();
        journal.save_entry("  went for a walk  ").unwrap();

        let reloaded = Journal::load(store).unwrap();
        assert_eq!(reloaded.entries(), &["went for a walk".to_string()]);
    }

    #[test]
    fn test_malformed_storage_starts_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(MOOD_JOURNAL_KEY, r#"{"not": "an array"}"#).unwrap();
        let journal = Journal::load(store).unwrap();
        assert!(journal.entries().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_previous_entries() {
        let store = Arc::new(FlakyStore::default());
        let mut journal = Journal::load(store.clone()).unwrap();
        journal.save_entry("kept").unwrap();

        store.fail_writes(true);
        assert!(journal.save_entry("lost").is_err());
        assert_eq!(journal.history(), vec!["kept"]);

        store.fail_writes(false);
        journal.save_entry("next").unwrap();
        let reloaded = Journal::load(store).unwrap();
        assert_eq!(reloaded.entries(), &["kept".to_string(), "next".to_string()]);
    }
}
