//! Daily mood tracker.
//!
//! One label per calendar date (UTC), persisted under [`MOOD_TRACKER_KEY`] as
//! a JSON object `{"YYYY-MM-DD": "label"}`. Saving again on the same date
//! overwrites that date's entry.

use crate::error::Result;
use crate::storage::{KeyValueStore, MOOD_TRACKER_KEY, load_or_default, save_json};
use crate::view::ModalState;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Number of entries shown in the history view.
pub const MOOD_HISTORY_LIMIT: usize = 5;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stored mood for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: String,
    pub label: String,
}

impl fmt::Display for MoodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.label)
    }
}

/// What the mood panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodView {
    /// Label saved for the reference date, if any.
    pub today: Option<String>,
    /// Up to [`MOOD_HISTORY_LIMIT`] entries, most recent first.
    pub history: Vec<MoodEntry>,
}

impl MoodView {
    /// `Today's Mood: {label}` when a mood is saved for the reference date.
    pub fn today_label(&self) -> Option<String> {
        self.today
            .as_ref()
            .map(|label| format!("Today's Mood: {label}"))
    }
}

/// Mood tracker widget state.
pub struct MoodTracker {
    store: Arc<dyn KeyValueStore>,
    entries: BTreeMap<String, String>,
    modal: ModalState,
}

impl MoodTracker {
    /// Loads existing entries; malformed stored data starts an empty map.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let entries = load_or_default(store.as_ref(), MOOD_TRACKER_KEY)?;
        Ok(Self {
            store,
            entries,
            modal: ModalState::default(),
        })
    }

    /// Saves `label` for today's UTC date.
    pub fn save_mood(&mut self, label: &str) -> Result<MoodView> {
        self.save_mood_on(today(), label)
    }

    /// Saves `label` for `date`, replacing any entry already stored for it.
    ///
    /// A blank label is ignored and the current view is returned unchanged.
    pub fn save_mood_on(&mut self, date: NaiveDate, label: &str) -> Result<MoodView> {
        let label = label.trim();
        if !label.is_empty() {
            let key = date.format(DATE_FORMAT).to_string();
            let mut entries = self.entries.clone();
            entries.insert(key.clone(), label.to_string());
            save_json(self.store.as_ref(), MOOD_TRACKER_KEY, &entries)?;
            self.entries = entries;
            info!(date = %key, label, "mood saved");
        }
        Ok(self.view_on(date))
    }

    /// Label saved for today, if any.
    pub fn today_mood(&self) -> Option<&str> {
        self.mood_on(today())
    }

    pub fn mood_on(&self, date: NaiveDate) -> Option<&str> {
        self.entries
            .get(&date.format(DATE_FORMAT).to_string())
            .map(String::as_str)
    }

    /// The last [`MOOD_HISTORY_LIMIT`] entries, most recent first.
    pub fn history(&self) -> Vec<MoodEntry> {
        self.entries
            .iter()
            .rev()
            .take(MOOD_HISTORY_LIMIT)
            .map(|(date, label)| MoodEntry {
                date: date.clone(),
                label: label.clone(),
            })
            .collect()
    }

    pub fn view(&self) -> MoodView {
        self.view_on(today())
    }

    pub fn view_on(&self, date: NaiveDate) -> MoodView {
        MoodView {
            today: self.mood_on(date).map(str::to_string),
            history: self.history(),
        }
    }

    /// Total number of stored dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.modal.toggle()
    }

    pub fn is_visible(&self) -> bool {
        self.modal.is_open()
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
