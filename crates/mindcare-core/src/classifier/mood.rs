//! Mood indicator detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Last mood inferred from the user's messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
    #[default]
    Unknown,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mood::Positive => "positive",
            Mood::Negative => "negative",
            Mood::Neutral => "neutral",
            Mood::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

// Checked in order; the first mood with a hit wins.
const MOOD_INDICATORS: &[(Mood, &[&str])] = &[
    (
        Mood::Positive,
        &["good", "great", "happy", "better", "improved", "relieved"],
    ),
    (
        Mood::Negative,
        &["bad", "terrible", "awful", "worse", "struggling", "difficult"],
    ),
    (
        Mood::Neutral,
        &["okay", "fine", "normal", "same", "unchanged"],
    ),
];

/// Returns the first mood whose indicators appear in `message`.
pub fn detect_mood(message: &str) -> Option<Mood> {
    let lower = message.to_lowercase();
    MOOD_INDICATORS
        .iter()
        .find(|(_, indicators)| indicators.iter().any(|i| lower.contains(i)))
        .map(|(mood, _)| *mood)
}
