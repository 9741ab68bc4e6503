//! Topic tag extraction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A conversation topic tracked in the session context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicTag {
    Anxiety,
    Depression,
    Stress,
    Sleep,
    Relationships,
    Work,
    Health,
    Therapy,
    Medication,
    SelfCare,
}

impl TopicTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TopicTag::Anxiety => "anxiety",
            TopicTag::Depression => "depression",
            TopicTag::Stress => "stress",
            TopicTag::Sleep => "sleep",
            TopicTag::Relationships => "relationships",
            TopicTag::Work => "work",
            TopicTag::Health => "health",
            TopicTag::Therapy => "therapy",
            TopicTag::Medication => "medication",
            TopicTag::SelfCare => "self-care",
        }
    }
}

impl fmt::Display for TopicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const TOPIC_TRIGGERS: &[(TopicTag, &[&str])] = &[
    (
        TopicTag::Anxiety,
        &["anxious", "anxiety", "worried", "nervous", "panic"],
    ),
    (
        TopicTag::Depression,
        &["depressed", "sad", "down", "hopeless", "empty"],
    ),
    (
        TopicTag::Stress,
        &["stressed", "overwhelmed", "pressure", "tension"],
    ),
    (
        TopicTag::Sleep,
        &["sleep", "insomnia", "tired", "exhausted", "rest"],
    ),
    (
        TopicTag::Relationships,
        &["relationship", "partner", "family", "friends", "social"],
    ),
    (TopicTag::Work, &["work", "job", "career", "boss", "colleague"]),
    (
        TopicTag::Health,
        &["health", "medical", "doctor", "symptoms", "pain"],
    ),
    (
        TopicTag::Therapy,
        &["therapy", "counseling", "therapist", "treatment"],
    ),
    (
        TopicTag::Medication,
        &["medication", "medicine", "pills", "prescription"],
    ),
    (
        TopicTag::SelfCare,
        &["self-care", "wellness", "exercise", "meditation", "mindfulness"],
    ),
];

/// Every tag whose trigger list has a substring hit in `message`, in table order.
pub fn extract_topics(message: &str) -> Vec<TopicTag> {
    let lower = message.to_lowercase();
    TOPIC_TRIGGERS
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|t| lower.contains(t)))
        .map(|(tag, _)| *tag)
        .collect()
}

/// Broader list of mental-health subjects used to pick a health-lookup keyword.
pub const MENTAL_HEALTH_TOPICS: &[&str] = &[
    "anxiety",
    "depression",
    "stress",
    "sleep",
    "relationships",
    "work",
    "therapy",
    "medication",
    "self-care",
    "trauma",
    "grief",
    "addiction",
    "eating disorders",
    "bipolar",
    "ptsd",
    "ocd",
    "panic attacks",
    "social anxiety",
];

/// Entries of [`MENTAL_HEALTH_TOPICS`] contained in `message`.
pub fn detect_mental_health_topics(message: &str) -> Vec<&'static str> {
    let lower = message.to_lowercase();
    MENTAL_HEALTH_TOPICS
        .iter()
        .copied()
        .filter(|topic| lower.contains(topic))
        .collect()
}
