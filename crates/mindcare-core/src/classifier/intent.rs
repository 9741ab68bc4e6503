//! Greeting, follow-up and topic-response classification for the local
//! fallback stages of the pipeline.

use super::topic::TopicTag;
use crate::responses::ResponseFamily;

const GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "how are you",
    "what's up",
    "how do you do",
    "nice to meet you",
];

const FOLLOW_UP_INDICATORS: &[&str] = &[
    "tell me more",
    "can you explain",
    "what do you mean",
    "how does that work",
    "what about",
    "and then",
    "also",
    "additionally",
    "furthermore",
    "yes",
    "no",
    "maybe",
    "i think",
    "i feel",
    "i believe",
];

// Checked in order; first hit selects the family.
const TOPIC_RESPONSES: &[(ResponseFamily, &[&str])] = &[
    (ResponseFamily::Anxiety, &["anxiety", "anxious", "worried"]),
    (ResponseFamily::Depression, &["depression", "depressed", "sad"]),
    (ResponseFamily::Stress, &["stress", "stressed", "overwhelmed"]),
    (ResponseFamily::Sleep, &["sleep", "insomnia", "tired"]),
    (ResponseFamily::Therapy, &["therapy", "counseling", "therapist"]),
    (ResponseFamily::Medication, &["medication", "medicine", "pills"]),
    (
        ResponseFamily::Relationships,
        &["relationship", "partner", "family"],
    ),
    (ResponseFamily::Work, &["work", "job", "career"]),
];

/// A greeting phrase is present, or the conversation has just started
/// (`message_count` counts the current message).
pub fn is_greeting(message: &str, message_count: u32) -> bool {
    let lower = message.to_lowercase();
    GREETINGS.iter().any(|g| lower.contains(g)) || message_count <= 2
}

/// A follow-up phrase is present, or the session already has a topic.
pub fn is_follow_up(message: &str, has_active_topic: bool) -> bool {
    let lower = message.to_lowercase();
    FOLLOW_UP_INDICATORS.iter().any(|i| lower.contains(i)) || has_active_topic
}

/// Follow-up family keyed by the most recently added topic.
pub fn follow_up_family(last_topic: Option<TopicTag>) -> ResponseFamily {
    match last_topic {
        Some(TopicTag::Anxiety) => ResponseFamily::AnxietyFollowUp,
        Some(TopicTag::Depression) => ResponseFamily::DepressionFollowUp,
        Some(TopicTag::Stress) => ResponseFamily::StressFollowUp,
        Some(TopicTag::Sleep) => ResponseFamily::SleepFollowUp,
        _ => ResponseFamily::GeneralFollowUp,
    }
}

/// Topic-specific family for `message`, or [`ResponseFamily::General`].
pub fn topic_family(message: &str) -> ResponseFamily {
    let lower = message.to_lowercase();
    TOPIC_RESPONSES
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| lower.contains(t)))
        .map(|(family, _)| *family)
        .unwrap_or(ResponseFamily::General)
}
