//! Running conversation context.

use crate::classifier::{self, Mood, TopicTag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the pipeline has learned about the user so far in this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Last detected mood; `Unknown` until a mood indicator is seen.
    pub mood: Mood,
    /// Detected topic tags, without duplicates, in order of first detection.
    pub topics: Vec<TopicTag>,
    /// Number of user messages processed, including the current one.
    pub message_count: u32,
    /// When the session started.
    pub session_start: DateTime<Utc>,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self {
            mood: Mood::Unknown,
            topics: Vec::new(),
            message_count: 0,
            session_start: Utc::now(),
        }
    }
}

impl ConversationContext {
    /// Records one user message: bumps the counter, unions its topics into
    /// the topic set and overwrites the mood when one is detected.
    pub fn observe(&mut self, message: &str) {
        self.message_count += 1;

        for topic in classifier::extract_topics(message) {
            if !self.topics.contains(&topic) {
                self.topics.push(topic);
            }
        }

        if let Some(mood) = classifier::detect_mood(message) {
            self.mood = mood;
        }
    }

    /// The most recently added topic, if any.
    pub fn last_topic(&self) -> Option<TopicTag> {
        self.topics.last().copied()
    }

    pub fn has_topics(&self) -> bool {
        !self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_counts_and_merges() {
        let mut ctx = ConversationContext::default();
        ctx.observe("I'm anxious about work");
        ctx.observe("work is awful and I'm anxious");

        assert_eq!(ctx.message_count, 2);
        assert_eq!(ctx.topics, vec![TopicTag::Anxiety, TopicTag::Work]);
        assert_eq!(ctx.mood, Mood::Negative);
    }

    #[test]
    fn test_mood_kept_when_not_detected() {
        let mut ctx = ConversationContext::default();
        ctx.observe("feeling great");
        ctx.observe("tell me more");
        assert_eq!(ctx.mood, Mood::Positive);
    }

    #[test]
    fn test_last_topic_is_most_recently_added() {
        let mut ctx = ConversationContext::default();
        ctx.observe("trouble with sleep");
        ctx.observe("my therapist says sleep matters");
        assert_eq!(ctx.last_topic(), Some(TopicTag::Therapy));

        // Re-mentioning an existing topic does not move it.
        ctx.observe("sleep again");
        assert_eq!(ctx.last_topic(), Some(TopicTag::Therapy));
    }
}
