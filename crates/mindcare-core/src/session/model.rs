//! Chat session model.

use super::context::ConversationContext;
use super::message::ConversationMessage;
use crate::classifier::{Mood, TopicTag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One chat session: the ordered history plus the running context.
///
/// The pipeline receives the session by `&mut` and is the only writer. Nothing
/// here is persisted; a new process starts a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique session identifier
    pub id: Uuid,
    /// Conversation history, oldest first
    pub history: Vec<ConversationMessage>,
    /// Running classification context
    pub context: ConversationContext,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: Vec::new(),
            context: ConversationContext::default(),
        }
    }

    /// Appends a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.history.push(ConversationMessage::user(content));
    }

    /// Appends an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.history.push(ConversationMessage::assistant(content));
    }

    /// The last `limit` turns, oldest first.
    pub fn recent_history(&self, limit: usize) -> &[ConversationMessage] {
        let start = self.history.len().saturating_sub(limit);
        &self.history[start..]
    }

    /// Drops the history and restarts the context with a fresh start time.
    pub fn clear(&mut self) {
        self.history.clear();
        self.context = ConversationContext::default();
    }

    /// Summary of the session so far.
    pub fn summary(&self) -> ConversationSummary {
        self.summary_at(Utc::now())
    }

    /// Summary of the session as of `now`.
    pub fn summary_at(&self, now: DateTime<Utc>) -> ConversationSummary {
        let elapsed_secs = (now - self.context.session_start).num_seconds().max(0);
        ConversationSummary {
            message_count: self.context.message_count,
            topics: self.context.topics.clone(),
            duration_minutes: (elapsed_secs as f64 / 60.0).round() as u64,
            mood: self.context.mood,
        }
    }
}

/// Snapshot of a session for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub message_count: u32,
    pub topics: Vec<TopicTag>,
    pub duration_minutes: u64,
    pub mood: Mood,
}

impl ConversationSummary {
    /// Topics joined with `", "`, as shown in the summary view.
    pub fn topics_label(&self) -> String {
        self.topics
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MessageRole;
    use chrono::Duration;

    #[test]
    fn test_recent_history_limits() {
        let mut session = ChatSession::new();
        for i in 0..12 {
            session.push_user(format!("message {i}"));
        }
        let recent = session.recent_history(10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].content, "message 2");
        assert_eq!(recent[9].content, "message 11");

        let short = ChatSession::new();
        assert!(short.recent_history(10).is_empty());
    }

    #[test]
    fn test_push_roles() {
        let mut session = ChatSession::new();
        session.push_user("hi");
        session.push_assistant("hello");
        assert_eq!(session.history[0].role, MessageRole::User);
        assert_eq!(session.history[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_clear_resets_context() {
        let mut session = ChatSession::new();
        session.context.observe("anxious and sad, feeling bad");
        session.push_user("anxious and sad, feeling bad");
        session.clear();

        assert!(session.history.is_empty());
        assert_eq!(session.context.message_count, 0);
        assert!(session.context.topics.is_empty());
        assert_eq!(session.context.mood, Mood::Unknown);
    }

    #[test]
    fn test_summary_rounds_minutes() {
        let mut session = ChatSession::new();
        session.context.observe("I can't sleep and work is hard");
        let now = session.context.session_start + Duration::seconds(150);

        let summary = session.summary_at(now);
        assert_eq!(summary.message_count, 1);
        assert_eq!(summary.duration_minutes, 3);
        assert_eq!(summary.topics_label(), "sleep, work");
    }
}
