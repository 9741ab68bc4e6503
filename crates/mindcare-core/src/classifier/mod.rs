//! Table-driven keyword classifiers.
//!
//! Every classifier is a case-insensitive substring match against a fixed
//! table; none of them tokenise or stem the input.
//!
//! - `crisis`: crisis phrase detection and the fixed safety message
//! - `topic`: topic tag extraction and the broader mental-health topic list
//! - `mood`: mood indicator detection
//! - `intent`: greeting / follow-up / topic-response selection

mod crisis;
mod intent;
mod mood;
mod topic;

pub use crisis::{CRISIS_KEYWORDS, CRISIS_RESPONSE, is_crisis_message};
pub use intent::{follow_up_family, is_follow_up, is_greeting, topic_family};
pub use mood::{Mood, detect_mood};
pub use topic::{MENTAL_HEALTH_TOPICS, TopicTag, detect_mental_health_topics, extract_topics};
