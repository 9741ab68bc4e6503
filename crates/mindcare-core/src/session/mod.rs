//! Chat session domain module.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`MessageRole`, `ConversationMessage`)
//! - `context`: Running classification context (`ConversationContext`)
//! - `model`: The session itself (`ChatSession`) and its `ConversationSummary`

mod context;
mod message;
mod model;

pub use context::ConversationContext;
pub use message::{ConversationMessage, MessageRole};
pub use model::{ChatSession, ConversationSummary};
