//! Remote text generation seam.
//!
//! The chat pipeline only needs `generate(message, history) -> text | error`;
//! the wire format lives in `mindcare-interaction`.

use crate::session::ConversationMessage;
use async_trait::async_trait;
use thiserror::Error;

/// Number of prior turns forwarded to the generator.
pub const HISTORY_WINDOW: usize = 10;

/// Fixed system instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str = "You are Mind Care Bot, a compassionate AI mental health support assistant. Your role is to:

1. Provide empathetic, non-judgmental support for mental health concerns
2. Offer evidence-based coping strategies and techniques
3. Suggest appropriate resources and professional help when needed
4. Maintain a warm, supportive, and professional tone
5. Always prioritize user safety and well-being

Guidelines:
- Be empathetic and validate the user's feelings
- Provide practical, actionable advice
- Never provide medical diagnoses or replace professional therapy
- Always encourage professional help for serious concerns
- Use appropriate mental health resources and crisis hotlines
- Keep responses concise but helpful
- Maintain confidentiality and respect privacy

Remember: You are not a replacement for professional mental health care, but a supportive companion on the user's mental health journey.";

/// Why a generation attempt produced no usable text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No API key is available.
    #[error("text generation is not configured")]
    NotConfigured,

    /// Transport failure or non-success HTTP status.
    #[error("generation request failed{}: {message}", status_suffix(.status_code))]
    Request {
        status_code: Option<u16>,
        message: String,
    },

    /// The service answered but the body had no usable text.
    #[error("invalid generation response: {0}")]
    InvalidResponse(String),
}

fn status_suffix(status_code: &Option<u16>) -> String {
    status_code.map(|c| format!(" ({c})")).unwrap_or_default()
}

/// A remote generative-text service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a reply to `message`. `history` holds the prior turns, oldest
    /// first, already trimmed to [`HISTORY_WINDOW`].
    async fn generate(
        &self,
        message: &str,
        history: &[ConversationMessage],
    ) -> Result<String, GenerationError>;
}
