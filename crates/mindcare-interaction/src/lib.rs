//! Remote collaborators for the chat pipeline.
//!
//! - [`GeminiApiAgent`]: [`TextGenerator`](mindcare_core::generation::TextGenerator)
//!   over the Gemini REST API
//! - [`HealthFinderClient`]: [`HealthInfoProvider`](mindcare_core::health::HealthInfoProvider)
//!   over the MyHealthfinder topic search

pub mod gemini_api_agent;
pub mod health_finder_client;

pub use gemini_api_agent::{GeminiApiAgent, GenerationConfig};
pub use health_finder_client::HealthFinderClient;
