pub mod classifier;
pub mod config;
pub mod error;
pub mod generation;
pub mod health;
pub mod journal;
pub mod mood;
pub mod pipeline;
pub mod responses;
pub mod secret;
pub mod session;
pub mod storage;
pub mod view;

// Re-export common error type
pub use error::MindcareError;

pub use journal::Journal;
pub use mood::MoodTracker;
pub use pipeline::ResponsePipeline;
pub use session::ChatSession;
