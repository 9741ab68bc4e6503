//! Health-information lookup seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword used when the conversation has no specific subject.
pub const DEFAULT_HEALTH_KEYWORD: &str = "mental health";

/// A single health-information resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResource {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl fmt::Display for HealthResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.description.is_empty() {
            write!(f, "\n{}", self.description)?;
        }
        if !self.url.is_empty() {
            write!(f, "\n{}", self.url)?;
        }
        Ok(())
    }
}

/// A public health-information service.
///
/// Callers treat every error as "no resource"; lookups only enrich replies.
#[async_trait]
pub trait HealthInfoProvider: Send + Sync {
    /// First resource matching `keyword`.
    async fn lookup(&self, keyword: &str) -> anyhow::Result<Option<HealthResource>>;

    /// Up to three general mental-health resources.
    async fn mental_health_resources(&self) -> anyhow::Result<Vec<HealthResource>>;

    /// One wellness resource.
    async fn wellness_tip(&self) -> anyhow::Result<Option<HealthResource>>;
}
