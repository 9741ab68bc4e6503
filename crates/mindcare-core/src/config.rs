//! Configuration models.
//!
//! `SecretConfig` mirrors `secret.json` (API keys), `AppConfig` mirrors
//! `config.toml`. Loading lives in `mindcare-infrastructure`.

use serde::{Deserialize, Serialize};

/// Default Gemini model used by the chat adapter.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

/// Default MyHealthfinder API base URL.
pub const DEFAULT_HEALTH_API_BASE_URL: &str = "https://health.gov/myhealthfinder/api/v3";

/// Root structure of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API credentials.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

impl GeminiConfig {
    /// Returns true when the key is present and is not a template placeholder.
    pub fn is_configured(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && !key.starts_with("YOUR_")
    }

    /// Model name, falling back to [`DEFAULT_GEMINI_MODEL`].
    pub fn model(&self) -> &str {
        self.model_name.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }
}

/// Root structure of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub health: HealthSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    /// Whether the remote generation stage is attempted at all.
    #[serde(default = "default_true")]
    pub remote_generation: bool,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            remote_generation: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_health_base_url")]
    pub base_url: String,
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_health_base_url(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageSettings {
    /// Overrides the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_health_base_url() -> String {
    DEFAULT_HEALTH_API_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
