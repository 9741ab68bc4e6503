//! Secret service implementation.
//!
//! Reads API keys from `secret.json`, falling back to the `GEMINI_API_KEY`
//! environment variable when the file is missing or carries no usable key.

use mindcare_core::config::{GeminiConfig, SecretConfig};
use mindcare_core::secret::SecretService;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Environment variable consulted when `secret.json` has no Gemini key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Service for loading secret configuration.
///
/// The first successful load is cached, so the file is read at most once per
/// process. Clones share the cache.
///
/// # Example
///
/// ```ignore
/// use mindcare_infrastructure::SecretServiceImpl;
/// use mindcare_core::secret::SecretService;
///
/// let service = SecretServiceImpl::new(paths.secret_file());
/// let secrets = service.load_secrets().await?;
/// ```
#[derive(Clone)]
pub struct SecretServiceImpl {
    secrets: Arc<RwLock<Option<SecretConfig>>>,
    file_path: PathBuf,
    env_key: Option<String>,
}

impl SecretServiceImpl {
    /// Creates a service reading `file_path`, with the env fallback taken from
    /// the process environment.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        let env_key = std::env::var(GEMINI_API_KEY_ENV).ok();
        Self::with_env_key(file_path, env_key)
    }

    /// Creates a service with an explicit fallback key instead of reading the
    /// environment.
    pub fn with_env_key(file_path: impl Into<PathBuf>, env_key: Option<String>) -> Self {
        Self {
            secrets: Arc::new(RwLock::new(None)),
            file_path: file_path.into(),
            env_key: env_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn load_secrets_internal(&self) -> Result<SecretConfig, String> {
        {
            let read_lock = self
                .secrets
                .read()
                .map_err(|_| "secret cache lock poisoned".to_string())?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = self.read_file()?;
        self.apply_env_fallback(&mut loaded);

        {
            let mut write_lock = self
                .secrets
                .write()
                .map_err(|_| "secret cache lock poisoned".to_string())?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    fn read_file(&self) -> Result<SecretConfig, String> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "secret file not found");
            return Ok(SecretConfig::default());
        }

        let content = std::fs::read_to_string(&self.file_path)
            .map_err(|e| format!("Failed to read secret file: {}", e))?;
        if content.trim().is_empty() {
            return Ok(SecretConfig::default());
        }

        // serde_json errors carry only position info, never the file contents.
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse secret file: {}", e))
    }

    fn apply_env_fallback(&self, config: &mut SecretConfig) {
        let has_key = config
            .gemini
            .as_ref()
            .is_some_and(GeminiConfig::is_configured);
        if has_key {
            return;
        }

        match &self.env_key {
            Some(key) => {
                debug!("using {} for Gemini credentials", GEMINI_API_KEY_ENV);
                let model_name = config.gemini.as_ref().and_then(|g| g.model_name.clone());
                config.gemini = Some(GeminiConfig {
                    api_key: key.clone(),
                    model_name,
                });
            }
            None => warn!(
                path = %self.file_path.display(),
                "no Gemini API key configured; replies will use built-in responses"
            ),
        }
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig, String> {
        self.load_secrets_internal()
    }
}
