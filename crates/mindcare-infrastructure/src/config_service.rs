//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `config.toml`. A missing or blank file yields the
//! defaults; a file that fails to parse is reported as an error.

use mindcare_core::config::AppConfig;
use mindcare_core::error::{MindcareError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Configuration service that loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config: Arc<RwLock<Option<AppConfig>>>,
    file_path: PathBuf,
}

impl ConfigService {
    /// The configuration is loaded lazily on first access.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| MindcareError::internal("config cache lock poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|_| MindcareError::internal("config cache lock poisoned"))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    fn load_config(&self) -> Result<AppConfig> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "config file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        toml::from_str(&content).map_err(|e| {
            MindcareError::config(format!(
                "Failed to parse {}: {}",
                self.file_path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join("config.toml"));
        assert_eq!(service.get_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[chat]\nremote_generation = false\n\n[storage]\ndata_dir = \"/tmp/mc\"\n",
        )
        .unwrap();

        let config = ConfigService::new(path).get_config().unwrap();
        assert!(!config.chat.remote_generation);
        assert!(config.health.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.storage.data_dir.as_deref(), Some("/tmp/mc"));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[chat\nremote_generation = ").unwrap();

        let err = ConfigService::new(path).get_config().unwrap_err();
        assert!(matches!(err, MindcareError::Config(_)));
    }

    #[test]
    fn test_config_is_read_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();
        let service = ConfigService::new(path.clone());

        assert_eq!(service.get_config().unwrap().logging.level, "debug");

        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().logging.level, "debug");
        assert_eq!(service.clone().get_config().unwrap().logging.level, "debug");
    }
}
