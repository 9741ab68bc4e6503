//! Unified path management for MindCare configuration and data files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/mindcare/          # Config directory
//! ├── config.toml              # Application configuration
//! ├── secret.json              # API keys
//! └── logs/                    # Application logs
//!     └── mindcare.log.YYYY-MM-DD
//!
//! ~/.local/share/mindcare/     # Data directory
//! ├── moodTracker.json         # date -> mood label
//! └── moodJournal.json         # journal entries
//! ```

use mindcare_core::config::{GeminiConfig, SecretConfig};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "mindcare";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolved config and data directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MindcarePaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl MindcarePaths {
    /// Platform directories (XDG on Linux) with `mindcare` appended.
    pub fn platform() -> Result<Self, PathError> {
        Self::resolve(None, None)
    }

    /// Uses the given overrides, falling back to the platform directories.
    pub fn resolve(config_dir: Option<&Path>, data_dir: Option<&Path>) -> Result<Self, PathError> {
        let config_dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(PathError::HomeDirNotFound)?
                .join(APP_DIR_NAME),
        };
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::data_dir()
                .ok_or(PathError::HomeDirNotFound)?
                .join(APP_DIR_NAME),
        };
        Ok(Self {
            config_dir,
            data_dir,
        })
    }

    /// Both directories rooted under `base` (`base/config`, `base/data`).
    pub fn under(base: &Path) -> Self {
        Self {
            config_dir: base.join("config"),
            data_dir: base.join("data"),
        }
    }

    /// Replaces the data directory, e.g. from `[storage] data_dir`.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to config.toml
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Path to secret.json
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600).
    pub fn secret_file(&self) -> PathBuf {
        self.config_dir.join("secret.json")
    }

    /// Path to the logs directory.
    pub fn logs_dir(&self) -> PathBuf {
        self.config_dir.join("logs")
    }

    /// Ensures the secret file exists, creating a template if it doesn't.
    ///
    /// The template carries an empty Gemini key, which is treated as
    /// unconfigured until the user fills it in. On Unix the file is created
    /// with mode 600.
    pub fn ensure_secret_file(&self) -> Result<PathBuf, std::io::Error> {
        let secret_path = self.secret_file();

        if secret_path.exists() {
            return Ok(secret_path);
        }

        if let Some(parent) = secret_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template_config = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: Some(mindcare_core::config::DEFAULT_GEMINI_MODEL.to_string()),
            }),
        };

        let template_json = serde_json::to_string_pretty(&template_config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        std::fs::write(&secret_path, template_json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&secret_path, permissions)?;
        }

        Ok(secret_path)
    }
}
