//! Configuration file management.
//!
//! Handles reading and validating the optional `local-chamber.toml` in the
//! working directory. Every setting can be overridden on the command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings read from `local-chamber.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root of the secrets store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets_dir: Option<PathBuf>,
    /// Backup settings
    #[serde(default)]
    pub backup: BackupConfig,
}

/// The `[backup]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackupConfig {
    /// Directory archives are written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `local-chamber.toml` from the current directory.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` for empty paths.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(
            secrets_dir = ?config.secrets_dir,
            output_dir = ?config.backup.output_dir,
            "config loaded"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("secrets_dir", &self.secrets_dir),
            ("backup.output_dir", &self.backup.output_dir),
        ];
        for (field, value) in fields {
            if matches!(value, Some(p) if p.as_os_str().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "path must not be empty".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Resolve the secrets directory: `cli` wins over the file, then the default.
    pub fn secrets_dir(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.secrets_dir.clone())
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_SECRETS_DIR))
    }

    /// Resolve the backup output directory: `cli` wins over the file, then the default.
    pub fn backup_dir(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.backup.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_BACKUP_DIR))
    }
}
