//! Application configuration.
//!
//! # Responsibility
//! - Load `AppConfig` from a TOML file, falling back to defaults when the
//!   file does not exist.
//! - Resolve platform default locations for config, database and logs.
//!
//! # Invariants
//! - `user_id` is non-empty after trimming and contains no `-`, the storage
//!   key separator.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_USER_ID: &str = "default";
const DATABASE_FILE_NAME: &str = "focuscore.db";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_DIR_NAME: &str = "logs";
const USER_ID_SEPARATOR: char = '-';

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scopes every storage key.
    pub user_id: String,
    pub database_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            database_path: None,
            log_level: None,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads and validates the TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Like [`AppConfig::load`], but a missing file yields defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_id.trim().is_empty() {
            return Err(ConfigError::Invalid("user_id cannot be empty".to_string()));
        }
        if self.user_id.contains(USER_ID_SEPARATOR) {
            return Err(ConfigError::Invalid(format!(
                "user_id `{}` cannot contain `{USER_ID_SEPARATOR}`",
                self.user_id
            )));
        }
        Ok(())
    }

    /// Configured database path, else the platform data directory.
    pub fn resolved_database_path(&self) -> Option<PathBuf> {
        self.database_path
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join(DATABASE_FILE_NAME)))
    }

    /// Configured log directory, else `logs/` under the platform data
    /// directory.
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join(LOG_DIR_NAME)))
    }
}

/// Platform default location of `config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "focuscore", "focuscore")
}
