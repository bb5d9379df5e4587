use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::summary::TELEMETRY_MESSAGE_MAX_LEN;


pub const ENV_MAX_LENGTH: &str = "TAILCAP_MAX_LENGTH";
pub const ENV_READ_LIMIT: &str = "TAILCAP_READ_LIMIT";
pub const ENV_DECODE: &str = "TAILCAP_DECODE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// How undecodable bytes in a captured stream are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Escape each invalid byte as `\xNN`
    #[default]
    Backslash,
    /// Replace invalid sequences with U+FFFD
    Lossy,
}

impl FromStr for DecodeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backslash" => Ok(DecodeMode::Backslash),
            "lossy" => Ok(DecodeMode::Lossy),
            other => Err(format!("unknown decode mode: {other}")),
        }
    }
}

/// Limits applied when turning captured output into a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    /// Maximum length of the formatted summary, in characters
    pub max_length: usize,
    /// Read at most this many bytes from each stream
    pub read_limit: Option<usize>,
    pub decode: DecodeMode,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_length: TELEMETRY_MESSAGE_MAX_LEN,
            read_limit: None,
            decode: DecodeMode::default(),
        }
    }
}

impl SummaryConfig {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_read_limit(mut self, read_limit: Option<usize>) -> Self {
        self.read_limit = read_limit;
        self
    }

    pub fn with_decode(mut self, decode: DecodeMode) -> Self {
        self.decode = decode;
        self
    }

    /// Location of the per-user config file, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "tailcap", "tailcap")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded summary config from {}", path.display());
        Ok(config)
    }

    /// Load an explicit config file, or the per-user one when it exists.
    ///
    /// An explicit path must exist; a missing per-user file means defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Apply `TAILCAP_*` overrides resolved through `lookup`.
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_MAX_LENGTH) {
            self.max_length = parse_setting(ENV_MAX_LENGTH, &value)?;
        }

        if let Some(value) = lookup(ENV_READ_LIMIT) {
            self.read_limit = match value.trim() {
                "" | "none" => None,
                _ => Some(parse_setting(ENV_READ_LIMIT, &value)?),
            };
        }

        if let Some(value) = lookup(ENV_DECODE) {
            self.decode = parse_setting(ENV_DECODE, &value)?;
        }

        Ok(self)
    }

    /// Apply overrides from the process environment.
    pub fn merge_env_vars(self) -> Result<Self, ConfigError> {
        self.apply_env_overrides(|key| std::env::var(key).ok())
    }
}

fn parse_setting<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
