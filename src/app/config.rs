//! Application configuration
//!
//! Resolves the summary limits from the config file, the environment and
//! command-line flags, in increasing order of precedence.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{DecodeMode, SummaryConfig};

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Explicit config file, overriding the per-user one
    pub config_path: Option<PathBuf>,
    pub max_length: Option<usize>,
    pub read_limit: Option<usize>,
    /// Force lossy decoding of invalid UTF-8
    pub lossy: bool,
}

impl AppConfig {
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_read_limit(mut self, read_limit: Option<usize>) -> Self {
        self.read_limit = read_limit;
        self
    }

    pub fn with_lossy(mut self, lossy: bool) -> Self {
        self.lossy = lossy;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Build the effective summary configuration.
    pub fn summary_config(&self) -> Result<SummaryConfig> {
        let config = SummaryConfig::load_or_default(self.config_path.as_deref())
            .context("Failed to load configuration")?
            .merge_env_vars()
            .context("Invalid TAILCAP_* environment override")?;

        Ok(self.apply_flags(config))
    }

    fn apply_flags(&self, mut config: SummaryConfig) -> SummaryConfig {
        if let Some(max_length) = self.max_length {
            config.max_length = max_length;
        }
        if self.read_limit.is_some() {
            config.read_limit = self.read_limit;
        }
        if self.lossy {
            config.decode = DecodeMode::Lossy;
        }
        config
    }
}
