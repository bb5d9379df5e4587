use crate::config::ConfigError;
use std::fmt;

/// Which captured stream an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Stdout => f.write_str("stdout"),
            StreamKind::Stderr => f.write_str("stderr"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadOutputError {
    #[error("Cannot read stdout/stderr: failed to seek {stream}: {source}")]
    Seek {
        stream: StreamKind,
        source: std::io::Error,
    },

    #[error("Cannot read stdout/stderr: failed to read {stream}: {source}")]
    Read {
        stream: StreamKind,
        source: std::io::Error,
    },

    #[error("Cannot read stdout/stderr: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Failed to create output spool: {0}")]
    Spool(#[source] std::io::Error),

    #[error("Failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Failed to wait for {command}: {source}")]
    Wait {
        command: String,
        source: std::io::Error,
    },
}

impl CaptureError {
    /// Process exit code a CLI should report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CaptureError::CommandNotFound(_) => 127,
            _ => 1,
        }
    }
}
