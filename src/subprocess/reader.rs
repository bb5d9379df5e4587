//! Reading captured stdout/stderr handles into a bounded summary

use std::io::{Read, Seek, SeekFrom};
use tracing::{debug, warn};

use super::decode::decode;
use super::error::{ReadOutputError, StreamKind};
use crate::config::SummaryConfig;
use crate::summary::{format_stdout_stderr, head_chars, TELEMETRY_MESSAGE_MAX_LEN};

/// Leading text of every read failure message.
pub const READ_FAILURE_PREFIX: &str = "Cannot read stdout/stderr";

/// Read both handles from the start and format them into a summary.
///
/// Undecodable bytes never fail the read; see [`crate::config::DecodeMode`].
/// The handles are rewound but left open.
pub fn read_output<O, E>(
    stdout: &mut O,
    stderr: &mut E,
    config: &SummaryConfig,
) -> Result<String, ReadOutputError>
where
    O: Read + Seek,
    E: Read + Seek,
{
    let stdout_text = read_stream(stdout, StreamKind::Stdout, config)?;
    let stderr_text = read_stream(stderr, StreamKind::Stderr, config)?;

    Ok(format_stdout_stderr(
        &stdout_text,
        &stderr_text,
        config.max_length,
    ))
}

/// Like [`read_output`], but a failure becomes a diagnostic message.
pub fn read_output_or_diagnostic<O, E>(
    stdout: &mut O,
    stderr: &mut E,
    config: &SummaryConfig,
) -> String
where
    O: Read + Seek,
    E: Read + Seek,
{
    read_output(stdout, stderr, config).unwrap_or_else(|err| diagnostic(&err, config.max_length))
}

/// Resolve the config from `TAILCAP_*` variables via `lookup`, then read.
///
/// An unusable override is reported the same way as a read failure, using
/// the default ceiling for the diagnostic.
pub fn read_output_with_env<O, E, F>(stdout: &mut O, stderr: &mut E, lookup: F) -> String
where
    O: Read + Seek,
    E: Read + Seek,
    F: Fn(&str) -> Option<String>,
{
    match SummaryConfig::default().apply_env_overrides(lookup) {
        Ok(config) => read_output_or_diagnostic(stdout, stderr, &config),
        Err(err) => diagnostic(&ReadOutputError::from(err), TELEMETRY_MESSAGE_MAX_LEN),
    }
}

/// Short message starting with [`READ_FAILURE_PREFIX`].
///
/// Cut to `max_length` characters from the end, but never into the prefix.
pub fn diagnostic(err: &ReadOutputError, max_length: usize) -> String {
    warn!("{}", err);
    let message = err.to_string();
    head_chars(&message, max_length.max(READ_FAILURE_PREFIX.len())).to_string()
}

fn read_stream<R>(
    handle: &mut R,
    stream: StreamKind,
    config: &SummaryConfig,
) -> Result<String, ReadOutputError>
where
    R: Read + Seek,
{
    handle
        .seek(SeekFrom::Start(0))
        .map_err(|source| ReadOutputError::Seek { stream, source })?;

    let mut bytes = Vec::new();
    let read = match config.read_limit {
        Some(limit) => handle.by_ref().take(limit as u64).read_to_end(&mut bytes),
        None => handle.read_to_end(&mut bytes),
    };
    read.map_err(|source| ReadOutputError::Read { stream, source })?;

    debug!("Read {} bytes from {}", bytes.len(), stream);
    Ok(decode(&bytes, config.decode))
}
