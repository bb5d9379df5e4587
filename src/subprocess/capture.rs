//! Run a command with its output spooled to temp files, then summarize it

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

use super::error::CaptureError;
use super::reader::read_output_or_diagnostic;
use crate::config::SummaryConfig;

#[derive(Debug, Clone)]
pub struct ProcessCommand {
    pub program: String,
    pub args: Vec<String>,
    pub env: HashMap<String, String>,
    pub working_dir: Option<PathBuf>,
}

impl ProcessCommand {
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error(i32),
    Signal(i32),
}

impl ExitStatus {
    pub fn success(&self) -> bool {
        matches!(self, ExitStatus::Success)
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            ExitStatus::Success => Some(0),
            ExitStatus::Error(code) => Some(*code),
            ExitStatus::Signal(_) => None,
        }
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        if status.success() {
            return ExitStatus::Success;
        }
        match status.code() {
            Some(code) => ExitStatus::Error(code),
            None => terminating_signal(status),
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: std::process::ExitStatus) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    status
        .signal()
        .map(ExitStatus::Signal)
        .unwrap_or(ExitStatus::Error(-1))
}

#[cfg(not(unix))]
fn terminating_signal(_status: std::process::ExitStatus) -> ExitStatus {
    ExitStatus::Error(-1)
}

/// Result of a captured run.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    /// Bounded `[stdout]`/`[stderr]` summary of everything the child wrote
    pub summary: String,
    pub duration: Duration,
}

/// Run `command` to completion and summarize what it wrote.
///
/// Output goes to anonymous temp files rather than pipes so a chatty child
/// never blocks on a full pipe buffer. A failure to read the spools back is
/// reported inside the summary, not as an error.
pub fn run_captured(
    command: &ProcessCommand,
    config: &SummaryConfig,
) -> Result<CapturedOutput, CaptureError> {
    log_command_start(command);

    let mut stdout_spool = tempfile::tempfile().map_err(CaptureError::Spool)?;
    let mut stderr_spool = tempfile::tempfile().map_err(CaptureError::Spool)?;

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .envs(&command.env)
        .stdin(Stdio::null())
        .stdout(Stdio::from(
            stdout_spool.try_clone().map_err(CaptureError::Spool)?,
        ))
        .stderr(Stdio::from(
            stderr_spool.try_clone().map_err(CaptureError::Spool)?,
        ));

    if let Some(dir) = &command.working_dir {
        cmd.current_dir(dir);
    }

    let start = Instant::now();
    let mut child = cmd.spawn().map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CaptureError::CommandNotFound(command.program.clone())
        } else {
            CaptureError::Spawn {
                command: command.command_line(),
                source,
            }
        }
    })?;

    let status = child.wait().map_err(|source| CaptureError::Wait {
        command: command.command_line(),
        source,
    })?;
    let duration = start.elapsed();
    let status = ExitStatus::from(status);

    debug!(
        "Subprocess {} finished with {:?} in {:?}",
        command.program, status, duration
    );

    let summary = read_output_or_diagnostic(&mut stdout_spool, &mut stderr_spool, config);

    Ok(CapturedOutput {
        status,
        summary,
        duration,
    })
}

fn log_command_start(command: &ProcessCommand) {
    debug!("Executing subprocess: {}", command.command_line());

    if !command.env.is_empty() {
        debug!("Environment variables count: {}", command.env.len());
        tracing::trace!("Environment variables: {:?}", command.env);
    }

    if let Some(dir) = &command.working_dir {
        debug!("Working directory: {}", dir.display());
    }
}
