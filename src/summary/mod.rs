//! Bounded stdout/stderr summaries
//!
//! Formats two captured streams into a single message of the form
//! `[stdout]\n<tail>\n\n[stderr]\n<tail>` that never exceeds a caller-supplied
//! length in characters. Each stream keeps its most recent output, and a
//! stream that needs less than half of the budget lends the rest to the other.

mod allocation;
mod tail;

#[cfg(test)]
mod tests;

pub use allocation::{allocate, Allocation};
pub use tail::{char_len, head_chars, tail_chars};

use tracing::trace;

/// Default ceiling for a summary embedded in a telemetry message.
pub const TELEMETRY_MESSAGE_MAX_LEN: usize = 3200;

pub const STDOUT_MARKER: &str = "[stdout]\n";
pub const STDERR_MARKER: &str = "\n\n[stderr]\n";

/// Characters taken by the markers regardless of content.
pub const TEMPLATE_OVERHEAD: usize = STDOUT_MARKER.len() + STDERR_MARKER.len();

/// Characters left for stream content under `max_length`, if any.
pub fn available_budget(max_length: usize) -> Option<usize> {
    max_length
        .checked_sub(TEMPLATE_OVERHEAD)
        .filter(|available| *available > 0)
}

/// Format `stdout` and `stderr` into a summary of at most `max_length` chars.
///
/// Returns an empty string when `max_length` cannot hold the markers plus at
/// least one character of content.
pub fn format_stdout_stderr(stdout: &str, stderr: &str, max_length: usize) -> String {
    let Some(available) = available_budget(max_length) else {
        trace!("Summary budget of {} leaves no room for content", max_length);
        return String::new();
    };

    let allocation = allocate(char_len(stdout), char_len(stderr), available);
    trace!(
        "Summary quotas: stdout={}, stderr={}, available={}",
        allocation.stdout,
        allocation.stderr,
        available
    );

    render(
        tail_chars(stdout, allocation.stdout),
        tail_chars(stderr, allocation.stderr),
    )
}

fn render(stdout: &str, stderr: &str) -> String {
    let mut summary = String::with_capacity(TEMPLATE_OVERHEAD + stdout.len() + stderr.len());
    summary.push_str(STDOUT_MARKER);
    summary.push_str(stdout);
    summary.push_str(STDERR_MARKER);
    summary.push_str(stderr);
    summary
}
