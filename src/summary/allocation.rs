//! Character quota allocation between the two streams

/// Number of characters each stream may contribute to a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Allocation {
    pub stdout: usize,
    pub stderr: usize,
}

impl Allocation {
    pub fn total(&self) -> usize {
        self.stdout + self.stderr
    }
}

/// Split `available` characters between stdout and stderr.
///
/// Each stream starts with half of the budget, stdout taking the extra
/// character when `available` is odd. A stream whose content is shorter than
/// its half hands the unused part to the other stream. No stream is ever given
/// more than its own length, so the total never exceeds `available` and equals
/// it whenever the combined content does not fit.
pub fn allocate(stdout_len: usize, stderr_len: usize, available: usize) -> Allocation {
    let stderr_base = available / 2;
    let stdout_base = available - stderr_base;

    let stdout_excess = stdout_base.saturating_sub(stdout_len);
    let stderr_excess = stderr_base.saturating_sub(stderr_len);

    Allocation {
        stdout: (stdout_base - stdout_excess + stderr_excess).min(stdout_len),
        stderr: (stderr_base - stderr_excess + stdout_excess).min(stderr_len),
    }
}
