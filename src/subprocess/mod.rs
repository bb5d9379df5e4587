//! Captured process output
//!
//! Reads a child's stdout/stderr handles back into a bounded summary, and
//! provides a small runner that spools a command's output to temp files.

pub mod builder;
pub mod capture;
pub mod decode;
pub mod error;
pub mod reader;


pub use builder::ProcessCommandBuilder;
pub use capture::{run_captured, CapturedOutput, ExitStatus, ProcessCommand};
pub use error::{CaptureError, ReadOutputError, StreamKind};
pub use reader::{
    diagnostic, read_output, read_output_or_diagnostic, read_output_with_env, READ_FAILURE_PREFIX,
};
