//! Error handling utilities

use tracing::error;

use crate::subprocess::CaptureError;

/// Report a fatal error and exit.
///
/// Capture errors carry their own exit code (127 for a missing program);
/// everything else exits with 1. In verbose mode the full error chain is
/// printed.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    eprintln!("Error: {error:#}");
    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code_for(&error))
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<CaptureError>()
        .map(CaptureError::exit_code)
        .unwrap_or(1)
}
