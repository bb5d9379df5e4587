//! Logging configuration and initialization

use crate::app::config::AppConfig;
use tracing::{debug, trace};

/// Initialize tracing for the binary.
///
/// Logs go to stderr so the summary on stdout can be piped as is.
pub fn init_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level())
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2)
        .with_line_number(config.verbose >= 3)
        .init();

    debug!("tailcap started with verbosity level: {}", config.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
