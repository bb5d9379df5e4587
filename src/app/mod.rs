//! Application module
//!
//! Command-line plumbing around the library: configuration resolution,
//! logging setup, report rendering and fatal error handling.

pub mod config;
pub mod error_handling;
pub mod logging;
pub mod report;

pub use config::AppConfig;
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
pub use report::SummaryReport;
