//! # tailcap
//!
//! Bounded summaries of a process's captured stdout and stderr, sized to fit
//! inside a telemetry message.
//!
//! ```
//! use tailcap::summary::format_stdout_stderr;
//!
//! let summary = format_stdout_stderr("empty", "The five boxing wizards jump quickly.", 40);
//! assert_eq!(summary, "[stdout]\nempty\n\n[stderr]\ns jump quickly.");
//! ```
//!
//! ## Modules
//!
//! - `summary` - Quota allocation and the `[stdout]`/`[stderr]` template
//! - `subprocess` - Reading captured stream handles, and a spooling runner
//! - `config` - Summary limits from TOML files and `TAILCAP_*` variables
//! - `app` - CLI configuration, logging and error reporting
pub mod app;
pub mod config;
pub mod subprocess;
pub mod summary;
