use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

use tailcap::app::{handle_fatal_error, init_logging, AppConfig, SummaryReport};
use tailcap::config::SummaryConfig;
use tailcap::subprocess::{read_output_or_diagnostic, run_captured, ProcessCommandBuilder};

/// Summarize captured stdout/stderr within a hard length cap
#[derive(Parser)]
#[command(name = "tailcap")]
#[command(about = "Bounded stdout/stderr summaries for telemetry messages", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Maximum summary length in characters (default: 3200)
    #[arg(long, global = true)]
    max_length: Option<usize>,

    /// Read at most this many bytes from each stream
    #[arg(long, global = true)]
    read_limit: Option<usize>,

    /// Replace invalid UTF-8 with U+FFFD instead of \xNN escapes
    #[arg(long, global = true)]
    lossy: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command and summarize its output
    Run {
        /// Print a JSON object instead of the bare summary
        #[arg(long)]
        json: bool,

        /// Program and arguments to run
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Summarize files holding captured stdout and stderr
    Files {
        /// File with the captured stdout
        stdout: PathBuf,

        /// File with the captured stderr
        stderr: PathBuf,

        /// Print a JSON object instead of the bare summary
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let app_config = AppConfig::new(cli.verbose)
        .with_config_path(cli.config.clone())
        .with_max_length(cli.max_length)
        .with_read_limit(cli.read_limit)
        .with_lossy(cli.lossy);

    init_logging(&app_config);

    match run(cli.command, &app_config) {
        Ok(code) => std::process::exit(code),
        Err(e) => handle_fatal_error(e, app_config.verbose),
    }
}

fn run(command: Commands, app_config: &AppConfig) -> Result<i32> {
    let config = app_config.summary_config()?;
    debug!("Effective summary config: {:?}", config);

    let (report, json) = match command {
        Commands::Run { json, command } => (run_command(&command, &config)?, json),
        Commands::Files {
            stdout,
            stderr,
            json,
        } => (summarize_files(&stdout, &stderr, &config)?, json),
    };

    println!("{}", report.render(json)?);
    Ok(report.process_exit_code())
}

fn run_command(argv: &[String], config: &SummaryConfig) -> Result<SummaryReport> {
    let (program, args) = argv.split_first().context("No command given to run")?;

    let command = ProcessCommandBuilder::new(program).args(args).build();
    let output = run_captured(&command, config)?;

    Ok(SummaryReport::from_capture(output))
}

fn summarize_files(
    stdout: &Path,
    stderr: &Path,
    config: &SummaryConfig,
) -> Result<SummaryReport> {
    let mut stdout_file = File::open(stdout)
        .with_context(|| format!("Failed to open stdout file {}", stdout.display()))?;
    let mut stderr_file = File::open(stderr)
        .with_context(|| format!("Failed to open stderr file {}", stderr.display()))?;

    let summary = read_output_or_diagnostic(&mut stdout_file, &mut stderr_file, config);
    Ok(SummaryReport::from_summary(summary))
}
