//! Western CLI Binary
//!
//! Runs the showdown: Amy and Angus ride in, Amy shoots, both fall.
//!
//! # Usage
//!
//! ```bash
//! # Run the showdown
//! western
//!
//! # Same, with debug logs on stderr
//! western -v run
//!
//! # Show version and defaults
//! western info --all
//! ```

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, info};
use western_cli::{
    commands::{self, info::InfoArgs, run::RunArgs},
    config::{CliConfig, LogFormat, LogLevel},
    diagnostics::{render_cli_error, setup_error_reporting},
    CliError, Result,
};

#[derive(Parser)]
#[command(
    name = "western",
    version = env!("CARGO_PKG_VERSION"),
    about = "Western: a showdown between two cowboys"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error logs
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, global = true, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the showdown (the default)
    Run(RunArgs),

    /// Show version and defaults
    Info(InfoArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logging comes up even when preparation fails so the failure gets reported
    let prepared = prepare(&cli);
    let fallback = CliConfig::default();
    let logging = &prepared.as_ref().unwrap_or(&fallback).logging;
    setup_logging(
        resolve_level(cli.verbose, cli.quiet, cli.log, logging.level),
        cli.log_format.unwrap_or(logging.format),
    );

    let result = prepared.and_then(|config| match cli.command {
        None => commands::run_command(RunArgs::default(), &config),
        Some(Commands::Run(args)) => commands::run_command(args, &config),
        Some(Commands::Info(args)) => commands::info_command(args, &config),
    });

    match result {
        Ok(_) => {
            if cli.verbose > 0 {
                info!("Command completed successfully");
            }
        }
        Err(e) => {
            if !render_cli_error(&e) {
                error!("{}", e);
            }
            if cli.verbose > 0 {
                error!(?e, "detailed error context");
            }
            std::process::exit(1);
        }
    }
}

/// Install error reporting, enter the working directory and load the config
fn prepare(cli: &Cli) -> Result<CliConfig> {
    setup_error_reporting()?;

    if let Some(dir) = &cli.directory {
        if !dir.is_dir() {
            return Err(CliError::InvalidInput(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        std::env::set_current_dir(dir)?;
    }

    CliConfig::load(cli.config.as_deref())
}

fn resolve_level(
    verbose: u8,
    quiet: bool,
    log: Option<LogLevel>,
    configured: LogLevel,
) -> LogLevel {
    if let Some(level) = log {
        level
    } else if quiet {
        LogLevel::Error
    } else {
        match verbose {
            0 => configured,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

fn setup_logging(level: LogLevel, log_format: LogFormat) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::new(level.as_filter());

    // stdout belongs to the cowboys
    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(formatter)
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(formatter.json())
                .with(filter)
                .init();
        }
    }
}
