//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// homework-bot - forwards homework review status changes to Telegram.
#[derive(Parser, Debug)]
#[command(name = "homework-bot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to settings file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the status poller (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `homework-bot check`
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum CheckCommand {
    /// Validate settings and required environment variables
    Config,
    /// Send a test message to the configured chat
    #[cfg(feature = "telegram")]
    Telegram,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Log notifications instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Initial watermark as Unix seconds (default: now, 0 = full history)
    #[arg(long)]
    pub from_date: Option<i64>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
