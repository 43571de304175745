//! Handler for the `run` command.

use tokio::signal;
use tracing::{error, info};

use crate::app::{App, RunOptions};
use crate::cli::{Cli, RunArgs};
use crate::config::{Config, Credentials, LogFormat, Settings};
use crate::error::Result;

/// Execute the run command.
///
/// Returns only on Ctrl-C or a startup failure. Missing credentials are
/// logged before the error is returned so they reach the log file too.
pub async fn execute(cli: &Cli, args: &RunArgs) -> Result<()> {
    let mut settings = Settings::resolve(cli.config.as_deref())?;

    // Apply CLI overrides
    if let Some(ref level) = args.log_level {
        settings.logging.level = level.clone();
        settings.logging.validate()?;
    }
    if args.json_logs {
        settings.logging.format = LogFormat::Json;
    }

    settings.logging.init()?;

    let credentials = Credentials::from_env().map_err(|e| {
        error!(critical = true, error = %e, "Required environment variables are missing");
        e
    })?;

    let config = Config::new(credentials, settings);
    let options = RunOptions {
        dry_run: args.dry_run,
        from_date: args.from_date,
    };

    tokio::select! {
        () = App::run(&config, options) => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("homework-bot stopped");
    Ok(())
}
