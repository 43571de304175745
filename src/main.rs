use clap::Parser;
use homework_bot::cli::{self, CheckCommand, Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => cli::run::execute(&cli, args).await,
        Commands::Check(CheckCommand::Config) => cli::check::execute_config(cli.config.as_deref()),
        #[cfg(feature = "telegram")]
        Commands::Check(CheckCommand::Telegram) => {
            cli::check::execute_telegram(cli.config.as_deref()).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
