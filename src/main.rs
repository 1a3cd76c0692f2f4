//! mock-interview CLI entry point.

use clap::Parser;

use mock_interview::cli::commands::{history, init, practice, show};
use mock_interview::cli::runtime::load_config;
use mock_interview::cli::{handle_error, Cli, Commands};
use mock_interview::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json_mode);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let _logger = LoggerImpl::init(&config.logging)?;

    match cli.command {
        Commands::Practice(args) => practice::execute(args, config, cli.json).await,
        Commands::History(args) => history::execute(args, config, cli.json).await,
        Commands::Show(args) => show::execute(args, config, cli.json).await,
        Commands::Init(args) => init::execute(args, cli.config.as_deref(), cli.json).await,
    }
}
