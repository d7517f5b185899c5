//! Taskrank CLI entry point.

use anyhow::Result;
use clap::Parser;

use taskrank::cli::{commands, Cli, Commands};
use taskrank::infrastructure::logging::{LogConfig, LoggerImpl};
use taskrank::{ConfigLoader, TaskAnalyzer};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        taskrank::cli::handle_error(err, json);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;
    let analyzer = TaskAnalyzer::from_config(&config)?;

    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &analyzer, cli.json),
        Commands::Suggest(args) => commands::suggest::execute(args, &analyzer, cli.json),
        Commands::Serve(args) => commands::serve::execute(args, &config, analyzer).await,
        Commands::Strategies => {
            commands::strategies::execute(analyzer.default_strategy(), cli.json)
        }
    }
}
