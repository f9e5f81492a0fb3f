mod backup;
mod cli;
mod config;
mod db;
mod error;
mod forms;
mod models;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("schedule_plus=warn")),
        )
        .with_target(false)
        .init();

    let cli = cli::Cli::parse();

    // Missing connection settings or an unreachable database are fatal;
    // both bubble straight out of main.
    let config = config::init()?;
    let db = db::init(&config).await?;

    // Everything past this point fails at most the requested action.
    if let Err(err) = cli::run(&config, &db, cli.command).await {
        error!("command failed: {err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}
