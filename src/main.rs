// src/main.rs
// shopkeep - natural-language command desk for a product and order catalog

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use shopkeep::EnvConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env files (global first, then working directory)
    let _ = dotenvy::from_path(shopkeep::config::shopkeep_dir().join(".env"));
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Quiet by default so replies own stdout
    let default_level = if cli.verbose { Level::INFO } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(EnvConfig::log_level_or(default_level))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let env = EnvConfig::load();
    let agent = cli::setup_agent(&env)?;

    match cli.command {
        None | Some(Commands::Repl) => cli::run_repl(agent).await?,
        Some(Commands::Ask { text }) => cli::run_ask(agent, text).await?,
        Some(Commands::Tool { name, args }) => cli::run_tool(agent, name, args).await?,
        Some(Commands::Tools) => cli::run_list_tools(&agent)?,
    }

    Ok(())
}
