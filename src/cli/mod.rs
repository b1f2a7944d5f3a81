// src/cli/mod.rs
// CLI module for shopkeep commands

use anyhow::Result;
use clap::{Parser, Subcommand};
use shopkeep::{Agent, Database, EnvConfig, ShopkeepConfig};
use std::sync::Arc;
use tracing::info;

pub mod repl;
pub mod tool;

pub use repl::{run_ask, run_repl};
pub use tool::{run_list_tools, run_tool};

#[derive(Parser)]
#[command(name = "shopkeep")]
#[command(about = "Natural-language command desk for a product and order catalog")]
#[command(version)]
pub struct Cli {
    /// Log at info level unless SHOPKEEP_LOG_LEVEL says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read commands from stdin, one per line (default)
    Repl,

    /// Handle a single command and exit
    Ask {
        /// Command text (e.g. list all products)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Call an operation directly, bypassing intent resolution
    Tool {
        /// Operation name (e.g. get_product)
        #[arg(index = 1)]
        name: String,

        /// JSON arguments (e.g. '{"product_id": 1}')
        #[arg(index = 2, default_value = "{}")]
        args: String,
    },

    /// Print the operation registry as JSON
    Tools,
}

/// Open the database, seed it if configured and build the agent
pub fn setup_agent(env: &EnvConfig) -> Result<Arc<Agent>> {
    let config = ShopkeepConfig::load();
    let db = Arc::new(Database::open(&env.db_path)?);

    // Environment wins over the config file; seeding is on unless disabled
    let seed = env.seed.or(config.catalog.seed).unwrap_or(true);
    if seed {
        let inserted = db.seed_if_empty()?;
        if inserted > 0 {
            info!(inserted, "Demo catalog created");
        }
    }

    Ok(Arc::new(Agent::with_catalog(db, &config)))
}
