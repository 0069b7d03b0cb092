use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// mealweek - Weekly meal planner and grocery list
#[derive(Parser)]
#[command(name = "mealweek")]
#[command(about = "Plan a week of meals and build the grocery list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive planning session (default)
    Session,
    /// Run session commands from a file
    Run {
        /// File with one session command per line
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealweek::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealweek::observability::init_observability(
        "mealweek",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => cli::session::interactive(config),
        Commands::Run { script } => cli::script::run(config, script),
    }
}
