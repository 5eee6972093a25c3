//! Waypoint CLI - wp command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cli_lib::cmd;

/// Waypoint - map search and driving directions demo
#[derive(Parser)]
#[command(name = "wp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the built-in gazetteer for places
    Search {
        /// Query text
        query: String,
        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute a demo driving route between two places
    Route {
        /// Source place name
        from: String,
        /// Destination place name
        to: String,
        /// Show turn-by-turn steps
        #[arg(long)]
        steps: bool,
        /// Emit the route as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play a scripted UI scenario through the reconciliation engine
    Demo {
        /// Scenario file (JSON); the built-in scenario runs when omitted
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Emit the mutation plans as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, json } => cmd::search::run(&query, json).await,
        Commands::Route {
            from,
            to,
            steps,
            json,
        } => cmd::route::run(&from, &to, steps, json).await,
        Commands::Demo { scenario, json } => cmd::demo::run(scenario, json).await,
    }
}
