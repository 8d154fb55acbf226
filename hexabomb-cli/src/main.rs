//! hexabomb CLI - map conversion and snapshot inspection
//!
//! Commands:
//! - convert: Convert a Tiled map into a hexabomb map
//! - inspect: Parse a game state snapshot and summarize it

mod convert_cmd;
mod inspect_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexabomb")]
#[command(about = "hexabomb map and game state tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Tiled JSON map into a hexabomb JSON map
    Convert(convert_cmd::ConvertArgs),
    /// Parse a game state snapshot and print a summary
    Inspect(inspect_cmd::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout may carry the converted map
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => convert_cmd::run(args),
        Commands::Inspect(args) => inspect_cmd::run(args),
    }
}
