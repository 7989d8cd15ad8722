//! xtask - Development task runner for shipping-zones
//!
//! Usage:
//!   cargo xtask check-zones <path>
//!   cargo xtask quote --country <code> --total <minor units> [options]

mod check_zones;
mod quote;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for shipping-zones")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a zone file and summarize it per country
    CheckZones(check_zones::CheckZonesArgs),
    /// Quote shipping for a destination against a zone table
    Quote(quote::QuoteArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckZones(args) => check_zones::run(&args),
        Commands::Quote(args) => quote::run(&args),
    }
}
