//! Shipping quote from the command line
//!
//! Prints the same JSON body `POST /shipping/quote` returns.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use shipping_zones::config::load_zone_table;
use shipping_zones::dto::{DestinationDto, QuoteRequestDto, QuoteResponseDto};
use shipping_zones::zone::{ZoneTable, quote_shipping};

/// Arguments for the quote subcommand
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// ISO country code
    #[arg(long)]
    pub country: String,

    /// State or region
    #[arg(long)]
    pub state: Option<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// Postal code
    #[arg(long)]
    pub postal_code: Option<String>,

    /// Order total in minor units
    #[arg(long, allow_negative_numbers = true)]
    pub total: i64,

    /// Zone file (default: built-in storefront table)
    #[arg(long)]
    pub zones: Option<PathBuf>,
}

/// Runs the quote subcommand
pub fn run(args: &QuoteArgs) -> Result<()> {
    let table = match &args.zones {
        Some(path) => load_zone_table(path)
            .with_context(|| format!("zone file {} is invalid", path.display()))?,
        None => ZoneTable::storefront_default().context("built-in zone table is invalid")?,
    };

    let request = QuoteRequestDto {
        destination: DestinationDto {
            country: args.country.clone(),
            state: args.state.clone(),
            city: args.city.clone(),
            postal_code: args.postal_code.clone(),
        },
        order_total: args.total,
    };
    let (destination, order_total) = request.validate()?;
    let quote = quote_shipping(&table, &destination, order_total);

    let response = QuoteResponseDto::from_domain(&quote, order_total);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
