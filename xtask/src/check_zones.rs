//! Zone file checker
//!
//! Loads a zone file through the same path the server uses and prints, per
//! country, the active zones in resolution order.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use shipping_zones::config::load_zone_table;
use shipping_zones::simple_types::CountryCode;
use shipping_zones::zone::{ShippingZone, ZoneTable};

/// Arguments for the check-zones subcommand
#[derive(Args, Debug)]
pub struct CheckZonesArgs {
    /// Zone file (.json, .yaml or .yml)
    pub path: PathBuf,
}

/// Runs the check-zones subcommand
pub fn run(args: &CheckZonesArgs) -> Result<()> {
    let table = load_zone_table(&args.path)
        .with_context(|| format!("zone file {} is invalid", args.path.display()))?;

    println!(
        "{}: {} zones ({} active)",
        args.path.display(),
        table.len(),
        table.list_active().len()
    );

    for (country, zones) in zones_by_country(&table) {
        let national = zones.iter().any(|zone| zone.is_national());
        println!();
        println!(
            "{country}{}",
            if national { "" } else { "  (no national fallback)" }
        );
        for zone in zones {
            println!(
                "  {:>4}  {:<28} {:>8}  {}",
                zone.priority().value(),
                zone.id().value(),
                zone.shipping_cost().value(),
                restriction_summary(zone)
            );
        }
    }

    Ok(())
}

fn zones_by_country(table: &ZoneTable) -> BTreeMap<CountryCode, Vec<&ShippingZone>> {
    let countries: Vec<CountryCode> = table
        .list_active()
        .iter()
        .flat_map(|zone| zone.countries().iter().cloned())
        .collect();

    countries
        .into_iter()
        .map(|country| {
            let zones = table.list_by_country(&country);
            (country, zones)
        })
        .collect()
}

fn restriction_summary(zone: &ShippingZone) -> String {
    let mut parts = Vec::new();
    if let Some(codes) = zone.postal_codes() {
        parts.push(format!("postal codes: {}", codes.len()));
    }
    if let Some(cities) = zone.cities() {
        parts.push(format!("cities: {}", cities.len()));
    }
    if let Some(states) = zone.states() {
        parts.push(format!("states: {}", states.len()));
    }
    if parts.is_empty() {
        "national".to_string()
    } else {
        parts.join(", ")
    }
}
