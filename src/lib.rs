//! # shipping-zones
//!
//! Rule-based shipping zone resolution and cost calculation for a
//! multi-country storefront.
//!
//! ## Overview
//!
//! Operators describe where they ship as a table of zones. Each zone serves
//! one or more countries and may be narrowed by state, city or postal code.
//! Given a destination and an order total, the crate picks the single best
//! zone and derives the shipping charge, applying the zone's free-shipping
//! threshold.
//!
//! - [`simple_types`]: validated value objects (`ZoneId`, `CountryCode`, ...)
//! - [`zone`]: the zone table, the resolver and the calculator
//! - [`dto`]: serde shapes for zone files and the HTTP API
//! - [`config`]: environment configuration and zone file loading
//! - [`api`]: axum handlers and router
//!
//! ## Example
//!
//! ```rust
//! use shipping_zones::zone::{UnvalidatedDestination, ZoneTable, calculate_shipping};
//!
//! let table = ZoneTable::storefront_default().unwrap();
//!
//! let destination = UnvalidatedDestination {
//!     state: Some("California".to_string()),
//!     ..UnvalidatedDestination::for_country("US")
//! };
//! let quote = calculate_shipping(&table, &destination, 4000).unwrap();
//!
//! assert_eq!(quote.cost().value(), 599);
//! assert_eq!(quote.zone().unwrap().id().value(), "us-california");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod api;
pub mod config;
pub mod dto;
pub mod simple_types;
pub mod zone;
