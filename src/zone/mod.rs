//! Shipping zones: the rule table, resolution and cost calculation
//!
//! # Flow
//!
//! ```text
//! UnvalidatedDestination + order total
//!     -> Destination + OrderTotal        (validation, fail fast)
//!     -> ZoneMatch                       (resolver over ZoneTable)
//!     -> ShippingQuote                   (calculator, free-shipping rule)
//! ```
//!
//! # Module Structure
//!
//! - [`shipping_zone`] - `ShippingZone` and its unvalidated record form
//! - [`zone_table`] - `ZoneTable`, plus the active / by-country listings
//! - [`destination`] - `Destination` and its unvalidated form
//! - [`resolver`] - best-zone selection
//! - [`calculator`] - pricing and the free-shipping threshold
//! - [`quote`] - `ShippingQuote`
//! - [`error_types`] - `ConfigurationError`, `ShippingError`
//! - [`default_table`] - built-in storefront table

pub mod calculator;
pub mod default_table;
pub mod destination;
pub mod error_types;
pub mod quote;
pub mod resolver;
pub mod shipping_zone;
pub mod zone_table;

// =============================================================================
// Re-exports
// =============================================================================

pub use calculator::{
    calculate_shipping, free_shipping_remaining, qualifies_for_free_shipping, quote_shipping,
};
pub use default_table::storefront_zone_records;
pub use destination::{Destination, UnvalidatedDestination};
pub use error_types::{ConfigurationError, ShippingError};
pub use quote::ShippingQuote;
pub use resolver::{Specificity, ZoneMatch, match_zone, resolve_match, resolve_zone};
pub use shipping_zone::{ShippingZone, UnvalidatedShippingZone};
pub use zone_table::ZoneTable;
