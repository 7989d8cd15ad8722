//! Constrained primitive types used by the shipping domain
//!
//! Each type is a newtype with a smart constructor, so a value that exists is
//! a value that passed validation. Shipping zones and destinations are built
//! only out of these types.
//!
//! # Type Categories
//!
//! - **Identifiers**: `ZoneId`
//! - **Geography**: `CountryCode`, `RegionName`, `PostalCode`
//! - **Money**: `MinorUnits`, `OrderTotal`
//! - **Other**: `Priority`, `DeliveryEstimate`
//!
//! # Examples
//!
//! ```
//! use shipping_zones::simple_types::{CountryCode, OrderTotal, RegionName};
//!
//! let country = CountryCode::create("country", "mx").unwrap();
//! assert_eq!(country.value(), "MX");
//!
//! let state = RegionName::create("state", "CDMX").unwrap();
//! assert_eq!(state.folded(), "cdmx");
//!
//! assert!(OrderTotal::create("orderTotal", -1).is_err());
//! ```

pub mod constrained_type;
mod error;
mod identifier_types;
mod misc_types;
mod money_types;
mod region_types;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::ValidationError;

pub use identifier_types::ZoneId;

pub use region_types::{CountryCode, PostalCode, RegionName};

pub use money_types::{MinorUnits, OrderTotal};

pub use misc_types::{DeliveryEstimate, Priority};
