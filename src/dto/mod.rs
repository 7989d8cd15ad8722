//! DTO module
//!
//! Serializable mirrors of the domain types. DTOs hold raw strings and
//! integers; conversion into the domain goes through the `Unvalidated*`
//! types so validation stays in one place.
//!
//! - [`input`] - zone files and request bodies
//! - [`output`] - response bodies

pub mod input;
pub mod output;

pub use input::{DestinationDto, QuoteRequestDto, ShippingZoneDto, ZoneFileDto};
pub use output::{QuoteResponseDto, ResolveResponseDto, ZoneResponseDto};
