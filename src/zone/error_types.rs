//! Error types for zone table loading and shipping queries
//!
//! Two families, split by when they can happen:
//!
//! - [`ConfigurationError`]: the zone table is malformed. Raised once, when
//!   the table is built; a built [`ZoneTable`](super::ZoneTable) is trusted.
//! - [`ShippingError`]: a caller passed an invalid destination or order
//!   total. Raised before any zone is resolved.
//!
//! A destination that no zone serves is neither: it yields a quote without a
//! zone.

use thiserror::Error;

use crate::simple_types::{CountryCode, ValidationError};

// =============================================================================
// ConfigurationError
// =============================================================================

/// Malformed zone table
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::ValidationError;
/// use shipping_zones::zone::ConfigurationError;
///
/// let error = ConfigurationError::InvalidZone {
///     zone_id: "mx-national".to_string(),
///     source: ValidationError::new("countries", "Must contain at least one country"),
/// };
/// assert_eq!(
///     error.to_string(),
///     "invalid zone 'mx-national': countries: Must contain at least one country"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A single zone record failed validation
    #[error("invalid zone '{zone_id}': {source}")]
    InvalidZone {
        /// Identifier as written in the record (may itself be the invalid field)
        zone_id: String,
        /// The field-level failure
        source: ValidationError,
    },

    /// Two records share the same identifier
    #[error("duplicate zone id '{0}'")]
    DuplicateZoneId(String),

    /// Two active national zones serve the same country
    #[error("country {country} has more than one active national zone: '{first}' and '{second}'")]
    DuplicateNationalZone {
        /// The country served twice
        country: CountryCode,
        /// Identifier of the zone seen first
        first: String,
        /// Identifier of the zone seen second
        second: String,
    },
}

impl ConfigurationError {
    /// Wraps a field-level failure with the zone it belongs to
    #[must_use]
    pub fn invalid_zone(zone_id: &str, source: ValidationError) -> Self {
        Self::InvalidZone {
            zone_id: zone_id.to_string(),
            source,
        }
    }
}

// =============================================================================
// ShippingError
// =============================================================================

/// Caller contract violation on a shipping query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShippingError {
    /// Negative order total, missing country, or an oversized field
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl ShippingError {
    /// Returns the underlying field error
    #[must_use]
    pub const fn validation_error(&self) -> &ValidationError {
        match self {
            Self::InvalidInput(error) => error,
        }
    }
}
