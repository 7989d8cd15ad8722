//! Identifier types

use std::fmt;

use super::constrained_type;
use super::error::ValidationError;

/// Maximum length of a zone identifier
const ZONE_ID_MAX_LENGTH: usize = 64;

/// Unique identifier of a shipping zone
///
/// A non-empty string of at most 64 characters, e.g. `"mx-cdmx"`.
/// Ordering is lexicographic, which the resolver relies on to break
/// priority ties deterministically.
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::ZoneId;
///
/// let zone_id = ZoneId::create("id", "mx-cdmx").unwrap();
/// assert_eq!(zone_id.value(), "mx-cdmx");
///
/// assert!(ZoneId::create("id", "").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoneId(String);

impl ZoneId {
    /// Creates a `ZoneId` from a string
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for blank input or input longer than 64 chars.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, Self, ZONE_ID_MAX_LENGTH, value)
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for ZoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
