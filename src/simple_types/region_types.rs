//! Geographic types: country codes, region names and postal codes
//!
//! Matching rules live on the types themselves:
//!
//! - [`CountryCode`] is upper-cased on construction, so membership is plain equality
//! - [`RegionName`] keeps its display form and a lower-cased key used for
//!   case-insensitive comparison
//! - [`PostalCode`] compares exactly after trimming

use std::fmt;

use super::constrained_type;
use super::error::ValidationError;

const REGION_NAME_MAX_LENGTH: usize = 100;
const POSTAL_CODE_MAX_LENGTH: usize = 20;

// =============================================================================
// CountryCode
// =============================================================================

/// ISO 3166 country code (`"MX"`, `"US"`, `"CA"`, ...)
///
/// Two or three ASCII letters, stored upper-case.
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::CountryCode;
///
/// let country = CountryCode::create("country", " mx ").unwrap();
/// assert_eq!(country.value(), "MX");
///
/// assert!(CountryCode::create("country", "").is_err());
/// assert!(CountryCode::create("country", "M3").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a `CountryCode`
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the input is blank, is not 2 or 3
    /// characters long, or contains anything other than ASCII letters.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(field_name, "Must not be empty"));
        }
        if !(2..=3).contains(&trimmed.len()) || !trimmed.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(ValidationError::new(
                field_name,
                &format!("'{trimmed}': must be a 2 or 3 letter ISO country code"),
            ));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the upper-case code
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

// =============================================================================
// RegionName
// =============================================================================

/// Name of a state or city, compared case-insensitively
///
/// The folded key is computed once with [`str::to_lowercase`], which is
/// Unicode-aware and independent of the process locale.
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::RegionName;
///
/// let zone_state = RegionName::create("states", "Ciudad de México").unwrap();
/// let requested = RegionName::create("state", "CIUDAD DE MÉXICO").unwrap();
///
/// assert!(zone_state.matches(&requested));
/// assert_eq!(zone_state.value(), "Ciudad de México");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegionName {
    display: String,
    folded: String,
}

impl RegionName {
    /// Creates a `RegionName`
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for blank input or input longer than 100 chars.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, Self::from_trimmed, REGION_NAME_MAX_LENGTH, value)
    }

    /// Creates an optional `RegionName`; blank input yields `None`
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for input longer than 100 chars.
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ValidationError> {
        constrained_type::create_string_option(
            field_name,
            Self::from_trimmed,
            REGION_NAME_MAX_LENGTH,
            value,
        )
    }

    fn from_trimmed(display: String) -> Self {
        let folded = display.to_lowercase();
        Self { display, folded }
    }

    /// Returns the name as it was written
    #[must_use]
    pub fn value(&self) -> &str {
        &self.display
    }

    /// Returns the lower-cased comparison key
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Case-insensitive equality
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.display)
    }
}

// =============================================================================
// PostalCode
// =============================================================================

/// Postal code, compared exactly (after trimming)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Creates a `PostalCode`
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for blank input or input longer than 20 chars.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, Self, POSTAL_CODE_MAX_LENGTH, value)
    }

    /// Creates an optional `PostalCode`; blank input yields `None`
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for input longer than 20 chars.
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ValidationError> {
        constrained_type::create_string_option(field_name, Self, POSTAL_CODE_MAX_LENGTH, value)
    }

    /// Returns the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("MX", "MX")]
    #[case("us", "US")]
    #[case(" ca ", "CA")]
    #[case("usa", "USA")]
    fn test_country_code_normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(CountryCode::create("country", input).unwrap().value(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("M")]
    #[case("MEXI")]
    #[case("M1")]
    #[case("É S")]
    fn test_country_code_rejects(#[case] input: &str) {
        assert!(CountryCode::create("country", input).is_err());
    }

    #[rstest]
    #[case("California", "california", true)]
    #[case("CA", "ca", true)]
    #[case("Querétaro", "QUERÉTARO", true)]
    #[case("Oregon", "Oregón", false)]
    fn test_region_name_matches(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
        let left = RegionName::create("states", left).unwrap();
        let right = RegionName::create("state", right).unwrap();

        assert_eq!(left.matches(&right), expected);
    }

    #[rstest]
    fn test_region_name_option_blank_is_none() {
        assert_eq!(RegionName::create_option("state", "  ").unwrap(), None);
    }

    #[rstest]
    fn test_postal_code_is_exact() {
        let zone_code = PostalCode::create("postalCodes", "06600").unwrap();
        let requested = PostalCode::create("postalCode", " 06600 ").unwrap();
        let other = PostalCode::create("postalCode", "6600").unwrap();

        assert_eq!(zone_code, requested);
        assert_ne!(zone_code, other);
    }
}
