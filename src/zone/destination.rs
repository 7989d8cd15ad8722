//! Shipment destination

use crate::simple_types::{CountryCode, PostalCode, RegionName, ValidationError};

/// Destination fields as supplied by a checkout form
///
/// Blank optional fields are treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnvalidatedDestination {
    /// ISO country code, required
    pub country: String,
    /// State or region
    pub state: Option<String>,
    /// City
    pub city: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
}

impl UnvalidatedDestination {
    /// Creates a destination with only a country set
    #[must_use]
    pub fn for_country(country: &str) -> Self {
        Self {
            country: country.to_string(),
            ..Self::default()
        }
    }

    /// Validates into a [`Destination`]
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `country` is blank or not an ISO code,
    /// or when an optional field is too long.
    pub fn validate(&self) -> Result<Destination, ValidationError> {
        let country = CountryCode::create("country", &self.country)?;
        let state = optional(self.state.as_deref(), |value| {
            RegionName::create_option("state", value)
        })?;
        let city = optional(self.city.as_deref(), |value| {
            RegionName::create_option("city", value)
        })?;
        let postal_code = optional(self.postal_code.as_deref(), |value| {
            PostalCode::create_option("postalCode", value)
        })?;

        Ok(Destination {
            country,
            state,
            city,
            postal_code,
        })
    }
}

fn optional<T, F>(value: Option<&str>, create: F) -> Result<Option<T>, ValidationError>
where
    F: FnOnce(&str) -> Result<Option<T>, ValidationError>,
{
    value.map_or(Ok(None), create)
}

/// A validated shipment destination
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::{CountryCode, RegionName};
/// use shipping_zones::zone::Destination;
///
/// let destination = Destination::new(CountryCode::create("country", "US").unwrap())
///     .with_state(RegionName::create("state", "California").unwrap());
///
/// assert_eq!(destination.country().value(), "US");
/// assert_eq!(destination.state().map(RegionName::value), Some("California"));
/// assert!(destination.city().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    country: CountryCode,
    state: Option<RegionName>,
    city: Option<RegionName>,
    postal_code: Option<PostalCode>,
}

impl Destination {
    /// Creates a destination that names only a country
    #[must_use]
    pub const fn new(country: CountryCode) -> Self {
        Self {
            country,
            state: None,
            city: None,
            postal_code: None,
        }
    }

    /// Returns a copy with the state set
    #[must_use]
    pub fn with_state(self, state: RegionName) -> Self {
        Self {
            state: Some(state),
            ..self
        }
    }

    /// Returns a copy with the city set
    #[must_use]
    pub fn with_city(self, city: RegionName) -> Self {
        Self {
            city: Some(city),
            ..self
        }
    }

    /// Returns a copy with the postal code set
    #[must_use]
    pub fn with_postal_code(self, postal_code: PostalCode) -> Self {
        Self {
            postal_code: Some(postal_code),
            ..self
        }
    }

    /// Returns the destination country
    #[must_use]
    pub const fn country(&self) -> &CountryCode {
        &self.country
    }

    /// Returns the state, if supplied
    #[must_use]
    pub const fn state(&self) -> Option<&RegionName> {
        self.state.as_ref()
    }

    /// Returns the city, if supplied
    #[must_use]
    pub const fn city(&self) -> Option<&RegionName> {
        self.city.as_ref()
    }

    /// Returns the postal code, if supplied
    #[must_use]
    pub const fn postal_code(&self) -> Option<&PostalCode> {
        self.postal_code.as_ref()
    }
}
