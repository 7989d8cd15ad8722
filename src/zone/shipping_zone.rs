//! Shipping zone rule and its unvalidated input form
//!
//! A [`ShippingZone`] is only ever produced by
//! [`UnvalidatedShippingZone::validate`], so every zone in a table satisfies:
//!
//! - at least one country
//! - `estimated_days_min <= estimated_days_max`
//! - non-negative cost and threshold
//! - region lists, when present, are non-empty

use crate::simple_types::{
    CountryCode, DeliveryEstimate, MinorUnits, PostalCode, Priority, RegionName, ValidationError,
    ZoneId, constrained_type,
};

use super::error_types::ConfigurationError;

const NAME_MAX_LENGTH: usize = 100;
const DESCRIPTION_MAX_LENGTH: usize = 500;

// =============================================================================
// UnvalidatedShippingZone
// =============================================================================

/// A zone record as read from configuration, before validation
///
/// Field names follow the storefront data format. Empty region lists are
/// treated the same as absent ones.
///
/// # Examples
///
/// ```
/// use shipping_zones::zone::UnvalidatedShippingZone;
///
/// let zone = UnvalidatedShippingZone {
///     id: "mx-cdmx".to_string(),
///     name: "Ciudad de México".to_string(),
///     countries: vec!["MX".to_string()],
///     states: vec!["Ciudad de México".to_string(), "CDMX".to_string()],
///     shipping_cost: 8000,
///     free_shipping_threshold: Some(50000),
///     estimated_days_min: 1,
///     estimated_days_max: 3,
///     is_active: true,
///     priority: 20,
///     ..Default::default()
/// }
/// .validate()
/// .unwrap();
///
/// assert_eq!(zone.id().value(), "mx-cdmx");
/// assert!(!zone.is_national());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnvalidatedShippingZone {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description, may be empty
    pub description: String,
    /// ISO country codes
    pub countries: Vec<String>,
    /// States or regions narrowing the zone
    pub states: Vec<String>,
    /// Cities narrowing the zone
    pub cities: Vec<String>,
    /// Postal codes narrowing the zone
    pub postal_codes: Vec<String>,
    /// Cost in minor units
    pub shipping_cost: i64,
    /// Order total at or above which shipping is free
    pub free_shipping_threshold: Option<i64>,
    /// Fastest delivery, in days
    pub estimated_days_min: i64,
    /// Slowest delivery, in days
    pub estimated_days_max: i64,
    /// Inactive zones never match
    pub is_active: bool,
    /// Higher wins
    pub priority: i64,
}

impl UnvalidatedShippingZone {
    /// Validates the record into a [`ShippingZone`]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidZone`] naming the zone and the
    /// first field that failed.
    pub fn validate(self) -> Result<ShippingZone, ConfigurationError> {
        let zone_id = self.id.clone();
        self.validate_fields()
            .map_err(|source| ConfigurationError::invalid_zone(&zone_id, source))
    }

    fn validate_fields(self) -> Result<ShippingZone, ValidationError> {
        let id = ZoneId::create("id", &self.id)?;
        let name = constrained_type::create_string("name", |name| name, NAME_MAX_LENGTH, &self.name)?;
        let description = constrained_type::create_string_option(
            "description",
            |description| description,
            DESCRIPTION_MAX_LENGTH,
            &self.description,
        )?
        .unwrap_or_default();

        let countries = validate_countries(&self.countries)?;
        let states = validate_regions("states", &self.states)?;
        let cities = validate_regions("cities", &self.cities)?;
        let postal_codes = non_empty(
            self.postal_codes
                .iter()
                .map(|code| PostalCode::create("postalCodes", code))
                .collect::<Result<Vec<_>, _>>()?,
        );

        let shipping_cost = MinorUnits::create("shippingCost", self.shipping_cost)?;
        let free_shipping_threshold = self
            .free_shipping_threshold
            .map(|threshold| MinorUnits::create("freeShippingThreshold", threshold))
            .transpose()?;
        let delivery_estimate =
            DeliveryEstimate::create(self.estimated_days_min, self.estimated_days_max)?;
        let priority = Priority::create("priority", self.priority)?;

        Ok(ShippingZone {
            id,
            name,
            description,
            countries,
            states,
            cities,
            postal_codes,
            shipping_cost,
            free_shipping_threshold,
            delivery_estimate,
            is_active: self.is_active,
            priority,
        })
    }
}

fn validate_countries(countries: &[String]) -> Result<Vec<CountryCode>, ValidationError> {
    let mut codes: Vec<CountryCode> = Vec::with_capacity(countries.len());
    for country in countries {
        let code = CountryCode::create("countries", country)?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    if codes.is_empty() {
        return Err(ValidationError::new(
            "countries",
            "Must contain at least one country",
        ));
    }
    Ok(codes)
}

fn validate_regions(
    field_name: &str,
    regions: &[String],
) -> Result<Option<Vec<RegionName>>, ValidationError> {
    regions
        .iter()
        .map(|region| RegionName::create(field_name, region))
        .collect::<Result<Vec<_>, _>>()
        .map(non_empty)
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() { None } else { Some(values) }
}

// =============================================================================
// ShippingZone
// =============================================================================

/// A validated shipping rule
///
/// Immutable once built. See [`UnvalidatedShippingZone`] for construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShippingZone {
    id: ZoneId,
    name: String,
    description: String,
    countries: Vec<CountryCode>,
    states: Option<Vec<RegionName>>,
    cities: Option<Vec<RegionName>>,
    postal_codes: Option<Vec<PostalCode>>,
    shipping_cost: MinorUnits,
    free_shipping_threshold: Option<MinorUnits>,
    delivery_estimate: DeliveryEstimate,
    is_active: bool,
    priority: Priority,
}

impl ShippingZone {
    /// Returns the zone identifier
    #[must_use]
    pub const fn id(&self) -> &ZoneId {
        &self.id
    }

    /// Returns the display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display description (empty when none was given)
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the countries served, never empty
    #[must_use]
    pub fn countries(&self) -> &[CountryCode] {
        &self.countries
    }

    /// Returns the state restriction, if any
    #[must_use]
    pub fn states(&self) -> Option<&[RegionName]> {
        self.states.as_deref()
    }

    /// Returns the city restriction, if any
    #[must_use]
    pub fn cities(&self) -> Option<&[RegionName]> {
        self.cities.as_deref()
    }

    /// Returns the postal code restriction, if any
    #[must_use]
    pub fn postal_codes(&self) -> Option<&[PostalCode]> {
        self.postal_codes.as_deref()
    }

    /// Returns the shipping cost charged below the threshold
    #[must_use]
    pub const fn shipping_cost(&self) -> MinorUnits {
        self.shipping_cost
    }

    /// Returns the free-shipping threshold, if any
    #[must_use]
    pub const fn free_shipping_threshold(&self) -> Option<MinorUnits> {
        self.free_shipping_threshold
    }

    /// Returns the delivery window
    #[must_use]
    pub const fn delivery_estimate(&self) -> DeliveryEstimate {
        self.delivery_estimate
    }

    /// Returns whether the zone can be matched at all
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the zone priority
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// A national zone has no state, city or postal code restriction
    #[must_use]
    pub const fn is_national(&self) -> bool {
        self.states.is_none() && self.cities.is_none() && self.postal_codes.is_none()
    }

    /// Whether `country` is one of the zone's countries
    #[must_use]
    pub fn serves_country(&self, country: &CountryCode) -> bool {
        self.countries.contains(country)
    }

    /// Whether the zone is active and serves `country`
    #[must_use]
    pub fn is_candidate_for(&self, country: &CountryCode) -> bool {
        self.is_active && self.serves_country(country)
    }

    /// Whether `state` is listed in the zone's states, ignoring case
    #[must_use]
    pub fn lists_state(&self, state: &RegionName) -> bool {
        self.states
            .as_ref()
            .is_some_and(|states| states.iter().any(|listed| listed.matches(state)))
    }

    /// Whether `city` is listed in the zone's cities, ignoring case
    #[must_use]
    pub fn lists_city(&self, city: &RegionName) -> bool {
        self.cities
            .as_ref()
            .is_some_and(|cities| cities.iter().any(|listed| listed.matches(city)))
    }

    /// Whether `postal_code` is listed exactly in the zone's postal codes
    #[must_use]
    pub fn lists_postal_code(&self, postal_code: &PostalCode) -> bool {
        self.postal_codes
            .as_ref()
            .is_some_and(|codes| codes.contains(postal_code))
    }
}
