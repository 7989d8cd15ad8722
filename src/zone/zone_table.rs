//! Immutable table of shipping zones
//!
//! The table is built once at startup and only read afterwards. Sharing it
//! between request handlers needs nothing more than an `Arc`.

use std::collections::{HashMap, HashSet};

use crate::simple_types::{CountryCode, ZoneId};

use super::error_types::ConfigurationError;
use super::shipping_zone::{ShippingZone, UnvalidatedShippingZone};

/// Ordered, validated collection of [`ShippingZone`] rules
///
/// Table-level invariants, checked by [`ZoneTable::new`]:
///
/// - zone ids are unique
/// - no country is served by two *active* national zones
///
/// # Examples
///
/// ```
/// use shipping_zones::simple_types::CountryCode;
/// use shipping_zones::zone::ZoneTable;
///
/// let table = ZoneTable::storefront_default().unwrap();
/// let mx = CountryCode::create("country", "MX").unwrap();
///
/// let ids: Vec<&str> = table
///     .list_by_country(&mx)
///     .iter()
///     .map(|zone| zone.id().value())
///     .collect();
/// assert_eq!(ids, ["mx-cdmx", "mx-zona-metropolitana", "mx-national"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneTable {
    zones: Vec<ShippingZone>,
}

impl ZoneTable {
    /// Builds a table from validated zones, keeping their order
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::DuplicateZoneId`] when two zones share an id
    /// - [`ConfigurationError::DuplicateNationalZone`] when a country has two
    ///   active national zones
    pub fn new(zones: Vec<ShippingZone>) -> Result<Self, ConfigurationError> {
        check_unique_ids(&zones)
            .and_then(|()| check_single_national_zone(&zones))
            .inspect_err(|error| tracing::warn!(%error, "zone table rejected"))?;

        tracing::debug!(zone_count = zones.len(), "zone table built");
        Ok(Self { zones })
    }

    /// Validates every record, then builds the table
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] encountered, record errors
    /// before table-level ones.
    pub fn from_unvalidated(
        records: Vec<UnvalidatedShippingZone>,
    ) -> Result<Self, ConfigurationError> {
        let zones = records
            .into_iter()
            .map(UnvalidatedShippingZone::validate)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|error| tracing::warn!(%error, "zone record rejected"))?;
        Self::new(zones)
    }

    /// Number of zones, active or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the table holds no zones
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterates over every zone in table order
    pub fn iter(&self) -> impl Iterator<Item = &ShippingZone> {
        self.zones.iter()
    }

    /// Looks a zone up by id, active or not
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ShippingZone> {
        self.zones.iter().find(|zone| zone.id().value() == id)
    }

    /// All active zones, in table order
    #[must_use]
    pub fn list_active(&self) -> Vec<&ShippingZone> {
        self.zones.iter().filter(|zone| zone.is_active()).collect()
    }

    /// Active zones serving `country`, highest priority first
    ///
    /// Equal priorities are ordered by zone id, ascending, so the result is
    /// the same whatever order the zones were loaded in.
    #[must_use]
    pub fn list_by_country(&self, country: &CountryCode) -> Vec<&ShippingZone> {
        let mut candidates: Vec<&ShippingZone> = self
            .zones
            .iter()
            .filter(|zone| zone.is_candidate_for(country))
            .collect();
        candidates.sort_by(|left, right| {
            right
                .priority()
                .cmp(&left.priority())
                .then_with(|| left.id().cmp(right.id()))
        });
        candidates
    }
}

impl<'a> IntoIterator for &'a ZoneTable {
    type Item = &'a ShippingZone;
    type IntoIter = std::slice::Iter<'a, ShippingZone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}

fn check_unique_ids(zones: &[ShippingZone]) -> Result<(), ConfigurationError> {
    let mut seen: HashSet<&ZoneId> = HashSet::with_capacity(zones.len());
    for zone in zones {
        if !seen.insert(zone.id()) {
            return Err(ConfigurationError::DuplicateZoneId(
                zone.id().value().to_string(),
            ));
        }
    }
    Ok(())
}

fn check_single_national_zone(zones: &[ShippingZone]) -> Result<(), ConfigurationError> {
    let mut national_by_country: HashMap<&CountryCode, &ZoneId> = HashMap::new();
    for zone in zones.iter().filter(|zone| zone.is_active() && zone.is_national()) {
        for country in zone.countries() {
            if let Some(first) = national_by_country.insert(country, zone.id()) {
                return Err(ConfigurationError::DuplicateNationalZone {
                    country: country.clone(),
                    first: first.value().to_string(),
                    second: zone.id().value().to_string(),
                });
            }
        }
    }
    Ok(())
}
