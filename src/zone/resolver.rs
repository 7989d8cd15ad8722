//! Zone resolution: pick the single best zone for a destination
//!
//! # Algorithm
//!
//! 1. Keep active zones serving the destination country.
//! 2. Order them by priority, highest first (ties by id, ascending).
//! 3. Test each zone in this order: postal code (exact), city
//!    (case-insensitive), state (case-insensitive), national (no
//!    restriction at all). The first test that passes is the zone's
//!    [`Specificity`].
//! 4. Return the highest-priority matching zone. Among matching zones of
//!    equal priority the more specific match wins, then the smaller id.
//!
//! National zones match unconditionally, so a country with a national zone
//! always resolves. The walk already ranks them, so there is no separate
//! fallback pass for national zones after it.
//! A restricted zone never matches a destination that leaves the restricted
//! field out: a zone listing states does not match a destination without a
//! state.
//!
//! # Examples
//!
//! ```
//! use shipping_zones::zone::{Specificity, UnvalidatedDestination, ZoneTable, resolve_match};
//!
//! let table = ZoneTable::storefront_default().unwrap();
//! let destination = UnvalidatedDestination {
//!     country: "MX".to_string(),
//!     state: Some("cdmx".to_string()),
//!     ..Default::default()
//! }
//! .validate()
//! .unwrap();
//!
//! let matched = resolve_match(&table, &destination).unwrap();
//! assert_eq!(matched.zone().id().value(), "mx-cdmx");
//! assert_eq!(matched.specificity(), Specificity::State);
//! ```

use std::cmp::Reverse;
use std::fmt;

use super::destination::Destination;
use super::shipping_zone::ShippingZone;
use super::zone_table::ZoneTable;

// =============================================================================
// Specificity
// =============================================================================

/// Which test selected a zone
///
/// Ordered from most to least specific.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
    /// The destination postal code is listed by the zone
    PostalCode,
    /// The destination city is listed by the zone
    City,
    /// The destination state is listed by the zone
    State,
    /// The zone has no regional restriction
    National,
}

impl Specificity {
    /// Stable machine-readable name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PostalCode => "postal_code",
            Self::City => "city",
            Self::State => "state",
            Self::National => "national",
        }
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// =============================================================================
// ZoneMatch
// =============================================================================

/// A resolved zone together with the test that selected it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneMatch<'a> {
    zone: &'a ShippingZone,
    specificity: Specificity,
}

impl<'a> ZoneMatch<'a> {
    /// Returns the matched zone
    #[must_use]
    pub const fn zone(&self) -> &'a ShippingZone {
        self.zone
    }

    /// Returns the test that selected the zone
    #[must_use]
    pub const fn specificity(&self) -> Specificity {
        self.specificity
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Tests a single zone against a destination
///
/// Returns the first successful test in precedence order, or `None`. The
/// zone's country and active flag are not checked here.
#[must_use]
pub fn match_zone(zone: &ShippingZone, destination: &Destination) -> Option<Specificity> {
    if destination
        .postal_code()
        .is_some_and(|postal_code| zone.lists_postal_code(postal_code))
    {
        Some(Specificity::PostalCode)
    } else if destination.city().is_some_and(|city| zone.lists_city(city)) {
        Some(Specificity::City)
    } else if destination.state().is_some_and(|state| zone.lists_state(state)) {
        Some(Specificity::State)
    } else if zone.is_national() {
        Some(Specificity::National)
    } else {
        None
    }
}

/// Resolves the best zone for `destination`, with the reason it was chosen
///
/// Returns `None` when no active zone serves the destination; callers should
/// present that as "shipping unavailable".
#[must_use]
pub fn resolve_match<'a>(table: &'a ZoneTable, destination: &Destination) -> Option<ZoneMatch<'a>> {
    let candidates = table.list_by_country(destination.country());
    if candidates.is_empty() {
        tracing::debug!(country = %destination.country(), "no active zone serves country");
        return None;
    }

    // Candidates are sorted by priority then id; min_by_key keeps the first
    // of equal keys, so only specificity needs ranking here.
    let resolved = candidates
        .iter()
        .copied()
        .filter_map(|zone| {
            match_zone(zone, destination).map(|specificity| ZoneMatch { zone, specificity })
        })
        .min_by_key(|matched| (Reverse(matched.zone.priority()), matched.specificity));

    match &resolved {
        Some(matched) => tracing::debug!(
            country = %destination.country(),
            zone_id = %matched.zone.id(),
            specificity = %matched.specificity,
            "zone resolved"
        ),
        None => tracing::debug!(
            country = %destination.country(),
            candidates = candidates.len(),
            "no zone matches destination"
        ),
    }
    resolved
}

/// Resolves the best zone for `destination`
///
/// Same as [`resolve_match`] without the specificity.
#[must_use]
pub fn resolve_zone<'a>(table: &'a ZoneTable, destination: &Destination) -> Option<&'a ShippingZone> {
    resolve_match(table, destination).map(|matched| matched.zone)
}
