//! Shared helpers for integration tests

#![allow(dead_code)]

use shipping_zones::zone::{
    Destination, UnvalidatedDestination, UnvalidatedShippingZone, ZoneTable,
};

/// The built-in storefront table
pub fn storefront() -> ZoneTable {
    ZoneTable::storefront_default().unwrap()
}

/// An active national zone record for `country`
pub fn national_record(id: &str, country: &str, priority: i64) -> UnvalidatedShippingZone {
    UnvalidatedShippingZone {
        id: id.to_string(),
        name: id.to_string(),
        countries: vec![country.to_string()],
        shipping_cost: 1000,
        estimated_days_min: 3,
        estimated_days_max: 7,
        is_active: true,
        priority,
        ..UnvalidatedShippingZone::default()
    }
}

/// An active zone record for `country` restricted to `states`
pub fn state_record(
    id: &str,
    country: &str,
    states: &[&str],
    priority: i64,
) -> UnvalidatedShippingZone {
    UnvalidatedShippingZone {
        states: states.iter().map(ToString::to_string).collect(),
        ..national_record(id, country, priority)
    }
}

/// A raw destination
pub fn raw_destination(
    country: &str,
    state: Option<&str>,
    city: Option<&str>,
    postal_code: Option<&str>,
) -> UnvalidatedDestination {
    UnvalidatedDestination {
        country: country.to_string(),
        state: state.map(ToString::to_string),
        city: city.map(ToString::to_string),
        postal_code: postal_code.map(ToString::to_string),
    }
}

/// A validated destination
pub fn destination(
    country: &str,
    state: Option<&str>,
    city: Option<&str>,
    postal_code: Option<&str>,
) -> Destination {
    raw_destination(country, state, city, postal_code)
        .validate()
        .unwrap()
}
