//! Shipping cost calculation
//!
//! # Functions
//!
//! - [`qualifies_for_free_shipping`] - threshold test for a single zone
//! - [`free_shipping_remaining`] - how much more the cart needs for free shipping
//! - [`quote_shipping`] - resolve a zone and price it, from validated input
//! - [`calculate_shipping`] - the same from raw checkout input, validating first
//!
//! # Examples
//!
//! ```
//! use shipping_zones::simple_types::MinorUnits;
//! use shipping_zones::zone::{UnvalidatedDestination, ZoneTable, calculate_shipping};
//!
//! let table = ZoneTable::storefront_default().unwrap();
//!
//! let quote = calculate_shipping(&table, &UnvalidatedDestination::for_country("MX"), 50000).unwrap();
//! assert_eq!(quote.cost(), MinorUnits::new(15000));
//! assert!(!quote.is_free());
//!
//! let quote = calculate_shipping(&table, &UnvalidatedDestination::for_country("MX"), 150000).unwrap();
//! assert_eq!(quote.cost(), MinorUnits::ZERO);
//! assert!(quote.is_free());
//!
//! assert!(calculate_shipping(&table, &UnvalidatedDestination::for_country("MX"), -1).is_err());
//! ```

use crate::simple_types::{MinorUnits, OrderTotal};

use super::destination::{Destination, UnvalidatedDestination};
use super::error_types::ShippingError;
use super::quote::ShippingQuote;
use super::resolver::resolve_match;
use super::shipping_zone::ShippingZone;
use super::zone_table::ZoneTable;

/// Whether `order_total` reaches the zone's free-shipping threshold
///
/// A zone without a threshold never ships free. The comparison is inclusive.
#[must_use]
pub fn qualifies_for_free_shipping(zone: &ShippingZone, order_total: OrderTotal) -> bool {
    zone.free_shipping_threshold()
        .is_some_and(|threshold| order_total.as_minor_units() >= threshold)
}

/// Amount still missing before shipping becomes free
///
/// `None` when the zone has no threshold, zero once it is reached.
#[must_use]
pub fn free_shipping_remaining(zone: &ShippingZone, order_total: OrderTotal) -> Option<MinorUnits> {
    zone.free_shipping_threshold()
        .map(|threshold| threshold.saturating_sub(order_total.as_minor_units()))
}

/// Resolves the zone for `destination` and prices it for `order_total`
///
/// Pure: the same table, destination and total always produce the same quote.
#[must_use]
pub fn quote_shipping(
    table: &ZoneTable,
    destination: &Destination,
    order_total: OrderTotal,
) -> ShippingQuote {
    let Some(matched) = resolve_match(table, destination) else {
        return ShippingQuote::unserviceable();
    };
    let zone = matched.zone();

    let is_free = qualifies_for_free_shipping(zone, order_total);
    let cost = if is_free {
        MinorUnits::ZERO
    } else {
        zone.shipping_cost()
    };

    ShippingQuote::new(cost, zone.clone(), is_free, matched.specificity())
}

/// Validates raw checkout input, then quotes it
///
/// # Errors
///
/// Returns [`ShippingError::InvalidInput`] for a negative `order_total` or a
/// destination without a valid country. No zone is resolved in that case.
pub fn calculate_shipping(
    table: &ZoneTable,
    destination: &UnvalidatedDestination,
    order_total: i64,
) -> Result<ShippingQuote, ShippingError> {
    let order_total = OrderTotal::create("orderTotal", order_total)?;
    let destination = destination.validate()?;
    Ok(quote_shipping(table, &destination, order_total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::UnvalidatedShippingZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn threshold_zone() -> ShippingZone {
        UnvalidatedShippingZone {
            id: "us-california".to_string(),
            name: "California".to_string(),
            countries: vec!["US".to_string()],
            states: vec!["CA".to_string(), "California".to_string()],
            shipping_cost: 599,
            free_shipping_threshold: Some(5000),
            estimated_days_min: 2,
            estimated_days_max: 4,
            is_active: true,
            priority: 20,
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[rstest]
    #[case(0, false)]
    #[case(4999, false)]
    #[case(5000, true)]
    #[case(5001, true)]
    fn test_threshold_is_inclusive(
        threshold_zone: ShippingZone,
        #[case] total: u64,
        #[case] expected: bool,
    ) {
        assert_eq!(
            qualifies_for_free_shipping(&threshold_zone, OrderTotal::new(total)),
            expected
        );
    }

    #[rstest]
    #[case(4000, Some(1000))]
    #[case(5000, Some(0))]
    #[case(9000, Some(0))]
    fn test_free_shipping_remaining(
        threshold_zone: ShippingZone,
        #[case] total: u64,
        #[case] expected: Option<u64>,
    ) {
        let remaining = free_shipping_remaining(&threshold_zone, OrderTotal::new(total));

        assert_eq!(remaining.map(|amount| amount.value()), expected);
    }

    #[rstest]
    fn test_zone_without_threshold_never_free() {
        let zone = UnvalidatedShippingZone {
            id: "flat".to_string(),
            name: "Flat".to_string(),
            countries: vec!["CA".to_string()],
            shipping_cost: 1499,
            is_active: true,
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert!(!qualifies_for_free_shipping(&zone, OrderTotal::new(u64::MAX)));
        assert_eq!(free_shipping_remaining(&zone, OrderTotal::new(0)), None);
    }

    #[rstest]
    fn test_invalid_country_fails_before_resolution() {
        let table = ZoneTable::default();

        let result = calculate_shipping(&table, &UnvalidatedDestination::for_country(""), 100);

        assert!(matches!(result, Err(ShippingError::InvalidInput(ref error)) if error.field_name == "country"));
    }
}
