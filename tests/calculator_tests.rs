//! Tests for shipping cost calculation

mod common;

use common::{destination, national_record, raw_destination, storefront};
use rstest::rstest;
use shipping_zones::simple_types::{MinorUnits, OrderTotal};
use shipping_zones::zone::{
    ShippingError, Specificity, UnvalidatedShippingZone, ZoneTable, calculate_shipping,
    free_shipping_remaining, quote_shipping,
};

// =============================================================================
// Storefront scenarios
// =============================================================================

#[rstest]
#[case::mx_below_threshold("MX", None, 50000, "mx-national", 15000, false)]
#[case::mx_above_threshold("MX", None, 150000, "mx-national", 0, true)]
#[case::mx_at_threshold("MX", None, 99900, "mx-national", 0, true)]
#[case::cdmx_threshold("MX", Some("CDMX"), 50000, "mx-cdmx", 0, true)]
#[case::california("US", Some("California"), 4000, "us-california", 599, false)]
#[case::california_free("US", Some("California"), 5000, "us-california", 0, true)]
#[case::west_coast("US", Some("WA"), 5999, "us-west-coast", 699, false)]
#[case::canada_zero_total("CA", None, 0, "ca-national", 1499, false)]
fn test_storefront_quotes(
    #[case] country: &str,
    #[case] state: Option<&str>,
    #[case] order_total: i64,
    #[case] expected_zone: &str,
    #[case] expected_cost: u64,
    #[case] expected_free: bool,
) {
    let table = storefront();

    let quote =
        calculate_shipping(&table, &raw_destination(country, state, None, None), order_total)
            .unwrap();

    assert_eq!(quote.zone().map(|zone| zone.id().value()), Some(expected_zone));
    assert_eq!(quote.cost(), MinorUnits::new(expected_cost));
    assert_eq!(quote.is_free(), expected_free);
    assert!(quote.is_serviceable());
}

#[rstest]
fn test_unserviceable_quote() {
    let table = storefront();

    let quote = calculate_shipping(&table, &raw_destination("FR", None, None, None), 100000).unwrap();

    assert_eq!(quote.cost(), MinorUnits::ZERO);
    assert!(quote.zone().is_none());
    assert!(!quote.is_free());
    assert!(!quote.is_serviceable());
    assert!(quote.specificity().is_none());
    assert!(quote.estimated_days().is_none());
}

#[rstest]
fn test_quote_carries_match_details() {
    let table = storefront();

    let quote = quote_shipping(
        &table,
        &destination("US", Some("Nevada"), None, None),
        OrderTotal::new(1000),
    );

    assert_eq!(quote.specificity(), Some(Specificity::State));
    let estimate = quote.estimated_days().unwrap();
    assert_eq!((estimate.min_days(), estimate.max_days()), (3, 6));
}

// =============================================================================
// Thresholds
// =============================================================================

#[rstest]
#[case(0)]
#[case(10_000_000)]
fn test_zone_without_threshold_never_free(#[case] total: u64) {
    let table = ZoneTable::from_unvalidated(vec![national_record("mx-national", "MX", 10)]).unwrap();

    let quote = quote_shipping(
        &table,
        &destination("MX", None, None, None),
        OrderTotal::new(total),
    );

    assert_eq!(quote.cost(), MinorUnits::new(1000));
    assert!(!quote.is_free());
}

#[rstest]
fn test_zero_threshold_always_free() {
    let table = ZoneTable::from_unvalidated(vec![UnvalidatedShippingZone {
        free_shipping_threshold: Some(0),
        ..national_record("mx-promo", "MX", 10)
    }])
    .unwrap();

    let quote = quote_shipping(&table, &destination("MX", None, None, None), OrderTotal::new(0));

    assert!(quote.is_free());
    assert_eq!(quote.cost(), MinorUnits::ZERO);
}

#[rstest]
#[case(4000, Some(1000))]
#[case(5000, Some(0))]
#[case(9000, Some(0))]
fn test_free_shipping_remaining(#[case] total: u64, #[case] expected: Option<u64>) {
    let table = storefront();
    let zone = table.get("us-california").unwrap();

    assert_eq!(
        free_shipping_remaining(zone, OrderTotal::new(total)),
        expected.map(MinorUnits::new)
    );
}

#[rstest]
fn test_free_shipping_remaining_without_threshold() {
    let table = ZoneTable::from_unvalidated(vec![national_record("mx-national", "MX", 10)]).unwrap();
    let zone = table.get("mx-national").unwrap();

    assert_eq!(free_shipping_remaining(zone, OrderTotal::new(10)), None);
}

// =============================================================================
// Invalid input
// =============================================================================

#[rstest]
#[case::negative_total(raw_destination("MX", None, None, None), -1, "orderTotal")]
#[case::blank_country(raw_destination("  ", None, None, None), 1000, "country")]
#[case::bad_country(raw_destination("Mexico", None, None, None), 1000, "country")]
#[case::total_checked_first(raw_destination("", None, None, None), -1, "orderTotal")]
fn test_invalid_input_rejected(
    #[case] target: shipping_zones::zone::UnvalidatedDestination,
    #[case] order_total: i64,
    #[case] field: &str,
) {
    let table = storefront();

    let error = calculate_shipping(&table, &target, order_total).unwrap_err();

    assert!(matches!(error, ShippingError::InvalidInput(_)));
    assert_eq!(error.validation_error().field_name, field);
}

#[rstest]
fn test_blank_optional_fields_are_absent() {
    let table = storefront();

    let quote = calculate_shipping(
        &table,
        &raw_destination("US", Some("   "), Some(""), Some(" ")),
        100,
    )
    .unwrap();

    assert_eq!(quote.zone().map(|zone| zone.id().value()), Some("us-national"));
}
