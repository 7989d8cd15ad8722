//! Tests for zone table construction and load-time validation

mod common;

use common::{national_record, state_record};
use rstest::rstest;
use shipping_zones::simple_types::CountryCode;
use shipping_zones::zone::{ConfigurationError, UnvalidatedShippingZone, ZoneTable};

// =============================================================================
// Valid tables
// =============================================================================

#[rstest]
fn test_storefront_default_table() {
    let table = ZoneTable::storefront_default().unwrap();

    assert_eq!(table.len(), 7);
    assert!(!table.is_empty());
    assert_eq!(
        table.iter().map(|zone| zone.id().value()).collect::<Vec<_>>(),
        [
            "mx-national",
            "mx-cdmx",
            "mx-zona-metropolitana",
            "us-national",
            "us-california",
            "us-west-coast",
            "ca-national",
        ]
    );
}

#[rstest]
fn test_get_finds_inactive_zones_too() {
    let table = ZoneTable::from_unvalidated(vec![UnvalidatedShippingZone {
        is_active: false,
        ..national_record("mx-old", "MX", 10)
    }])
    .unwrap();

    assert!(table.get("mx-old").is_some_and(|zone| !zone.is_active()));
    assert!(table.get("mx-new").is_none());
}

#[rstest]
fn test_inactive_national_duplicates_are_allowed() {
    let result = ZoneTable::from_unvalidated(vec![
        national_record("mx-national", "MX", 10),
        UnvalidatedShippingZone {
            is_active: false,
            ..national_record("mx-national-legacy", "MX", 5)
        },
    ]);

    assert!(result.is_ok());
}

#[rstest]
fn test_record_normalization() {
    let table = ZoneTable::from_unvalidated(vec![UnvalidatedShippingZone {
        countries: vec![" mx ".to_string(), "MX".to_string()],
        states: Vec::new(),
        ..national_record("mx-national", "MX", 10)
    }])
    .unwrap();
    let zone = table.get("mx-national").unwrap();

    assert_eq!(zone.countries(), [CountryCode::create("country", "MX").unwrap()]);
    assert!(zone.is_national());
    assert!(zone.states().is_none());
}

// =============================================================================
// Rejected tables
// =============================================================================

#[rstest]
fn test_duplicate_ids_rejected() {
    let result = ZoneTable::from_unvalidated(vec![
        national_record("mx-national", "MX", 10),
        state_record("mx-national", "MX", &["CDMX"], 20),
    ]);

    assert_eq!(
        result,
        Err(ConfigurationError::DuplicateZoneId("mx-national".to_string()))
    );
}

#[rstest]
fn test_second_active_national_zone_rejected() {
    let result = ZoneTable::from_unvalidated(vec![
        national_record("mx-national", "MX", 10),
        national_record("mx-nacional", "MX", 20),
    ]);

    assert_eq!(
        result,
        Err(ConfigurationError::DuplicateNationalZone {
            country: CountryCode::create("country", "MX").unwrap(),
            first: "mx-national".to_string(),
            second: "mx-nacional".to_string(),
        })
    );
}

#[rstest]
#[case::empty_countries(UnvalidatedShippingZone { countries: Vec::new(), ..national_record("z", "MX", 0) }, "countries")]
#[case::bad_country(UnvalidatedShippingZone { countries: vec!["Mexico".to_string()], ..national_record("z", "MX", 0) }, "countries")]
#[case::min_over_max(UnvalidatedShippingZone { estimated_days_min: 9, estimated_days_max: 3, ..national_record("z", "MX", 0) }, "estimatedDaysMin")]
#[case::negative_cost(UnvalidatedShippingZone { shipping_cost: -1, ..national_record("z", "MX", 0) }, "shippingCost")]
#[case::negative_threshold(UnvalidatedShippingZone { free_shipping_threshold: Some(-500), ..national_record("z", "MX", 0) }, "freeShippingThreshold")]
#[case::blank_name(UnvalidatedShippingZone { name: "  ".to_string(), ..national_record("z", "MX", 0) }, "name")]
#[case::blank_id(UnvalidatedShippingZone { id: String::new(), ..national_record("z", "MX", 0) }, "id")]
fn test_invalid_record_rejected(#[case] record: UnvalidatedShippingZone, #[case] field: &str) {
    let result = ZoneTable::from_unvalidated(vec![record]);

    match result {
        Err(ConfigurationError::InvalidZone { source, .. }) => {
            assert_eq!(source.field_name, field);
        }
        other => panic!("expected InvalidZone for {field}, got {other:?}"),
    }
}
