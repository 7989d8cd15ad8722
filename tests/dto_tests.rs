//! Tests for zone file and API DTOs

mod common;

use common::storefront;
use rstest::rstest;
use serde_json::json;
use shipping_zones::dto::{
    DestinationDto, QuoteRequestDto, QuoteResponseDto, ResolveResponseDto, ShippingZoneDto,
    ZoneFileDto, ZoneResponseDto,
};
use shipping_zones::simple_types::OrderTotal;
use shipping_zones::zone::{ShippingError, quote_shipping, resolve_match};

// =============================================================================
// Input
// =============================================================================

#[rstest]
fn test_zone_dto_optional_fields() {
    let dto: ShippingZoneDto = serde_json::from_value(json!({
        "id": "us-national",
        "name": "USA - Nacional",
        "countries": ["US"],
        "shippingCost": 999,
        "estimatedDaysMin": 5,
        "estimatedDaysMax": 10,
        "isActive": true,
        "priority": 10
    }))
    .unwrap();

    assert!(dto.description.is_none());
    assert!(dto.states.is_none());
    assert!(dto.cities.is_none());
    assert!(dto.postal_codes.is_none());
    assert!(dto.free_shipping_threshold.is_none());
}

#[rstest]
#[case::is_active("isActive")]
#[case::priority("priority")]
fn test_zone_dto_requires_field(#[case] field: &str) {
    let mut record = json!({
        "id": "us-national",
        "name": "USA - Nacional",
        "countries": ["US"],
        "shippingCost": 999,
        "estimatedDaysMin": 5,
        "estimatedDaysMax": 10,
        "isActive": true,
        "priority": 10
    });
    record.as_object_mut().unwrap().remove(field);

    let error = serde_json::from_value::<ShippingZoneDto>(record).unwrap_err();

    assert_eq!(error.to_string(), format!("missing field `{field}`"));
}

#[rstest]
fn test_zone_dto_to_unvalidated_zone() {
    let dto: ShippingZoneDto = serde_json::from_value(json!({
        "id": "us-california",
        "name": "California",
        "description": "Envío rápido en California",
        "countries": ["US"],
        "states": ["CA", "California"],
        "shippingCost": 599,
        "freeShippingThreshold": 5000,
        "estimatedDaysMin": 2,
        "estimatedDaysMax": 4,
        "isActive": false,
        "priority": 20
    }))
    .unwrap();

    let record = dto.to_unvalidated_zone();

    assert_eq!(record.states, ["CA", "California"]);
    assert!(record.cities.is_empty());
    assert_eq!(record.free_shipping_threshold, Some(5000));
    assert!(!record.is_active);
    assert_eq!(record.priority, 20);
}

#[rstest]
fn test_zone_file_document() {
    let file: ZoneFileDto = serde_json::from_value(json!({ "zones": [
        { "id": "a", "name": "A", "countries": ["MX"], "shippingCost": 1,
          "estimatedDaysMin": 1, "estimatedDaysMax": 2, "isActive": true, "priority": 0 },
        { "id": "b", "name": "B", "countries": ["US"], "shippingCost": 1,
          "estimatedDaysMin": 1, "estimatedDaysMax": 2, "isActive": false, "priority": 5 }
    ]}))
    .unwrap();

    let ids: Vec<String> = file.into_records().into_iter().map(|record| record.id).collect();

    assert_eq!(ids, ["a", "b"]);
}

#[rstest]
fn test_zone_file_missing_required_field() {
    let result: Result<ZoneFileDto, _> =
        serde_json::from_value(json!({ "zones": [{ "id": "a", "countries": ["MX"] }] }));

    assert!(result.is_err());
}

#[rstest]
fn test_quote_request_validate() {
    let request: QuoteRequestDto = serde_json::from_value(json!({
        "country": "us",
        "state": "California",
        "postalCode": "",
        "orderTotal": 4000
    }))
    .unwrap();

    let (destination, order_total) = request.validate().unwrap();

    assert_eq!(destination.country().value(), "US");
    assert!(destination.postal_code().is_none());
    assert_eq!(order_total, OrderTotal::new(4000));
}

#[rstest]
fn test_quote_request_negative_total() {
    let request = QuoteRequestDto {
        destination: DestinationDto {
            country: "MX".to_string(),
            state: None,
            city: None,
            postal_code: None,
        },
        order_total: -5,
    };

    let error = request.validate().unwrap_err();

    assert!(matches!(error, ShippingError::InvalidInput(_)));
    assert_eq!(error.validation_error().field_name, "orderTotal");
}

// =============================================================================
// Output
// =============================================================================

#[rstest]
fn test_zone_response_json() {
    let table = storefront();
    let zone = table.get("us-california").unwrap();

    let json = serde_json::to_value(ZoneResponseDto::from_domain(zone)).unwrap();

    assert_eq!(
        json,
        json!({
            "id": "us-california",
            "name": "California",
            "description": "Envío rápido en California",
            "countries": ["US"],
            "states": ["CA", "California"],
            "shippingCost": 599,
            "freeShippingThreshold": 5000,
            "estimatedDaysMin": 2,
            "estimatedDaysMax": 4,
            "isActive": true,
            "priority": 20
        })
    );
}

#[rstest]
fn test_quote_response_for_served_destination() {
    let table = storefront();
    let (destination, order_total) = QuoteRequestDto {
        destination: DestinationDto {
            country: "US".to_string(),
            state: Some("California".to_string()),
            city: None,
            postal_code: None,
        },
        order_total: 4000,
    }
    .validate()
    .unwrap();
    let quote = quote_shipping(&table, &destination, order_total);

    let response = QuoteResponseDto::from_domain(&quote, order_total);

    assert_eq!(response.cost, 599);
    assert!(!response.is_free);
    assert!(response.serviceable);
    assert_eq!(response.specificity.as_deref(), Some("state"));
    assert_eq!(response.estimated_days_min, Some(2));
    assert_eq!(response.estimated_days_max, Some(4));
    assert_eq!(response.free_shipping_remaining, Some(1000));
}

#[rstest]
fn test_quote_response_for_unserviceable_destination() {
    let table = storefront();
    let (destination, order_total) = QuoteRequestDto {
        destination: DestinationDto {
            country: "FR".to_string(),
            state: None,
            city: None,
            postal_code: None,
        },
        order_total: 4000,
    }
    .validate()
    .unwrap();
    let quote = quote_shipping(&table, &destination, order_total);

    let json = serde_json::to_value(QuoteResponseDto::from_domain(&quote, order_total)).unwrap();

    assert_eq!(
        json,
        json!({ "cost": 0, "isFree": false, "serviceable": false, "zone": null })
    );
}

#[rstest]
fn test_resolve_response() {
    let table = storefront();
    let destination = DestinationDto {
        country: "MX".to_string(),
        state: Some("CDMX".to_string()),
        city: None,
        postal_code: None,
    }
    .to_unvalidated_destination()
    .validate()
    .unwrap();

    let matched = resolve_match(&table, &destination);
    let response = ResolveResponseDto::from_domain(matched.as_ref());

    assert_eq!(response.zone.map(|zone| zone.id), Some("mx-cdmx".to_string()));
    assert_eq!(response.specificity.as_deref(), Some("state"));
}
