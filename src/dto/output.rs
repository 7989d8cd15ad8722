//! Output DTOs
//!
//! Types serialized into HTTP responses. Converted from the domain by pure
//! `from_domain` functions.

use serde::{Deserialize, Serialize};

use crate::simple_types::{OrderTotal, RegionName};
use crate::zone::{ShippingQuote, ShippingZone, ZoneMatch, free_shipping_remaining};

// =============================================================================
// ZoneResponseDto
// =============================================================================

/// A zone as presented to API clients
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResponseDto {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// ISO country codes
    pub countries: Vec<String>,
    /// State restriction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    /// City restriction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<String>>,
    /// Postal code restriction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_codes: Option<Vec<String>>,
    /// Cost in minor units
    pub shipping_cost: u64,
    /// Free-shipping threshold in minor units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping_threshold: Option<u64>,
    /// Fastest delivery, in days
    pub estimated_days_min: u32,
    /// Slowest delivery, in days
    pub estimated_days_max: u32,
    /// Whether the zone may be matched
    pub is_active: bool,
    /// Higher wins
    pub priority: i32,
}

impl ZoneResponseDto {
    /// Creates a `ZoneResponseDto` from a [`ShippingZone`]
    #[must_use]
    pub fn from_domain(zone: &ShippingZone) -> Self {
        let region_names = |names: &[RegionName]| -> Vec<String> {
            names.iter().map(|name| name.value().to_string()).collect()
        };

        Self {
            id: zone.id().value().to_string(),
            name: zone.name().to_string(),
            description: zone.description().to_string(),
            countries: zone
                .countries()
                .iter()
                .map(|country| country.value().to_string())
                .collect(),
            states: zone.states().map(region_names),
            cities: zone.cities().map(region_names),
            postal_codes: zone
                .postal_codes()
                .map(|codes| codes.iter().map(|code| code.value().to_string()).collect()),
            shipping_cost: zone.shipping_cost().value(),
            free_shipping_threshold: zone.free_shipping_threshold().map(|amount| amount.value()),
            estimated_days_min: zone.delivery_estimate().min_days(),
            estimated_days_max: zone.delivery_estimate().max_days(),
            is_active: zone.is_active(),
            priority: zone.priority().value(),
        }
    }
}

// =============================================================================
// QuoteResponseDto
// =============================================================================

/// Response of `POST /shipping/quote`
///
/// `serviceable: false` with `cost: 0` means no zone ships to the
/// destination; it is not free shipping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponseDto {
    /// Amount to charge, in minor units
    pub cost: u64,
    /// Whether the free-shipping threshold waived the cost
    pub is_free: bool,
    /// Whether any zone serves the destination
    pub serviceable: bool,
    /// Matched zone
    pub zone: Option<ZoneResponseDto>,
    /// Test that selected the zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specificity: Option<String>,
    /// Fastest delivery of the matched zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_days_min: Option<u32>,
    /// Slowest delivery of the matched zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_days_max: Option<u32>,
    /// Amount still needed for free shipping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping_remaining: Option<u64>,
}

impl QuoteResponseDto {
    /// Creates a `QuoteResponseDto` from a quote and the total it was computed for
    #[must_use]
    pub fn from_domain(quote: &ShippingQuote, order_total: OrderTotal) -> Self {
        let estimate = quote.estimated_days();
        Self {
            cost: quote.cost().value(),
            is_free: quote.is_free(),
            serviceable: quote.is_serviceable(),
            zone: quote.zone().map(ZoneResponseDto::from_domain),
            specificity: quote.specificity().map(|specificity| specificity.to_string()),
            estimated_days_min: estimate.map(|estimate| estimate.min_days()),
            estimated_days_max: estimate.map(|estimate| estimate.max_days()),
            free_shipping_remaining: quote
                .zone()
                .and_then(|zone| free_shipping_remaining(zone, order_total))
                .map(|amount| amount.value()),
        }
    }
}

// =============================================================================
// ResolveResponseDto
// =============================================================================

/// Response of `POST /shipping/resolve`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponseDto {
    /// Matched zone, `null` when the destination is unserviceable
    pub zone: Option<ZoneResponseDto>,
    /// Test that selected the zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specificity: Option<String>,
}

impl ResolveResponseDto {
    /// Creates a `ResolveResponseDto` from an optional match
    #[must_use]
    pub fn from_domain(matched: Option<&ZoneMatch<'_>>) -> Self {
        Self {
            zone: matched.map(|matched| ZoneResponseDto::from_domain(matched.zone())),
            specificity: matched.map(|matched| matched.specificity().to_string()),
        }
    }
}
