//! Input DTOs
//!
//! Types deserialized from zone files and HTTP request bodies. Field names are
//! camelCase, matching the storefront's existing zone data.
//!
//! # Types
//!
//! - [`ShippingZoneDto`] - one zone record
//! - [`ZoneFileDto`] - a `{ "zones": [...] }` zone file document
//! - [`DestinationDto`] - destination fields of a request
//! - [`QuoteRequestDto`] - destination plus order total

use serde::{Deserialize, Serialize};

use crate::simple_types::OrderTotal;
use crate::zone::{Destination, ShippingError, UnvalidatedDestination, UnvalidatedShippingZone};

// =============================================================================
// ShippingZoneDto
// =============================================================================

/// Zone record DTO
///
/// `isActive` and `priority` are required; only the region lists,
/// `description` and `freeShippingThreshold` may be omitted.
///
/// # Examples
///
/// ```
/// use shipping_zones::dto::ShippingZoneDto;
///
/// let json = r#"{
///     "id": "ca-national",
///     "name": "Canadá - Nacional",
///     "countries": ["CA"],
///     "shippingCost": 1499,
///     "freeShippingThreshold": 10000,
///     "estimatedDaysMin": 7,
///     "estimatedDaysMax": 14,
///     "isActive": true,
///     "priority": 10
/// }"#;
///
/// let dto: ShippingZoneDto = serde_json::from_str(json).unwrap();
/// assert!(dto.is_active);
///
/// let zone = dto.to_unvalidated_zone().validate().unwrap();
/// assert!(zone.is_national());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingZoneDto {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO country codes
    pub countries: Vec<String>,
    /// State restriction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    /// City restriction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<String>>,
    /// Postal code restriction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_codes: Option<Vec<String>>,
    /// Cost in minor units
    pub shipping_cost: i64,
    /// Free-shipping threshold in minor units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_shipping_threshold: Option<i64>,
    /// Fastest delivery, in days
    pub estimated_days_min: i64,
    /// Slowest delivery, in days
    pub estimated_days_max: i64,
    /// Whether the zone may be matched
    pub is_active: bool,
    /// Higher wins
    pub priority: i64,
}

impl ShippingZoneDto {
    /// Converts to an [`UnvalidatedShippingZone`]
    ///
    /// Pure conversion; validation happens in the domain.
    #[must_use]
    pub fn to_unvalidated_zone(&self) -> UnvalidatedShippingZone {
        UnvalidatedShippingZone {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            countries: self.countries.clone(),
            states: self.states.clone().unwrap_or_default(),
            cities: self.cities.clone().unwrap_or_default(),
            postal_codes: self.postal_codes.clone().unwrap_or_default(),
            shipping_cost: self.shipping_cost,
            free_shipping_threshold: self.free_shipping_threshold,
            estimated_days_min: self.estimated_days_min,
            estimated_days_max: self.estimated_days_max,
            is_active: self.is_active,
            priority: self.priority,
        }
    }
}

// =============================================================================
// ZoneFileDto
// =============================================================================

/// Zone file document with a `zones` list
///
/// Files may also be a bare list of [`ShippingZoneDto`]; the loader in
/// [`config`](crate::config) accepts both.
///
/// # Examples
///
/// ```
/// use shipping_zones::dto::ZoneFileDto;
///
/// let yaml = "
/// zones:
///   - id: us-national
///     name: USA - Nacional
///     countries: [US]
///     shippingCost: 999
///     estimatedDaysMin: 5
///     estimatedDaysMax: 10
///     isActive: true
///     priority: 10
/// ";
///
/// let file: ZoneFileDto = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(file.into_records().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneFileDto {
    /// Zone records
    pub zones: Vec<ShippingZoneDto>,
}

impl ZoneFileDto {
    /// Converts every record, keeping file order
    #[must_use]
    pub fn into_records(self) -> Vec<UnvalidatedShippingZone> {
        self.zones
            .iter()
            .map(ShippingZoneDto::to_unvalidated_zone)
            .collect()
    }
}

// =============================================================================
// DestinationDto / QuoteRequestDto
// =============================================================================

/// Destination DTO, the body of `POST /shipping/resolve`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDto {
    /// ISO country code
    #[serde(default)]
    pub country: String,
    /// State or region
    #[serde(default)]
    pub state: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// Postal code
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl DestinationDto {
    /// Converts to an [`UnvalidatedDestination`]
    #[must_use]
    pub fn to_unvalidated_destination(&self) -> UnvalidatedDestination {
        UnvalidatedDestination {
            country: self.country.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}

/// Quote request DTO, the body of `POST /shipping/quote`
///
/// # Examples
///
/// ```
/// use shipping_zones::dto::QuoteRequestDto;
///
/// let json = r#"{ "country": "US", "state": "California", "orderTotal": 4000 }"#;
///
/// let request: QuoteRequestDto = serde_json::from_str(json).unwrap();
/// assert_eq!(request.order_total, 4000);
/// assert_eq!(request.destination.state.as_deref(), Some("California"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestDto {
    /// Where the order ships to
    #[serde(flatten)]
    pub destination: DestinationDto,
    /// Cart total in minor units
    pub order_total: i64,
}

impl QuoteRequestDto {
    /// Validates the order total, then the destination
    ///
    /// # Errors
    ///
    /// Returns [`ShippingError::InvalidInput`] for the first invalid field.
    pub fn validate(&self) -> Result<(Destination, OrderTotal), ShippingError> {
        let order_total = OrderTotal::create("orderTotal", self.order_total)?;
        let destination = self.destination.to_unvalidated_destination().validate()?;
        Ok((destination, order_total))
    }
}
