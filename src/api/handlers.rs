//! HTTP handlers for the shipping API
//!
//! Handlers are thin: they validate the request DTO, call a pure function of
//! the [`zone`](crate::zone) module against the shared table and convert the
//! result into a response DTO.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use super::error::ApiErrorResponse;
use crate::dto::{
    DestinationDto, QuoteRequestDto, QuoteResponseDto, ResolveResponseDto, ZoneResponseDto,
};
use crate::simple_types::CountryCode;
use crate::zone::{ShippingError, ZoneTable, quote_shipping, resolve_match};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state
///
/// The zone table is read-only once loaded, so handlers share it without
/// locking.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Zone table loaded at startup
    pub zones: Arc<ZoneTable>,
}

impl AppState {
    /// Creates state around a loaded table
    #[must_use]
    pub fn new(zones: ZoneTable) -> Self {
        Self {
            zones: Arc::new(zones),
        }
    }
}

// =============================================================================
// GET /health
// =============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"`
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Number of active zones
    pub active_zones: usize,
}

/// Health check
///
/// ```json
/// { "status": "healthy", "version": "0.1.0", "active_zones": 7 }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        active_zones: state.zones.list_active().len(),
    })
}

// =============================================================================
// Zone listings
// =============================================================================

/// Lists every active zone, in table order
///
/// # Response
///
/// - **200 OK**: array of zones
#[allow(clippy::unused_async)]
pub async fn list_zones(State(state): State<AppState>) -> Json<Vec<ZoneResponseDto>> {
    let zones = state
        .zones
        .list_active()
        .into_iter()
        .map(ZoneResponseDto::from_domain)
        .collect();
    Json(zones)
}

/// Fetches one active zone by id
///
/// # Response
///
/// - **200 OK**: the zone
/// - **404 Not Found**: unknown or inactive id
///
/// # Errors
///
/// Returns [`ApiErrorResponse::not_found`] when no active zone has `id`.
#[allow(clippy::unused_async)]
pub async fn get_zone(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ZoneResponseDto>, ApiErrorResponse> {
    state
        .zones
        .get(&id)
        .filter(|zone| zone.is_active())
        .map(|zone| Json(ZoneResponseDto::from_domain(zone)))
        .ok_or_else(|| ApiErrorResponse::not_found(format!("zone '{id}' not found")))
}

/// Lists active zones serving a country, highest priority first
///
/// # Response
///
/// - **200 OK**: array of zones, possibly empty
/// - **400 Bad Request**: malformed country code
///
/// # Errors
///
/// Returns a validation error when `country` is not a 2 or 3 letter code.
#[allow(clippy::unused_async)]
pub async fn list_country_zones(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<Vec<ZoneResponseDto>>, ApiErrorResponse> {
    let country = CountryCode::create("country", &country)?;
    let zones = state
        .zones
        .list_by_country(&country)
        .into_iter()
        .map(ZoneResponseDto::from_domain)
        .collect();
    Ok(Json(zones))
}

// =============================================================================
// POST /shipping/quote
// =============================================================================

/// Quotes shipping for a destination and order total
///
/// # Request Body
///
/// ```json
/// { "country": "US", "state": "California", "orderTotal": 4000 }
/// ```
///
/// # Response
///
/// - **200 OK**: the quote; `serviceable` is `false` when no zone matched
/// - **400 Bad Request**: negative total or invalid destination
///
/// # Errors
///
/// Returns a validation error naming the first invalid field.
#[allow(clippy::unused_async)]
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequestDto>,
) -> Result<Json<QuoteResponseDto>, ApiErrorResponse> {
    let (destination, order_total) = request.validate()?;
    let quote = quote_shipping(&state.zones, &destination, order_total);

    tracing::info!(
        country = %destination.country(),
        zone = quote.zone().map_or("none", |zone| zone.id().value()),
        cost = %quote.cost(),
        is_free = quote.is_free(),
        "shipping quoted"
    );

    Ok(Json(QuoteResponseDto::from_domain(&quote, order_total)))
}

// =============================================================================
// POST /shipping/resolve
// =============================================================================

/// Resolves the zone serving a destination, without pricing
///
/// # Response
///
/// - **200 OK**: `{ "zone": ..., "specificity": ... }`, `zone` is `null`
///   when unserviceable
/// - **400 Bad Request**: invalid destination
///
/// # Errors
///
/// Returns a validation error naming the first invalid field.
#[allow(clippy::unused_async)]
pub async fn resolve(
    State(state): State<AppState>,
    Json(request): Json<DestinationDto>,
) -> Result<Json<ResolveResponseDto>, ApiErrorResponse> {
    let destination = request
        .to_unvalidated_destination()
        .validate()
        .map_err(ShippingError::from)?;
    let matched = resolve_match(&state.zones, &destination);
    Ok(Json(ResolveResponseDto::from_domain(matched.as_ref())))
}

// =============================================================================
// Tests
// =============================================================================
