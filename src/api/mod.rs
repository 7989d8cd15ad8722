//! HTTP API
//!
//! # Routes
//!
//! | Method | Path                                  | Handler                |
//! |--------|---------------------------------------|------------------------|
//! | GET    | `/health`                             | [`health_check`]       |
//! | GET    | `/shipping/zones`                     | [`list_zones`]         |
//! | GET    | `/shipping/zones/{id}`                | [`get_zone`]           |
//! | GET    | `/shipping/countries/{country}/zones` | [`list_country_zones`] |
//! | POST   | `/shipping/quote`                     | [`quote`]              |
//! | POST   | `/shipping/resolve`                   | [`resolve`]            |

pub mod error;
pub mod handlers;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiErrorResponse, FieldError};
pub use handlers::{
    AppState, HealthResponse, get_zone, health_check, list_country_zones, list_zones, quote,
    resolve,
};

/// Builds the application router with request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/shipping/zones", get(list_zones))
        .route("/shipping/zones/{id}", get(get_zone))
        .route(
            "/shipping/countries/{country}/zones",
            get(list_country_zones),
        )
        .route("/shipping/quote", post(quote))
        .route("/shipping/resolve", post(resolve))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
