//! Application router assembly.

use std::time::Duration;

use axum::Router;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::availability::{availability_routes, AvailabilityHandlers};
use super::booking::{booking_routes, BookingHandlers};

/// Builds the full API router with tracing, CORS, and timeout layers.
pub fn app_router(
    availability: AvailabilityHandlers,
    booking: BookingHandlers,
    request_timeout: Duration,
) -> Router {
    let api = Router::new()
        .merge(availability_routes(availability))
        .merge(booking_routes(booking));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
}
