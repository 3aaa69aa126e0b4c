//! HTTP routes for availability endpoints.

use axum::{
    routing::get,
    Router,
};

use super::handlers::{
    counselors_by_availability, delete_availability, get_availability, save_availability,
    AvailabilityHandlers,
};

/// Creates the availability router with all endpoints.
pub fn availability_routes(handlers: AvailabilityHandlers) -> Router {
    Router::new()
        .route(
            "/availability",
            get(get_availability)
                .post(save_availability)
                .delete(delete_availability),
        )
        .route("/counselors/by-availability", get(counselors_by_availability))
        .with_state(handlers)
}
