//! HTTP routes for booking endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    available_slots, booked_times, calendar_stats, check_conflicts, check_group_slots,
    BookingHandlers,
};

/// Creates the booking router with all endpoints.
pub fn booking_routes(handlers: BookingHandlers) -> Router {
    Router::new()
        .route("/appointments/available-slots", get(available_slots))
        .route("/appointments/booked-times", get(booked_times))
        .route("/appointments/check-group-slots", get(check_group_slots))
        .route("/appointments/check-conflicts", get(check_conflicts))
        .route("/appointments/calendar-stats", get(calendar_stats))
        .with_state(handlers)
}
