//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod availability;
pub mod booking;
mod router;

pub use availability::{availability_routes, AvailabilityHandlers};
pub use booking::{booking_routes, BookingHandlers};
pub use router::app_router;
