//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AvailabilityStore` - Persisted per-counselor weekly ranges
//! - `BookingReader` - Read-only view of the appointment aggregate
//! - `CounselorDirectory` - Counselor roster lookups

mod availability_store;
mod booking_reader;
mod counselor_directory;

pub use availability_store::AvailabilityStore;
pub use booking_reader::BookingReader;
pub use counselor_directory::{CounselorDirectory, CounselorSummary};
