//! PostgreSQL adapters - port implementations backed by sqlx.

mod appointment_reader;
mod availability_repository;
mod counselor_directory;

pub use appointment_reader::PostgresAppointmentReader;
pub use availability_repository::PostgresAvailabilityStore;
pub use counselor_directory::PostgresCounselorDirectory;
