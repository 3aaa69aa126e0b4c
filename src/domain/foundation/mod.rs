//! Foundation value objects shared across the domain.

mod appointment_status;
mod consultation;
mod errors;
mod ids;
mod weekday;

pub use appointment_status::AppointmentStatus;
pub use consultation::{ConsultationType, GROUP_CAPACITY};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AppointmentId, CounselorId};
pub use weekday::Weekday;
