//! Availability operation handlers.

mod delete_range;
mod find_counselors;
mod get_availability;
mod replace_availability;
mod resolve_slots;

pub use delete_range::{DeleteRangeCommand, DeleteRangeHandler};
pub use find_counselors::{FindCounselorsHandler, FindCounselorsQuery};
pub use get_availability::{GetAvailabilityHandler, GetAvailabilityQuery};
pub use replace_availability::{
    ReplaceAvailabilityCommand, ReplaceAvailabilityHandler, ReplaceAvailabilityResult,
};
pub use resolve_slots::{ResolveSlotsHandler, ResolveSlotsQuery};
