//! Operation handlers, grouped by module.

pub mod availability;
pub mod booking;

pub use availability::{
    DeleteRangeCommand, DeleteRangeHandler, FindCounselorsHandler, FindCounselorsQuery,
    GetAvailabilityHandler, GetAvailabilityQuery, ReplaceAvailabilityCommand,
    ReplaceAvailabilityHandler, ReplaceAvailabilityResult, ResolveSlotsHandler, ResolveSlotsQuery,
};
pub use booking::{
    AvailableSlots, AvailableSlotsHandler, AvailableSlotsQuery, BookedTimesHandler,
    BookedTimesQuery, CalendarStatsCache, CalendarStatsHandler, CalendarStatsQuery,
    CheckConflictsHandler, CheckConflictsQuery, CheckGroupSlotsHandler, CheckGroupSlotsQuery,
};
