//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports. Command handlers (write) and query handlers (read) are kept
//! separate, one operation per file.

pub mod handlers;

pub use handlers::{
    AvailableSlots, AvailableSlotsHandler, AvailableSlotsQuery, BookedTimesHandler,
    BookedTimesQuery, CalendarStatsCache, CalendarStatsHandler, CalendarStatsQuery,
    CheckConflictsHandler, CheckConflictsQuery, CheckGroupSlotsHandler, CheckGroupSlotsQuery,
    DeleteRangeCommand, DeleteRangeHandler, FindCounselorsHandler, FindCounselorsQuery,
    GetAvailabilityHandler, GetAvailabilityQuery, ReplaceAvailabilityCommand,
    ReplaceAvailabilityHandler, ReplaceAvailabilityResult, ResolveSlotsHandler, ResolveSlotsQuery,
};
