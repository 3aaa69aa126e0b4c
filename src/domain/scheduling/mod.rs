//! Availability scheduling domain: time parsing, interval math, slot expansion.
//!
//! Everything in this module is pure. Raw stored strings cross into typed
//! values exclusively through [`TimeOfDay`] and [`TimeRange`] parsing; no
//! other code compares or sorts time strings directly.

mod day;
mod errors;
mod merge;
mod range;
mod slots;
mod time_codec;

pub use day::{AvailabilitySet, DayAvailability};
pub use errors::AvailabilityError;
pub use merge::merge_ranges;
pub use range::TimeRange;
pub use slots::{
    compact_starts, expand_ranges, selectable_times, union_by_start, SlotLabel, SLOT_MINUTES,
};
pub use time_codec::{format_minutes, TimeOfDay};
