//! Tagged slot-query configuration.
//!
//! The optional counselor filter and the exact/overlap time modes are an
//! explicit enum pair rather than loose flags, so resolver behavior per
//! combination stays enumerable and testable.

use crate::domain::foundation::CounselorId;
use crate::domain::scheduling::{SlotLabel, TimeRange};

/// Which counselor's availability a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounselorFilter {
    /// One counselor's slots.
    Specific(CounselorId),
    /// Union of every counselor's slots ("no preference").
    Any,
}

/// How a query's time constraint admits slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeMatch {
    /// Slot bounds must equal the requested range exactly.
    Exact(TimeRange),
    /// Slot must intersect the requested window (half-open overlap test).
    Overlap(TimeRange),
    /// No time constraint.
    Unrestricted,
}

impl TimeMatch {
    /// Whether a slot satisfies this constraint.
    ///
    /// Overlap keeps a slot iff `slot.start < window.end` and
    /// `slot.end > window.start`; intersection, not containment.
    pub fn admits(&self, slot: &SlotLabel) -> bool {
        match self {
            TimeMatch::Exact(range) => {
                slot.start() == range.start()
                    && slot.end_minutes() == range.end().minutes() as u32
            }
            TimeMatch::Overlap(window) => {
                (slot.start().minutes() as u32) < window.end().minutes() as u32
                    && slot.end_minutes() > window.start().minutes() as u32
            }
            TimeMatch::Unrestricted => true,
        }
    }
}

/// A complete slot-resolution query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotQuery {
    pub counselor: CounselorFilter,
    pub time_match: TimeMatch,
}

impl SlotQuery {
    /// Query for one counselor with no time constraint.
    pub fn for_counselor(id: CounselorId) -> Self {
        Self {
            counselor: CounselorFilter::Specific(id),
            time_match: TimeMatch::Unrestricted,
        }
    }

    /// Query across all counselors with no time constraint.
    pub fn any_counselor() -> Self {
        Self {
            counselor: CounselorFilter::Any,
            time_match: TimeMatch::Unrestricted,
        }
    }

    /// Replaces the time constraint.
    pub fn with_time_match(mut self, time_match: TimeMatch) -> Self {
        self.time_match = time_match;
        self
    }
}
