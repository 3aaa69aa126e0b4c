//! Availability store port.
//!
//! Persists per-counselor, per-weekday merged ranges. Ranges live at rest
//! as human-readable `"H:MM AM - H:MM PM"` strings; the domain parses them
//! defensively on the way back in.
//!
//! # Design
//!
//! - **Row scope**: one (counselor, weekday) pair per write
//! - **Atomicity**: `replace_day` must be atomic for its pair, so a
//!   concurrent add and delete for the same counselor cannot interleave
//!   into a corrupted merged set; cross-counselor edits never contend

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::foundation::{CounselorId, DomainError, Weekday};
use crate::domain::scheduling::TimeRange;

/// Persistence port for counselor weekly availability.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Raw stored range strings for one counselor and weekday.
    ///
    /// Missing availability is an empty list, not an error.
    async fn day_ranges(
        &self,
        counselor: &CounselorId,
        weekday: Weekday,
    ) -> Result<Vec<String>, DomainError>;

    /// All stored range strings for one counselor, keyed by weekday.
    async fn week_ranges(
        &self,
        counselor: &CounselorId,
    ) -> Result<BTreeMap<Weekday, Vec<String>>, DomainError>;

    /// Replaces one day's ranges wholesale with an already-merged set.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn replace_day(
        &self,
        counselor: &CounselorId,
        weekday: Weekday,
        ranges: &[TimeRange],
    ) -> Result<(), DomainError>;

    /// Deletes the stored range with exactly these bounds.
    ///
    /// Returns false when no row matched.
    async fn delete_range(
        &self,
        counselor: &CounselorId,
        weekday: Weekday,
        range: &TimeRange,
    ) -> Result<bool, DomainError>;

    /// Counselors with at least one stored range on the given weekday.
    async fn counselors_available_on(
        &self,
        weekday: Weekday,
    ) -> Result<Vec<CounselorId>, DomainError>;
}
