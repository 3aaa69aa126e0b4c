//! ResolveSlotsHandler - Query handler turning stored ranges into bookable slots.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::domain::booking::{CounselorFilter, SlotQuery};
use crate::domain::foundation::{CounselorId, Weekday};
use crate::domain::scheduling::{
    expand_ranges, union_by_start, AvailabilityError, DayAvailability, SlotLabel, TimeRange,
};
use crate::ports::AvailabilityStore;

/// Query resolving the bookable half-hour slots for one date.
#[derive(Debug, Clone)]
pub struct ResolveSlotsQuery {
    pub date: NaiveDate,
    pub query: SlotQuery,
}

/// Handler expanding per-counselor availability into slot labels.
pub struct ResolveSlotsHandler {
    store: Arc<dyn AvailabilityStore>,
}

impl ResolveSlotsHandler {
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }

    /// Resolves the date to a weekday and expands the matching counselors'
    /// merged ranges into deduplicated slots.
    ///
    /// Weekend dates resolve to an empty set: counseling is simply not
    /// offered, which is not an error. In "any counselor" mode the
    /// per-counselor reads fan out concurrently; the union is a set, so
    /// read ordering does not matter.
    pub async fn handle(
        &self,
        query: ResolveSlotsQuery,
    ) -> Result<Vec<SlotLabel>, AvailabilityError> {
        let Some(weekday) = Weekday::from_date(query.date) else {
            return Ok(Vec::new());
        };

        let slots = match query.query.counselor {
            CounselorFilter::Specific(id) => self.day_slots(&id, weekday).await?,
            CounselorFilter::Any => {
                let ids = self.store.counselors_available_on(weekday).await?;
                debug!(day = %weekday, counselors = ids.len(), "fanning out availability reads");
                let slot_sets =
                    try_join_all(ids.iter().map(|id| self.day_slots(id, weekday))).await?;
                union_by_start(slot_sets)
            }
        };

        let time_match = query.query.time_match;
        Ok(slots.into_iter().filter(|s| time_match.admits(s)).collect())
    }

    /// One counselor's slots for one weekday.
    ///
    /// Stored rows are parsed defensively: a corrupt row is skipped with a
    /// warning rather than blanking the day. The surviving ranges are
    /// re-merged before expansion so even fragmented historical data
    /// expands cleanly.
    async fn day_slots(
        &self,
        counselor: &CounselorId,
        weekday: Weekday,
    ) -> Result<Vec<SlotLabel>, AvailabilityError> {
        let raw_rows = self.store.day_ranges(counselor, weekday).await?;

        let mut ranges = Vec::with_capacity(raw_rows.len());
        for raw in &raw_rows {
            match TimeRange::parse_stored(raw) {
                Some(range) => ranges.push(range),
                None => warn!(counselor = %counselor, day = %weekday, raw, "skipping unparseable stored range"),
            }
        }

        let day = DayAvailability::from_ranges(weekday, ranges);
        Ok(expand_ranges(day.ranges()))
    }
}
