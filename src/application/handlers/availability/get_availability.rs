//! GetAvailabilityHandler - Query handler for one counselor's stored week.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::{CounselorId, Weekday};
use crate::domain::scheduling::{AvailabilitySet, AvailabilityError, TimeRange};
use crate::ports::AvailabilityStore;

/// Query for a counselor's full stored availability.
#[derive(Debug, Clone)]
pub struct GetAvailabilityQuery {
    pub counselor_id: CounselorId,
}

/// Handler returning per-day merged range strings.
pub struct GetAvailabilityHandler {
    store: Arc<dyn AvailabilityStore>,
}

impl GetAvailabilityHandler {
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }

    /// Loads the counselor's week into an [`AvailabilitySet`] and renders
    /// each day's merged ranges through the codec, normalizing dash
    /// spacing. Corrupt rows are skipped with a warning; one bad row must
    /// not blank the response.
    pub async fn handle(
        &self,
        query: GetAvailabilityQuery,
    ) -> Result<BTreeMap<Weekday, Vec<String>>, AvailabilityError> {
        let stored = self.store.week_ranges(&query.counselor_id).await?;

        let mut set = AvailabilitySet::new();
        for (weekday, raw_ranges) in stored {
            let mut ranges = Vec::with_capacity(raw_ranges.len());
            for raw in &raw_ranges {
                match TimeRange::parse_stored(raw) {
                    Some(range) => ranges.push(range),
                    None => warn!(
                        counselor = %query.counselor_id,
                        day = %weekday,
                        raw,
                        "skipping unparseable stored availability range"
                    ),
                }
            }
            set.replace_day(weekday, ranges);
        }

        let week = set
            .active_days()
            .filter_map(|weekday| {
                set.day(weekday).map(|day| {
                    let rendered = day.ranges().iter().map(ToString::to_string).collect();
                    (weekday, rendered)
                })
            })
            .collect();
        Ok(week)
    }
}
