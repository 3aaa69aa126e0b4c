//! FindCounselorsHandler - Query handler for counselors matching a time query.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::try_join_all;
use tracing::warn;

use crate::domain::booking::TimeMatch;
use crate::domain::foundation::Weekday;
use crate::domain::scheduling::{expand_ranges, AvailabilityError, DayAvailability, TimeRange};
use crate::ports::{AvailabilityStore, CounselorDirectory, CounselorSummary};

/// Query for counselors with at least one slot satisfying a time constraint.
///
/// The weekday comes from `day` when given, otherwise from `date`; a
/// weekend date yields an empty result.
#[derive(Debug, Clone)]
pub struct FindCounselorsQuery {
    pub date: Option<NaiveDate>,
    pub day: Option<Weekday>,
    pub time_match: TimeMatch,
}

/// Handler joining availability rows with the counselor roster.
pub struct FindCounselorsHandler {
    store: Arc<dyn AvailabilityStore>,
    directory: Arc<dyn CounselorDirectory>,
}

impl FindCounselorsHandler {
    pub fn new(store: Arc<dyn AvailabilityStore>, directory: Arc<dyn CounselorDirectory>) -> Self {
        Self { store, directory }
    }

    pub async fn handle(
        &self,
        query: FindCounselorsQuery,
    ) -> Result<Vec<CounselorSummary>, AvailabilityError> {
        let weekday = match query.day.or_else(|| query.date.and_then(Weekday::from_date)) {
            Some(weekday) => weekday,
            None => return Ok(Vec::new()),
        };

        let ids = self.store.counselors_available_on(weekday).await?;
        let day_rows = try_join_all(
            ids.iter()
                .map(|id| self.store.day_ranges(id, weekday)),
        )
        .await?;

        let mut matched = Vec::new();
        for (id, raw_rows) in ids.iter().zip(day_rows) {
            let ranges: Vec<TimeRange> = raw_rows
                .iter()
                .filter_map(|raw| {
                    let parsed = TimeRange::parse_stored(raw);
                    if parsed.is_none() {
                        warn!(counselor = %id, day = %weekday, raw, "skipping unparseable stored range");
                    }
                    parsed
                })
                .collect();

            let day = DayAvailability::from_ranges(weekday, ranges);
            let admits_any = expand_ranges(day.ranges())
                .iter()
                .any(|slot| query.time_match.admits(slot));
            if !admits_any {
                continue;
            }

            match self.directory.find(id).await? {
                Some(summary) => matched.push(summary),
                // Availability without a roster entry is an orphan row.
                None => warn!(counselor = %id, "availability row for unknown counselor"),
            }
        }

        matched.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAvailabilityStore, InMemoryCounselorDirectory};

    fn r(start: &str, end: &str) -> TimeRange {
        TimeRange::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    async fn fixture() -> (
        Arc<InMemoryAvailabilityStore>,
        Arc<InMemoryCounselorDirectory>,
        crate::domain::foundation::CounselorId,
        crate::domain::foundation::CounselorId,
    ) {
        let store = Arc::new(InMemoryAvailabilityStore::new());
        let directory = Arc::new(InMemoryCounselorDirectory::new());

        let morning = directory.add("Dr. Amal").await;
        let afternoon = directory.add("Dr. Reyes").await;
        store
            .replace_day(&morning, Weekday::Monday, &[r("9:00 AM", "11:00 AM")])
            .await
            .unwrap();
        store
            .replace_day(&afternoon, Weekday::Monday, &[r("2:00 PM", "4:00 PM")])
            .await
            .unwrap();

        (store, directory, morning, afternoon)
    }

    #[tokio::test]
    async fn unrestricted_query_lists_everyone_available_that_day() {
        let (store, directory, _, _) = fixture().await;
        let handler = FindCounselorsHandler::new(store, directory);

        let found = handler
            .handle(FindCounselorsQuery {
                date: None,
                day: Some(Weekday::Monday),
                time_match: TimeMatch::Unrestricted,
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "Dr. Amal");
    }

    #[tokio::test]
    async fn overlap_window_narrows_to_matching_counselors() {
        let (store, directory, morning, _) = fixture().await;
        let handler = FindCounselorsHandler::new(store, directory);

        let found = handler
            .handle(FindCounselorsQuery {
                date: None,
                day: Some(Weekday::Monday),
                time_match: TimeMatch::Overlap(r("9:00 AM", "10:00 AM")),
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, morning);
    }

    #[tokio::test]
    async fn exact_slot_match_requires_identical_bounds() {
        let (store, directory, _, afternoon) = fixture().await;
        let handler = FindCounselorsHandler::new(store, directory);

        let found = handler
            .handle(FindCounselorsQuery {
                date: None,
                day: Some(Weekday::Monday),
                time_match: TimeMatch::Exact(r("2:00 PM", "2:30 PM")),
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, afternoon);
    }

    #[tokio::test]
    async fn weekend_date_yields_no_counselors() {
        let (store, directory, _, _) = fixture().await;
        let handler = FindCounselorsHandler::new(store, directory);

        let found = handler
            .handle(FindCounselorsQuery {
                // 2025-06-08 is a Sunday.
                date: Some(NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()),
                day: None,
                time_match: TimeMatch::Unrestricted,
            })
            .await
            .unwrap();

        assert!(found.is_empty());
    }
}
