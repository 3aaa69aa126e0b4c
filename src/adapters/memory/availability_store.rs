//! In-Memory Availability Store Adapter
//!
//! Stores per-counselor weekly ranges in memory, in the same string-at-rest
//! form the postgres adapter uses.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CounselorId, DomainError, Weekday};
use crate::domain::scheduling::TimeRange;
use crate::ports::AvailabilityStore;

/// In-memory availability storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAvailabilityStore {
    rows: Arc<RwLock<HashMap<(CounselorId, Weekday), Vec<String>>>>,
}

impl InMemoryAvailabilityStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw stored row directly (tests use this to plant corrupt rows).
    pub async fn seed_raw(&self, counselor: CounselorId, weekday: Weekday, raw: &str) {
        self.rows
            .write()
            .await
            .entry((counselor, weekday))
            .or_default()
            .push(raw.to_string());
    }

    /// Clear all stored data.
    pub async fn clear(&self) {
        self.rows.write().await.clear();
    }
}

#[async_trait]
impl AvailabilityStore for InMemoryAvailabilityStore {
    async fn day_ranges(
        &self,
        counselor: &CounselorId,
        weekday: Weekday,
    ) -> Result<Vec<String>, DomainError> {
        Ok(self
            .rows
            .read()
            .await
            .get(&(*counselor, weekday))
            .cloned()
            .unwrap_or_default())
    }

    async fn week_ranges(
        &self,
        counselor: &CounselorId,
    ) -> Result<BTreeMap<Weekday, Vec<String>>, DomainError> {
        let rows = self.rows.read().await;
        let mut week = BTreeMap::new();
        for ((id, weekday), ranges) in rows.iter() {
            if id == counselor && !ranges.is_empty() {
                week.insert(*weekday, ranges.clone());
            }
        }
        Ok(week)
    }

    async fn replace_day(
        &self,
        counselor: &CounselorId,
        weekday: Weekday,
        ranges: &[TimeRange],
    ) -> Result<(), DomainError> {
        let mut rows = self.rows.write().await;
        if ranges.is_empty() {
            rows.remove(&(*counselor, weekday));
        } else {
            rows.insert(
                (*counselor, weekday),
                ranges.iter().map(ToString::to_string).collect(),
            );
        }
        Ok(())
    }

    async fn delete_range(
        &self,
        counselor: &CounselorId,
        weekday: Weekday,
        range: &TimeRange,
    ) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        let Some(stored) = rows.get_mut(&(*counselor, weekday)) else {
            return Ok(false);
        };
        let before = stored.len();
        stored.retain(|s| TimeRange::parse_stored(s) != Some(*range));
        let removed = stored.len() != before;
        if stored.is_empty() {
            rows.remove(&(*counselor, weekday));
        }
        Ok(removed)
    }

    async fn counselors_available_on(
        &self,
        weekday: Weekday,
    ) -> Result<Vec<CounselorId>, DomainError> {
        let rows = self.rows.read().await;
        let mut ids: Vec<CounselorId> = rows
            .iter()
            .filter(|((_, day), ranges)| *day == weekday && !ranges.is_empty())
            .map(|((id, _), _)| *id)
            .collect();
        ids.sort();
        ids.dedup();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: &str, end: &str) -> TimeRange {
        TimeRange::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn replace_and_read_roundtrip() {
        let store = InMemoryAvailabilityStore::new();
        let id = CounselorId::new();

        store
            .replace_day(&id, Weekday::Monday, &[r("9:00 AM", "11:00 AM")])
            .await
            .unwrap();

        let stored = store.day_ranges(&id, Weekday::Monday).await.unwrap();
        assert_eq!(stored, vec!["9:00 AM - 11:00 AM".to_string()]);
    }

    #[tokio::test]
    async fn delete_matches_equivalent_spellings() {
        let store = InMemoryAvailabilityStore::new();
        let id = CounselorId::new();
        store.seed_raw(id, Weekday::Monday, "9:00 AM-11:00 AM").await;

        let removed = store
            .delete_range(&id, Weekday::Monday, &r("9:00 AM", "11:00 AM"))
            .await
            .unwrap();
        assert!(removed);
        assert!(store.day_ranges(&id, Weekday::Monday).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn counselors_available_on_filters_by_weekday() {
        let store = InMemoryAvailabilityStore::new();
        let monday_counselor = CounselorId::new();
        let friday_counselor = CounselorId::new();

        store
            .replace_day(&monday_counselor, Weekday::Monday, &[r("9:00 AM", "10:00 AM")])
            .await
            .unwrap();
        store
            .replace_day(&friday_counselor, Weekday::Friday, &[r("9:00 AM", "10:00 AM")])
            .await
            .unwrap();

        let monday = store.counselors_available_on(Weekday::Monday).await.unwrap();
        assert_eq!(monday, vec![monday_counselor]);
    }
}
