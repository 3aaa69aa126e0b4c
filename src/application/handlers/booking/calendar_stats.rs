//! CalendarStatsHandler - Query handler for month-level calendar counts.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::booking::BookingError;
use crate::domain::foundation::CounselorId;
use crate::ports::BookingReader;

/// Query for per-day active appointment counts in one month.
#[derive(Debug, Clone)]
pub struct CalendarStatsQuery {
    pub year: i32,
    pub month: u32,
    pub counselor_id: Option<CounselorId>,
}

type CacheKey = (i32, u32, Option<CounselorId>);

/// Short-TTL memoization for calendar statistics.
///
/// Explicitly constructed and injected into the handler; never a
/// process-wide singleton. The counts feed the display calendar only, so
/// a briefly stale entry is acceptable.
pub struct CalendarStatsCache {
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, (Instant, HashMap<u32, u32>)>>,
}

impl CalendarStatsCache {
    /// Creates a cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    async fn get(&self, key: &CacheKey) -> Option<HashMap<u32, u32>> {
        let entries = self.entries.lock().await;
        let (stored_at, counts) = entries.get(key)?;
        (stored_at.elapsed() < self.ttl).then(|| counts.clone())
    }

    async fn put(&self, key: CacheKey, counts: HashMap<u32, u32>) {
        let mut entries = self.entries.lock().await;
        entries.retain(|_, (stored_at, _)| stored_at.elapsed() < self.ttl);
        entries.insert(key, (Instant::now(), counts));
    }
}

/// Handler loading month counts through the cache.
pub struct CalendarStatsHandler {
    booking: Arc<dyn BookingReader>,
    cache: Arc<CalendarStatsCache>,
}

impl CalendarStatsHandler {
    pub fn new(booking: Arc<dyn BookingReader>, cache: Arc<CalendarStatsCache>) -> Self {
        Self { booking, cache }
    }

    pub async fn handle(
        &self,
        query: CalendarStatsQuery,
    ) -> Result<HashMap<u32, u32>, BookingError> {
        if !(1..=12).contains(&query.month) {
            return Err(BookingError::invalid_query(
                "month",
                format!("{} is not a calendar month", query.month),
            ));
        }

        let key = (query.year, query.month, query.counselor_id);
        if let Some(cached) = self.cache.get(&key).await {
            debug!(year = query.year, month = query.month, "calendar stats cache hit");
            return Ok(cached);
        }

        let counts = self
            .booking
            .counts_by_day(query.year, query.month, query.counselor_id.as_ref())
            .await?;
        self.cache.put(key, counts.clone()).await;
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBookingReader;
    use crate::domain::booking::BookedAppointment;
    use crate::domain::foundation::{AppointmentStatus, ConsultationType};
    use chrono::NaiveDate;

    async fn reader_with_june_bookings() -> Arc<InMemoryBookingReader> {
        let reader = Arc::new(InMemoryBookingReader::new());
        let counselor = CounselorId::new();
        for (day, time) in [(2, "9:00 AM - 9:30 AM"), (2, "10:00 AM - 10:30 AM"), (3, "9:00 AM - 9:30 AM")] {
            reader
                .insert(BookedAppointment {
                    counselor_id: counselor,
                    date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
                    time: time.to_string(),
                    consultation_type: ConsultationType::Individual,
                    status: AppointmentStatus::Approved,
                })
                .await;
        }
        reader
    }

    fn query() -> CalendarStatsQuery {
        CalendarStatsQuery {
            year: 2025,
            month: 6,
            counselor_id: None,
        }
    }

    #[tokio::test]
    async fn counts_group_by_day_of_month() {
        let reader = reader_with_june_bookings().await;
        let cache = Arc::new(CalendarStatsCache::new(Duration::from_secs(60)));
        let handler = CalendarStatsHandler::new(reader, cache);

        let counts = handler.handle(query()).await.unwrap();
        assert_eq!(counts.get(&2), Some(&2));
        assert_eq!(counts.get(&3), Some(&1));
    }

    #[tokio::test]
    async fn cache_serves_repeat_queries_within_ttl() {
        let reader = reader_with_june_bookings().await;
        let cache = Arc::new(CalendarStatsCache::new(Duration::from_secs(60)));
        let handler = CalendarStatsHandler::new(reader.clone(), cache);

        let first = handler.handle(query()).await.unwrap();
        // New data lands after the first read; within the TTL the cached
        // counts still come back.
        reader
            .insert(BookedAppointment {
                counselor_id: CounselorId::new(),
                date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
                time: "9:00 AM - 9:30 AM".to_string(),
                consultation_type: ConsultationType::Individual,
                status: AppointmentStatus::Approved,
            })
            .await;

        let second = handler.handle(query()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn zero_ttl_disables_memoization() {
        let reader = reader_with_june_bookings().await;
        let cache = Arc::new(CalendarStatsCache::new(Duration::ZERO));
        let handler = CalendarStatsHandler::new(reader.clone(), cache);

        handler.handle(query()).await.unwrap();
        reader
            .insert(BookedAppointment {
                counselor_id: CounselorId::new(),
                date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
                time: "9:00 AM - 9:30 AM".to_string(),
                consultation_type: ConsultationType::Individual,
                status: AppointmentStatus::Approved,
            })
            .await;

        let refreshed = handler.handle(query()).await.unwrap();
        assert_eq!(refreshed.get(&4), Some(&1));
    }

    #[tokio::test]
    async fn month_out_of_range_is_rejected() {
        let reader = Arc::new(InMemoryBookingReader::new());
        let cache = Arc::new(CalendarStatsCache::new(Duration::from_secs(60)));
        let handler = CalendarStatsHandler::new(reader, cache);

        let err = handler
            .handle(CalendarStatsQuery {
                year: 2025,
                month: 13,
                counselor_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidQuery { .. }));
    }
}
