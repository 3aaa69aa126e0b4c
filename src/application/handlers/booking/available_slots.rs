//! AvailableSlotsHandler - Query handler for bookable slots on a date.
//!
//! Composes the full pipeline: resolve a counselor's (or all counselors')
//! expanded slots, then subtract booked individual slots or attach group
//! capacity, depending on the requested consultation type.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::handlers::availability::{ResolveSlotsHandler, ResolveSlotsQuery};
use crate::domain::booking::{
    booked_individual_slots, filter_group, filter_individual, group_counts, BookingError,
    GroupSlot, SlotQuery,
};
use crate::domain::foundation::{ConsultationType, CounselorId, GROUP_CAPACITY};
use crate::domain::scheduling::AvailabilityError;
use crate::ports::BookingReader;

/// Query for the slots a student can still book.
#[derive(Debug, Clone)]
pub struct AvailableSlotsQuery {
    pub date: NaiveDate,
    pub counselor_id: Option<CounselorId>,
    pub consultation_type: ConsultationType,
}

/// Bookable slots with capacity annotations for group consultations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableSlots {
    pub slots: Vec<GroupSlot>,
}

/// Handler joining availability resolution with booking state.
pub struct AvailableSlotsHandler {
    resolver: Arc<ResolveSlotsHandler>,
    booking: Arc<dyn BookingReader>,
}

impl AvailableSlotsHandler {
    pub fn new(resolver: Arc<ResolveSlotsHandler>, booking: Arc<dyn BookingReader>) -> Self {
        Self { resolver, booking }
    }

    /// Resolves the date's slots and removes what is already taken.
    ///
    /// Individual consultations drop any slot with an active individual
    /// booking; its remaining capacity is reported as the full group cap
    /// for shape uniformity. Group consultations drop only slots at
    /// capacity and carry their remaining seat count.
    pub async fn handle(&self, query: AvailableSlotsQuery) -> Result<AvailableSlots, BookingError> {
        let slot_query = match query.counselor_id {
            Some(id) => SlotQuery::for_counselor(id),
            None => SlotQuery::any_counselor(),
        };

        let resolved = self
            .resolver
            .handle(ResolveSlotsQuery {
                date: query.date,
                query: slot_query,
            })
            .await
            .map_err(|e| match e {
                AvailabilityError::Store(msg) => BookingError::store(msg),
                other => BookingError::invalid_query("availability", other.message()),
            })?;

        let appointments = self
            .booking
            .appointments_on(query.date, query.counselor_id.as_ref())
            .await?;

        let slots = match query.consultation_type {
            ConsultationType::Individual => {
                let booked = booked_individual_slots(&appointments);
                filter_individual(resolved, &booked)
                    .into_iter()
                    .map(|slot| GroupSlot {
                        slot,
                        remaining: GROUP_CAPACITY,
                    })
                    .collect()
            }
            ConsultationType::Group => {
                let counts = group_counts(&appointments);
                filter_group(resolved, &counts)
            }
        };

        Ok(AvailableSlots { slots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAvailabilityStore, InMemoryBookingReader};
    use crate::ports::AvailabilityStore;
    use crate::domain::booking::BookedAppointment;
    use crate::domain::foundation::{AppointmentStatus, Weekday};
    use crate::domain::scheduling::TimeRange;

    fn r(start: &str, end: &str) -> TimeRange {
        TimeRange::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    // 2025-06-02 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    async fn fixture(counselor: CounselorId) -> (Arc<ResolveSlotsHandler>, Arc<InMemoryBookingReader>) {
        let store = Arc::new(InMemoryAvailabilityStore::new());
        store
            .replace_day(&counselor, Weekday::Monday, &[r("9:00 AM", "11:00 AM")])
            .await
            .unwrap();
        (
            Arc::new(ResolveSlotsHandler::new(store)),
            Arc::new(InMemoryBookingReader::new()),
        )
    }

    fn booking(
        counselor: CounselorId,
        time: &str,
        consultation_type: ConsultationType,
    ) -> BookedAppointment {
        BookedAppointment {
            counselor_id: counselor,
            date: monday(),
            time: time.to_string(),
            consultation_type,
            status: AppointmentStatus::Approved,
        }
    }

    #[tokio::test]
    async fn individual_query_subtracts_booked_slots() {
        let counselor = CounselorId::new();
        let (resolver, reader) = fixture(counselor).await;
        reader
            .insert(booking(counselor, "9:00 AM - 9:30 AM", ConsultationType::Individual))
            .await;

        let handler = AvailableSlotsHandler::new(resolver, reader);
        let result = handler
            .handle(AvailableSlotsQuery {
                date: monday(),
                counselor_id: Some(counselor),
                consultation_type: ConsultationType::Individual,
            })
            .await
            .unwrap();

        let rendered: Vec<String> =
            result.slots.iter().map(|s| s.slot.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["9:30 AM - 10:00 AM", "10:00 AM - 10:30 AM", "10:30 AM - 11:00 AM"]
        );
    }

    #[tokio::test]
    async fn group_query_keeps_partially_filled_slots() {
        let counselor = CounselorId::new();
        let (resolver, reader) = fixture(counselor).await;
        for _ in 0..3 {
            reader
                .insert(booking(counselor, "9:00 AM - 9:30 AM", ConsultationType::Group))
                .await;
        }

        let handler = AvailableSlotsHandler::new(resolver, reader);
        let result = handler
            .handle(AvailableSlotsQuery {
                date: monday(),
                counselor_id: Some(counselor),
                consultation_type: ConsultationType::Group,
            })
            .await
            .unwrap();

        assert_eq!(result.slots.len(), 4);
        assert_eq!(result.slots[0].remaining, 2);
        assert_eq!(result.slots[1].remaining, GROUP_CAPACITY);
    }

    #[tokio::test]
    async fn group_query_drops_full_slots() {
        let counselor = CounselorId::new();
        let (resolver, reader) = fixture(counselor).await;
        for _ in 0..5 {
            reader
                .insert(booking(counselor, "9:00 AM - 9:30 AM", ConsultationType::Group))
                .await;
        }

        let handler = AvailableSlotsHandler::new(resolver, reader);
        let result = handler
            .handle(AvailableSlotsQuery {
                date: monday(),
                counselor_id: Some(counselor),
                consultation_type: ConsultationType::Group,
            })
            .await
            .unwrap();

        assert_eq!(result.slots.len(), 3);
        assert!(result
            .slots
            .iter()
            .all(|s| s.slot.to_string() != "9:00 AM - 9:30 AM"));
    }

    #[tokio::test]
    async fn individual_booking_does_not_consume_group_slot_count() {
        let counselor = CounselorId::new();
        let (resolver, reader) = fixture(counselor).await;
        reader
            .insert(booking(counselor, "9:00 AM - 9:30 AM", ConsultationType::Individual))
            .await;

        let handler = AvailableSlotsHandler::new(resolver, reader);
        let result = handler
            .handle(AvailableSlotsQuery {
                date: monday(),
                counselor_id: Some(counselor),
                consultation_type: ConsultationType::Group,
            })
            .await
            .unwrap();

        // Group availability counts only group participants.
        assert_eq!(result.slots.len(), 4);
        assert!(result.slots.iter().all(|s| s.remaining == GROUP_CAPACITY));
    }
}
