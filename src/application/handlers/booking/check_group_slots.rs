//! CheckGroupSlotsHandler - Query handler for group-slot capacity.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::booking::{group_counts, group_availability, BookingError, GroupAvailability};
use crate::domain::foundation::CounselorId;
use crate::domain::scheduling::TimeOfDay;
use crate::ports::BookingReader;

/// Query for remaining capacity at one group slot.
#[derive(Debug, Clone)]
pub struct CheckGroupSlotsQuery {
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub counselor_id: Option<CounselorId>,
}

/// Handler computing `remaining = capacity - active participants`.
///
/// The number is advisory: the booking commit re-checks it inside its own
/// transaction, since two students can read `remaining == 1` at once.
pub struct CheckGroupSlotsHandler {
    booking: Arc<dyn BookingReader>,
}

impl CheckGroupSlotsHandler {
    pub fn new(booking: Arc<dyn BookingReader>) -> Self {
        Self { booking }
    }

    pub async fn handle(
        &self,
        query: CheckGroupSlotsQuery,
    ) -> Result<GroupAvailability, BookingError> {
        let appointments = self
            .booking
            .appointments_on(query.date, query.counselor_id.as_ref())
            .await?;

        let counts = group_counts(&appointments);
        let booked = counts.get(&query.time.minutes()).copied().unwrap_or(0);
        Ok(group_availability(booked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBookingReader;
    use crate::domain::booking::BookedAppointment;
    use crate::domain::foundation::{AppointmentStatus, ConsultationType};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    async fn reader_with_group_bookings(
        counselor: CounselorId,
        active: usize,
        cancelled: usize,
    ) -> Arc<InMemoryBookingReader> {
        let reader = Arc::new(InMemoryBookingReader::new());
        for i in 0..(active + cancelled) {
            reader
                .insert(BookedAppointment {
                    counselor_id: counselor,
                    date: date(),
                    time: "9:00 AM - 9:30 AM".to_string(),
                    consultation_type: ConsultationType::Group,
                    status: if i < active {
                        AppointmentStatus::Approved
                    } else {
                        AppointmentStatus::Cancelled
                    },
                })
                .await;
        }
        reader
    }

    fn query(counselor: CounselorId) -> CheckGroupSlotsQuery {
        CheckGroupSlotsQuery {
            date: date(),
            time: "9:00 AM".parse().unwrap(),
            counselor_id: Some(counselor),
        }
    }

    #[tokio::test]
    async fn four_bookings_leave_one_seat() {
        let counselor = CounselorId::new();
        let reader = reader_with_group_bookings(counselor, 4, 0).await;
        let handler = CheckGroupSlotsHandler::new(reader);

        let result = handler.handle(query(counselor)).await.unwrap();
        assert!(result.is_available);
        assert_eq!(result.booked_slots, 4);
        assert_eq!(result.available_slots, 1);
    }

    #[tokio::test]
    async fn five_bookings_fill_the_slot() {
        let counselor = CounselorId::new();
        let reader = reader_with_group_bookings(counselor, 5, 0).await;
        let handler = CheckGroupSlotsHandler::new(reader);

        let result = handler.handle(query(counselor)).await.unwrap();
        assert!(!result.is_available);
        assert_eq!(result.available_slots, 0);
    }

    #[tokio::test]
    async fn cancelled_bookings_do_not_count_toward_capacity() {
        let counselor = CounselorId::new();
        let reader = reader_with_group_bookings(counselor, 2, 3).await;
        let handler = CheckGroupSlotsHandler::new(reader);

        let result = handler.handle(query(counselor)).await.unwrap();
        assert!(result.is_available);
        assert_eq!(result.booked_slots, 2);
        assert_eq!(result.available_slots, 3);
    }

    #[tokio::test]
    async fn empty_slot_has_full_capacity() {
        let counselor = CounselorId::new();
        let reader = Arc::new(InMemoryBookingReader::new());
        let handler = CheckGroupSlotsHandler::new(reader);

        let result = handler.handle(query(counselor)).await.unwrap();
        assert!(result.is_available);
        assert_eq!(result.available_slots, 5);
    }
}
