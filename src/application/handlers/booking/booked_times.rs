//! BookedTimesHandler - Query handler for occupied slots on a date.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::booking::BookingError;
use crate::domain::foundation::{ConsultationType, CounselorId};
use crate::domain::scheduling::SlotLabel;
use crate::ports::BookingReader;

/// Query for the slots already taken on one date.
#[derive(Debug, Clone)]
pub struct BookedTimesQuery {
    pub date: NaiveDate,
    pub counselor_id: Option<CounselorId>,
    pub consultation_type: Option<ConsultationType>,
}

/// Handler listing occupied slot labels.
pub struct BookedTimesHandler {
    booking: Arc<dyn BookingReader>,
}

impl BookedTimesHandler {
    pub fn new(booking: Arc<dyn BookingReader>) -> Self {
        Self { booking }
    }

    /// Returns the labels of slots with active appointments, sorted by
    /// parsed start minute (never lexicographically) and deduplicated.
    pub async fn handle(&self, query: BookedTimesQuery) -> Result<Vec<SlotLabel>, BookingError> {
        let appointments = self
            .booking
            .appointments_on(query.date, query.counselor_id.as_ref())
            .await?;

        let mut slots: Vec<SlotLabel> = appointments
            .iter()
            .filter(|a| a.occupies_slot())
            .filter(|a| {
                query
                    .consultation_type
                    .map_or(true, |t| a.consultation_type == t)
            })
            .filter_map(|a| a.slot())
            .collect();
        slots.sort();
        slots.dedup();
        Ok(slots)
    }
}
