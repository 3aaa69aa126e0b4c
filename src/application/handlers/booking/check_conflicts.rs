//! CheckConflictsHandler - Query handler for individual booking conflicts.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::booking::{detect_conflict, BookingError, ConflictCheck};
use crate::domain::foundation::CounselorId;
use crate::domain::scheduling::TimeOfDay;
use crate::ports::BookingReader;

/// Query asking whether a counselor/date/time is already taken.
#[derive(Debug, Clone)]
pub struct CheckConflictsQuery {
    pub counselor_id: CounselorId,
    pub date: NaiveDate,
    pub time: TimeOfDay,
}

/// Handler applying the individual-exclusivity rule.
pub struct CheckConflictsHandler {
    booking: Arc<dyn BookingReader>,
}

impl CheckConflictsHandler {
    pub fn new(booking: Arc<dyn BookingReader>) -> Self {
        Self { booking }
    }

    pub async fn handle(&self, query: CheckConflictsQuery) -> Result<ConflictCheck, BookingError> {
        let appointments = self
            .booking
            .appointments_on(query.date, Some(&query.counselor_id))
            .await?;
        Ok(detect_conflict(&appointments, query.time))
    }
}
