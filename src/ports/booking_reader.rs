//! Booking reader port (read side).
//!
//! The core never mutates booking state. The capacity numbers this port
//! yields are read-only; the actual booking commit must re-check them
//! inside a serializable transaction (`SELECT ... FOR UPDATE` or an atomic
//! conditional insert) to close the check-then-act window.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;

use crate::domain::booking::BookedAppointment;
use crate::domain::foundation::{CounselorId, DomainError};

/// Read port over the appointment aggregate.
#[async_trait]
pub trait BookingReader: Send + Sync {
    /// All appointments on a date, optionally restricted to one counselor.
    ///
    /// Rows come back with their raw stored time labels and statuses; the
    /// domain decides which of them occupy slots.
    async fn appointments_on(
        &self,
        date: NaiveDate,
        counselor: Option<&CounselorId>,
    ) -> Result<Vec<BookedAppointment>, DomainError>;

    /// Active appointment counts per day-of-month for a calendar month.
    async fn counts_by_day(
        &self,
        year: i32,
        month: u32,
        counselor: Option<&CounselorId>,
    ) -> Result<HashMap<u32, u32>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn BookingReader) {}
    }
}
