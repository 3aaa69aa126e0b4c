//! In-Memory Booking Reader Adapter

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::booking::BookedAppointment;
use crate::domain::foundation::{CounselorId, DomainError};
use crate::ports::BookingReader;

/// In-memory appointment store, read through the BookingReader port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingReader {
    appointments: Arc<RwLock<Vec<BookedAppointment>>>,
}

impl InMemoryBookingReader {
    /// Create a new empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an appointment row.
    pub async fn insert(&self, appointment: BookedAppointment) {
        self.appointments.write().await.push(appointment);
    }

    /// Replace an appointment's status (tests use this to cancel bookings).
    pub async fn set_status(
        &self,
        counselor: &CounselorId,
        date: NaiveDate,
        time: &str,
        status: crate::domain::foundation::AppointmentStatus,
    ) {
        let mut rows = self.appointments.write().await;
        for row in rows.iter_mut() {
            if row.counselor_id == *counselor && row.date == date && row.time == time {
                row.status = status;
            }
        }
    }

    /// Clear all stored data.
    pub async fn clear(&self) {
        self.appointments.write().await.clear();
    }
}

#[async_trait]
impl BookingReader for InMemoryBookingReader {
    async fn appointments_on(
        &self,
        date: NaiveDate,
        counselor: Option<&CounselorId>,
    ) -> Result<Vec<BookedAppointment>, DomainError> {
        let rows = self.appointments.read().await;
        Ok(rows
            .iter()
            .filter(|a| a.date == date)
            .filter(|a| counselor.map_or(true, |id| a.counselor_id == *id))
            .cloned()
            .collect())
    }

    async fn counts_by_day(
        &self,
        year: i32,
        month: u32,
        counselor: Option<&CounselorId>,
    ) -> Result<HashMap<u32, u32>, DomainError> {
        let rows = self.appointments.read().await;
        let mut counts = HashMap::new();
        for row in rows.iter() {
            if row.date.year() != year || row.date.month() != month {
                continue;
            }
            if counselor.is_some_and(|id| row.counselor_id != *id) {
                continue;
            }
            if row.occupies_slot() {
                *counts.entry(row.date.day()).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}
