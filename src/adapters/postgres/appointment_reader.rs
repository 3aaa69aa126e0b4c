//! PostgreSQL implementation of BookingReader.
//!
//! The appointment aggregate is owned elsewhere; this adapter only reads.
//! The booking-commit side pairs the capacity numbers read here with a
//! `SELECT ... FOR UPDATE` re-check inside its own transaction.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::str::FromStr;

use crate::domain::booking::BookedAppointment;
use crate::domain::foundation::{
    AppointmentStatus, ConsultationType, CounselorId, DomainError, ErrorCode,
};
use crate::ports::BookingReader;

/// PostgreSQL implementation of BookingReader.
#[derive(Clone)]
pub struct PostgresAppointmentReader {
    pool: PgPool,
}

impl PostgresAppointmentReader {
    /// Creates a new PostgresAppointmentReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingReader for PostgresAppointmentReader {
    async fn appointments_on(
        &self,
        date: NaiveDate,
        counselor: Option<&CounselorId>,
    ) -> Result<Vec<BookedAppointment>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT counselor_id, date, time_scheduled, consultation_type, status
            FROM appointments
            WHERE date = $1 AND ($2::uuid IS NULL OR counselor_id = $2)
            "#,
        )
        .bind(date)
        .bind(counselor.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch appointments: {}", e),
            )
        })?;

        let mut appointments = Vec::with_capacity(rows.len());
        for row in rows {
            let raw_type: String = row.get("consultation_type");
            let raw_status: String = row.get("status");
            // Unknown enum values would poison every query touching the
            // row; skip them and let the domain see only valid rows.
            let (Ok(consultation_type), Ok(status)) = (
                ConsultationType::from_str(&raw_type),
                AppointmentStatus::from_str(&raw_status),
            ) else {
                continue;
            };
            appointments.push(BookedAppointment {
                counselor_id: CounselorId::from_uuid(row.get("counselor_id")),
                date: row.get("date"),
                time: row.get("time_scheduled"),
                consultation_type,
                status,
            });
        }
        Ok(appointments)
    }

    async fn counts_by_day(
        &self,
        year: i32,
        month: u32,
        counselor: Option<&CounselorId>,
    ) -> Result<HashMap<u32, u32>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT EXTRACT(DAY FROM date)::int AS day, COUNT(*)::int AS total
            FROM appointments
            WHERE EXTRACT(YEAR FROM date)::int = $1
              AND EXTRACT(MONTH FROM date)::int = $2
              AND status IN ('pending', 'approved')
              AND ($3::uuid IS NULL OR counselor_id = $3)
            GROUP BY day
            "#,
        )
        .bind(year)
        .bind(month as i32)
        .bind(counselor.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch calendar counts: {}", e),
            )
        })?;

        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    row.get::<i32, _>("day") as u32,
                    row.get::<i32, _>("total") as u32,
                )
            })
            .collect())
    }
}
