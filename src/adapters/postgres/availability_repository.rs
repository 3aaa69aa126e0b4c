//! PostgreSQL implementation of AvailabilityStore.
//!
//! Ranges are stored one row per (counselor, weekday, range) with the
//! range rendered as a human-readable `"H:MM AM - H:MM PM"` string in
//! `time_scheduled`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::domain::foundation::{CounselorId, DomainError, ErrorCode, Weekday};
use crate::domain::scheduling::TimeRange;
use crate::ports::AvailabilityStore;

/// PostgreSQL implementation of AvailabilityStore.
#[derive(Clone)]
pub struct PostgresAvailabilityStore {
    pool: PgPool,
}

impl PostgresAvailabilityStore {
    /// Creates a new PostgresAvailabilityStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityStore for PostgresAvailabilityStore {
    async fn day_ranges(
        &self,
        counselor: &CounselorId,
        weekday: Weekday,
    ) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT time_scheduled
            FROM counselor_availability
            WHERE counselor_id = $1 AND weekday = $2
            ORDER BY id
            "#,
        )
        .bind(counselor.as_uuid())
        .bind(weekday.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch day availability: {}", e),
            )
        })?;

        Ok(rows
            .into_iter()
            .map(|row| row.get::<String, _>("time_scheduled"))
            .collect())
    }

    async fn week_ranges(
        &self,
        counselor: &CounselorId,
    ) -> Result<BTreeMap<Weekday, Vec<String>>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT weekday, time_scheduled
            FROM counselor_availability
            WHERE counselor_id = $1
            ORDER BY weekday, id
            "#,
        )
        .bind(counselor.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch week availability: {}", e),
            )
        })?;

        let mut week: BTreeMap<Weekday, Vec<String>> = BTreeMap::new();
        for row in rows {
            let raw_day: String = row.get("weekday");
            // A bad weekday value cannot be keyed; skip the row rather
            // than failing the whole read.
            if let Ok(weekday) = Weekday::from_str(&raw_day) {
                week.entry(weekday)
                    .or_default()
                    .push(row.get::<String, _>("time_scheduled"));
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
        // Delete + insert under one transaction keeps the (counselor,
        // weekday) pair consistent against concurrent edits.
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to start transaction: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            DELETE FROM counselor_availability
            WHERE counselor_id = $1 AND weekday = $2
            "#,
        )
        .bind(counselor.as_uuid())
        .bind(weekday.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to clear day availability: {}", e),
            )
        })?;

        for range in ranges {
            sqlx::query(
                r#"
                INSERT INTO counselor_availability (counselor_id, weekday, time_scheduled)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(counselor.as_uuid())
            .bind(weekday.as_str())
            .bind(range.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert availability range: {}", e),
                )
            })?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit transaction: {}", e),
            )
        })?;

        Ok(())
    }

    async fn delete_range(
        &self,
        counselor: &CounselorId,
        weekday: Weekday,
        range: &TimeRange,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM counselor_availability
            WHERE counselor_id = $1 AND weekday = $2 AND time_scheduled = $3
            "#,
        )
        .bind(counselor.as_uuid())
        .bind(weekday.as_str())
        .bind(range.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to delete availability range: {}", e),
            )
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn counselors_available_on(
        &self,
        weekday: Weekday,
    ) -> Result<Vec<CounselorId>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT counselor_id
            FROM counselor_availability
            WHERE weekday = $1
            ORDER BY counselor_id
            "#,
        )
        .bind(weekday.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list available counselors: {}", e),
            )
        })?;

        Ok(rows
            .into_iter()
            .map(|row| CounselorId::from_uuid(row.get("counselor_id")))
            .collect())
    }
}
