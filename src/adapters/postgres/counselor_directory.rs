//! PostgreSQL implementation of CounselorDirectory.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{CounselorId, DomainError, ErrorCode};
use crate::ports::{CounselorDirectory, CounselorSummary};

/// PostgreSQL implementation of CounselorDirectory.
#[derive(Clone)]
pub struct PostgresCounselorDirectory {
    pool: PgPool,
}

impl PostgresCounselorDirectory {
    /// Creates a new PostgresCounselorDirectory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounselorDirectory for PostgresCounselorDirectory {
    async fn list(&self) -> Result<Vec<CounselorSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM counselors
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list counselors: {}", e),
            )
        })?;

        Ok(rows
            .into_iter()
            .map(|row| CounselorSummary {
                id: CounselorId::from_uuid(row.get("id")),
                name: row.get("name"),
            })
            .collect())
    }

    async fn find(&self, id: &CounselorId) -> Result<Option<CounselorSummary>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name
            FROM counselors
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch counselor: {}", e),
            )
        })?;

        Ok(row.map(|row| CounselorSummary {
            id: CounselorId::from_uuid(row.get("id")),
            name: row.get("name"),
        }))
    }
}
