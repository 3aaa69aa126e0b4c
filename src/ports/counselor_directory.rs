//! Counselor directory port.

use async_trait::async_trait;

use crate::domain::foundation::{CounselorId, DomainError};

/// Minimal counselor view for availability listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounselorSummary {
    pub id: CounselorId,
    pub name: String,
}

/// Read port over the counselor roster.
#[async_trait]
pub trait CounselorDirectory: Send + Sync {
    /// All counselors.
    async fn list(&self) -> Result<Vec<CounselorSummary>, DomainError>;

    /// One counselor by id, `None` if unknown.
    async fn find(&self, id: &CounselorId) -> Result<Option<CounselorSummary>, DomainError>;
}
