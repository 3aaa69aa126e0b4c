//! In-Memory Counselor Directory Adapter

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CounselorId, DomainError};
use crate::ports::{CounselorDirectory, CounselorSummary};

/// In-memory counselor roster.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCounselorDirectory {
    counselors: Arc<RwLock<Vec<CounselorSummary>>>,
}

impl InMemoryCounselorDirectory {
    /// Create a new empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a counselor, returning the generated id.
    pub async fn add(&self, name: &str) -> CounselorId {
        let id = CounselorId::new();
        self.counselors.write().await.push(CounselorSummary {
            id,
            name: name.to_string(),
        });
        id
    }
}

#[async_trait]
impl CounselorDirectory for InMemoryCounselorDirectory {
    async fn list(&self) -> Result<Vec<CounselorSummary>, DomainError> {
        Ok(self.counselors.read().await.clone())
    }

    async fn find(&self, id: &CounselorId) -> Result<Option<CounselorSummary>, DomainError> {
        Ok(self
            .counselors
            .read()
            .await
            .iter()
            .find(|c| c.id == *id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_then_find() {
        let directory = InMemoryCounselorDirectory::new();
        let id = directory.add("Dr. Reyes").await;

        let found = directory.find(&id).await.unwrap().unwrap();
        assert_eq!(found.name, "Dr. Reyes");
        assert!(directory.find(&CounselorId::new()).await.unwrap().is_none());
    }
}
