//! DeleteRangeHandler - Command handler removing one stored range.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CounselorId, Weekday};
use crate::domain::scheduling::{AvailabilityError, TimeOfDay, TimeRange};
use crate::ports::AvailabilityStore;

/// Command deleting the range with exactly these bounds from one day.
#[derive(Debug, Clone)]
pub struct DeleteRangeCommand {
    pub counselor_id: CounselorId,
    pub day: String,
    pub from: String,
    pub to: String,
}

/// Handler for explicit range deletion.
pub struct DeleteRangeHandler {
    store: Arc<dyn AvailabilityStore>,
}

impl DeleteRangeHandler {
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }

    /// Deletes the named range.
    ///
    /// Unlike batch saves, this targets a single row the counselor clicked,
    /// so malformed input here is a hard validation error rather than a
    /// silent drop.
    pub async fn handle(&self, cmd: DeleteRangeCommand) -> Result<(), AvailabilityError> {
        let weekday: Weekday = cmd.day.parse()?;
        let start: TimeOfDay = cmd.from.parse()?;
        let end: TimeOfDay = cmd.to.parse()?;
        let range = TimeRange::new(start, end)?;

        let removed = self
            .store
            .delete_range(&cmd.counselor_id, weekday, &range)
            .await?;
        if !removed {
            return Err(AvailabilityError::RangeNotFound);
        }

        debug!(counselor = %cmd.counselor_id, day = %weekday, range = %range, "deleted availability range");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAvailabilityStore;

    fn r(start: &str, end: &str) -> TimeRange {
        TimeRange::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    fn command(counselor_id: CounselorId, day: &str, from: &str, to: &str) -> DeleteRangeCommand {
        DeleteRangeCommand {
            counselor_id,
            day: day.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[tokio::test]
    async fn deletes_exact_range() {
        let store = Arc::new(InMemoryAvailabilityStore::new());
        let id = CounselorId::new();
        store
            .replace_day(&id, Weekday::Monday, &[r("9:00 AM", "11:00 AM")])
            .await
            .unwrap();

        let handler = DeleteRangeHandler::new(store.clone());
        handler
            .handle(command(id, "Monday", "9:00 AM", "11:00 AM"))
            .await
            .unwrap();

        assert!(store.day_ranges(&id, Weekday::Monday).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_range_reports_not_found() {
        let handler = DeleteRangeHandler::new(Arc::new(InMemoryAvailabilityStore::new()));
        let err = handler
            .handle(command(CounselorId::new(), "Monday", "9:00 AM", "11:00 AM"))
            .await
            .unwrap_err();
        assert_eq!(err, AvailabilityError::RangeNotFound);
    }

    #[tokio::test]
    async fn invalid_day_is_a_validation_error() {
        let handler = DeleteRangeHandler::new(Arc::new(InMemoryAvailabilityStore::new()));
        let err = handler
            .handle(command(CounselorId::new(), "Someday", "9:00 AM", "11:00 AM"))
            .await
            .unwrap_err();
        assert!(matches!(err, AvailabilityError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn inverted_bounds_are_a_validation_error() {
        let handler = DeleteRangeHandler::new(Arc::new(InMemoryAvailabilityStore::new()));
        let err = handler
            .handle(command(CounselorId::new(), "Monday", "11:00 AM", "9:00 AM"))
            .await
            .unwrap_err();
        assert!(matches!(err, AvailabilityError::InvalidInput { .. }));
    }
}
