//! ReplaceAvailabilityHandler - Command handler for whole-day availability saves.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::{CounselorId, Weekday};
use crate::domain::scheduling::{AvailabilityError, DayAvailability, TimeRange};
use crate::ports::AvailabilityStore;

/// Command replacing the stored ranges for the named days.
///
/// Each entry in `times_by_day` is a raw `"H:MM AM-H:MM PM"` pair as the
/// availability form submits it. Days listed in `days` but absent from the
/// map are cleared.
#[derive(Debug, Clone)]
pub struct ReplaceAvailabilityCommand {
    pub counselor_id: CounselorId,
    pub days: Vec<Weekday>,
    pub times_by_day: HashMap<Weekday, Vec<String>>,
}

/// Outcome counts for a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceAvailabilityResult {
    pub saved_days: usize,
    pub dropped_entries: usize,
}

/// Handler running the normalize → merge → persist pipeline per day.
pub struct ReplaceAvailabilityHandler {
    store: Arc<dyn AvailabilityStore>,
}

impl ReplaceAvailabilityHandler {
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }

    /// Replaces each named day's ranges wholesale.
    ///
    /// Entries that fail to parse and inverted pairs are dropped per
    /// entry; the save itself never fails over one bad row. Only a store
    /// failure aborts.
    pub async fn handle(
        &self,
        cmd: ReplaceAvailabilityCommand,
    ) -> Result<ReplaceAvailabilityResult, AvailabilityError> {
        let mut dropped = 0usize;

        for day in &cmd.days {
            let raw_entries = cmd.times_by_day.get(day).cloned().unwrap_or_default();
            let mut ranges = Vec::with_capacity(raw_entries.len());

            for raw in &raw_entries {
                match parse_form_entry(raw) {
                    Some(range) => ranges.push(range),
                    None => {
                        dropped += 1;
                        warn!(counselor = %cmd.counselor_id, day = %day, raw, "dropping invalid availability entry");
                    }
                }
            }

            // The aggregate establishes the merge invariant; the store
            // only ever sees disjoint, sorted ranges.
            let merged = DayAvailability::from_ranges(*day, ranges);
            debug!(
                counselor = %cmd.counselor_id,
                day = %day,
                ranges = merged.ranges().len(),
                "replacing day availability"
            );
            self.store
                .replace_day(&cmd.counselor_id, *day, merged.ranges())
                .await?;
        }

        Ok(ReplaceAvailabilityResult {
            saved_days: cmd.days.len(),
            dropped_entries: dropped,
        })
    }
}

/// Splits a submitted `"from-to"` entry and normalizes it.
///
/// Inverted pairs come back `None` (silent drop by product policy) just
/// like unparseable ones; the distinction only matters for logging.
fn parse_form_entry(raw: &str) -> Option<TimeRange> {
    let (raw_start, raw_end) = raw.split_once('-')?;
    TimeRange::normalize(raw_start, raw_end).ok().flatten()
}
