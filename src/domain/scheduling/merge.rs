//! Interval merging for one day's availability.

use super::range::TimeRange;

/// Collapses a set of ranges into the minimal disjoint, sorted form.
///
/// Ranges are sorted by start and swept left to right; a range whose start
/// is at or before the current end extends the current range, so
/// back-to-back ranges like 9:00-10:00 and 10:00-11:00 merge into one.
/// The operation is idempotent.
pub fn merge_ranges(ranges: impl IntoIterator<Item = TimeRange>) -> Vec<TimeRange> {
    let mut sorted: Vec<TimeRange> = ranges.into_iter().collect();
    sorted.sort_by_key(|r| (r.start(), r.end()));

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for next in sorted {
        match merged.last_mut() {
            Some(current) if next.start() <= current.end() => {
                if next.end() > current.end() {
                    // Both bounds already validated; extending keeps start < end.
                    *current = TimeRange::new(current.start(), next.end())
                        .unwrap_or(*current);
                }
            }
            _ => merged.push(next),
        }
    }
    merged
}

/// Convenience for tests holding raw minute pairs.
#[cfg(test)]
pub(crate) fn range_from_minutes(start: u16, end: u16) -> TimeRange {
    use super::time_codec::TimeOfDay;

    let start = TimeOfDay::from_minutes(start).unwrap();
    let end = TimeOfDay::from_minutes(end).unwrap();
    TimeRange::new(start, end).unwrap()
}
