//! Per-day and per-week availability aggregates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Weekday;

use super::merge::merge_ranges;
use super::range::TimeRange;

/// One weekday's merged availability for a counselor.
///
/// # Invariants
///
/// - `ranges` are pairwise disjoint and sorted ascending by start.
/// - Every mutation re-merges the whole set, so historical fragmentation
///   self-heals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    weekday: Weekday,
    ranges: Vec<TimeRange>,
}

impl DayAvailability {
    /// Creates an empty day.
    pub fn new(weekday: Weekday) -> Self {
        Self {
            weekday,
            ranges: Vec::new(),
        }
    }

    /// Builds a day from arbitrary ranges, establishing the merge invariant.
    pub fn from_ranges(weekday: Weekday, ranges: impl IntoIterator<Item = TimeRange>) -> Self {
        Self {
            weekday,
            ranges: merge_ranges(ranges),
        }
    }

    /// The weekday this availability belongs to.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The merged, sorted ranges.
    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }

    /// True when no ranges remain.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Adds a range and re-merges the whole set, not just the new entry.
    pub fn add_range(&mut self, range: TimeRange) {
        let mut all = std::mem::take(&mut self.ranges);
        all.push(range);
        self.ranges = merge_ranges(all);
    }

    /// Removes the range with exactly these bounds.
    ///
    /// Returns false when no stored range matches; partial overlap does not
    /// count. Edits replace, they never trim in place.
    pub fn remove_range(&mut self, range: &TimeRange) -> bool {
        let before = self.ranges.len();
        self.ranges.retain(|r| r != range);
        self.ranges.len() != before
    }
}

/// A counselor's full weekly availability, one entry per weekday.
///
/// Created empty on counselor signup. A day's entry disappears only when
/// its last range is explicitly deleted, never automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySet {
    days: BTreeMap<Weekday, DayAvailability>,
}

impl AvailabilitySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns one day's availability, if any ranges are stored for it.
    pub fn day(&self, weekday: Weekday) -> Option<&DayAvailability> {
        self.days.get(&weekday)
    }

    /// Weekdays that currently have at least one range.
    pub fn active_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.keys().copied()
    }

    /// Replaces a day's ranges wholesale (merging the new set).
    pub fn replace_day(&mut self, weekday: Weekday, ranges: impl IntoIterator<Item = TimeRange>) {
        let day = DayAvailability::from_ranges(weekday, ranges);
        if day.is_empty() {
            self.days.remove(&weekday);
        } else {
            self.days.insert(weekday, day);
        }
    }

    /// Adds a single range to a day through the merge pipeline.
    pub fn add_range(&mut self, weekday: Weekday, range: TimeRange) {
        self.days
            .entry(weekday)
            .or_insert_with(|| DayAvailability::new(weekday))
            .add_range(range);
    }

    /// Deletes one exact range from a day. The day's entry is dropped when
    /// its last range goes.
    pub fn delete_range(&mut self, weekday: Weekday, range: &TimeRange) -> bool {
        let Some(day) = self.days.get_mut(&weekday) else {
            return false;
        };
        let removed = day.remove_range(range);
        if removed && day.is_empty() {
            self.days.remove(&weekday);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: &str, end: &str) -> TimeRange {
        TimeRange::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    #[test]
    fn from_ranges_establishes_merge_invariant() {
        let day = DayAvailability::from_ranges(
            Weekday::Monday,
            [r("9:30 AM", "11:00 AM"), r("9:00 AM", "10:00 AM")],
        );
        assert_eq!(day.ranges(), &[r("9:00 AM", "11:00 AM")]);
    }

    #[test]
    fn add_range_remerges_whole_set() {
        let mut day = DayAvailability::from_ranges(
            Weekday::Monday,
            [r("9:00 AM", "9:30 AM"), r("10:00 AM", "10:30 AM")],
        );
        // Bridges the gap; all three fragments must collapse.
        day.add_range(r("9:30 AM", "10:00 AM"));
        assert_eq!(day.ranges(), &[r("9:00 AM", "10:30 AM")]);
    }

    #[test]
    fn remove_range_requires_exact_bounds() {
        let mut day =
            DayAvailability::from_ranges(Weekday::Tuesday, [r("9:00 AM", "11:00 AM")]);
        assert!(!day.remove_range(&r("9:00 AM", "10:00 AM")));
        assert!(day.remove_range(&r("9:00 AM", "11:00 AM")));
        assert!(day.is_empty());
    }

    #[test]
    fn set_starts_empty() {
        let set = AvailabilitySet::new();
        assert!(set.day(Weekday::Monday).is_none());
        assert_eq!(set.active_days().count(), 0);
    }

    #[test]
    fn replace_day_overwrites_previous_ranges() {
        let mut set = AvailabilitySet::new();
        set.replace_day(Weekday::Monday, [r("9:00 AM", "10:00 AM")]);
        set.replace_day(Weekday::Monday, [r("2:00 PM", "3:00 PM")]);
        assert_eq!(
            set.day(Weekday::Monday).unwrap().ranges(),
            &[r("2:00 PM", "3:00 PM")]
        );
    }

    #[test]
    fn deleting_last_range_removes_the_day_entry() {
        let mut set = AvailabilitySet::new();
        set.add_range(Weekday::Friday, r("9:00 AM", "10:00 AM"));
        assert!(set.delete_range(Weekday::Friday, &r("9:00 AM", "10:00 AM")));
        assert!(set.day(Weekday::Friday).is_none());
    }

    #[test]
    fn delete_from_missing_day_returns_false() {
        let mut set = AvailabilitySet::new();
        assert!(!set.delete_range(Weekday::Monday, &r("9:00 AM", "10:00 AM")));
    }
}
