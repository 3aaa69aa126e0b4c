//! Half-hour slot expansion and compaction.
//!
//! A slot is a fixed 30-minute bookable unit `[start, start + 30)` derived
//! from a merged range. Labels are rendered on demand and never stored.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::range::TimeRange;
use super::time_codec::{format_minutes, TimeOfDay};

/// Length of one bookable slot in minutes.
pub const SLOT_MINUTES: u16 = 30;

/// A 30-minute bookable slot, identified by its start time.
///
/// Two labels are equal iff their start minutes are equal; the rendered
/// end is always `start + 30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct SlotLabel {
    start: TimeOfDay,
}

impl SlotLabel {
    /// Creates a slot starting at the given time.
    pub fn new(start: TimeOfDay) -> Self {
        Self { start }
    }

    /// Start of the slot.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// End of the slot in minutes since midnight (may be 1440 for a slot
    /// beginning at 11:30 PM).
    pub fn end_minutes(&self) -> u32 {
        self.start.minutes() as u32 + SLOT_MINUTES as u32
    }

    /// Parses a rendered label (`"H:MM AM/PM - H:MM AM/PM"`), keeping the
    /// start time. A bare start time is also accepted; stored booking rows
    /// vary between the two shapes.
    pub fn parse(text: &str) -> Option<Self> {
        let raw_start = match text.split_once('-') {
            Some((start, _)) => start,
            None => text,
        };
        raw_start.parse().ok().map(|start| Self { start })
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, format_minutes(self.end_minutes()))
    }
}

impl From<SlotLabel> for String {
    fn from(label: SlotLabel) -> Self {
        label.to_string()
    }
}

/// Expands disjoint ranges into the enumerated sequence of half-hour slots.
///
/// Steps through each range in 30-minute increments while a full slot still
/// fits; a trailing fragment shorter than 30 minutes is dropped. Only full
/// half-hour units are bookable.
pub fn expand_ranges(ranges: &[TimeRange]) -> Vec<SlotLabel> {
    let mut slots = Vec::new();
    for range in ranges {
        let mut t = range.start().minutes();
        while t + SLOT_MINUTES <= range.end().minutes() {
            // t < end <= 1439, so the start is always constructible.
            if let Ok(start) = TimeOfDay::from_minutes(t) {
                slots.push(SlotLabel::new(start));
            }
            t += SLOT_MINUTES;
        }
    }
    slots
}

/// Compacts a sorted set of half-hour starts back into ranges.
///
/// Consecutive starts exactly 30 minutes apart group into one range from
/// the first start to the last start plus 30. Inverse of [`expand_ranges`]
/// for 30-minute-aligned disjoint inputs.
pub fn compact_starts(starts: &[TimeOfDay]) -> Vec<TimeRange> {
    let mut ranges = Vec::new();
    let mut iter = starts.iter().copied();

    let Some(first) = iter.next() else {
        return ranges;
    };
    let mut group_start = first;
    let mut prev = first;

    for start in iter {
        if start.minutes() != prev.minutes() + SLOT_MINUTES {
            push_group(&mut ranges, group_start, prev);
            group_start = start;
        }
        prev = start;
    }
    push_group(&mut ranges, group_start, prev);
    ranges
}

fn push_group(ranges: &mut Vec<TimeRange>, group_start: TimeOfDay, last_start: TimeOfDay) {
    // A group's end is last start + 30; a group beginning at 11:30 PM would
    // end at minute 1440, which a TimeRange cannot hold, so it is skipped.
    let Some(end) = last_start.plus_minutes(SLOT_MINUTES) else {
        return;
    };
    if let Ok(range) = TimeRange::new(group_start, end) {
        ranges.push(range);
    }
}

/// Unions slot sets from multiple counselors, deduplicating by start time.
///
/// Two counselors both available 9:00-9:30 contribute one "9:00 AM - 9:30 AM"
/// entry, not two. Output is sorted by start.
pub fn union_by_start(slot_sets: impl IntoIterator<Item = Vec<SlotLabel>>) -> Vec<SlotLabel> {
    let mut union: BTreeSet<SlotLabel> = BTreeSet::new();
    for slots in slot_sets {
        union.extend(slots);
    }
    union.into_iter().collect()
}

/// The selectable time-of-day domain for the booking UI: 07:00-17:30 in
/// 30-minute steps, excluding the 12:00 and 12:30 PM lunch block.
///
/// This is a product rule enforced at the input-generation boundary;
/// normalize and merge stay general-purpose.
pub fn selectable_times() -> Vec<TimeOfDay> {
    (420..=1050)
        .step_by(SLOT_MINUTES as usize)
        .filter(|&m| m != 720 && m != 750)
        .filter_map(|m| TimeOfDay::from_minutes(m).ok())
        .collect()
}
