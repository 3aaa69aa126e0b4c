//! Capacity-aware filtering of resolved slots against booked state.

use std::collections::{HashMap, HashSet};

use crate::domain::foundation::GROUP_CAPACITY;
use crate::domain::scheduling::SlotLabel;

/// A group-consultation slot with its remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSlot {
    pub slot: SlotLabel,
    pub remaining: u32,
}

/// Result of a point-in-time group capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupAvailability {
    pub is_available: bool,
    pub booked_slots: u32,
    pub available_slots: u32,
}

/// Removes slots occupied by booked individual consultations.
///
/// Pure set subtraction: a slot drops out iff its start matches a booked
/// individual slot for that counselor and date.
pub fn filter_individual(slots: Vec<SlotLabel>, booked: &[SlotLabel]) -> Vec<SlotLabel> {
    let taken: HashSet<u16> = booked.iter().map(|s| s.start().minutes()).collect();
    slots
        .into_iter()
        .filter(|slot| !taken.contains(&slot.start().minutes()))
        .collect()
}

/// Attaches remaining group capacity to each slot, dropping full ones.
///
/// `counts` maps slot start minutes to active participant counts. A slot
/// with no entry has full capacity; a slot at or above [`GROUP_CAPACITY`]
/// is excluded.
pub fn filter_group(slots: Vec<SlotLabel>, counts: &HashMap<u16, u32>) -> Vec<GroupSlot> {
    slots
        .into_iter()
        .filter_map(|slot| {
            let booked = counts.get(&slot.start().minutes()).copied().unwrap_or(0);
            let remaining = GROUP_CAPACITY.saturating_sub(booked);
            (remaining > 0).then_some(GroupSlot { slot, remaining })
        })
        .collect()
}

/// Capacity summary for one group slot with `booked` active participants.
pub fn group_availability(booked: u32) -> GroupAvailability {
    let available = GROUP_CAPACITY.saturating_sub(booked);
    GroupAvailability {
        is_available: available > 0,
        booked_slots: booked,
        available_slots: available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scheduling::{expand_ranges, TimeRange};

    fn slots(start: &str, end: &str) -> Vec<SlotLabel> {
        let range = TimeRange::new(start.parse().unwrap(), end.parse().unwrap()).unwrap();
        expand_ranges(&[range])
    }

    #[test]
    fn individual_filter_removes_exactly_the_booked_slot() {
        let all = slots("9:00 AM", "11:00 AM");
        let booked = vec![SlotLabel::parse("9:00 AM - 9:30 AM").unwrap()];

        let open = filter_individual(all, &booked);
        assert_eq!(open.len(), 3);
        assert!(open.iter().all(|s| s.to_string() != "9:00 AM - 9:30 AM"));
    }

    #[test]
    fn individual_filter_with_no_bookings_is_identity() {
        let all = slots("9:00 AM", "10:00 AM");
        assert_eq!(filter_individual(all.clone(), &[]), all);
    }

    #[test]
    fn group_filter_reports_remaining_capacity() {
        let all = slots("9:00 AM", "10:00 AM");
        let counts = HashMap::from([(540u16, 3u32)]);

        let open = filter_group(all, &counts);
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].remaining, 2);
        assert_eq!(open[1].remaining, GROUP_CAPACITY);
    }

    #[test]
    fn group_filter_excludes_full_slots() {
        let all = slots("9:00 AM", "10:00 AM");
        let counts = HashMap::from([(540u16, GROUP_CAPACITY)]);

        let open = filter_group(all, &counts);
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].slot.start().minutes(), 570);
    }

    #[test]
    fn capacity_boundary_at_four_and_five() {
        let near = group_availability(4);
        assert!(near.is_available);
        assert_eq!(near.available_slots, 1);

        let full = group_availability(5);
        assert!(!full.is_available);
        assert_eq!(full.available_slots, 0);
    }

    #[test]
    fn over_capacity_count_never_goes_negative() {
        // A row count past the cap can only come from data predating the
        // transactional check; report zero, not underflow.
        let over = group_availability(7);
        assert!(!over.is_available);
        assert_eq!(over.available_slots, 0);
        assert_eq!(over.booked_slots, 7);
    }
}
