//! Booked appointment records as read from the appointment aggregate.
//!
//! The core never mutates booking state; these rows are read-only inputs
//! to filtering and conflict checks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{AppointmentStatus, ConsultationType, CounselorId};
use crate::domain::scheduling::SlotLabel;

/// One booked appointment row.
///
/// `time` is the raw stored label; it is parsed defensively, so a corrupt
/// row drops out of slot math instead of failing a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedAppointment {
    pub counselor_id: CounselorId,
    pub date: NaiveDate,
    pub time: String,
    pub consultation_type: ConsultationType,
    pub status: AppointmentStatus,
}

impl BookedAppointment {
    /// Whether this appointment currently occupies its slot.
    pub fn occupies_slot(&self) -> bool {
        self.status.occupies_slot()
    }

    /// The slot this appointment sits in, if its stored time parses.
    pub fn slot(&self) -> Option<SlotLabel> {
        SlotLabel::parse(&self.time)
    }
}

/// Slots occupied by active individual appointments, deduplicated and
/// sorted by start time.
pub fn booked_individual_slots(appointments: &[BookedAppointment]) -> Vec<SlotLabel> {
    let mut slots: Vec<SlotLabel> = appointments
        .iter()
        .filter(|a| a.occupies_slot() && a.consultation_type == ConsultationType::Individual)
        .filter_map(BookedAppointment::slot)
        .collect();
    slots.sort();
    slots.dedup();
    slots
}

/// Active group-consultation participant counts keyed by slot start minute.
pub fn group_counts(appointments: &[BookedAppointment]) -> HashMap<u16, u32> {
    let mut counts = HashMap::new();
    for appointment in appointments {
        if !appointment.occupies_slot()
            || appointment.consultation_type != ConsultationType::Group
        {
            continue;
        }
        if let Some(slot) = appointment.slot() {
            *counts.entry(slot.start().minutes()).or_insert(0) += 1;
        }
    }
    counts
}
