//! Individual-appointment conflict detection.

use serde::Serialize;

use crate::domain::foundation::ConsultationType;
use crate::domain::scheduling::TimeOfDay;

use super::appointment::BookedAppointment;

/// Kind of conflict found for a requested booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictType {
    Individual,
}

/// Outcome of a conflict check for one counselor/date/time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictCheck {
    pub has_conflict: bool,
    pub conflict_type: Option<ConflictType>,
    pub message: Option<String>,
}

impl ConflictCheck {
    fn clear() -> Self {
        Self {
            has_conflict: false,
            conflict_type: None,
            message: None,
        }
    }
}

/// Checks whether booking the given start time would collide with an
/// existing appointment for the same counselor and date.
///
/// Only active individual appointments block: group consultations are
/// governed by capacity, not exclusivity, and rejected/cancelled/completed
/// appointments are history.
pub fn detect_conflict(appointments: &[BookedAppointment], time: TimeOfDay) -> ConflictCheck {
    let conflicting = appointments.iter().any(|appointment| {
        appointment.occupies_slot()
            && appointment.consultation_type == ConsultationType::Individual
            && appointment
                .slot()
                .is_some_and(|slot| slot.start() == time)
    });

    if conflicting {
        ConflictCheck {
            has_conflict: true,
            conflict_type: Some(ConflictType::Individual),
            message: Some(
                "The counselor already has an individual consultation at this time".to_string(),
            ),
        }
    } else {
        ConflictCheck::clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AppointmentStatus, CounselorId};
    use chrono::NaiveDate;

    fn appointment(
        time: &str,
        consultation_type: ConsultationType,
        status: AppointmentStatus,
    ) -> BookedAppointment {
        BookedAppointment {
            counselor_id: CounselorId::new(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            time: time.to_string(),
            consultation_type,
            status,
        }
    }

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn active_individual_appointment_conflicts() {
        for status in [AppointmentStatus::Pending, AppointmentStatus::Approved] {
            let rows = vec![appointment("9:00 AM - 9:30 AM", ConsultationType::Individual, status)];
            let check = detect_conflict(&rows, t("9:00 AM"));
            assert!(check.has_conflict);
            assert_eq!(check.conflict_type, Some(ConflictType::Individual));
            assert!(check.message.is_some());
        }
    }

    #[test]
    fn group_appointments_never_conflict_here() {
        let rows = vec![appointment(
            "9:00 AM - 9:30 AM",
            ConsultationType::Group,
            AppointmentStatus::Approved,
        )];
        assert!(!detect_conflict(&rows, t("9:00 AM")).has_conflict);
    }

    #[test]
    fn inactive_statuses_do_not_conflict() {
        for status in [
            AppointmentStatus::Rejected,
            AppointmentStatus::Cancelled,
            AppointmentStatus::Completed,
        ] {
            let rows =
                vec![appointment("9:00 AM - 9:30 AM", ConsultationType::Individual, status)];
            assert!(!detect_conflict(&rows, t("9:00 AM")).has_conflict);
        }
    }

    #[test]
    fn different_time_does_not_conflict() {
        let rows = vec![appointment(
            "9:00 AM - 9:30 AM",
            ConsultationType::Individual,
            AppointmentStatus::Approved,
        )];
        assert!(!detect_conflict(&rows, t("9:30 AM")).has_conflict);
    }
}
