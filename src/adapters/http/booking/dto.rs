//! HTTP DTOs for booking endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::booking::{ConflictCheck, GroupAvailability};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for the available-slots listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailableSlotsParams {
    pub date: String,
    #[serde(default)]
    pub counselor_id: Option<String>,
    pub consultation_type: String,
}

/// Query parameters for the booked-times listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BookedTimesParams {
    pub date: String,
    #[serde(default)]
    pub counselor_id: Option<String>,
    #[serde(default)]
    pub consultation_type: Option<String>,
}

/// Query parameters for the group capacity check.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckGroupSlotsParams {
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub counselor_id: Option<String>,
}

/// Query parameters for the conflict check.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConflictsParams {
    pub counselor_id: String,
    pub date: String,
    pub time: String,
}

/// Query parameters for month calendar statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarStatsParams {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub counselor_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One bookable slot; `remaining` is present for group consultations only.
#[derive(Debug, Clone, Serialize)]
pub struct AvailableSlotEntry {
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
}

/// Bookable slots for one date.
#[derive(Debug, Clone, Serialize)]
pub struct AvailableSlotsResponse {
    pub status: String,
    pub slots: Vec<AvailableSlotEntry>,
}

/// Booked slot labels for one date.
#[derive(Debug, Clone, Serialize)]
pub struct BookedTimesResponse {
    pub status: String,
    pub booked: Vec<String>,
}

/// Group capacity summary for one slot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSlotsResponse {
    pub status: String,
    pub is_available: bool,
    pub booked_slots: u32,
    pub available_slots: u32,
}

impl GroupSlotsResponse {
    pub fn from_availability(availability: GroupAvailability) -> Self {
        Self {
            status: "success".to_string(),
            is_available: availability.is_available,
            booked_slots: availability.booked_slots,
            available_slots: availability.available_slots,
        }
    }
}

/// Conflict check outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResponse {
    pub status: String,
    pub has_conflict: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_type: Option<String>,
}

impl ConflictResponse {
    pub fn from_check(check: ConflictCheck) -> Self {
        Self {
            status: "success".to_string(),
            has_conflict: check.has_conflict,
            message: check.message,
            conflict_type: check
                .conflict_type
                .map(|t| format!("{:?}", t).to_lowercase()),
        }
    }
}

/// Per-day appointment counts for a month, keyed by day-of-month.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarStatsResponse {
    pub status: String,
    pub days: HashMap<String, u32>,
}

impl CalendarStatsResponse {
    pub fn from_counts(counts: HashMap<u32, u32>) -> Self {
        Self {
            status: "success".to_string(),
            days: counts
                .into_iter()
                .map(|(day, count)| (day.to_string(), count))
                .collect(),
        }
    }
}

/// Error envelope shared by all booking endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct BookingErrorResponse {
    pub status: String,
    pub message: String,
}

impl BookingErrorResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
