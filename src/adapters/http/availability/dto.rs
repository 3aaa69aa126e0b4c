//! HTTP DTOs for availability endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::ports::CounselorSummary;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for reading one counselor's week.
#[derive(Debug, Clone, Deserialize)]
pub struct GetAvailabilityParams {
    pub counselor_id: String,
}

/// Request replacing stored ranges for the named days.
///
/// `times_by_day` values are raw `"H:MM AM-H:MM PM"` pairs as the
/// availability form submits them.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveAvailabilityRequest {
    pub counselor_id: String,
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub times_by_day: HashMap<String, Vec<String>>,
}

/// Request deleting one specific range from a day.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAvailabilityRequest {
    pub counselor_id: String,
    pub day: String,
    pub from: String,
    pub to: String,
}

/// Query parameters for the counselors-by-availability search.
#[derive(Debug, Clone, Deserialize)]
pub struct ByAvailabilityParams {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub time_mode: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One stored range, rendered for display.
#[derive(Debug, Clone, Serialize)]
pub struct TimeScheduledEntry {
    pub time_scheduled: String,
}

/// Full-week availability response.
#[derive(Debug, Clone, Serialize)]
pub struct GetAvailabilityResponse {
    pub success: bool,
    pub availability: BTreeMap<String, Vec<TimeScheduledEntry>>,
}

/// Outcome envelope for availability mutations.
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// One counselor in a by-availability listing.
#[derive(Debug, Clone, Serialize)]
pub struct CounselorEntry {
    pub counselor_id: String,
    pub name: String,
}

impl From<CounselorSummary> for CounselorEntry {
    fn from(summary: CounselorSummary) -> Self {
        Self {
            counselor_id: summary.id.to_string(),
            name: summary.name,
        }
    }
}

/// Counselors-by-availability response.
#[derive(Debug, Clone, Serialize)]
pub struct CounselorsResponse {
    pub status: String,
    pub counselors: Vec<CounselorEntry>,
}

/// Error envelope for status-shaped endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct StatusErrorResponse {
    pub status: String,
    pub message: String,
}

impl StatusErrorResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
