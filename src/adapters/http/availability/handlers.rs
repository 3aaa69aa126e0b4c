//! HTTP handlers for availability endpoints.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use tracing::warn;

use crate::application::handlers::availability::{
    DeleteRangeCommand, DeleteRangeHandler, FindCounselorsHandler, FindCounselorsQuery,
    GetAvailabilityHandler, GetAvailabilityQuery, ReplaceAvailabilityCommand,
    ReplaceAvailabilityHandler,
};
use crate::domain::booking::TimeMatch;
use crate::domain::foundation::{CounselorId, Weekday};
use crate::domain::scheduling::{AvailabilityError, TimeOfDay, TimeRange, SLOT_MINUTES};

use super::dto::{
    ByAvailabilityParams, CounselorsResponse, DeleteAvailabilityRequest, GetAvailabilityParams,
    GetAvailabilityResponse, MutationResponse, SaveAvailabilityRequest, StatusErrorResponse,
    TimeScheduledEntry,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AvailabilityHandlers {
    get_handler: Arc<GetAvailabilityHandler>,
    replace_handler: Arc<ReplaceAvailabilityHandler>,
    delete_handler: Arc<DeleteRangeHandler>,
    find_counselors_handler: Arc<FindCounselorsHandler>,
}

impl AvailabilityHandlers {
    pub fn new(
        get_handler: Arc<GetAvailabilityHandler>,
        replace_handler: Arc<ReplaceAvailabilityHandler>,
        delete_handler: Arc<DeleteRangeHandler>,
        find_counselors_handler: Arc<FindCounselorsHandler>,
    ) -> Self {
        Self {
            get_handler,
            replace_handler,
            delete_handler,
            find_counselors_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/availability - One counselor's stored week
pub async fn get_availability(
    State(handlers): State<AvailabilityHandlers>,
    Query(params): Query<GetAvailabilityParams>,
) -> Response {
    let counselor_id = match CounselorId::from_str(&params.counselor_id) {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid counselor id"),
    };

    match handlers
        .get_handler
        .handle(GetAvailabilityQuery { counselor_id })
        .await
    {
        Ok(week) => {
            let availability = week
                .into_iter()
                .map(|(day, ranges)| {
                    let entries = ranges
                        .into_iter()
                        .map(|time_scheduled| TimeScheduledEntry { time_scheduled })
                        .collect();
                    (day.to_string(), entries)
                })
                .collect();
            (
                StatusCode::OK,
                Json(GetAvailabilityResponse {
                    success: true,
                    availability,
                }),
            )
                .into_response()
        }
        Err(e) => handle_mutation_error(e),
    }
}

/// POST /api/availability - Replace stored ranges for the named days
pub async fn save_availability(
    State(handlers): State<AvailabilityHandlers>,
    Json(req): Json<SaveAvailabilityRequest>,
) -> Response {
    let counselor_id = match CounselorId::from_str(&req.counselor_id) {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid counselor id"),
    };

    // Unknown day names are skipped like any other bad batch entry; the
    // rest of the form still saves.
    let mut days = Vec::new();
    for raw in &req.days {
        match raw.parse::<Weekday>() {
            Ok(day) => days.push(day),
            Err(_) => warn!(raw, "skipping unknown weekday in availability save"),
        }
    }

    let mut times_by_day: HashMap<Weekday, Vec<String>> = HashMap::new();
    for (raw_day, entries) in req.times_by_day {
        if let Ok(day) = raw_day.parse::<Weekday>() {
            times_by_day.entry(day).or_default().extend(entries);
        }
    }

    let cmd = ReplaceAvailabilityCommand {
        counselor_id,
        days,
        times_by_day,
    };

    match handlers.replace_handler.handle(cmd).await {
        Ok(result) => {
            let message = if result.dropped_entries > 0 {
                format!(
                    "Availability saved for {} day(s); {} invalid range(s) were skipped",
                    result.saved_days, result.dropped_entries
                )
            } else {
                format!("Availability saved for {} day(s)", result.saved_days)
            };
            (StatusCode::OK, Json(MutationResponse::ok(message))).into_response()
        }
        Err(e) => handle_mutation_error(e),
    }
}

/// DELETE /api/availability - Remove one specific range from a day
pub async fn delete_availability(
    State(handlers): State<AvailabilityHandlers>,
    Json(req): Json<DeleteAvailabilityRequest>,
) -> Response {
    let counselor_id = match CounselorId::from_str(&req.counselor_id) {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid counselor id"),
    };

    let cmd = DeleteRangeCommand {
        counselor_id,
        day: req.day,
        from: req.from,
        to: req.to,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MutationResponse::ok("Availability range removed")),
        )
            .into_response(),
        Err(e) => handle_mutation_error(e),
    }
}

/// GET /api/counselors/by-availability - Counselors matching a time query
pub async fn counselors_by_availability(
    State(handlers): State<AvailabilityHandlers>,
    Query(params): Query<ByAvailabilityParams>,
) -> Response {
    let query = match build_find_query(&params) {
        Ok(query) => query,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(StatusErrorResponse::error(message)),
            )
                .into_response()
        }
    };

    match handlers.find_counselors_handler.handle(query).await {
        Ok(counselors) => (
            StatusCode::OK,
            Json(CounselorsResponse {
                status: "success".to_string(),
                counselors: counselors.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(e) => handle_status_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Query assembly
// ════════════════════════════════════════════════════════════════════════════

/// Builds the find-counselors query from loose HTTP parameters.
///
/// `time_mode=exact` matches the single slot starting at `time`;
/// `time_mode=overlap` matches any slot intersecting `[from, to)`; with no
/// mode the query is unrestricted.
fn build_find_query(params: &ByAvailabilityParams) -> Result<FindCounselorsQuery, String> {
    let date = match &params.date {
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", raw))?,
        ),
        None => None,
    };

    let day = match &params.day {
        Some(raw) => Some(raw.parse::<Weekday>().map_err(|e| e.to_string())?),
        None => None,
    };

    if date.is_none() && day.is_none() {
        return Err("Either date or day is required".to_string());
    }

    let time_match = match params.time_mode.as_deref() {
        Some("exact") => {
            let raw = params
                .time
                .as_deref()
                .ok_or("time is required for exact matching")?;
            let start: TimeOfDay = raw.parse().map_err(|e: crate::domain::foundation::ValidationError| e.to_string())?;
            let end = start
                .plus_minutes(SLOT_MINUTES)
                .ok_or("time is too late for a full slot")?;
            TimeMatch::Exact(TimeRange::new(start, end).map_err(|e| e.to_string())?)
        }
        Some("overlap") => {
            let raw_from = params
                .from
                .as_deref()
                .ok_or("from is required for overlap matching")?;
            let raw_to = params
                .to
                .as_deref()
                .ok_or("to is required for overlap matching")?;
            let window = TimeRange::normalize(raw_from, raw_to)
                .map_err(|e| e.to_string())?
                .ok_or("from must be before to")?;
            TimeMatch::Overlap(window)
        }
        Some(other) => return Err(format!("Unknown time_mode '{}'", other)),
        None => TimeMatch::Unrestricted,
    };

    Ok(FindCounselorsQuery {
        date,
        day,
        time_match,
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(MutationResponse::failed(message)),
    )
        .into_response()
}

fn handle_mutation_error(error: AvailabilityError) -> Response {
    let status = match &error {
        AvailabilityError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        AvailabilityError::RangeNotFound => StatusCode::NOT_FOUND,
        AvailabilityError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(MutationResponse::failed(error.message()))).into_response()
}

fn handle_status_error(error: AvailabilityError) -> Response {
    let status = match &error {
        AvailabilityError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        AvailabilityError::RangeNotFound => StatusCode::NOT_FOUND,
        AvailabilityError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(StatusErrorResponse::error(error.message()))).into_response()
}
