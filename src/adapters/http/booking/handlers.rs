//! HTTP handlers for booking endpoints.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;

use crate::application::handlers::booking::{
    AvailableSlotsHandler, AvailableSlotsQuery, BookedTimesHandler, BookedTimesQuery,
    CalendarStatsHandler, CalendarStatsQuery, CheckConflictsHandler, CheckConflictsQuery,
    CheckGroupSlotsHandler, CheckGroupSlotsQuery,
};
use crate::domain::booking::BookingError;
use crate::domain::foundation::{ConsultationType, CounselorId};
use crate::domain::scheduling::TimeOfDay;

use super::dto::{
    AvailableSlotEntry, AvailableSlotsParams, AvailableSlotsResponse, BookedTimesParams,
    BookedTimesResponse, BookingErrorResponse, CalendarStatsParams, CalendarStatsResponse,
    CheckConflictsParams, CheckGroupSlotsParams, ConflictResponse, GroupSlotsResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct BookingHandlers {
    available_slots_handler: Arc<AvailableSlotsHandler>,
    booked_times_handler: Arc<BookedTimesHandler>,
    group_slots_handler: Arc<CheckGroupSlotsHandler>,
    conflicts_handler: Arc<CheckConflictsHandler>,
    calendar_stats_handler: Arc<CalendarStatsHandler>,
}

impl BookingHandlers {
    pub fn new(
        available_slots_handler: Arc<AvailableSlotsHandler>,
        booked_times_handler: Arc<BookedTimesHandler>,
        group_slots_handler: Arc<CheckGroupSlotsHandler>,
        conflicts_handler: Arc<CheckConflictsHandler>,
        calendar_stats_handler: Arc<CalendarStatsHandler>,
    ) -> Self {
        Self {
            available_slots_handler,
            booked_times_handler,
            group_slots_handler,
            conflicts_handler,
            calendar_stats_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/appointments/available-slots - Bookable slots on a date
pub async fn available_slots(
    State(handlers): State<BookingHandlers>,
    Query(params): Query<AvailableSlotsParams>,
) -> Response {
    let date = match parse_date(&params.date) {
        Ok(date) => date,
        Err(response) => return response,
    };
    let counselor_id = match parse_optional_counselor(params.counselor_id.as_deref()) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let consultation_type = match ConsultationType::from_str(&params.consultation_type) {
        Ok(t) => t,
        Err(e) => return bad_request(e.to_string()),
    };

    let query = AvailableSlotsQuery {
        date,
        counselor_id,
        consultation_type,
    };

    match handlers.available_slots_handler.handle(query).await {
        Ok(available) => {
            let slots = available
                .slots
                .into_iter()
                .map(|s| AvailableSlotEntry {
                    time: s.slot.to_string(),
                    remaining: match consultation_type {
                        ConsultationType::Group => Some(s.remaining),
                        ConsultationType::Individual => None,
                    },
                })
                .collect();
            (
                StatusCode::OK,
                Json(AvailableSlotsResponse {
                    status: "success".to_string(),
                    slots,
                }),
            )
                .into_response()
        }
        Err(e) => handle_booking_error(e),
    }
}

/// GET /api/appointments/booked-times - Occupied slots on a date
pub async fn booked_times(
    State(handlers): State<BookingHandlers>,
    Query(params): Query<BookedTimesParams>,
) -> Response {
    let date = match parse_date(&params.date) {
        Ok(date) => date,
        Err(response) => return response,
    };
    let counselor_id = match parse_optional_counselor(params.counselor_id.as_deref()) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let consultation_type = match params.consultation_type.as_deref() {
        Some(raw) => match ConsultationType::from_str(raw) {
            Ok(t) => Some(t),
            Err(e) => return bad_request(e.to_string()),
        },
        None => None,
    };

    let query = BookedTimesQuery {
        date,
        counselor_id,
        consultation_type,
    };

    match handlers.booked_times_handler.handle(query).await {
        Ok(slots) => (
            StatusCode::OK,
            Json(BookedTimesResponse {
                status: "success".to_string(),
                booked: slots.into_iter().map(|s| s.to_string()).collect(),
            }),
        )
            .into_response(),
        Err(e) => handle_booking_error(e),
    }
}

/// GET /api/appointments/check-group-slots - Group capacity at one slot
pub async fn check_group_slots(
    State(handlers): State<BookingHandlers>,
    Query(params): Query<CheckGroupSlotsParams>,
) -> Response {
    let date = match parse_date(&params.date) {
        Ok(date) => date,
        Err(response) => return response,
    };
    let time = match TimeOfDay::from_str(&params.time) {
        Ok(time) => time,
        Err(e) => return bad_request(e.to_string()),
    };
    let counselor_id = match parse_optional_counselor(params.counselor_id.as_deref()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = CheckGroupSlotsQuery {
        date,
        time,
        counselor_id,
    };

    match handlers.group_slots_handler.handle(query).await {
        Ok(availability) => (
            StatusCode::OK,
            Json(GroupSlotsResponse::from_availability(availability)),
        )
            .into_response(),
        Err(e) => handle_booking_error(e),
    }
}

/// GET /api/appointments/check-conflicts - Individual booking conflict check
pub async fn check_conflicts(
    State(handlers): State<BookingHandlers>,
    Query(params): Query<CheckConflictsParams>,
) -> Response {
    let counselor_id = match CounselorId::from_str(&params.counselor_id) {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid counselor id"),
    };
    let date = match parse_date(&params.date) {
        Ok(date) => date,
        Err(response) => return response,
    };
    let time = match TimeOfDay::from_str(&params.time) {
        Ok(time) => time,
        Err(e) => return bad_request(e.to_string()),
    };

    let query = CheckConflictsQuery {
        counselor_id,
        date,
        time,
    };

    match handlers.conflicts_handler.handle(query).await {
        Ok(check) => (StatusCode::OK, Json(ConflictResponse::from_check(check))).into_response(),
        Err(e) => handle_booking_error(e),
    }
}

/// GET /api/appointments/calendar-stats - Month appointment counts
pub async fn calendar_stats(
    State(handlers): State<BookingHandlers>,
    Query(params): Query<CalendarStatsParams>,
) -> Response {
    let counselor_id = match parse_optional_counselor(params.counselor_id.as_deref()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = CalendarStatsQuery {
        year: params.year,
        month: params.month,
        counselor_id,
    };

    match handlers.calendar_stats_handler.handle(query).await {
        Ok(counts) => (
            StatusCode::OK,
            Json(CalendarStatsResponse::from_counts(counts)),
        )
            .into_response(),
        Err(e) => handle_booking_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Parameter parsing
// ════════════════════════════════════════════════════════════════════════════

fn parse_date(raw: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| bad_request(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
}

fn parse_optional_counselor(raw: Option<&str>) -> Result<Option<CounselorId>, Response> {
    match raw {
        Some(raw) => CounselorId::from_str(raw)
            .map(Some)
            .map_err(|_| bad_request("Invalid counselor id")),
        None => Ok(None),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(BookingErrorResponse::error(message)),
    )
        .into_response()
}

fn handle_booking_error(error: BookingError) -> Response {
    let status = match &error {
        BookingError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
        BookingError::CapacityExceeded { .. } => StatusCode::CONFLICT,
        BookingError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(BookingErrorResponse::error(error.message()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_parsing_accepts_iso_and_rejects_others() {
        assert!(parse_date("2025-06-02").is_ok());
        assert!(parse_date("06/02/2025").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn optional_counselor_accepts_absence() {
        assert_eq!(parse_optional_counselor(None).unwrap(), None);
        assert!(parse_optional_counselor(Some("junk")).is_err());
    }

    #[test]
    fn booking_errors_map_to_http_statuses() {
        let response = handle_booking_error(BookingError::invalid_query("time", "bad"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = handle_booking_error(BookingError::capacity_exceeded(5));
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = handle_booking_error(BookingError::store("down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
