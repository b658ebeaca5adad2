use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use database_layer::{Event, EventUsher, JadwalEvent, NewEvent, NewEventUsher};
use serde::Deserialize;
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::ParokiServer;
use crate::validation::validate_usher_names;

/// Inclusive date range covering whole scheduling weeks
#[derive(Debug, Deserialize, IntoParams)]
pub struct WeekRangeQuery {
    /// First date of the range (inclusive)
    pub start: NaiveDate,
    /// Last date of the range (inclusive)
    pub end: NaiveDate,
}

impl WeekRangeQuery {
    fn validate(&self) -> Result<(), ApiError> {
        if self.start > self.end {
            return Err(ApiError::bad_request(
                "Range start must not be after range end",
            ));
        }
        Ok(())
    }
}

/// Payload for creating an event under a church
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    pub mass_id: Option<Uuid>,
    pub date: NaiveDate,
    pub week_number: i32,
    pub description: Option<String>,
}

/// Payload for toggling event completion
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetCompleteRequest {
    pub is_complete: bool,
}

/// One usher row as submitted from the assignment form
#[derive(Debug, Deserialize, ToSchema)]
pub struct UsherPayload {
    pub name: String,
    pub zone_name: Option<String>,
    pub position_name: Option<String>,
    #[serde(default)]
    pub is_ppg: bool,
}

/// Full usher assignment submission for one event
#[derive(Debug, Deserialize, ToSchema)]
pub struct UsherAssignmentsRequest {
    pub ushers: Vec<UsherPayload>,
}

/// List events for a church within a week range
#[utoipa::path(
    get,
    path = "/api/v1/churches/{id}/events",
    tag = "events",
    params(WeekRangeQuery),
    responses(
        (status = 200, description = "Events retrieved successfully"),
        (status = 400, description = "Invalid date range")
    )
)]
pub async fn list_events(
    State(server): State<ParokiServer>,
    Path(church_id): Path<Uuid>,
    Query(range): Query<WeekRangeQuery>,
) -> Result<Json<ApiResponse<Vec<Event>>>, ApiError> {
    range.validate()?;

    let events = server
        .repository
        .events_by_week_range(church_id, range.start, range.end)
        .await?;
    Ok(Json(api_success(events)))
}

/// Create an event for a church
#[utoipa::path(
    post,
    path = "/api/v1/churches/{id}/events",
    tag = "events",
    responses(
        (status = 200, description = "Event created successfully"),
        (status = 404, description = "Church not found")
    )
)]
pub async fn create_event(
    State(server): State<ParokiServer>,
    Path(church_id): Path<Uuid>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    server
        .repository
        .get_church(church_id)
        .await?
        .ok_or_else(|| ApiError::not_found("church"))?;

    let event = server
        .repository
        .create_event(NewEvent {
            church_id,
            mass_id: payload.mass_id,
            date: payload.date,
            week_number: payload.week_number,
            description: payload.description,
        })
        .await?;

    Ok(Json(api_success(event)))
}

/// Printable weekly schedule (cetak jadwal): events with their ushers
#[utoipa::path(
    get,
    path = "/api/v1/churches/{id}/jadwal",
    tag = "events",
    params(WeekRangeQuery),
    responses(
        (status = 200, description = "Schedule retrieved successfully"),
        (status = 400, description = "Invalid date range")
    )
)]
pub async fn get_jadwal(
    State(server): State<ParokiServer>,
    Path(church_id): Path<Uuid>,
    Query(range): Query<WeekRangeQuery>,
) -> Result<Json<ApiResponse<Vec<JadwalEvent>>>, ApiError> {
    range.validate()?;

    let jadwal = server
        .repository
        .jadwal_for_range(church_id, range.start, range.end)
        .await?;
    Ok(Json(api_success(jadwal)))
}

/// Get one event by ID
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = "events",
    responses(
        (status = 200, description = "Event retrieved successfully"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn get_event(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let event = server
        .repository
        .get_event(id)
        .await?
        .ok_or_else(|| ApiError::not_found("event"))?;
    Ok(Json(api_success(event)))
}

/// Mark an event complete or incomplete
#[utoipa::path(
    patch,
    path = "/api/v1/events/{id}/complete",
    tag = "events",
    responses(
        (status = 200, description = "Event updated successfully"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn set_event_complete(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetCompleteRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let event = server
        .repository
        .set_event_complete(id, payload.is_complete)
        .await?;
    Ok(Json(api_success(event)))
}

/// List usher assignments for an event
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}/ushers",
    tag = "events",
    responses(
        (status = 200, description = "Ushers retrieved successfully"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn list_event_ushers(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<EventUsher>>>, ApiError> {
    server
        .repository
        .get_event(id)
        .await?
        .ok_or_else(|| ApiError::not_found("event"))?;

    let ushers = server.repository.list_event_ushers(id).await?;
    Ok(Json(api_success(ushers)))
}

/// Replace the usher assignments for an event.
///
/// Names are validated before anything is written: uniqueness across the
/// submission, length bounds, repeated-character heuristic, and charset. A
/// failed validation returns 400 with the Indonesian message the form
/// displays.
#[utoipa::path(
    put,
    path = "/api/v1/events/{id}/ushers",
    tag = "events",
    responses(
        (status = 200, description = "Ushers saved successfully"),
        (status = 400, description = "Usher names failed validation"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn put_event_ushers(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UsherAssignmentsRequest>,
) -> Result<Json<ApiResponse<Vec<EventUsher>>>, ApiError> {
    server
        .repository
        .get_event(id)
        .await?
        .ok_or_else(|| ApiError::not_found("event"))?;

    let names: Vec<&str> = payload.ushers.iter().map(|u| u.name.as_str()).collect();
    let result = validate_usher_names(&names);
    if let Some(message) = result.error {
        return Err(ApiError::validation(message));
    }

    let rows: Vec<NewEventUsher> = payload
        .ushers
        .into_iter()
        .map(|u| NewEventUsher {
            name: u.name,
            zone_name: u.zone_name,
            position_name: u.position_name,
            is_ppg: u.is_ppg,
        })
        .collect();

    let saved = server.repository.replace_event_ushers(id, rows).await?;
    info!(event_id = %id, count = saved.len(), "event ushers saved");
    Ok(Json(api_success(saved)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_range_rejects_inverted_bounds() {
        let range = WeekRangeQuery {
            start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        };
        assert!(range.validate().is_err());
    }

    #[test]
    fn week_range_accepts_single_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let range = WeekRangeQuery {
            start: day,
            end: day,
        };
        assert!(range.validate().is_ok());
    }

    #[test]
    fn usher_payload_defaults_is_ppg_to_false() {
        let payload: UsherPayload =
            serde_json::from_str(r#"{"name":"Budi Santoso"}"#).unwrap();
        assert!(!payload.is_ppg);
        assert!(payload.zone_name.is_none());
    }
}
