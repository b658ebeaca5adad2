use axum::{
    extract::{Path, State},
    Json,
};
use database_layer::{MassSchedule, NewMassSchedule, UpdateMassSchedule};
use uuid::Uuid;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::ParokiServer;

/// List mass schedules for a church
#[utoipa::path(
    get,
    path = "/api/v1/churches/{id}/masses",
    tag = "masses",
    responses(
        (status = 200, description = "Mass schedules retrieved successfully")
    )
)]
pub async fn list_masses(
    State(server): State<ParokiServer>,
    Path(church_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<MassSchedule>>>, ApiError> {
    let masses = server.repository.list_masses(church_id).await?;
    Ok(Json(api_success(masses)))
}

/// Create a mass schedule
#[utoipa::path(
    post,
    path = "/api/v1/masses",
    tag = "masses",
    responses(
        (status = 200, description = "Mass schedule created successfully"),
        (status = 400, description = "Invalid mass schedule payload")
    )
)]
pub async fn create_mass(
    State(server): State<ParokiServer>,
    Json(payload): Json<NewMassSchedule>,
) -> Result<Json<ApiResponse<MassSchedule>>, ApiError> {
    if payload.code.trim().is_empty() {
        return Err(ApiError::validation("Mass code is required"));
    }
    if !(0..=6).contains(&payload.day) {
        return Err(ApiError::validation(
            "Mass day must be between 0 (Sunday) and 6 (Saturday)",
        ));
    }

    let mass = server.repository.create_mass(payload).await?;
    Ok(Json(api_success(mass)))
}

/// Update a mass schedule
#[utoipa::path(
    put,
    path = "/api/v1/masses/{id}",
    tag = "masses",
    responses(
        (status = 200, description = "Mass schedule updated successfully"),
        (status = 404, description = "Mass schedule not found")
    )
)]
pub async fn update_mass(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMassSchedule>,
) -> Result<Json<ApiResponse<MassSchedule>>, ApiError> {
    if let Some(day) = payload.day {
        if !(0..=6).contains(&day) {
            return Err(ApiError::validation(
                "Mass day must be between 0 (Sunday) and 6 (Saturday)",
            ));
        }
    }

    let mass = server.repository.update_mass(id, payload).await?;
    Ok(Json(api_success(mass)))
}

/// Delete a mass schedule
#[utoipa::path(
    delete,
    path = "/api/v1/masses/{id}",
    tag = "masses",
    responses(
        (status = 200, description = "Mass schedule deleted successfully")
    )
)]
pub async fn delete_mass(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    server.repository.delete_mass(id).await?;
    Ok(Json(api_success(serde_json::json!({ "deleted": true }))))
}
