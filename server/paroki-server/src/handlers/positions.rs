use axum::{
    extract::{Path, State},
    Json,
};
use database_layer::{NewPosition, Position, UpdatePosition};
use uuid::Uuid;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::ParokiServer;

/// List duty positions for a church
#[utoipa::path(
    get,
    path = "/api/v1/churches/{id}/positions",
    tag = "positions",
    responses(
        (status = 200, description = "Positions retrieved successfully")
    )
)]
pub async fn list_positions(
    State(server): State<ParokiServer>,
    Path(church_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Position>>>, ApiError> {
    let positions = server.repository.list_positions(church_id).await?;
    Ok(Json(api_success(positions)))
}

/// Create a duty position
#[utoipa::path(
    post,
    path = "/api/v1/positions",
    tag = "positions",
    responses(
        (status = 200, description = "Position created successfully"),
        (status = 400, description = "Invalid position payload")
    )
)]
pub async fn create_position(
    State(server): State<ParokiServer>,
    Json(payload): Json<NewPosition>,
) -> Result<Json<ApiResponse<Position>>, ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::validation("Position name is required"));
    }

    let position = server.repository.create_position(payload).await?;
    Ok(Json(api_success(position)))
}

/// Update a duty position
#[utoipa::path(
    put,
    path = "/api/v1/positions/{id}",
    tag = "positions",
    responses(
        (status = 200, description = "Position updated successfully"),
        (status = 404, description = "Position not found")
    )
)]
pub async fn update_position(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePosition>,
) -> Result<Json<ApiResponse<Position>>, ApiError> {
    let position = server.repository.update_position(id, payload).await?;
    Ok(Json(api_success(position)))
}

/// Delete a duty position
#[utoipa::path(
    delete,
    path = "/api/v1/positions/{id}",
    tag = "positions",
    responses(
        (status = 200, description = "Position deleted successfully")
    )
)]
pub async fn delete_position(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    server.repository.delete_position(id).await?;
    Ok(Json(api_success(serde_json::json!({ "deleted": true }))))
}
