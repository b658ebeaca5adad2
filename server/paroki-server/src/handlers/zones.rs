use axum::{
    extract::{Path, State},
    Json,
};
use database_layer::{NewZone, UpdateZone, Zone};
use uuid::Uuid;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::ParokiServer;

/// List zones (wilayah) for a church
#[utoipa::path(
    get,
    path = "/api/v1/churches/{id}/zones",
    tag = "zones",
    responses(
        (status = 200, description = "Zones retrieved successfully")
    )
)]
pub async fn list_zones(
    State(server): State<ParokiServer>,
    Path(church_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Zone>>>, ApiError> {
    let zones = server.repository.list_zones(church_id).await?;
    Ok(Json(api_success(zones)))
}

/// Create a zone
#[utoipa::path(
    post,
    path = "/api/v1/zones",
    tag = "zones",
    responses(
        (status = 200, description = "Zone created successfully"),
        (status = 400, description = "Invalid zone payload")
    )
)]
pub async fn create_zone(
    State(server): State<ParokiServer>,
    Json(payload): Json<NewZone>,
) -> Result<Json<ApiResponse<Zone>>, ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::validation("Zone name is required"));
    }

    let zone = server.repository.create_zone(payload).await?;
    Ok(Json(api_success(zone)))
}

/// Update a zone
#[utoipa::path(
    put,
    path = "/api/v1/zones/{id}",
    tag = "zones",
    responses(
        (status = 200, description = "Zone updated successfully"),
        (status = 404, description = "Zone not found")
    )
)]
pub async fn update_zone(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateZone>,
) -> Result<Json<ApiResponse<Zone>>, ApiError> {
    let zone = server.repository.update_zone(id, payload).await?;
    Ok(Json(api_success(zone)))
}

/// Delete a zone
#[utoipa::path(
    delete,
    path = "/api/v1/zones/{id}",
    tag = "zones",
    responses(
        (status = 200, description = "Zone deleted successfully")
    )
)]
pub async fn delete_zone(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    server.repository.delete_zone(id).await?;
    Ok(Json(api_success(serde_json::json!({ "deleted": true }))))
}
