use axum::{
    extract::{Path, State},
    Json,
};
use database_layer::{Church, NewChurch, UpdateChurch};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::ParokiServer;

/// PPG requirement decision for one church
#[derive(Debug, Serialize, ToSchema)]
pub struct PpgRequirementResponse {
    /// Church short code
    #[schema(example = "STO")]
    pub church_code: String,
    /// Whether PPG attendance tracking is mandatory
    pub ppg_required: bool,
}

/// List all active churches
#[utoipa::path(
    get,
    path = "/api/v1/churches",
    tag = "churches",
    responses(
        (status = 200, description = "Churches retrieved successfully")
    )
)]
pub async fn list_churches(
    State(server): State<ParokiServer>,
) -> Result<Json<ApiResponse<Vec<Church>>>, ApiError> {
    let churches = server.repository.list_churches().await?;
    Ok(Json(api_success(churches)))
}

/// Create a new church
#[utoipa::path(
    post,
    path = "/api/v1/churches",
    tag = "churches",
    responses(
        (status = 200, description = "Church created successfully"),
        (status = 400, description = "Invalid church payload"),
        (status = 409, description = "Church code already in use")
    )
)]
pub async fn create_church(
    State(server): State<ParokiServer>,
    Json(payload): Json<NewChurch>,
) -> Result<Json<ApiResponse<Church>>, ApiError> {
    if payload.code.trim().is_empty() {
        return Err(ApiError::validation("Church code is required"));
    }
    if payload.name.trim().is_empty() {
        return Err(ApiError::validation("Church name is required"));
    }

    if server
        .repository
        .get_church_by_code(&payload.code)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict(format!(
            "Church code '{}' already exists",
            payload.code
        )));
    }

    let church = server.repository.create_church(payload).await?;
    info!(church_code = %church.code, "church created");
    Ok(Json(api_success(church)))
}

/// Get one church by ID
#[utoipa::path(
    get,
    path = "/api/v1/churches/{id}",
    tag = "churches",
    responses(
        (status = 200, description = "Church retrieved successfully"),
        (status = 404, description = "Church not found")
    )
)]
pub async fn get_church(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Church>>, ApiError> {
    let church = server
        .repository
        .get_church(id)
        .await?
        .ok_or_else(|| ApiError::not_found("church"))?;
    Ok(Json(api_success(church)))
}

/// Update a church
#[utoipa::path(
    put,
    path = "/api/v1/churches/{id}",
    tag = "churches",
    responses(
        (status = 200, description = "Church updated successfully"),
        (status = 404, description = "Church not found")
    )
)]
pub async fn update_church(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateChurch>,
) -> Result<Json<ApiResponse<Church>>, ApiError> {
    let church = server.repository.update_church(id, payload).await?;
    Ok(Json(api_success(church)))
}

/// Decide whether PPG attendance tracking is required for a church.
///
/// The stored church flag wins when set to required; otherwise the remote
/// `"ppg"` feature gate decides. A failed gate lookup surfaces as 503.
#[utoipa::path(
    get,
    path = "/api/v1/churches/{id}/ppg-requirement",
    tag = "churches",
    responses(
        (status = 200, description = "Decision computed", body = PpgRequirementResponse),
        (status = 404, description = "Church not found"),
        (status = 503, description = "Gate lookup failed")
    )
)]
pub async fn get_ppg_requirement(
    State(server): State<ParokiServer>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PpgRequirementResponse>>, ApiError> {
    let church = server
        .repository
        .get_church(id)
        .await?
        .ok_or_else(|| ApiError::not_found("church"))?;

    let ppg_required = server.ppg_policy.should_require_ppg(&church).await?;
    info!(church_code = %church.code, ppg_required, "PPG requirement decided");

    Ok(Json(api_success(PpgRequirementResponse {
        church_code: church.code,
        ppg_required,
    })))
}
