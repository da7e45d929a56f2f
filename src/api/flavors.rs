//! Flavor API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{created, error, success, ApiResult};
use crate::errors::{AppError, FLAVOR_NOT_FOUND};
use crate::models::{CreateFlavorRequest, Flavor, UpdateFlavorRequest};
use crate::AppState;

/// GET /api/v1/flavors - List all flavors.
pub async fn list_flavors(State(state): State<AppState>) -> ApiResult<Vec<Flavor>> {
    match state.repo.list_flavors().await {
        Ok(flavors) => success(flavors),
        Err(e) => error(e),
    }
}

/// GET /api/v1/flavors/{id} - Get a single flavor.
pub async fn get_flavor(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Flavor> {
    match state.repo.get_flavor(id).await {
        Ok(Some(flavor)) => success(flavor),
        Ok(None) => error(AppError::NotFound(FLAVOR_NOT_FOUND.to_string())),
        Err(e) => error(e),
    }
}

/// POST /api/v1/flavors - Create a new flavor.
pub async fn create_flavor(
    State(state): State<AppState>,
    Json(request): Json<CreateFlavorRequest>,
) -> ApiResult<Flavor> {
    // Validate required fields
    if request.flavor.trim().is_empty() {
        return error(AppError::Validation("Flavor name is required".to_string()));
    }

    match state.repo.create_flavor(&request).await {
        Ok(flavor) => created(flavor),
        Err(e) => error(e),
    }
}

/// PUT /api/v1/flavors/{id} - Partially update a flavor.
pub async fn update_flavor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateFlavorRequest>,
) -> ApiResult<Flavor> {
    if let Some(name) = &request.flavor {
        if name.trim().is_empty() {
            return error(AppError::Validation("Flavor name is required".to_string()));
        }
    }

    match state.repo.update_flavor(id, &request).await {
        Ok(flavor) => success(flavor),
        Err(e) => error(e),
    }
}

/// DELETE /api/v1/flavors/{id} - Delete a flavor.
pub async fn delete_flavor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.repo.delete_flavor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
