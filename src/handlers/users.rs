use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::database::models::{User, UserPatch};
use crate::database::UpdateOutcome;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /users - List all users
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    let users = state.users.list().await?;
    Ok(ApiResponse::success(users))
}

/// GET /users/:id - Get a single user
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<User> {
    match state.users.get(&id).await? {
        Some(user) => Ok(ApiResponse::success(user)),
        None => Err(ApiError::not_found(format!("User {} does not exist", id))),
    }
}

/// POST /users - Create a user
pub async fn create(State(state): State<AppState>, Json(user): Json<User>) -> ApiResult<User> {
    let created = state.users.insert(user).await?;
    tracing::info!("Created user {}", created.id);
    Ok(ApiResponse::created(created))
}

/// PUT /users/:id - Write the supplied fields, leaving the rest untouched
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> ApiResult<User> {
    match state.users.update(&id, patch).await? {
        UpdateOutcome::Updated(user) => Ok(ApiResponse::success(user)),
        UpdateOutcome::Unchanged => Err(ApiError::bad_request(format!("User {} has not been updated", id))),
        UpdateOutcome::NotFound => Err(ApiError::not_found(format!("User {} not found", id))),
    }
}

/// DELETE /users/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    if state.users.delete(&id).await? {
        tracing::info!("Deleted user {}", id);
        Ok(ApiResponse::no_content())
    } else {
        Err(ApiError::not_found(format!("User {} does not exist", id)))
    }
}

/// GET /users/:id/exists - The stored user, or 204 when there is none yet
pub async fn exists(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, ApiError> {
    Ok(match state.users.get(&id).await? {
        Some(user) => ApiResponse::success(user).into_response(),
        None => ApiResponse::no_content().into_response(),
    })
}
