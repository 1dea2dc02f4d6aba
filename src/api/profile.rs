use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, CreateProfileRequest, UserProfileDto};
use crate::api::validation::validate_username;

#[derive(Deserialize)]
pub struct ProfileQuery {
    pub username: String,
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProfileQuery>,
) -> Result<Json<ApiResponse<UserProfileDto>>, ApiError> {
    let username = validate_username(&params.username)?;

    let profile = state
        .store()
        .get_profile(username)
        .await?
        .ok_or_else(|| ApiError::user_not_found(username))?;

    Ok(Json(ApiResponse::success(profile.into())))
}

pub async fn post_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserProfileDto>>), ApiError> {
    let username = validate_username(&payload.username)?;

    let profile = state
        .store()
        .create_profile(username, &payload.favorites)
        .await?
        .ok_or_else(|| ApiError::Conflict(format!("User '{}' already exists", username)))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(profile.into())),
    ))
}
