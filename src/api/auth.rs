use axum::Json;
use serde::Deserialize;
use tower_sessions::Session;

use super::{ApiError, ApiResponse};
use crate::api::validation::validate_username;

const SESSION_USER_KEY: &str = "user";

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

/// Record the caller's identity in the session. Nothing downstream enforces
/// it; it only drives what the UI offers and the root status text.
pub async fn login(
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let username = validate_username(&payload.username)?;

    session
        .insert(SESSION_USER_KEY, username.to_string())
        .await
        .map_err(|e| ApiError::internal(format!("Failed to store session: {e}")))?;

    Ok(Json(ApiResponse::success(())))
}

pub async fn logout(session: Session) -> Json<ApiResponse<()>> {
    let _ = session.flush().await;
    Json(ApiResponse::success(()))
}

/// Root endpoint reflects session login state as plain text.
pub async fn root_status(session: Session) -> &'static str {
    match session.get::<String>(SESSION_USER_KEY).await {
        Ok(Some(_)) => "Logged in",
        _ => "Logged out",
    }
}
