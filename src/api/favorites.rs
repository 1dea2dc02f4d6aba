use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, FavoriteRequest};
use crate::api::validation::{validate_movie_id, validate_username};
use crate::db::{FavoriteAdd, FavoriteRemove};
use crate::models::movie::Movie;

#[derive(Deserialize)]
pub struct FavoritesQuery {
    pub username: String,
}

/// Add a movie to a user's favorites: one catalog read for the snapshot,
/// then a single conditional append. Creates the user implicitly on first
/// add (201); an already-favorited id is a conflict and leaves the
/// sequence unchanged.
pub async fn add_favorite_movie(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FavoriteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Movie>>), ApiError> {
    let username = validate_username(&payload.username)?;
    let movie_id = validate_movie_id(&payload.movie_id)?;

    let movie = state.tmdb().movie_detail(movie_id).await?;

    match state.store().add_favorite(username, &movie).await? {
        FavoriteAdd::CreatedUser => Ok((StatusCode::CREATED, Json(ApiResponse::success(movie)))),
        FavoriteAdd::Added => Ok((StatusCode::OK, Json(ApiResponse::success(movie)))),
        FavoriteAdd::AlreadyFavorited => Err(ApiError::Conflict(format!(
            "Movie {} is already in favorites",
            movie_id
        ))),
    }
}

pub async fn get_favorite_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FavoritesQuery>,
) -> Result<Json<ApiResponse<Vec<Movie>>>, ApiError> {
    let username = validate_username(&params.username)?;

    let favorites = state
        .store()
        .list_favorites(username)
        .await?
        .ok_or_else(|| ApiError::user_not_found(username))?;

    Ok(Json(ApiResponse::success(favorites)))
}

pub async fn remove_favorite_movie(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FavoriteRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let username = validate_username(&payload.username)?;
    let movie_id = validate_movie_id(&payload.movie_id)?;

    match state.store().remove_favorite(username, movie_id).await? {
        FavoriteRemove::Removed => Ok(Json(ApiResponse::success(()))),
        FavoriteRemove::NotFavorited => Err(ApiError::Conflict(format!(
            "Movie {} is not in favorites",
            movie_id
        ))),
        FavoriteRemove::UserNotFound => Err(ApiError::user_not_found(username)),
    }
}
