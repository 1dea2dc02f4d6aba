use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::api::validation::validate_search_query;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// Forward a catalog search. The upstream payload is passed through
/// unchanged; the API key stays server-side.
pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let query = validate_search_query(&params.q)?;

    let payload = state.tmdb().search_movies(query).await?;

    Ok(Json(payload))
}

pub async fn get_popular_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let payload = state.tmdb().popular_movies().await?;

    Ok(Json(payload))
}
