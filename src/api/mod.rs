use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode},
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use time;

use crate::config::Config;
use crate::state::SharedState;

pub mod auth;
mod catalog;
mod comments;
mod error;
mod favorites;
mod profile;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn tmdb(&self) -> &Arc<crate::clients::tmdb::TmdbClient> {
        &self.shared.tmdb
    }
}

#[must_use]
pub fn create_app_state(shared: Arc<SharedState>) -> Arc<AppState> {
    Arc::new(AppState { shared })
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = {
        let config = state.config().read().await;
        config.server.cors_allowed_origins.clone()
    };

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(60)));

    let api_router = Router::new()
        .route("/getProfile", get(profile::get_profile))
        .route("/postProfile", post(profile::post_profile))
        .route("/searchMovies", get(catalog::search_movies))
        .route("/getPopularMovies", get(catalog::get_popular_movies))
        .route("/addFavoriteMovie", post(favorites::add_favorite_movie))
        .route("/getFavoriteMovies", get(favorites::get_favorite_movies))
        .route(
            "/removeFavoriteMovie",
            post(favorites::remove_favorite_movie),
        )
        .route("/postComment", post(comments::post_comment))
        .route("/getComments", get(comments::get_comments))
        .route("/deleteComment", delete(comments::delete_comment))
        .route("/editComment", put(comments::edit_comment))
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(auth::root_status))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .nest("/api", api_router)
        .fallback(not_found)
        .layer(session_layer)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

/// Fixed payload for every unmatched route.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "status": 404,
            "message": "This is obviously not what you are looking for.",
        })),
    )
}
