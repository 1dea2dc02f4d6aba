use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::models::movie::Movie;

pub const TMDB_API: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("Movie {0} not found in catalog")]
    NotFound(String),

    #[error("Catalog rejected the API key")]
    Unauthorized,

    #[error("Catalog returned status {0}")]
    Status(StatusCode),

    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Thin client for the TMDB v3 REST API. Holds the server-side API key;
/// the key never reaches the browser.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn with_shared_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Search the catalog. The upstream payload is returned unchanged.
    pub async fn search_movies(&self, query: &str) -> Result<Value, TmdbError> {
        let url = format!(
            "{}/search/movie?api_key={}&query={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query)
        );
        self.get_json(&url).await
    }

    /// Current popular listing. The upstream payload is returned unchanged.
    pub async fn popular_movies(&self) -> Result<Value, TmdbError> {
        let url = format!("{}/movie/popular?api_key={}", self.base_url, self.api_key);
        self.get_json(&url).await
    }

    /// Fetch full detail for a single movie, deserialized into the snapshot
    /// shape that gets embedded in a user's favorites.
    pub async fn movie_detail(&self, movie_id: &str) -> Result<Movie, TmdbError> {
        let url = format!(
            "{}/movie/{}?api_key={}",
            self.base_url,
            urlencoding::encode(movie_id),
            self.api_key
        );

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(TmdbError::NotFound(movie_id.to_string())),
            StatusCode::UNAUTHORIZED => Err(TmdbError::Unauthorized),
            status if !status.is_success() => Err(TmdbError::Status(status)),
            _ => Ok(response.json().await?),
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value, TmdbError> {
        let response = self.client.get(url).send().await?;
        match response.status() {
            StatusCode::UNAUTHORIZED => Err(TmdbError::Unauthorized),
            status if !status.is_success() => Err(TmdbError::Status(status)),
            _ => Ok(response.json().await?),
        }
    }
}
