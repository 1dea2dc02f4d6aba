use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::OnConflict,
};

use crate::entities::{favorites, prelude::*};
use crate::models::movie::Movie;

/// Repository for the favorites rows embedded in user profiles.
pub struct FavoriteRepository {
    conn: DatabaseConnection,
}

impl FavoriteRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_movie(row: &favorites::Model) -> Result<Movie> {
        serde_json::from_str(&row.movie_json)
            .with_context(|| format!("Corrupt movie snapshot for favorite {}", row.id))
    }

    /// Append a movie snapshot to a user's favorites. Returns false when the
    /// movie id is already present. The uniqueness check and the insert are
    /// one store-evaluated statement, so concurrent adds for the same user
    /// cannot produce duplicate entries.
    pub async fn add(&self, username: &str, movie: &Movie) -> Result<bool> {
        let movie_json = serde_json::to_string(movie).context("Failed to encode movie snapshot")?;

        let active_model = favorites::ActiveModel {
            username: Set(username.to_string()),
            movie_id: Set(movie.id.to_string()),
            movie_json: Set(movie_json),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let inserted = Favorites::insert(active_model)
            .on_conflict(
                OnConflict::columns([favorites::Column::Username, favorites::Column::MovieId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("Failed to insert favorite")?;

        Ok(inserted > 0)
    }

    /// Remove a movie from a user's favorites. Returns false when no
    /// matching entry existed.
    pub async fn remove(&self, username: &str, movie_id: &str) -> Result<bool> {
        let result = Favorites::delete_many()
            .filter(favorites::Column::Username.eq(username))
            .filter(favorites::Column::MovieId.eq(movie_id))
            .exec(&self.conn)
            .await
            .context("Failed to delete favorite")?;

        Ok(result.rows_affected > 0)
    }

    /// All favorites for a user in insertion order (the order movies were
    /// favorited in).
    pub async fn list_for_user(&self, username: &str) -> Result<Vec<Movie>> {
        let rows = Favorites::find()
            .filter(favorites::Column::Username.eq(username))
            .order_by_asc(favorites::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list favorites")?;

        rows.iter().map(Self::map_movie).collect()
    }
}
