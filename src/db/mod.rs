use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::comment::Comment;
pub use repositories::user::UserProfile;

use crate::models::movie::Movie;

/// Outcome of a favorite-add. The conflict case leaves the stored sequence
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAdd {
    /// Appended to an existing user's favorites.
    Added,
    /// The user did not exist; a profile was created with this movie as the
    /// sole favorite.
    CreatedUser,
    /// The movie id was already among the user's favorites.
    AlreadyFavorited,
}

/// Outcome of a favorite-remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteRemove {
    Removed,
    /// User exists but the movie id was not among their favorites.
    NotFavorited,
    UserNotFound,
}

/// Persistence handle shared across all request handlers. Constructed once
/// before serving begins and injected through application state; nothing in
/// the crate holds a global connection.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Every pooled connection to an in-memory SQLite database would get
        // its own empty database, so those are pinned to a single connection.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    /// Release the underlying pool. Part of graceful shutdown.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn favorite_repo(&self) -> repositories::favorite::FavoriteRepository {
        repositories::favorite::FavoriteRepository::new(self.conn.clone())
    }

    fn comment_repo(&self) -> repositories::comment::CommentRepository {
        repositories::comment::CommentRepository::new(self.conn.clone())
    }

    // ------------------------------------------------------------------
    // Profiles
    // ------------------------------------------------------------------

    /// Fetch the full user document: profile row plus embedded favorites.
    pub async fn get_profile(&self, username: &str) -> Result<Option<UserProfile>> {
        let Some(user) = self.user_repo().get_by_username(username).await? else {
            return Ok(None);
        };

        let favorites = self.favorite_repo().list_for_user(username).await?;

        Ok(Some(UserProfile {
            username: user.username,
            favorites,
            created_at: user.created_at,
        }))
    }

    /// Insert a new profile. Returns None when the username is already
    /// taken (store-level uniqueness).
    pub async fn create_profile(
        &self,
        username: &str,
        favorites: &[Movie],
    ) -> Result<Option<UserProfile>> {
        if !self.user_repo().ensure_exists(username).await? {
            return Ok(None);
        }

        let repo = self.favorite_repo();
        for movie in favorites {
            repo.add(username, movie).await?;
        }

        self.get_profile(username).await
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Add a movie snapshot to a user's favorites, creating the user
    /// implicitly on first add. Both the user creation and the append are
    /// single conditional statements; there is no check-then-act window.
    pub async fn add_favorite(&self, username: &str, movie: &Movie) -> Result<FavoriteAdd> {
        let created_user = self.user_repo().ensure_exists(username).await?;

        if !self.favorite_repo().add(username, movie).await? {
            return Ok(FavoriteAdd::AlreadyFavorited);
        }

        if created_user {
            info!("Created user {} with favorite movie {}", username, movie.id);
            Ok(FavoriteAdd::CreatedUser)
        } else {
            Ok(FavoriteAdd::Added)
        }
    }

    pub async fn remove_favorite(&self, username: &str, movie_id: &str) -> Result<FavoriteRemove> {
        if self.favorite_repo().remove(username, movie_id).await? {
            return Ok(FavoriteRemove::Removed);
        }

        // Nothing was deleted; distinguish an unknown user from a movie
        // that simply was not favorited.
        if self.user_repo().get_by_username(username).await?.is_none() {
            Ok(FavoriteRemove::UserNotFound)
        } else {
            Ok(FavoriteRemove::NotFavorited)
        }
    }

    /// The user's favorites sequence, or None when no such user exists.
    pub async fn list_favorites(&self, username: &str) -> Result<Option<Vec<Movie>>> {
        if self.user_repo().get_by_username(username).await?.is_none() {
            return Ok(None);
        }

        Ok(Some(self.favorite_repo().list_for_user(username).await?))
    }

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    pub async fn post_comment(
        &self,
        username: &str,
        movie_id: &str,
        content: &str,
    ) -> Result<Comment> {
        self.comment_repo().insert(username, movie_id, content).await
    }

    pub async fn comments_for_movie(&self, movie_id: &str) -> Result<Vec<Comment>> {
        self.comment_repo().list_for_movie(movie_id).await
    }

    pub async fn edit_comment(&self, id: i32, content: &str) -> Result<bool> {
        self.comment_repo().update_content(id, content).await
    }

    pub async fn delete_comment(&self, id: i32) -> Result<bool> {
        self.comment_repo().delete(id).await
    }
}
