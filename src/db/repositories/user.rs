use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, sea_query::OnConflict,
};

use crate::entities::{prelude::*, users};
use crate::models::movie::Movie;

/// Full user document as exposed through the API: the profile row plus its
/// embedded, insertion-ordered favorites sequence.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub username: String,
    pub favorites: Vec<Movie>,
    pub created_at: String,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<users::Model>> {
        Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user by username")
    }

    /// Insert the user row if it does not exist yet. Returns whether a row
    /// was created; an existing username is not an error. The conditional
    /// insert is evaluated by the store, so concurrent calls cannot create
    /// duplicates.
    pub async fn ensure_exists(&self, username: &str) -> Result<bool> {
        let active_model = users::ActiveModel {
            username: Set(username.to_string()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let inserted = Users::insert(active_model)
            .on_conflict(
                OnConflict::column(users::Column::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("Failed to insert user")?;

        Ok(inserted > 0)
    }
}
