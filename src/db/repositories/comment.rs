use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

use crate::entities::{comments, prelude::*};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i32,
    pub username: String,
    pub movie_id: String,
    pub content: String,
    pub created_at: String,
}

impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            movie_id: model.movie_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

pub struct CommentRepository {
    conn: DatabaseConnection,
}

impl CommentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a comment with a server-assigned timestamp, then read the
    /// persisted row back so the caller gets the generated identifier and
    /// the canonical stored representation.
    pub async fn insert(&self, username: &str, movie_id: &str, content: &str) -> Result<Comment> {
        let active_model = comments::ActiveModel {
            username: Set(username.to_string()),
            movie_id: Set(movie_id.to_string()),
            content: Set(content.to_string()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let result = Comments::insert(active_model)
            .exec(&self.conn)
            .await
            .context("Failed to insert comment")?;

        let row = Comments::find_by_id(result.last_insert_id)
            .one(&self.conn)
            .await
            .context("Failed to read back inserted comment")?
            .ok_or_else(|| {
                anyhow::anyhow!("Inserted comment {} missing on read-back", result.last_insert_id)
            })?;

        Ok(Comment::from(row))
    }

    /// All comments for a movie, newest first. Timestamp ties are broken by
    /// descending id so the order stays strict for same-instant inserts.
    pub async fn list_for_movie(&self, movie_id: &str) -> Result<Vec<Comment>> {
        let rows = Comments::find()
            .filter(comments::Column::MovieId.eq(movie_id))
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list comments")?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    /// Replace a comment's content in place. Returns false when no comment
    /// has the given id.
    pub async fn update_content(&self, id: i32, content: &str) -> Result<bool> {
        let result = Comments::update_many()
            .col_expr(comments::Column::Content, Expr::value(content))
            .filter(comments::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .context("Failed to update comment")?;

        Ok(result.rows_affected > 0)
    }

    /// Delete by id. Returns false when no comment has the given id.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Comments::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete comment")?;

        Ok(result.rows_affected > 0)
    }
}
