use serde::{Deserialize, Serialize};

use crate::db::{Comment, UserProfile};
use crate::models::movie::Movie;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Full user document as served to the client: profile plus the embedded
/// favorites sequence.
#[derive(Debug, Serialize)]
pub struct UserProfileDto {
    pub username: String,
    pub favorites: Vec<Movie>,
    pub created_at: String,
}

impl From<UserProfile> for UserProfileDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            username: profile.username,
            favorites: profile.favorites,
            created_at: profile.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub id: i32,
    pub username: String,
    #[serde(rename = "movieId")]
    pub movie_id: String,
    pub content: String,
    pub timestamp: String,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            username: comment.username,
            movie_id: comment.movie_id,
            content: comment.content,
            timestamp: comment.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub username: String,
    #[serde(default)]
    pub favorites: Vec<Movie>,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub username: String,
    #[serde(rename = "movieId")]
    pub movie_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PostCommentRequest {
    pub username: String,
    #[serde(rename = "movieId")]
    pub movie_id: String,
    pub content: String,
}

/// Both fields are optional at the wire level so a missing one can be
/// reported as a 400 instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct EditCommentRequest {
    #[serde(rename = "commentId")]
    pub comment_id: Option<i32>,
    #[serde(rename = "newContent")]
    pub new_content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteCommentRequest {
    #[serde(rename = "commentId")]
    pub comment_id: Option<i32>,
}
