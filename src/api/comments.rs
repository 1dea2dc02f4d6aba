use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{
    ApiError, ApiResponse, AppState, CommentDto, DeleteCommentRequest, EditCommentRequest,
    PostCommentRequest,
};
use crate::api::validation::{validate_content, validate_movie_id, validate_username};

#[derive(Deserialize)]
pub struct CommentsQuery {
    #[serde(rename = "movieId")]
    pub movie_id: String,
}

/// Persist a comment with a server-assigned id and timestamp, then return
/// the stored row as read back from the store.
pub async fn post_comment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PostCommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CommentDto>>), ApiError> {
    let username = validate_username(&payload.username)?;
    let movie_id = validate_movie_id(&payload.movie_id)?;
    let content = validate_content(&payload.content)?;

    let comment = state
        .store()
        .post_comment(username, movie_id, content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(comment.into())),
    ))
}

pub async fn get_comments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CommentsQuery>,
) -> Result<Json<ApiResponse<Vec<CommentDto>>>, ApiError> {
    let movie_id = validate_movie_id(&params.movie_id)?;

    let comments = state.store().comments_for_movie(movie_id).await?;

    Ok(Json(ApiResponse::success(
        comments.into_iter().map(CommentDto::from).collect(),
    )))
}

/// No ownership check is made here: the API layer carries no enforced
/// caller identity, so the client is trusted to only offer edit controls
/// to the comment's author.
pub async fn edit_comment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EditCommentRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let comment_id = payload
        .comment_id
        .ok_or_else(|| ApiError::validation("Missing required field: commentId"))?;
    let new_content = payload
        .new_content
        .ok_or_else(|| ApiError::validation("Missing required field: newContent"))?;
    let new_content = validate_content(&new_content)?;

    if !state.store().edit_comment(comment_id, new_content).await? {
        return Err(ApiError::comment_not_found(comment_id));
    }

    Ok(Json(ApiResponse::success(())))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DeleteCommentRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let comment_id = payload
        .comment_id
        .ok_or_else(|| ApiError::validation("Missing required field: commentId"))?;

    if !state.store().delete_comment(comment_id).await? {
        return Err(ApiError::comment_not_found(comment_id));
    }

    Ok(Json(ApiResponse::success(())))
}
