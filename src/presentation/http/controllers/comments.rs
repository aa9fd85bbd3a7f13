// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, ToggleLikeCommand},
    dto::{CommentCreatedDto, LikeStateDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub article_id: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentCreatedDto),
        (status = 400, description = "Missing fields, malformed id or unknown article.", body = ErrorResponse),
        (status = 401, description = "Authentication required.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(ctx): MaybeAuthenticated,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<CommentCreatedDto>)> {
    let Json(payload) = payload.map_err(HttpError::from_json_rejection)?;
    let command = CreateCommentCommand {
        content: payload.content,
        article_id: payload.article_id,
    };

    let created = state
        .services
        .comment_commands
        .create_comment(&ctx, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    post,
    path = "/api/v1/comments/{id}/like",
    params(("id" = i64, Path, description = "Comment id.")),
    responses(
        (status = 200, description = "Like toggled; body holds the new state.", body = LikeStateDto),
        (status = 401, description = "Authentication required.", body = ErrorResponse),
        (status = 409, description = "A concurrent toggle changed the like first.", body = ErrorResponse),
        (status = 500, description = "Like store failure.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(ctx): MaybeAuthenticated,
    Path(comment_id): Path<i64>,
) -> HttpResult<Json<LikeStateDto>> {
    state
        .services
        .comment_commands
        .toggle_like(&ctx, ToggleLikeCommand { comment_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment id.")),
    responses(
        (status = 501, description = "Comment deletion is not supported.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(Path(_comment_id): Path<i64>) -> HttpResult<StatusCode> {
    Err(HttpError::not_implemented("comment deletion is not implemented"))
}
