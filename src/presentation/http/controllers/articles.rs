// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::CreateArticleCommand,
    dto::{ArticleCreateResponse, ArticleDto, CommentDto},
    queries::{articles::GetArticleByIdQuery, comments::ListCommentsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

fn default_limit() -> u32 {
    10
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Missing fields decode as empty strings so the service reports them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleCreateResponse),
        (status = 400, description = "Missing title, content or category.", body = ErrorResponse),
        (status = 401, description = "Authentication required.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(ctx): MaybeAuthenticated,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleCreateResponse>)> {
    let Json(payload) = payload.map_err(HttpError::from_json_rejection)?;
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        category: payload.category,
    };

    let created = state
        .services
        .article_commands
        .create_article(&ctx, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(
        ("id" = String, Path, description = "Article id (24 hex characters)."),
        ("limit" = Option<u32>, Query, description = "Comments per page, default 10."),
        ("page" = Option<u32>, Query, description = "Comment page, default 1.")
    ),
    responses(
        (status = 200, description = "Article with one page of comments.", body = ArticleDto),
        (status = 400, description = "Malformed article id.", body = ErrorResponse),
        (status = 404, description = "Article not found.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(ctx): MaybeAuthenticated,
    Path(id): Path<String>,
    params: Result<Query<CommentListParams>, QueryRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let Query(params) = params.map_err(HttpError::from_query_rejection)?;

    let mut article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: id.clone() })
        .await
        .into_http()?;

    article.comments = state
        .services
        .comment_queries
        .list_comments(
            &ctx,
            ListCommentsQuery {
                article_id: id,
                limit: params.limit,
                page: params.page,
            },
        )
        .await
        .into_http()?;

    Ok(Json(article))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/comments",
    params(
        ("id" = String, Path, description = "Article id."),
        ("limit" = Option<u32>, Query, description = "Comments per page, default 10."),
        ("page" = Option<u32>, Query, description = "Requested page; pages past the end serve the last page.")
    ),
    responses(
        (status = 200, description = "One page of comments.", body = [CommentDto]),
        (status = 400, description = "Zero limit or page.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(ctx): MaybeAuthenticated,
    Path(id): Path<String>,
    params: Result<Query<CommentListParams>, QueryRejection>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    let Query(params) = params.map_err(HttpError::from_query_rejection)?;

    state
        .services
        .comment_queries
        .list_comments(
            &ctx,
            ListCommentsQuery {
                article_id: id,
                limit: params.limit,
                page: params.page,
            },
        )
        .await
        .into_http()
        .map(Json)
}
