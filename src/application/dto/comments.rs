// src/application/dto/comments.rs
use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A comment enriched with its like count and the viewer's own like state.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub content: String,
    pub article_id: String,
    pub user_id: i64,
    pub commenter_name: String,
    pub likes: i64,
    pub liked: bool,
}

impl CommentDto {
    pub fn new(comment: Comment, likes: u64) -> Self {
        Self {
            id: comment.id.into(),
            created_at: comment.created_at,
            content: comment.content.into_inner(),
            article_id: comment.article_id,
            user_id: comment.user_id.into(),
            commenter_name: comment.commenter_name.into(),
            likes: i64::try_from(likes).unwrap_or(i64::MAX),
            liked: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentCreatedDto {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeStateDto {
    pub comment_id: i64,
    pub liked: bool,
}
