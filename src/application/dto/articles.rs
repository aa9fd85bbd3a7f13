// src/application/dto/articles.rs
use crate::application::dto::CommentDto;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleCreateResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub publisher_id: i64,
    pub publisher_name: String,
    pub comments: Vec<CommentDto>,
}

impl ArticleDto {
    /// Projects a stored article, echoing the id exactly as the caller sent it.
    pub fn from_article(id: String, article: Article) -> Self {
        Self {
            id,
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            category: article.category.into_inner(),
            created_at: article.created_at,
            publisher_id: article.publisher_id.into(),
            publisher_name: article.publisher_name.into(),
            comments: Vec::new(),
        }
    }
}
