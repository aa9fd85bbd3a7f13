// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleCategory, ArticleContent, ArticleId, ArticleTitle,
};
use crate::domain::user::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category: ArticleCategory,
    pub publisher_id: UserId,
    pub publisher_name: Username,
    pub created_at: DateTime<Utc>,
}

/// Article record before the document store has assigned its id.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category: ArticleCategory,
    pub publisher_id: UserId,
    pub publisher_name: Username,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            content: self.content,
            category: self.category,
            publisher_id: self.publisher_id,
            publisher_name: self.publisher_name,
            created_at: self.created_at,
        }
    }
}
