// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Document store gateway for articles.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId>;
}
