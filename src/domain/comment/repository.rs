// src/domain/comment/repository.rs
use crate::domain::comment::entity::{Comment, Like, NewComment};
use crate::domain::comment::value_objects::{CommentId, CommentPage};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn count_by_article(&self, article_id: &str) -> DomainResult<u64>;
    /// Comments of one page in store order (oldest first).
    async fn list_page(&self, article_id: &str, page: CommentPage) -> DomainResult<Vec<Comment>>;
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
}

/// Like set storage. `insert` of an existing pair and `delete` of a missing
/// one both fail with `DomainError::Conflict`.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn count_for_comment(&self, comment_id: CommentId) -> DomainResult<u64>;
    async fn has_liked(&self, like: Like) -> DomainResult<bool>;
    async fn insert(&self, like: Like) -> DomainResult<()>;
    async fn delete(&self, like: Like) -> DomainResult<()>;
}
