// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{observability::EventSink, time::Clock},
    domain::{
        article::ArticleRepository,
        comment::{CommentRepository, LikeRepository},
    },
};

/// Writes comments and likes. Comment creation is the one place that reads
/// the document store before writing the relational store.
pub struct CommentCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) like_repo: Arc<dyn LikeRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) events: Arc<dyn EventSink>,
}

impl CommentCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            like_repo,
            clock,
            events,
        }
    }
}
