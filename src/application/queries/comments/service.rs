// src/application/queries/comments/service.rs
use std::sync::Arc;

use crate::{
    application::ports::observability::EventSink,
    domain::comment::{CommentRepository, LikeRepository},
};

pub struct CommentQueryService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) like_repo: Arc<dyn LikeRepository>,
    pub(super) events: Arc<dyn EventSink>,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            comment_repo,
            like_repo,
            events,
        }
    }
}
