// src/infrastructure/observability.rs
use crate::application::ports::observability::{EventSink, ServiceEvent};

/// Forwards service events to `tracing`.
#[derive(Default, Clone)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: ServiceEvent) {
        match event {
            ServiceEvent::LikedLookupFailed {
                comment_id,
                user_id,
                reason,
            } => {
                tracing::warn!(%comment_id, %user_id, %reason, "failed to check whether viewer liked comment");
            }
            ServiceEvent::AnonymousCommentListing { article_id } => {
                tracing::debug!(%article_id, "comments listed without viewer identity");
            }
            ServiceEvent::LikeStoreFailed {
                operation,
                comment_id,
                reason,
            } => {
                tracing::error!(operation, %comment_id, %reason, "like store call failed");
            }
            ServiceEvent::CommentsListed {
                article_id,
                page,
                returned,
            } => {
                tracing::debug!(%article_id, page, returned, "comments listed");
            }
        }
    }
}
