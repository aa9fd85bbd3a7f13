// src/application/ports/observability.rs
use crate::domain::{comment::CommentId, user::UserId};

/// Notable things the services observe while handling a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEvent {
    /// Checking whether the viewer liked a comment failed; the listing went
    /// on with `liked = false` for that comment.
    LikedLookupFailed {
        comment_id: CommentId,
        user_id: UserId,
        reason: String,
    },
    /// Comments were listed without a viewer identity.
    AnonymousCommentListing { article_id: String },
    /// A like store call failed and was reported to the caller as an
    /// infrastructure error. `reason` never leaves the process.
    LikeStoreFailed {
        operation: &'static str,
        comment_id: CommentId,
        reason: String,
    },
    CommentsListed {
        article_id: String,
        page: u32,
        returned: usize,
    },
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: ServiceEvent);
}
