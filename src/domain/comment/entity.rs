// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::user::{UserId, Username};
use chrono::{DateTime, Utc};

/// A comment row. `article_id` points into the document store's id space and
/// is only checked when the comment is created.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentContent,
    pub article_id: String,
    pub user_id: UserId,
    pub commenter_name: Username,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: CommentContent,
    pub article_id: String,
    pub user_id: UserId,
    pub commenter_name: Username,
    pub created_at: DateTime<Utc>,
}

/// Membership of `user_id` in the like set of `comment_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Like {
    pub comment_id: CommentId,
    pub user_id: UserId,
}

impl Like {
    pub fn new(comment_id: CommentId, user_id: UserId) -> Self {
        Self {
            comment_id,
            user_id,
        }
    }
}
