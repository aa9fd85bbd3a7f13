// tests/support/mocks/relational.rs
use async_trait::async_trait;
use inkpot::domain::comment::{
    Comment, CommentId, CommentPage, CommentRepository, Like, LikeRepository, NewComment,
};
use inkpot::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Relational store stand-in holding comments and the like set. Enforces the
/// (comment, user) uniqueness the Postgres schema does.
#[derive(Default)]
pub struct InMemoryRelational {
    comments: Mutex<Vec<Comment>>,
    likes: Mutex<HashSet<(i64, i64)>>,
    requested_pages: Mutex<Vec<CommentPage>>,
    failing_liked_lookups: Mutex<HashSet<i64>>,
    fail_like_counts: AtomicBool,
    fail_like_writes: AtomicBool,
    fail_has_liked: AtomicBool,
    stale_has_liked: AtomicBool,
    has_liked_calls: AtomicUsize,
    calls: AtomicUsize,
}

impl InMemoryRelational {
    pub fn comments(&self) -> Vec<Comment> {
        self.comments.lock().unwrap().clone()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().len()
    }

    pub fn has_like(&self, comment_id: i64, user_id: i64) -> bool {
        self.likes.lock().unwrap().contains(&(comment_id, user_id))
    }

    pub fn add_like(&self, comment_id: i64, user_id: i64) {
        self.likes.lock().unwrap().insert((comment_id, user_id));
    }

    pub fn requested_pages(&self) -> Vec<CommentPage> {
        self.requested_pages.lock().unwrap().clone()
    }

    /// `has_liked` fails for this comment only.
    pub fn fail_liked_lookup_for(&self, comment_id: i64) {
        self.failing_liked_lookups.lock().unwrap().insert(comment_id);
    }

    pub fn fail_like_counts(&self) {
        self.fail_like_counts.store(true, Ordering::SeqCst);
    }

    pub fn fail_like_writes(&self) {
        self.fail_like_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_has_liked(&self) {
        self.fail_has_liked.store(true, Ordering::SeqCst);
    }

    /// `has_liked` answers "not liked" regardless of the set, as a reader
    /// that lost a race with a concurrent toggle would.
    pub fn stale_has_liked(&self) {
        self.stale_has_liked.store(true, Ordering::SeqCst);
    }

    pub fn has_liked_calls(&self) -> usize {
        self.has_liked_calls.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CommentRepository for InMemoryRelational {
    async fn count_by_article(&self, article_id: &str) -> DomainResult<u64> {
        self.touch();
        let comments = self.comments.lock().unwrap();
        Ok(comments.iter().filter(|c| c.article_id == article_id).count() as u64)
    }

    async fn list_page(&self, article_id: &str, page: CommentPage) -> DomainResult<Vec<Comment>> {
        self.touch();
        self.requested_pages.lock().unwrap().push(page);
        let comments = self.comments.lock().unwrap();
        Ok(comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        self.touch();
        let mut comments = self.comments.lock().unwrap();
        let id = CommentId::new(comments.len() as i64 + 1)?;
        let created = Comment {
            id,
            content: comment.content,
            article_id: comment.article_id,
            user_id: comment.user_id,
            commenter_name: comment.commenter_name,
            created_at: comment.created_at,
        };
        comments.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl LikeRepository for InMemoryRelational {
    async fn count_for_comment(&self, comment_id: CommentId) -> DomainResult<u64> {
        self.touch();
        if self.fail_like_counts.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("like count query timed out".into()));
        }
        let likes = self.likes.lock().unwrap();
        Ok(likes
            .iter()
            .filter(|(comment, _)| *comment == i64::from(comment_id))
            .count() as u64)
    }

    async fn has_liked(&self, like: Like) -> DomainResult<bool> {
        self.touch();
        self.has_liked_calls.fetch_add(1, Ordering::SeqCst);
        let comment_id = i64::from(like.comment_id);
        if self.fail_has_liked.load(Ordering::SeqCst)
            || self
                .failing_liked_lookups
                .lock()
                .unwrap()
                .contains(&comment_id)
        {
            return Err(DomainError::Persistence("relation \"likes\" is locked".into()));
        }
        if self.stale_has_liked.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self
            .likes
            .lock()
            .unwrap()
            .contains(&(comment_id, i64::from(like.user_id))))
    }

    async fn insert(&self, like: Like) -> DomainResult<()> {
        self.touch();
        if self.fail_like_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset by peer".into()));
        }
        let inserted = self
            .likes
            .lock()
            .unwrap()
            .insert((i64::from(like.comment_id), i64::from(like.user_id)));
        if inserted {
            Ok(())
        } else {
            Err(DomainError::Conflict("comment already liked".into()))
        }
    }

    async fn delete(&self, like: Like) -> DomainResult<()> {
        self.touch();
        if self.fail_like_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset by peer".into()));
        }
        let removed = self
            .likes
            .lock()
            .unwrap()
            .remove(&(i64::from(like.comment_id), i64::from(like.user_id)));
        if removed {
            Ok(())
        } else {
            Err(DomainError::Conflict("like already removed".into()))
        }
    }
}
