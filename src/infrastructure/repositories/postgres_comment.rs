// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentPage, CommentRepository, Like, LikeRepository,
    NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    created_at: DateTime<Utc>,
    content: String,
    article_id: String,
    user_id: i64,
    commenter_name: String,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            content: CommentContent::from_stored(row.content),
            article_id: row.article_id,
            user_id: UserId(row.user_id),
            commenter_name: Username::from_stored(row.commenter_name),
            created_at: row.created_at,
        })
    }
}

fn to_count(value: i64) -> DomainResult<u64> {
    u64::try_from(value).map_err(|_| DomainError::Persistence(format!("negative count {value}")))
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn count_by_article(&self, article_id: &str) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE article_id = $1")
            .bind(article_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        to_count(count)
    }

    async fn list_page(&self, article_id: &str, page: CommentPage) -> DomainResult<Vec<Comment>> {
        let offset = i64::try_from(page.offset())
            .map_err(|_| DomainError::Validation("page offset out of range".into()))?;

        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, created_at, content, article_id, user_id, commenter_name
             FROM comments
             WHERE article_id = $1
             ORDER BY created_at ASC, id ASC
             LIMIT $2 OFFSET $3",
        )
        .bind(article_id)
        .bind(i64::from(page.limit()))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            content,
            article_id,
            user_id,
            commenter_name,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (created_at, content, article_id, user_id, commenter_name)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, created_at, content, article_id, user_id, commenter_name",
        )
        .bind(created_at)
        .bind(content.as_str())
        .bind(&article_id)
        .bind(i64::from(user_id))
        .bind(commenter_name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn count_for_comment(&self, comment_id: CommentId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE comment_id = $1")
            .bind(i64::from(comment_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        to_count(count)
    }

    async fn has_liked(&self, like: Like) -> DomainResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE comment_id = $1 AND user_id = $2)",
        )
        .bind(i64::from(like.comment_id))
        .bind(i64::from(like.user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn insert(&self, like: Like) -> DomainResult<()> {
        sqlx::query("INSERT INTO likes (comment_id, user_id) VALUES ($1, $2)")
            .bind(i64::from(like.comment_id))
            .bind(i64::from(like.user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete(&self, like: Like) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM likes WHERE comment_id = $1 AND user_id = $2")
            .bind(i64::from(like.comment_id))
            .bind(i64::from(like.user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict("like already removed".into()));
        }
        Ok(())
    }
}
