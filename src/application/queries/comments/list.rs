// src/application/queries/comments/list.rs
use super::CommentQueryService;
use crate::{
    application::{
        dto::{CommentDto, Identity, IdentityContext},
        error::{ApplicationError, ApplicationResult},
        ports::observability::ServiceEvent,
    },
    domain::{
        article::ArticleId,
        comment::{CommentId, CommentPage, Like},
    },
};

pub struct ListCommentsQuery {
    pub article_id: String,
    pub limit: u32,
    pub page: u32,
}

impl CommentQueryService {
    /// Lists one page of an article's comments with like counts and, for a
    /// known viewer, whether they liked each one.
    ///
    /// A page past the end is served as the last page. A failed like count
    /// aborts the listing; a failed "liked by viewer" lookup only leaves that
    /// comment unliked.
    pub async fn list_comments(
        &self,
        ctx: &IdentityContext,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let requested = CommentPage::new(query.limit, query.page)
            .map_err(ApplicationError::from_validation)?;

        // Comments are stored under the canonical hex form when the id decodes.
        let article_id = ArticleId::parse(&query.article_id)
            .map(|id| id.to_hex())
            .unwrap_or(query.article_id);

        let total = self.comment_repo.count_by_article(&article_id).await?;
        let page = requested.clamp_to(total);
        if page.is_empty() {
            return Ok(Vec::new());
        }

        let comments = self.comment_repo.list_page(&article_id, page).await?;

        let mut views = Vec::with_capacity(comments.len());
        for comment in comments {
            let likes = self.like_repo.count_for_comment(comment.id).await?;
            views.push(CommentDto::new(comment, likes));
        }

        match ctx.current() {
            Some(viewer) => self.mark_liked_by(viewer, &mut views).await,
            None => self.events.emit(ServiceEvent::AnonymousCommentListing {
                article_id: article_id.clone(),
            }),
        }

        self.events.emit(ServiceEvent::CommentsListed {
            article_id,
            page: page.page(),
            returned: views.len(),
        });

        Ok(views)
    }

    async fn mark_liked_by(&self, viewer: &Identity, views: &mut [CommentDto]) {
        for view in views.iter_mut() {
            // ids came from the store, so they are already positive
            let comment_id = CommentId(view.id);
            match self
                .like_repo
                .has_liked(Like::new(comment_id, viewer.id))
                .await
            {
                Ok(liked) => view.liked = liked,
                Err(err) => self.events.emit(ServiceEvent::LikedLookupFailed {
                    comment_id,
                    user_id: viewer.id,
                    reason: err.to_string(),
                }),
            }
        }
    }
}
