// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{articles::ArticleCommandService, comments::CommentCommandService},
        dto::{Identity, IdentityContext},
        ports::{observability::EventSink, security::IdentityVerifier, time::Clock},
        queries::{articles::ArticleQueryService, comments::CommentQueryService},
    },
    domain::{
        article::ArticleRepository,
        comment::{CommentRepository, LikeRepository},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    identity_verifier: Arc<dyn IdentityVerifier>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        identity_verifier: Arc<dyn IdentityVerifier>,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_repo)));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&like_repo),
            Arc::clone(&clock),
            Arc::clone(&events),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&like_repo),
            Arc::clone(&events),
        ));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            identity_verifier,
        }
    }

    /// Build the identity context for one request from its optional bearer
    /// token. A token that is present but fails verification is an error,
    /// not an anonymous request.
    pub async fn identity_context(&self, token: Option<&str>) -> ApplicationResult<IdentityContext> {
        match token {
            Some(token) => {
                let identity: Identity = self.identity_verifier.verify(token).await?;
                Ok(IdentityContext::authenticated(identity))
            }
            None => Ok(IdentityContext::anonymous()),
        }
    }
}
