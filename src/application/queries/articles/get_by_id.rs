// src/application/queries/articles/get_by_id.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, errors::DomainError},
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    /// Loads one article. The returned view has no comments; those come from
    /// `CommentQueryService::list_comments`.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&query.id).map_err(|err| match err {
            DomainError::InvalidId(msg) => ApplicationError::invalid_id(msg),
            other => ApplicationError::from(other),
        })?;

        let article = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;

        Ok(ArticleDto::from_article(query.id, article))
    }
}
