// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleCreateResponse, IdentityContext},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleCategory, ArticleContent, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            category: self.category.ok_or("category is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        ctx: &IdentityContext,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleCreateResponse> {
        let publisher = ctx.require()?;

        let title = ArticleTitle::new(command.title).map_err(ApplicationError::from_validation)?;
        let content =
            ArticleContent::new(command.content).map_err(ApplicationError::from_validation)?;
        let category =
            ArticleCategory::new(command.category).map_err(ApplicationError::from_validation)?;

        let new_article = NewArticle {
            title,
            content,
            category,
            publisher_id: publisher.id,
            publisher_name: publisher.username.clone(),
            created_at: self.clock.now(),
        };

        let id = self.repo.insert(new_article).await?;
        Ok(ArticleCreateResponse { id: id.to_hex() })
    }
}
