// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{CommentCreatedDto, IdentityContext},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{CommentContent, NewComment},
    },
};

pub struct CreateCommentCommand {
    pub content: String,
    pub article_id: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        ctx: &IdentityContext,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentCreatedDto> {
        let author = ctx.require()?;

        if command.article_id.is_empty() {
            return Err(ApplicationError::invalid_parameters("articleId cannot be empty"));
        }
        let content =
            CommentContent::new(command.content).map_err(ApplicationError::from_validation)?;

        // A malformed id is a format error and travels up untranslated.
        let article_id = ArticleId::parse(&command.article_id)?;

        match self.article_repo.find_by_id(&article_id).await {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                return Err(ApplicationError::invalid_article(format!(
                    "article {article_id} does not exist"
                )));
            }
        }

        let new_comment = NewComment {
            content,
            article_id: article_id.to_hex(),
            user_id: author.id,
            commenter_name: author.username.clone(),
            created_at: self.clock.now(),
        };

        let created = self.comment_repo.insert(new_comment).await?;
        Ok(CommentCreatedDto {
            id: created.id.into(),
        })
    }
}
