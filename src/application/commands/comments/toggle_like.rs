// src/application/commands/comments/toggle_like.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{IdentityContext, LikeStateDto},
        error::{ApplicationError, ApplicationResult},
        ports::observability::ServiceEvent,
    },
    domain::{
        comment::{CommentId, Like},
        errors::DomainError,
    },
};

pub struct ToggleLikeCommand {
    pub comment_id: i64,
}

impl CommentCommandService {
    /// Flips the caller's like on a comment and reports the resulting state.
    ///
    /// The read and the write are separate store calls. A concurrent toggle
    /// that wins the race makes the write fail with `Conflict`; every other
    /// store failure is reported as `Infrastructure` without its details.
    pub async fn toggle_like(
        &self,
        ctx: &IdentityContext,
        command: ToggleLikeCommand,
    ) -> ApplicationResult<LikeStateDto> {
        let liker = ctx.require()?;
        let comment_id =
            CommentId::new(command.comment_id).map_err(ApplicationError::from_validation)?;
        let like = Like::new(comment_id, liker.id);

        let liked = self
            .like_repo
            .has_liked(like)
            .await
            .map_err(|err| self.like_store_failure("has_liked", comment_id, err))?;

        if liked {
            self.like_repo
                .delete(like)
                .await
                .map_err(|err| self.like_store_failure("delete_like", comment_id, err))?;
        } else {
            self.like_repo
                .insert(like)
                .await
                .map_err(|err| self.like_store_failure("insert_like", comment_id, err))?;
        }

        Ok(LikeStateDto {
            comment_id: comment_id.into(),
            liked: !liked,
        })
    }

    fn like_store_failure(
        &self,
        operation: &'static str,
        comment_id: CommentId,
        err: DomainError,
    ) -> ApplicationError {
        if let DomainError::Conflict(msg) = err {
            return ApplicationError::conflict(msg);
        }

        self.events.emit(ServiceEvent::LikeStoreFailed {
            operation,
            comment_id,
            reason: err.to_string(),
        });
        ApplicationError::infrastructure("failed to update like")
    }
}
