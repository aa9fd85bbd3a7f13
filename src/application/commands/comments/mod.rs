// src/application/commands/comments/mod.rs
mod create;
mod service;
mod toggle_like;

pub use create::CreateCommentCommand;
pub use service::CommentCommandService;
pub use toggle_like::ToggleLikeCommand;
