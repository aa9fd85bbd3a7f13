// src/application/dto/mod.rs
pub mod articles;
pub mod comments;
pub mod identity;

pub use articles::{ArticleCreateResponse, ArticleDto};
pub use comments::{CommentCreatedDto, CommentDto, LikeStateDto};
pub use identity::{Identity, IdentityContext};
