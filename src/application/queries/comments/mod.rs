// src/application/queries/comments/mod.rs
mod list;
mod service;

pub use list::ListCommentsQuery;
pub use service::CommentQueryService;
