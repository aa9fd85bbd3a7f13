// src/application/queries/articles/mod.rs
mod get_by_id;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
