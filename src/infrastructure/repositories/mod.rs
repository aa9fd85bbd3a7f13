// src/infrastructure/repositories/mod.rs
mod error;
mod mongo_article;
mod postgres_comment;

pub use error::{map_mongo, map_sqlx};
pub use mongo_article::MongoArticleRepository;
pub use postgres_comment::{PostgresCommentRepository, PostgresLikeRepository};
