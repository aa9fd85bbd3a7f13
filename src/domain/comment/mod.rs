// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, Like, NewComment};
pub use repository::{CommentRepository, LikeRepository};
pub use value_objects::{CommentContent, CommentId, CommentPage};
