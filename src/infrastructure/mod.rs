// src/infrastructure/mod.rs
pub mod database;
pub mod mongo;
pub mod observability;
pub mod repositories;
pub mod security;
pub mod time;
