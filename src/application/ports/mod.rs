// src/application/ports/mod.rs
pub mod observability;
pub mod security;
pub mod time;

