// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repo;
pub mod events;
pub mod relational;
pub mod security;
pub mod time;

pub use article_repo::InMemoryArticles;
pub use events::CapturingEvents;
pub use relational::InMemoryRelational;
pub use security::{StaticTokenVerifier, U1_TOKEN, U2_TOKEN, identity, u1, u2};
pub use time::{FixedClock, fixed_now};
