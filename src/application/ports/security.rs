// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::Identity};
use async_trait::async_trait;

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify a bearer token and return the identity it was issued for.
    /// Any rejection is reported as `ApplicationError::Unauthorized`.
    async fn verify(&self, token: &str) -> ApplicationResult<Identity>;
}
