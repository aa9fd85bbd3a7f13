// tests/support/mocks/security.rs
use async_trait::async_trait;
use inkpot::application::{
    ApplicationResult,
    dto::{Identity, IdentityContext},
    error::ApplicationError,
    ports::security::IdentityVerifier,
};
use inkpot::domain::user::{UserId, Username};

pub const U1_TOKEN: &str = "token-u1";
pub const U2_TOKEN: &str = "token-u2";

pub fn identity(id: i64, name: &str) -> Identity {
    Identity::new(UserId::new(id).unwrap(), Username::new(name).unwrap())
}

pub fn u1() -> IdentityContext {
    IdentityContext::authenticated(identity(1, "u1"))
}

pub fn u2() -> IdentityContext {
    IdentityContext::authenticated(identity(2, "u2"))
}

/// Accepts two fixed tokens and rejects everything else.
pub struct StaticTokenVerifier;

#[async_trait]
impl IdentityVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<Identity> {
        match token {
            U1_TOKEN => Ok(identity(1, "u1")),
            U2_TOKEN => Ok(identity(2, "u2")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
