// src/application/dto/identity.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::{UserId, Username};

/// Caller verified from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub username: Username,
}

impl Identity {
    pub fn new(id: UserId, username: Username) -> Self {
        Self { id, username }
    }
}

/// The optional identity of one request. Built once by the HTTP boundary and
/// only read by the services below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityContext {
    identity: Option<Identity>,
}

impl IdentityContext {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn require(&self) -> ApplicationResult<&Identity> {
        self.identity
            .as_ref()
            .ok_or_else(|| ApplicationError::unauthorized("authentication required"))
    }
}
