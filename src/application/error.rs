// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures returned by the application services.
///
/// `Domain` carries store and decode errors that an operation passes through
/// untouched; the other variants are produced by the services themselves.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("invalid article: {0}")]
    InvalidArticle(String),

    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    pub fn invalid_article(msg: impl Into<String>) -> Self {
        Self::InvalidArticle(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Turns a value object validation failure into `InvalidParameters`.
    pub(crate) fn from_validation(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::InvalidParameters(msg),
            other => Self::Domain(other),
        }
    }
}
