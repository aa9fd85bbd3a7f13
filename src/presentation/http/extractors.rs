// src/presentation/http/extractors.rs
use crate::{
    application::{dto::IdentityContext, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Identity context of the current request. No `Authorization` header means
/// an anonymous caller; a bearer token that fails verification is rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub IdentityContext);

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts.headers.typed_get::<Authorization<Bearer>>();
        let ctx = app_state
            .services
            .identity_context(header.as_ref().map(|value| value.token()))
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(ctx))
    }
}
