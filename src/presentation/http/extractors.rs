// src/presentation/http/extractors.rs
use crate::application::{dto::SessionPrincipal, error::ApplicationError};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Caller verified by the access gate. Only available on gated routes.
#[derive(Debug, Clone)]
pub struct Gated(pub SessionPrincipal);

impl<S: Send + Sync> FromRequestParts<S> for Gated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionPrincipal>()
            .cloned()
            .map(Self)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "route is not behind the access gate",
                ))
            })
    }
}
