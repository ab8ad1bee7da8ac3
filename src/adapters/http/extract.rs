//! Bearer credential extraction.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

use crate::app_error::AppError;

/// Raw bearer token from the `Authorization` header. Not yet verified.
#[derive(Debug, Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(extract_from_header)
            .map(|token| BearerToken(token.to_string()))
            .ok_or(AppError::InvalidCredentials)
    }
}

/// Extract the token from an `Authorization: Bearer <token>` value.
/// The scheme is matched case-insensitively; blank tokens are rejected.
pub fn extract_from_header(auth_header: &str) -> Option<&str> {
    let (scheme, token) = auth_header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        BearerToken::from_headers(&parts.headers)
    }
}
