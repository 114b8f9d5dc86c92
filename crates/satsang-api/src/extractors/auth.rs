//! `AuthSession` extractor. Pulls the bearer token from the
//! Authorization header and resolves it to an open session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use satsang_core::error::AppError;
use satsang_core::traits::Identity;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The opaque session token that was presented.
    pub token: String,
    /// The identity behind the session.
    pub identity: Identity,
}

impl std::ops::Deref for AuthSession {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.identity
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let identity = state
            .auth
            .identity_for(token)
            .await
            .ok_or_else(|| AppError::authentication("Session expired or unknown"))?;

        Ok(AuthSession {
            token: token.to_string(),
            identity,
        })
    }
}
