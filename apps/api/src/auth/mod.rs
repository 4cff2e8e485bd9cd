// Login, bearer-token sessions, and per-session saved jobs. Sessions live in
// memory only and expire after an idle TTL — nothing here survives a restart.

pub mod handlers;
pub mod sessions;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// Extractor for authenticated routes. Reads `Authorization: Bearer <token>`,
/// refreshes the session's idle clock, and rejects missing or expired tokens.
pub struct AuthedUser {
    pub token: Uuid,
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .and_then(|t| Uuid::parse_str(t.trim()).ok())
            .ok_or(AppError::Unauthorized)?;

        let username = state.sessions.touch(token).ok_or(AppError::Unauthorized)?;

        Ok(AuthedUser { token, username })
    }
}
