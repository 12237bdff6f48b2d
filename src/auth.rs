use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::AppError;
use crate::services::token_service;
use crate::state::AppState;

/// Identity extracted from a verified bearer credential. Handlers take
/// this as an argument and pass the resolved user onward explicitly;
/// nothing downstream reads ambient request state.
pub struct AuthUser {
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let claims = token_service::verify(token, &state.config)?;

        Ok(AuthUser {
            username: claims.sub,
        })
    }
}
