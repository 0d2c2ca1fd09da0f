use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::constants::SESSION_COOKIE;
use crate::error::AppError;
use crate::AppState;

/// Extractor that resolves the session cookie to an authenticated user id
///
/// Handlers that take `AuthUser` reject the request with 401 before running
/// when there is no valid session.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_cookie(&parts.headers).ok_or(AppError::NoSession)?;
        let user_id =
            super::resolve_session(&state.pool, &token, &state.config.session_secret).await?;
        Ok(AuthUser { user_id })
    }
}

/// Pull the session token out of the Cookie header, if present
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(header::COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}
