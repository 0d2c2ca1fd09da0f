use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::constants::SESSION_COOKIE;
use crate::error::Result;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

fn session_cookie_headers(token: &str, max_age_secs: i64) -> Result<[(HeaderName, HeaderValue); 1]> {
    let value = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}"
    );
    let value = HeaderValue::from_str(&value)
        .map_err(|_| crate::error::AppError::InvalidInput("Invalid cookie value".to_string()))?;
    Ok([(header::SET_COOKIE, value)])
}

/// Create an account and log the new user in
///
/// Returns 409 Conflict if the username is already taken. On success the
/// session cookie is set, so a fresh signup lands directly on the dashboard.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<([(HeaderName, HeaderValue); 1], Json<AuthResponse>)> {
    let user_id = auth::register(&state.pool, &payload.username, &payload.password).await?;
    let token = auth::create_session(
        &state.pool,
        user_id,
        &state.config.session_secret,
        state.config.session_ttl_secs,
    )
    .await?;

    let headers = session_cookie_headers(&token, state.config.session_ttl_secs)?;
    Ok((headers, Json(AuthResponse { success: true, user_id })))
}

/// Verify credentials and start a session
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<([(HeaderName, HeaderValue); 1], Json<AuthResponse>)> {
    let user_id = auth::authenticate(&state.pool, &payload.username, &payload.password).await?;
    let token = auth::create_session(
        &state.pool,
        user_id,
        &state.config.session_secret,
        state.config.session_ttl_secs,
    )
    .await?;

    tracing::info!(user_id, "User logged in");

    let headers = session_cookie_headers(&token, state.config.session_ttl_secs)?;
    Ok((headers, Json(AuthResponse { success: true, user_id })))
}

/// Revoke the current session and clear the cookie; idempotent
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<([(HeaderName, HeaderValue); 1], Json<LogoutResponse>)> {
    if let Some(token) = auth::session_cookie(&headers) {
        auth::destroy_session(&state.pool, &token, &state.config.session_secret).await?;
    }

    // Expire the cookie regardless of whether a session existed
    let clear = session_cookie_headers("", 0)?;
    Ok((clear, Json(LogoutResponse { success: true })))
}
