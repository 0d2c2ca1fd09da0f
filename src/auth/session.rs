use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use sqlx::SqlitePool;

use crate::constants::SESSION_TOKEN_BYTES;
use crate::error::{AppError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Sign a session token id with the server-side session secret
///
/// The cookie value is `{token_id}.{signature}`, both hex. The signature lets
/// us reject forged or truncated cookies before touching the database.
fn sign_token_id(token_id: &str, secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(token_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a token's signature (constant-time) and return its id part
fn verify_token<'a>(token: &'a str, secret: &str) -> Option<&'a str> {
    let (token_id, signature) = token.split_once('.')?;
    let sig_bytes = hex::decode(signature).ok()?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(token_id.as_bytes());
    mac.verify_slice(&sig_bytes).ok()?;

    Some(token_id)
}

/// Create a session for an authenticated user
///
/// Generates a 128-bit random token id, stores it with an expiry, and returns
/// the signed cookie value.
pub async fn create_session(pool: &SqlitePool, user_id: i64, secret: &str, ttl_secs: i64) -> Result<String> {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    let token_id = hex::encode(bytes);

    let now = Utc::now();
    let expires_at = now + Duration::seconds(ttl_secs);

    sqlx::query("INSERT INTO sessions (token_id, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)")
        .bind(&token_id)
        .bind(user_id)
        .bind(now)
        .bind(expires_at)
        .execute(pool)
        .await?;

    tracing::info!(user_id, "Session created");

    let signature = sign_token_id(&token_id, secret);
    Ok(format!("{token_id}.{signature}"))
}

/// Resolve a session cookie back to a user id
///
/// Fails with `NoSession` if the token is forged, unknown, or expired.
/// Expired rows are removed on sight; expiry is terminal.
pub async fn resolve_session(pool: &SqlitePool, token: &str, secret: &str) -> Result<i64> {
    let token_id = verify_token(token, secret).ok_or(AppError::NoSession)?;

    let row: Option<(i64, DateTime<Utc>)> =
        sqlx::query_as("SELECT user_id, expires_at FROM sessions WHERE token_id = ?")
            .bind(token_id)
            .fetch_optional(pool)
            .await?;

    let (user_id, expires_at) = row.ok_or(AppError::NoSession)?;

    if expires_at <= Utc::now() {
        sqlx::query("DELETE FROM sessions WHERE token_id = ?")
            .bind(token_id)
            .execute(pool)
            .await?;
        tracing::info!(user_id, "Session expired");
        return Err(AppError::NoSession);
    }

    Ok(user_id)
}

/// Revoke a session (logout); idempotent
///
/// Unknown tokens and bad signatures are a no-op so that logout never fails.
pub async fn destroy_session(pool: &SqlitePool, token: &str, secret: &str) -> Result<()> {
    let Some(token_id) = verify_token(token, secret) else {
        return Ok(());
    };

    sqlx::query("DELETE FROM sessions WHERE token_id = ?")
        .bind(token_id)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify_token() {
        let secret = "test-secret";
        let token_id = "aabbccdd";
        let signature = sign_token_id(token_id, secret);

        let token = format!("{token_id}.{signature}");
        assert_eq!(verify_token(&token, secret), Some(token_id));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token_id = "aabbccdd";
        let signature = sign_token_id(token_id, "secret-a");
        let token = format!("{token_id}.{signature}");

        assert_eq!(verify_token(&token, "secret-b"), None);
    }

    #[test]
    fn test_verify_rejects_tampered_id() {
        let secret = "test-secret";
        let signature = sign_token_id("aabbccdd", secret);
        let token = format!("eeffeeff.{signature}");

        assert_eq!(verify_token(&token, secret), None);
    }

    #[test]
    fn test_verify_rejects_malformed_tokens() {
        let secret = "test-secret";
        assert_eq!(verify_token("", secret), None);
        assert_eq!(verify_token("no-separator", secret), None);
        assert_eq!(verify_token("id.not-hex", secret), None);
    }
}
