pub mod extract;
pub mod password;
pub mod session;

pub use extract::{session_cookie, AuthUser};
pub use session::{create_session, destroy_session, resolve_session};

use chrono::Utc;
use sqlx::SqlitePool;

use crate::constants::{ERR_EMPTY_PASSWORD, ERR_INVALID_USERNAME};
use crate::error::{AppError, Result};
use crate::models::User;

/// Register a new user
///
/// Hashes the password with Argon2id and inserts the account row. The unique
/// index on `username` is the source of truth for duplicates, so a concurrent
/// double-submit cannot create two rows.
pub async fn register(pool: &SqlitePool, username: &str, password: &str) -> Result<i64> {
    if !User::validate_username(username) {
        return Err(AppError::InvalidInput(ERR_INVALID_USERNAME.to_string()));
    }
    if password.is_empty() {
        return Err(AppError::InvalidInput(ERR_EMPTY_PASSWORD.to_string()));
    }

    let password_hash = password::hash_password(password)?;

    let result = sqlx::query(
        "INSERT INTO users (username, password_hash, created_at) VALUES (?, ?, ?)",
    )
    .bind(username)
    .bind(&password_hash)
    .bind(Utc::now())
    .execute(pool)
    .await;

    match result {
        Ok(done) => {
            let user_id = done.last_insert_rowid();
            tracing::info!(user_id, "New user registered");
            Ok(user_id)
        }
        Err(e) if is_unique_violation(&e) => {
            tracing::info!(username, "Registration rejected: username taken");
            Err(AppError::DuplicateUser)
        }
        Err(e) => Err(e.into()),
    }
}

/// Verify a username/password pair and return the user id
///
/// Unknown usernames and wrong passwords are indistinguishable to the caller:
/// both burn an Argon2 verification and both return `InvalidCredentials`.
pub async fn authenticate(pool: &SqlitePool, username: &str, password: &str) -> Result<i64> {
    let user: Option<User> = sqlx::query_as(
        "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    let Some(user) = user else {
        password::verify_dummy(password);
        return Err(AppError::InvalidCredentials);
    };

    if !password::verify_password(password, &user.password_hash) {
        tracing::info!(user_id = user.id, "Login rejected: password mismatch");
        return Err(AppError::InvalidCredentials);
    }

    Ok(user.id)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
