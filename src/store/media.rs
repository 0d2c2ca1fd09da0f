use chrono::Utc;
use sqlx::SqlitePool;

use crate::constants::{ERR_INVALID_RATING, MAX_TITLE_LEN};
use crate::error::{AppError, Result};
use crate::models::{MediaKind, MediaLog};

/// Insert a media log and return its id
pub async fn add_log(
    pool: &SqlitePool,
    user_id: i64,
    title: &str,
    kind: MediaKind,
    rating: i64,
    review: Option<&str>,
) -> Result<i64> {
    if !MediaLog::validate_title(title) {
        return Err(AppError::InvalidInput(format!(
            "Title must be 1-{MAX_TITLE_LEN} characters"
        )));
    }
    if !MediaLog::validate_rating(rating) {
        return Err(AppError::InvalidInput(ERR_INVALID_RATING.to_string()));
    }

    let done = sqlx::query(
        "INSERT INTO media_logs (user_id, title, kind, rating, review, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(title.trim())
    .bind(kind.as_str())
    .bind(rating)
    .bind(review)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(done.last_insert_rowid())
}

/// List the user's media logs, newest first
pub async fn list_logs(pool: &SqlitePool, user_id: i64) -> Result<Vec<MediaLog>> {
    let logs = sqlx::query_as(
        "SELECT id, user_id, title, kind, rating, review, created_at
         FROM media_logs WHERE user_id = ? ORDER BY id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(logs)
}

/// Delete a media log owned by the user
pub async fn delete_log(pool: &SqlitePool, user_id: i64, media_id: i64) -> Result<()> {
    let done = sqlx::query("DELETE FROM media_logs WHERE id = ? AND user_id = ?")
        .bind(media_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if done.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}
