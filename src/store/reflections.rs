use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::constants::ERR_INVALID_MOOD;
use crate::error::{AppError, Result};
use crate::models::{Mood, Reflection};

/// Insert or overwrite the user's reflection for one date
///
/// The UNIQUE(user_id, entry_date) index guarantees at most one row per day;
/// a second upsert for the same date replaces the fields in place.
pub async fn upsert(
    pool: &SqlitePool,
    user_id: i64,
    date: NaiveDate,
    text: &str,
    win: &str,
    improvement: &str,
    mood: &str,
) -> Result<()> {
    let mood = Mood::parse(mood).ok_or_else(|| {
        AppError::InvalidInput(ERR_INVALID_MOOD.to_string())
    })?;

    sqlx::query(
        "INSERT INTO reflections (user_id, entry_date, reflection_text, win, improvement, mood)
         VALUES (?, ?, ?, ?, ?, ?)
         ON CONFLICT(user_id, entry_date) DO UPDATE SET
             reflection_text = excluded.reflection_text,
             win = excluded.win,
             improvement = excluded.improvement,
             mood = excluded.mood",
    )
    .bind(user_id)
    .bind(date)
    .bind(text)
    .bind(win)
    .bind(improvement)
    .bind(mood.as_str())
    .execute(pool)
    .await?;

    Ok(())
}

/// Fetch the user's reflection for one date, if any
pub async fn get(pool: &SqlitePool, user_id: i64, date: NaiveDate) -> Result<Option<Reflection>> {
    let row = sqlx::query_as(
        "SELECT id, user_id, entry_date, reflection_text, win, improvement, mood
         FROM reflections WHERE user_id = ? AND entry_date = ?",
    )
    .bind(user_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Mood recorded for one date, for the dashboard header
pub async fn mood_for_date(pool: &SqlitePool, user_id: i64, date: NaiveDate) -> Result<Option<String>> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT mood FROM reflections WHERE user_id = ? AND entry_date = ?")
            .bind(user_id)
            .bind(date)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|(mood,)| mood))
}
