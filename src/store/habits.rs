use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

use crate::constants::{ERR_INVALID_LABEL, ERR_NEGATIVE_HOURS};
use crate::error::{AppError, Result};
use crate::models::HabitEntry;

/// Insert a habit time entry and return its id
///
/// Zero hours is a valid entry (showed up, did nothing measurable); negative
/// hours and empty labels are rejected.
pub async fn add_entry(
    pool: &SqlitePool,
    user_id: i64,
    label: &str,
    date: NaiveDate,
    hours: f64,
    note: Option<&str>,
    sticker: Option<&str>,
) -> Result<i64> {
    if !HabitEntry::validate_label(label) {
        return Err(AppError::InvalidInput(ERR_INVALID_LABEL.to_string()));
    }
    if !HabitEntry::validate_hours(hours) {
        return Err(AppError::InvalidInput(ERR_NEGATIVE_HOURS.to_string()));
    }

    let done = sqlx::query(
        "INSERT INTO habit_entries (user_id, label, entry_date, hours, note, sticker)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(label.trim())
    .bind(date)
    .bind(hours)
    .bind(note)
    .bind(sticker)
    .execute(pool)
    .await?;

    Ok(done.last_insert_rowid())
}

/// Delete a habit entry owned by the user
pub async fn delete_entry(pool: &SqlitePool, user_id: i64, entry_id: i64) -> Result<()> {
    let done = sqlx::query("DELETE FROM habit_entries WHERE id = ? AND user_id = ?")
        .bind(entry_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if done.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

/// List the user's entries for one date, plus their total hours
pub async fn list_entries(
    pool: &SqlitePool,
    user_id: i64,
    date: NaiveDate,
) -> Result<(Vec<HabitEntry>, f64)> {
    let entries: Vec<HabitEntry> = sqlx::query_as(
        "SELECT id, user_id, label, entry_date, hours, note, sticker
         FROM habit_entries WHERE user_id = ? AND entry_date = ? ORDER BY id",
    )
    .bind(user_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    let total: f64 = entries.iter().map(|e| e.hours).sum();
    Ok((entries, total))
}

/// Consecutive days ending at `today` with at least one entry
///
/// Walks backwards over the user's distinct entry dates; a day without an
/// entry breaks the streak. Zero when there is no entry for `today`.
pub async fn current_streak(pool: &SqlitePool, user_id: i64, today: NaiveDate) -> Result<u32> {
    let dates: Vec<(NaiveDate,)> = sqlx::query_as(
        "SELECT DISTINCT entry_date FROM habit_entries
         WHERE user_id = ? AND entry_date <= ? ORDER BY entry_date DESC",
    )
    .bind(user_id)
    .bind(today)
    .fetch_all(pool)
    .await?;

    let mut streak = 0u32;
    let mut expected = today;
    for (date,) in dates {
        if date != expected {
            break;
        }
        streak += 1;
        expected = expected - Duration::days(1);
    }

    Ok(streak)
}
