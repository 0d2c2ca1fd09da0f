use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{RequirementType, Reward};

/// Insert a reward and return its id
pub async fn add_reward(
    pool: &SqlitePool,
    user_id: i64,
    name: &str,
    requirement_type: RequirementType,
    requirement_value: i64,
) -> Result<i64> {
    if !Reward::validate_name(name) {
        return Err(AppError::InvalidInput(
            "Reward name must not be empty".to_string(),
        ));
    }
    if !Reward::validate_requirement_value(requirement_value) {
        return Err(AppError::InvalidInput(
            "Requirement value must be positive".to_string(),
        ));
    }

    let done = sqlx::query(
        "INSERT INTO rewards (user_id, name, requirement_type, requirement_value, unlocked)
         VALUES (?, ?, ?, ?, 0)",
    )
    .bind(user_id)
    .bind(name.trim())
    .bind(requirement_type.as_str())
    .bind(requirement_value)
    .execute(pool)
    .await?;

    Ok(done.last_insert_rowid())
}

/// List the user's rewards, locked ones first
pub async fn list_rewards(pool: &SqlitePool, user_id: i64) -> Result<Vec<Reward>> {
    let rewards = sqlx::query_as(
        "SELECT id, user_id, name, requirement_type, requirement_value, unlocked
         FROM rewards WHERE user_id = ? ORDER BY unlocked, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rewards)
}

/// Mark a reward as unlocked; stays unlocked once set
pub async fn unlock_reward(pool: &SqlitePool, user_id: i64, reward_id: i64) -> Result<()> {
    let done = sqlx::query("UPDATE rewards SET unlocked = 1 WHERE id = ? AND user_id = ?")
        .bind(reward_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if done.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

/// Delete a reward owned by the user
pub async fn delete_reward(pool: &SqlitePool, user_id: i64, reward_id: i64) -> Result<()> {
    let done = sqlx::query("DELETE FROM rewards WHERE id = ? AND user_id = ?")
        .bind(reward_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if done.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}
