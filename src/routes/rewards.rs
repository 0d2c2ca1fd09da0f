use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::error::{AppError, Result};
use crate::models::{RequirementType, Reward};
use crate::store::rewards;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRewardRequest {
    pub name: String,
    pub requirement_type: String,
    pub requirement_value: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRewardResponse {
    pub success: bool,
    pub reward_id: i64,
}

#[derive(Debug, Serialize)]
pub struct RewardListResponse {
    pub rewards: Vec<Reward>,
}

#[derive(Debug, Serialize)]
pub struct RewardActionResponse {
    pub success: bool,
}

/// List the caller's rewards, locked ones first
pub async fn list_rewards(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<RewardListResponse>> {
    let rewards = rewards::list_rewards(&state.pool, auth.user_id).await?;
    Ok(Json(RewardListResponse { rewards }))
}

/// Create a reward with an hours or streak requirement
pub async fn add_reward(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<AddRewardRequest>,
) -> Result<Json<AddRewardResponse>> {
    let requirement_type = RequirementType::parse(&payload.requirement_type).ok_or_else(|| {
        AppError::InvalidInput("Requirement type must be \"hours\" or \"streak\"".to_string())
    })?;

    let reward_id = rewards::add_reward(
        &state.pool,
        auth.user_id,
        &payload.name,
        requirement_type,
        payload.requirement_value,
    )
    .await?;

    Ok(Json(AddRewardResponse {
        success: true,
        reward_id,
    }))
}

/// Mark one of the caller's rewards as unlocked
pub async fn unlock_reward(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(reward_id): Path<i64>,
) -> Result<Json<RewardActionResponse>> {
    rewards::unlock_reward(&state.pool, auth.user_id, reward_id).await?;
    tracing::info!(user_id = auth.user_id, reward_id, "Reward unlocked");
    Ok(Json(RewardActionResponse { success: true }))
}

/// Delete one of the caller's rewards
pub async fn delete_reward(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(reward_id): Path<i64>,
) -> Result<Json<RewardActionResponse>> {
    rewards::delete_reward(&state.pool, auth.user_id, reward_id).await?;
    Ok(Json(RewardActionResponse { success: true }))
}
