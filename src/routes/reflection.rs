use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::error::Result;
use crate::models::Reflection;
use crate::store::reflections;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReflectionParams {
    /// Defaults to today when absent
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ReflectionResponse {
    pub date: NaiveDate,
    pub reflection: Option<Reflection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertReflectionRequest {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub reflection_text: String,
    #[serde(default)]
    pub win: String,
    #[serde(default)]
    pub improvement: String,
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct UpsertReflectionResponse {
    pub success: bool,
}

/// View the reflection for a date (today when unspecified)
pub async fn view_reflection(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ReflectionParams>,
) -> Result<Json<ReflectionResponse>> {
    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());
    let reflection = reflections::get(&state.pool, auth.user_id, date).await?;

    Ok(Json(ReflectionResponse { date, reflection }))
}

/// Write the reflection for a date, overwriting any existing one
pub async fn upsert_reflection(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<UpsertReflectionRequest>,
) -> Result<Json<UpsertReflectionResponse>> {
    let date = payload.date.unwrap_or_else(|| Utc::now().date_naive());

    reflections::upsert(
        &state.pool,
        auth.user_id,
        date,
        &payload.reflection_text,
        &payload.win,
        &payload.improvement,
        &payload.mood,
    )
    .await?;

    tracing::info!(user_id = auth.user_id, %date, "Reflection saved");

    Ok(Json(UpsertReflectionResponse { success: true }))
}
