use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::error::Result;
use crate::models::HabitEntry;
use crate::store::{habits, reflections};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    /// Defaults to today when absent
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub date: NaiveDate,
    pub entries: Vec<HabitEntry>,
    pub total_hours: f64,
    pub streak: u32,
    pub mood: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub label: String,
    pub date: Option<NaiveDate>,
    pub hours: f64,
    pub note: Option<String>,
    pub sticker: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEntryResponse {
    pub success: bool,
    pub entry_id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Dashboard view: one day's entries, their total, the running streak, and
/// that day's mood if a reflection exists
pub async fn dashboard(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardResponse>> {
    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());

    let (entries, total_hours) = habits::list_entries(&state.pool, auth.user_id, date).await?;
    let streak = habits::current_streak(&state.pool, auth.user_id, date).await?;
    let mood = reflections::mood_for_date(&state.pool, auth.user_id, date).await?;

    Ok(Json(DashboardResponse {
        date,
        entries,
        total_hours,
        streak,
        mood,
    }))
}

/// Log a block of time against a habit label
pub async fn add_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<AddEntryRequest>,
) -> Result<Json<AddEntryResponse>> {
    let date = payload.date.unwrap_or_else(|| Utc::now().date_naive());

    let entry_id = habits::add_entry(
        &state.pool,
        auth.user_id,
        &payload.label,
        date,
        payload.hours,
        payload.note.as_deref(),
        payload.sticker.as_deref(),
    )
    .await?;

    tracing::info!(user_id = auth.user_id, entry_id, "Habit entry added");

    Ok(Json(AddEntryResponse {
        success: true,
        entry_id,
    }))
}

/// Delete one of the caller's habit entries
pub async fn delete_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    habits::delete_entry(&state.pool, auth.user_id, entry_id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
