use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::error::{AppError, Result};
use crate::models::{MediaKind, MediaLog};
use crate::store::media;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddMediaRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rating: i64,
    pub review: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMediaResponse {
    pub success: bool,
    pub media_id: i64,
}

/// A media log row plus its rendered star string, e.g. "★★★★☆"
#[derive(Debug, Serialize)]
pub struct MediaEntry {
    #[serde(flatten)]
    pub log: MediaLog,
    pub stars: String,
}

#[derive(Debug, Serialize)]
pub struct MediaListResponse {
    pub entries: Vec<MediaEntry>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// List the caller's books and movies, newest first
pub async fn list_media(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<MediaListResponse>> {
    let entries = media::list_logs(&state.pool, auth.user_id)
        .await?
        .into_iter()
        .map(|log| MediaEntry {
            stars: MediaLog::stars(log.rating),
            log,
        })
        .collect();
    Ok(Json(MediaListResponse { entries }))
}

/// Log a book or movie with a 1-5 star rating
pub async fn add_media(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<AddMediaRequest>,
) -> Result<Json<AddMediaResponse>> {
    let kind = MediaKind::parse(&payload.kind).ok_or_else(|| {
        AppError::InvalidInput("Media type must be \"book\" or \"movie\"".to_string())
    })?;

    let media_id = media::add_log(
        &state.pool,
        auth.user_id,
        &payload.title,
        kind,
        payload.rating,
        payload.review.as_deref(),
    )
    .await?;

    tracing::info!(user_id = auth.user_id, media_id, "Media log added");

    Ok(Json(AddMediaResponse {
        success: true,
        media_id,
    }))
}

/// Delete one of the caller's media logs
pub async fn delete_media(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(media_id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    media::delete_log(&state.pool, auth.user_id, media_id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
