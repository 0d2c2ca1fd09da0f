pub mod auth;
pub mod dashboard;
pub mod health;
pub mod media;
pub mod reflection;
pub mod rewards;

pub use auth::{login, logout, signup};
pub use dashboard::{add_entry, dashboard, delete_entry};
pub use health::health_check;
pub use media::{add_media, delete_media, list_media};
pub use reflection::{upsert_reflection, view_reflection};
pub use rewards::{add_reward, delete_reward, list_rewards, unlock_reward};

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::AppState;

/// Build the application router over the shared state
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/dashboard", get(dashboard))
        .route("/api/habits", post(add_entry))
        .route("/api/habits/:id", delete(delete_entry))
        .route("/api/reflection", get(view_reflection).put(upsert_reflection))
        .route("/api/media", get(list_media).post(add_media))
        .route("/api/media/:id", delete(delete_media))
        .route("/api/rewards", get(list_rewards).post(add_reward))
        .route("/api/rewards/:id/unlock", post(unlock_reward))
        .route("/api/rewards/:id", delete(delete_reward))
        .with_state(state)
}
