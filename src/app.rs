use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/mood", post(handlers::log_mood))
        .route("/api/journal", post(handlers::add_journal))
        .route("/api/gratitude", post(handlers::add_gratitude))
        .route("/api/goals", post(handlers::add_goal))
        .route("/api/goals/toggle", post(handlers::toggle_goal))
        .route("/api/challenge", get(handlers::get_challenge))
        .route("/api/challenge/complete", post(handlers::complete_challenge))
        .route("/api/meditation/complete", post(handlers::complete_meditation))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/export", get(handlers::export_profile))
        .route("/api/prefs", post(handlers::set_prefs))
        .route("/api/reminder", post(handlers::set_reminder))
        .with_state(state)
}
