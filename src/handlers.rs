use crate::errors::AppError;
use crate::events;
use crate::models::{
    AppData, ChallengeResponse, EntryRequest, LoginRequest, MoodRequest, OkResponse, OverviewResponse,
    PrefsRequest, ProfileResponse, ReminderRequest, ToggleGoalRequest, UserProfile,
};
use crate::reminder::{REMINDER_HOUR, REMINDER_MINUTE};
use crate::state::AppState;
use crate::stats;
use crate::storage::{ensure_profile, persist_data, validate_username};
use crate::ui::render_index;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;
use rand::Rng;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let username = validate_username(&payload.username)?.to_string();

    let mut data = state.data.lock().await;
    data.current_user = Some(username.clone());
    let response = snapshot(&username, ensure_profile(&mut data, &username));
    persist_data(&state.data_path, &data).await?;

    info!("user {username} logged in");
    Ok(Json(response))
}

pub async fn logout(State(state): State<AppState>) -> Result<Json<OkResponse>, AppError> {
    let mut data = state.data.lock().await;
    data.current_user = None;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(OkResponse { ok: true }))
}

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<ProfileResponse>, AppError> {
    let data = state.data.lock().await;
    let username = current_username(&data)?;
    let profile = data
        .users
        .get(&username)
        .ok_or_else(|| AppError::not_found("profile not found"))?;
    Ok(Json(snapshot(&username, profile)))
}

pub async fn log_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let now = Local::now();
    let mut data = state.data.lock().await;
    let username = current_username(&data)?;
    let profile = ensure_profile(&mut data, &username);

    events::log_mood(profile, payload.mood, payload.note.as_deref().unwrap_or(""), now)?;
    let response = snapshot(&username, profile);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(response))
}

pub async fn add_journal(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    append_entry(&state, EntryKind::Journal, &payload.text).await.map(Json)
}

pub async fn add_gratitude(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    append_entry(&state, EntryKind::Gratitude, &payload.text).await.map(Json)
}

pub async fn add_goal(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let now = Local::now();
    let mut data = state.data.lock().await;
    let username = current_username(&data)?;
    let profile = ensure_profile(&mut data, &username);

    events::add_goal(profile, &payload.text, now)?;
    let response = snapshot(&username, profile);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(response))
}

pub async fn toggle_goal(
    State(state): State<AppState>,
    Json(payload): Json<ToggleGoalRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let mut data = state.data.lock().await;
    let username = current_username(&data)?;
    let profile = ensure_profile(&mut data, &username);

    if let Err(err) = events::toggle_goal(profile, payload.index) {
        warn!("goal toggle rejected: {}", err.message);
        return Err(err);
    }
    let response = snapshot(&username, profile);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(response))
}

/// Lazily creates today's challenge on first view; later calls the same day
/// return the stored entry unchanged.
pub async fn get_challenge(
    State(state): State<AppState>,
) -> Result<Json<ChallengeResponse>, AppError> {
    let today = Local::now().date_naive();
    let key = stats::day_key(today);

    let mut data = state.data.lock().await;
    let username = current_username(&data)?;
    let profile = ensure_profile(&mut data, &username);

    let existed = profile.challenges.contains_key(&key);
    let challenge =
        events::get_or_create_challenge(profile, today, |len| rand::thread_rng().gen_range(0..len));
    if !existed {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(ChallengeResponse {
        date: key,
        text: challenge.text,
        completed: challenge.completed,
    }))
}

pub async fn complete_challenge(
    State(state): State<AppState>,
) -> Result<Json<ChallengeResponse>, AppError> {
    let today = Local::now().date_naive();
    let key = stats::day_key(today);

    let mut data = state.data.lock().await;
    let username = current_username(&data)?;
    let profile = ensure_profile(&mut data, &username);

    let Some(challenge) = events::complete_challenge(profile, today) else {
        warn!("no challenge recorded for {key} yet");
        return Err(AppError::not_found("no challenge for today yet"));
    };
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ChallengeResponse {
        date: key,
        text: challenge.text,
        completed: challenge.completed,
    }))
}

pub async fn complete_meditation(
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AppError> {
    let mut data = state.data.lock().await;
    let username = current_username(&data)?;
    let profile = ensure_profile(&mut data, &username);

    let flipped = events::complete_meditation_goals(profile);
    let response = snapshot(&username, profile);
    if flipped > 0 {
        persist_data(&state.data_path, &data).await?;
    }
    Ok(Json(response))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<OverviewResponse>, AppError> {
    let data = state.data.lock().await;
    let username = current_username(&data)?;
    let profile = data
        .users
        .get(&username)
        .ok_or_else(|| AppError::not_found("profile not found"))?;
    Ok(Json(stats::build_overview(profile)))
}

/// The profile's canonical external representation, served as a download.
pub async fn export_profile(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let data = state.data.lock().await;
    let username = current_username(&data)?;
    let profile = data
        .users
        .get(&username)
        .ok_or_else(|| AppError::not_found("profile not found"))?;

    let body = serde_json::to_string_pretty(profile).map_err(AppError::internal)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"mindspace_{username}_data.json\""),
            ),
        ],
        body,
    ))
}

pub async fn set_prefs(
    State(state): State<AppState>,
    Json(payload): Json<PrefsRequest>,
) -> Result<Json<OkResponse>, AppError> {
    let mut data = state.data.lock().await;
    data.dark_mode = payload.dark_mode;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(OkResponse { ok: true }))
}

pub async fn set_reminder(
    State(state): State<AppState>,
    Json(payload): Json<ReminderRequest>,
) -> Json<OkResponse> {
    if payload.enabled {
        state.reminder.schedule_daily(REMINDER_HOUR, REMINDER_MINUTE).await;
    } else {
        state.reminder.cancel().await;
    }
    Json(OkResponse { ok: true })
}

enum EntryKind {
    Journal,
    Gratitude,
}

async fn append_entry(
    state: &AppState,
    kind: EntryKind,
    text: &str,
) -> Result<ProfileResponse, AppError> {
    let now = Local::now();
    let mut data = state.data.lock().await;
    let username = current_username(&data)?;
    let profile = ensure_profile(&mut data, &username);

    let log = match kind {
        EntryKind::Journal => &mut profile.journal,
        EntryKind::Gratitude => &mut profile.gratitude,
    };
    events::add_entry(log, text, now)?;
    profile.achievements = stats::evaluate_achievements(profile);

    let response = snapshot(&username, profile);
    persist_data(&state.data_path, &data).await?;
    Ok(response)
}

fn current_username(data: &AppData) -> Result<String, AppError> {
    data.current_user
        .clone()
        .ok_or_else(|| AppError::unauthorized("log in first"))
}

fn snapshot(username: &str, profile: &UserProfile) -> ProfileResponse {
    ProfileResponse {
        username: username.to_string(),
        streak: profile.streak,
        achievements: profile.achievements.clone(),
        moods: profile.moods.clone(),
        journal: profile.journal.clone(),
        gratitude: profile.gratitude.clone(),
        goals: profile.goals.clone(),
        progress: stats::goal_progress(profile),
    }
}
