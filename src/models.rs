use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The five moods of the wheel, in wheel order. Projection tie-breaks
/// follow this declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Angry,
    Sad,
    Happy,
    Calm,
    Excited,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Angry, Mood::Sad, Mood::Happy, Mood::Calm, Mood::Excited];

    /// Ordinal score used by the trend chart.
    pub fn score(self) -> u8 {
        match self {
            Mood::Angry => 1,
            Mood::Sad => 2,
            Mood::Calm => 3,
            Mood::Happy => 4,
            Mood::Excited => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    pub note: String,
    /// RFC 3339, local offset.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEntry {
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub text: String,
    pub completed: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub text: String,
    pub completed: bool,
}

/// Everything persisted for one username. Logs are append-only; goals may
/// additionally flip `completed` in place; `achievements` is replaced
/// wholesale on every recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserProfile {
    pub moods: Vec<MoodEntry>,
    pub journal: Vec<TextEntry>,
    pub gratitude: Vec<TextEntry>,
    pub goals: Vec<Goal>,
    /// Keyed by `YYYY-MM-DD`, at most one per calendar day.
    pub challenges: BTreeMap<String, Challenge>,
    pub achievements: Vec<String>,
    pub streak: u32,
    /// `YYYY-MM-DD` of the last day a mood advanced the streak.
    pub last_login: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppData {
    pub users: BTreeMap<String, UserProfile>,
    pub current_user: Option<String>,
    pub dark_mode: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: Mood,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleGoalRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct PrefsRequest {
    pub dark_mode: bool,
}

#[derive(Debug, Deserialize)]
pub struct ReminderRequest {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub streak: u32,
    pub achievements: Vec<String>,
    pub moods: Vec<MoodEntry>,
    pub journal: Vec<TextEntry>,
    pub gratitude: Vec<TextEntry>,
    pub goals: Vec<Goal>,
    pub progress: GoalProgress,
}

#[derive(Debug, Serialize)]
pub struct ChallengeResponse {
    pub date: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub mood: Mood,
    pub score: u8,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub day: u32,
    pub mood: Option<Mood>,
}

#[derive(Debug, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1, counted from Sunday.
    pub leading_blanks: u8,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistPick {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct MoodInsight {
    pub most_frequent: Option<Mood>,
    pub suggestion: String,
    pub playlist: Option<PlaylistPick>,
}

#[derive(Debug, Serialize)]
pub struct GoalProgress {
    pub total: usize,
    pub completed: usize,
    /// `None` while no goals exist, so callers never divide by zero.
    pub ratio: Option<f64>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub streak: u32,
    pub trend: Vec<TrendPoint>,
    pub calendar: CalendarMonth,
    pub insight: MoodInsight,
    pub progress: GoalProgress,
    pub achievements: Vec<String>,
}
