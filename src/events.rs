//! Mutations over a [`UserProfile`]: every user action appends to one of the
//! per-user logs (or flips a goal/challenge flag), then derived state is
//! recomputed. Validation happens before any write, so a rejected call
//! leaves the profile untouched.

use crate::errors::AppError;
use crate::models::{Challenge, Goal, Mood, MoodEntry, TextEntry, UserProfile};
use crate::stats::{day_key, evaluate_achievements};
use chrono::{DateTime, Duration, Local, NaiveDate};

pub const MOOD_NOTE_MAX: usize = 500;
pub const ENTRY_TEXT_MAX: usize = 1000;
pub const GOAL_TEXT_MAX: usize = 100;

pub const CHALLENGE_POOL: [&str; 5] = [
    "Take a 5-minute walk outside",
    "Compliment someone today",
    "Try a new hobby for 10 minutes",
    "Drink a glass of water mindfully",
    "Write down 3 things you love about yourself",
];

/// Appends one mood entry and advances the streak for the entry's calendar
/// day (so deferred or batched entries stay correct).
pub fn log_mood(
    profile: &mut UserProfile,
    mood: Mood,
    note: &str,
    now: DateTime<Local>,
) -> Result<(), AppError> {
    let note = note.trim();
    if note.chars().count() > MOOD_NOTE_MAX {
        return Err(AppError::bad_request(
            "mood note must be 500 characters or less",
        ));
    }

    profile.moods.push(MoodEntry {
        mood,
        note: note.to_string(),
        timestamp: now.to_rfc3339(),
    });
    advance_streak(profile, now.date_naive());
    profile.achievements = evaluate_achievements(profile);
    Ok(())
}

/// Appends a journal or gratitude entry. Caller picks the log; caller also
/// recomputes achievements afterwards.
pub fn add_entry(
    log: &mut Vec<TextEntry>,
    text: &str,
    now: DateTime<Local>,
) -> Result<(), AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::bad_request("entry must not be empty"));
    }
    if text.chars().count() > ENTRY_TEXT_MAX {
        return Err(AppError::bad_request(
            "entry must be 1000 characters or less",
        ));
    }

    log.push(TextEntry {
        text: text.to_string(),
        timestamp: now.to_rfc3339(),
    });
    Ok(())
}

pub fn add_goal(
    profile: &mut UserProfile,
    text: &str,
    now: DateTime<Local>,
) -> Result<(), AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::bad_request("goal must not be empty"));
    }
    if text.chars().count() > GOAL_TEXT_MAX {
        return Err(AppError::bad_request("goal must be 100 characters or less"));
    }

    profile.goals.push(Goal {
        text: text.to_string(),
        completed: false,
        timestamp: now.to_rfc3339(),
    });
    Ok(())
}

/// Flips `completed` on the goal at `index`. An out-of-range index is an
/// error, never a panic; goal indices stay stable because goals are never
/// deleted.
pub fn toggle_goal(profile: &mut UserProfile, index: usize) -> Result<(), AppError> {
    let Some(goal) = profile.goals.get_mut(index) else {
        return Err(AppError::not_found(format!("no goal at index {index}")));
    };
    goal.completed = !goal.completed;
    profile.achievements = evaluate_achievements(profile);
    Ok(())
}

/// Streak state machine, advanced at most once per distinct calendar day:
/// same day is a no-op, an adjacent day increments, anything else resets
/// to 1.
pub fn advance_streak(profile: &mut UserProfile, today: NaiveDate) {
    let today_key = day_key(today);
    if profile.last_login.as_deref() == Some(today_key.as_str()) {
        return;
    }

    let yesterday_key = day_key(today - Duration::days(1));
    if profile.last_login.as_deref() == Some(yesterday_key.as_str()) {
        profile.streak += 1;
    } else {
        profile.streak = 1;
    }
    profile.last_login = Some(today_key);
}

/// Returns today's challenge, creating it on first view. `pick` receives the
/// pool size and returns an index; handlers pass a random picker, tests a
/// constant one.
pub fn get_or_create_challenge(
    profile: &mut UserProfile,
    today: NaiveDate,
    pick: impl FnOnce(usize) -> usize,
) -> Challenge {
    profile
        .challenges
        .entry(day_key(today))
        .or_insert_with(|| Challenge {
            text: CHALLENGE_POOL[pick(CHALLENGE_POOL.len()) % CHALLENGE_POOL.len()].to_string(),
            completed: false,
        })
        .clone()
}

/// Marks today's challenge completed; `None` if no challenge was created
/// for today yet.
pub fn complete_challenge(profile: &mut UserProfile, today: NaiveDate) -> Option<Challenge> {
    let challenge = profile.challenges.get_mut(&day_key(today))?;
    challenge.completed = true;
    let completed = challenge.clone();
    profile.achievements = evaluate_achievements(profile);
    Some(completed)
}

/// Completes every open goal mentioning meditation; fires when a meditation
/// session finishes. Returns how many goals flipped.
pub fn complete_meditation_goals(profile: &mut UserProfile) -> usize {
    let mut flipped = 0;
    for goal in &mut profile.goals {
        if !goal.completed && goal.text.to_lowercase().contains("meditat") {
            goal.completed = true;
            flipped += 1;
        }
    }
    if flipped > 0 {
        profile.achievements = evaluate_achievements(profile);
    }
    flipped
}
