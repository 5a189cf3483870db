use crate::models::{
    CalendarDay, CalendarMonth, GoalProgress, Mood, MoodInsight, OverviewResponse, PlaylistPick,
    TrendPoint, UserProfile,
};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

pub fn build_overview(profile: &UserProfile) -> OverviewResponse {
    build_overview_at(Local::now().date_naive(), profile)
}

pub fn build_overview_at(today: NaiveDate, profile: &UserProfile) -> OverviewResponse {
    OverviewResponse {
        streak: profile.streak,
        trend: mood_trend(profile),
        calendar: mood_calendar(today, profile),
        insight: mood_insight(profile),
        progress: goal_progress(profile),
        achievements: profile.achievements.clone(),
    }
}

/// Full badge set from fixed thresholds, in fixed evaluation order. Callers
/// replace `profile.achievements` with the result; nothing is appended
/// incrementally.
pub fn evaluate_achievements(profile: &UserProfile) -> Vec<String> {
    let mut badges = Vec::new();
    if profile.streak >= 7 {
        badges.push("7-Day Streak".to_string());
    }
    if profile.moods.len() >= 5 {
        badges.push("Mood Logger".to_string());
    }
    if profile.journal.len() >= 5 {
        badges.push("Journal Keeper".to_string());
    }
    if profile.gratitude.len() >= 5 {
        badges.push("Gratitude Guru".to_string());
    }
    if profile.goals.iter().filter(|g| g.completed).count() >= 3 {
        badges.push("Goal Achiever".to_string());
    }
    if profile.challenges.values().filter(|c| c.completed).count() >= 3 {
        badges.push("Challenge Master".to_string());
    }
    badges
}

/// Ordinal series for the last (up to) 7 mood entries, oldest first.
pub fn mood_trend(profile: &UserProfile) -> Vec<TrendPoint> {
    let start = profile.moods.len().saturating_sub(7);
    profile.moods[start..]
        .iter()
        .map(|entry| TrendPoint {
            date: entry_date(&entry.timestamp)
                .map(day_key)
                .unwrap_or_else(|| entry.timestamp.clone()),
            mood: entry.mood,
            score: entry.mood.score(),
        })
        .collect()
}

/// Per-day mood for the month containing `today`. Each day shows the first
/// mood entry logged on that date; entries from other months never color
/// this grid.
pub fn mood_calendar(today: NaiveDate, profile: &UserProfile) -> CalendarMonth {
    let dated: Vec<(NaiveDate, Mood)> = profile
        .moods
        .iter()
        .filter_map(|entry| entry_date(&entry.timestamp).map(|date| (date, entry.mood)))
        .collect();

    let first = today - Duration::days(i64::from(today.day0()));
    let days = first
        .iter_days()
        .take_while(|date| date.month() == today.month())
        .map(|date| CalendarDay {
            day: date.day(),
            mood: dated.iter().find(|(d, _)| *d == date).map(|(_, mood)| *mood),
        })
        .collect();

    CalendarMonth {
        year: today.year(),
        month: today.month(),
        leading_blanks: first.weekday().num_days_from_sunday() as u8,
        days,
    }
}

/// Most frequent mood over the last (up to) 7 entries, plus its suggestion
/// line and a playlist keyed by the latest logged mood. Ties go to the
/// earliest mood in wheel order.
pub fn mood_insight(profile: &UserProfile) -> MoodInsight {
    let start = profile.moods.len().saturating_sub(7);
    let recent = &profile.moods[start..];

    let mut most_frequent = None;
    let mut best = 0;
    for mood in Mood::ALL {
        let count = recent.iter().filter(|entry| entry.mood == mood).count();
        if count > best {
            best = count;
            most_frequent = Some(mood);
        }
    }

    let suggestion = match most_frequent {
        Some(mood) => suggestion_for(mood).to_string(),
        None => "Log your mood to get personalized insights.".to_string(),
    };

    MoodInsight {
        most_frequent,
        suggestion,
        playlist: profile.moods.last().map(|entry| playlist_for(entry.mood)),
    }
}

pub fn goal_progress(profile: &UserProfile) -> GoalProgress {
    let total = profile.goals.len();
    let completed = profile.goals.iter().filter(|g| g.completed).count();
    if total == 0 {
        return GoalProgress {
            total,
            completed,
            ratio: None,
            message: "Start by setting a goal!".to_string(),
        };
    }

    let ratio = completed as f64 / total as f64;
    let message = if total == 1 {
        if completed == 1 {
            "Great job completing your goal! Add more to track progress."
        } else {
            "Complete your goal to see progress!"
        }
    } else if ratio >= 0.8 {
        "You're doing amazing! Keep it up!"
    } else if ratio >= 0.5 {
        "Great progress! You're halfway there!"
    } else {
        "Every step counts. Keep pushing forward!"
    };

    GoalProgress {
        total,
        completed,
        ratio: Some(ratio),
        message: message.to_string(),
    }
}

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn entry_date(timestamp: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.date_naive())
}

fn suggestion_for(mood: Mood) -> &'static str {
    match mood {
        Mood::Angry => "Try the breathing exercise or write in your journal to process your emotions.",
        Mood::Sad => "Reflect on something you're grateful for to lift your spirits.",
        Mood::Happy => "Great job! Keep up your positive habits.",
        Mood::Calm => "Maintain this balance with regular meditation.",
        Mood::Excited => "Channel this energy into your goals!",
    }
}

fn playlist_for(mood: Mood) -> PlaylistPick {
    let (url, title) = match mood {
        Mood::Angry => ("https://www.youtube.com/embed/z5rRZdiu1UE", "Relaxing Heavy Metal"),
        Mood::Sad => ("https://www.youtube.com/embed/HAfFfqiYLp0", "Soothing Piano Music"),
        Mood::Happy => ("https://www.youtube.com/embed/0yBnIUX0QAE", "Upbeat Pop Hits"),
        Mood::Calm => ("https://www.youtube.com/embed/lFcSrYw-ARY", "Nature Sounds for Relaxation"),
        Mood::Excited => ("https://www.youtube.com/embed/3tmd-ClpJxA", "Energetic Dance Mix"),
    };
    PlaylistPick {
        title: title.to_string(),
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Challenge, Goal, MoodEntry};

    fn mood_at(mood: Mood, date: &str) -> MoodEntry {
        MoodEntry {
            mood,
            note: String::new(),
            timestamp: format!("{date}T10:00:00+00:00"),
        }
    }

    fn goal(completed: bool) -> Goal {
        Goal {
            text: "stretch".to_string(),
            completed,
            timestamp: "2026-03-01T08:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn achievements_fixed_order_and_idempotent() {
        let mut profile = UserProfile::default();
        profile.streak = 9;
        for _ in 0..5 {
            profile.moods.push(mood_at(Mood::Happy, "2026-03-02"));
        }
        for i in 0..3 {
            profile.goals.push(goal(true));
            profile.challenges.insert(
                format!("2026-03-0{}", i + 1),
                Challenge {
                    text: "walk".to_string(),
                    completed: true,
                },
            );
        }

        let first = evaluate_achievements(&profile);
        assert_eq!(
            first,
            vec!["7-Day Streak", "Mood Logger", "Goal Achiever", "Challenge Master"]
        );
        profile.achievements = first.clone();
        assert_eq!(evaluate_achievements(&profile), first);
    }

    #[test]
    fn achievements_below_thresholds_are_empty() {
        let mut profile = UserProfile::default();
        profile.streak = 6;
        for _ in 0..4 {
            profile.moods.push(mood_at(Mood::Calm, "2026-03-02"));
            profile.journal.push(crate::models::TextEntry {
                text: "note".to_string(),
                timestamp: "2026-03-02T10:00:00+00:00".to_string(),
            });
        }
        assert!(evaluate_achievements(&profile).is_empty());
    }

    #[test]
    fn trend_keeps_last_seven_scores() {
        let mut profile = UserProfile::default();
        for _ in 0..6 {
            profile.moods.push(mood_at(Mood::Angry, "2026-03-01"));
        }
        profile.moods.push(mood_at(Mood::Happy, "2026-03-02"));
        profile.moods.push(mood_at(Mood::Calm, "2026-03-03"));

        let trend = mood_trend(&profile);
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[5].score, 4);
        assert_eq!(trend[6].score, 3);
        assert_eq!(trend[6].date, "2026-03-03");
    }

    #[test]
    fn insight_tie_goes_to_wheel_order() {
        let mut profile = UserProfile::default();
        profile.moods.push(mood_at(Mood::Happy, "2026-03-02"));
        profile.moods.push(mood_at(Mood::Calm, "2026-03-03"));

        let insight = mood_insight(&profile);
        assert_eq!(insight.most_frequent, Some(Mood::Happy));
        assert_eq!(insight.suggestion, suggestion_for(Mood::Happy));
        // Playlist follows the latest entry, not the winner.
        assert_eq!(insight.playlist.unwrap().title, "Nature Sounds for Relaxation");
    }

    #[test]
    fn insight_empty_log() {
        let insight = mood_insight(&UserProfile::default());
        assert_eq!(insight.most_frequent, None);
        assert!(insight.playlist.is_none());
    }

    #[test]
    fn calendar_layout_and_coloring() {
        let mut profile = UserProfile::default();
        profile.moods.push(mood_at(Mood::Excited, "2026-03-10"));
        profile.moods.push(mood_at(Mood::Sad, "2026-03-10"));
        profile.moods.push(mood_at(Mood::Calm, "2026-02-28"));

        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let month = mood_calendar(today, &profile);

        assert_eq!(month.year, 2026);
        assert_eq!(month.month, 3);
        // 2026-03-01 is a Sunday.
        assert_eq!(month.leading_blanks, 0);
        assert_eq!(month.days.len(), 31);
        // First entry on the day wins.
        assert_eq!(month.days[9].mood, Some(Mood::Excited));
        // The February entry colors nothing here.
        assert!(month.days.iter().filter(|d| d.mood.is_some()).count() == 1);
    }

    #[test]
    fn calendar_leading_blanks_midweek_month() {
        // 2026-07-01 is a Wednesday.
        let today = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        let month = mood_calendar(today, &UserProfile::default());
        assert_eq!(month.leading_blanks, 3);
        assert_eq!(month.days.len(), 31);
    }

    #[test]
    fn overview_bundles_projections() {
        let mut profile = UserProfile::default();
        profile.moods.push(mood_at(Mood::Happy, "2026-03-02"));
        profile.streak = 1;

        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let overview = build_overview_at(today, &profile);
        assert_eq!(overview.streak, 1);
        assert_eq!(overview.trend.len(), 1);
        assert_eq!(overview.calendar.days.len(), 31);
        assert_eq!(overview.insight.most_frequent, Some(Mood::Happy));
    }

    #[test]
    fn progress_without_goals_is_distinct() {
        let progress = goal_progress(&UserProfile::default());
        assert_eq!(progress.total, 0);
        assert_eq!(progress.ratio, None);
        assert_eq!(progress.message, "Start by setting a goal!");
    }

    #[test]
    fn progress_two_of_three() {
        let mut profile = UserProfile::default();
        profile.goals.push(goal(true));
        profile.goals.push(goal(true));
        profile.goals.push(goal(false));

        let progress = goal_progress(&profile);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 3);
        let ratio = progress.ratio.unwrap();
        assert!((ratio - 0.667).abs() < 0.001);
        assert_eq!(progress.message, "Great progress! You're halfway there!");
    }

    #[test]
    fn progress_single_goal_messages() {
        let mut profile = UserProfile::default();
        profile.goals.push(goal(false));
        assert_eq!(
            goal_progress(&profile).message,
            "Complete your goal to see progress!"
        );
        profile.goals[0].completed = true;
        assert_eq!(
            goal_progress(&profile).message,
            "Great job completing your goal! Add more to track progress."
        );
    }
}
