//! Daily mood reminder. One scheduled task at a time: scheduling again
//! cancels the previous task instead of chaining timers.

use chrono::{DateTime, Duration as ChronoDuration, Local};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

pub const REMINDER_HOUR: u32 = 20;
pub const REMINDER_MINUTE: u32 = 0;

#[derive(Default)]
pub struct ReminderScheduler {
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleeps until the next local `hour:minute`, fires, then recurs every
    /// 24 hours. Replaces any previously scheduled reminder.
    pub async fn schedule_daily(&self, hour: u32, minute: u32) {
        let mut slot = self.task.lock().await;
        if let Some(task) = slot.take() {
            task.abort();
        }
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(duration_until(Local::now(), hour, minute)).await;
            loop {
                info!("reminder: time to log your mood for today");
                tokio::time::sleep(Duration::from_secs(24 * 60 * 60)).await;
            }
        }));
        info!("daily reminder scheduled for {hour:02}:{minute:02}");
    }

    pub async fn cancel(&self) {
        if let Some(task) = self.task.lock().await.take() {
            task.abort();
            info!("daily reminder cancelled");
        }
    }
}

/// Time from `now` until the next local `hour:minute`; tomorrow's slot if
/// today's has already passed. An invalid hour/minute yields zero.
pub fn duration_until(now: DateTime<Local>, hour: u32, minute: u32) -> Duration {
    let Some(mut target) = now.date_naive().and_hms_opt(hour, minute, 0) else {
        return Duration::ZERO;
    };
    if target < now.naive_local() {
        target += ChronoDuration::days(1);
    }
    (target - now.naive_local()).to_std().unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn local(h: u32, m: u32) -> DateTime<Local> {
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        Local
            .from_local_datetime(&day.and_hms_opt(h, m, 0).unwrap())
            .unwrap()
    }

    #[test]
    fn waits_until_this_evening() {
        let wait = duration_until(local(19, 0), 20, 0);
        assert_eq!(wait, Duration::from_secs(60 * 60));
    }

    #[test]
    fn rolls_over_to_tomorrow() {
        let wait = duration_until(local(21, 30), 20, 0);
        assert_eq!(wait, Duration::from_secs(22 * 60 * 60 + 30 * 60));
    }

    #[test]
    fn exact_time_fires_immediately() {
        assert_eq!(duration_until(local(20, 0), 20, 0), Duration::ZERO);
    }

    #[test]
    fn invalid_time_is_swallowed() {
        assert_eq!(duration_until(local(12, 0), 25, 0), Duration::ZERO);
    }
}
