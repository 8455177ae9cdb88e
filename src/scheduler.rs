//! Daily rotation timer
//!
//! Fires once per day at a fixed UTC time of day. Each fire runs on its own
//! task; the rotator skips a fire that overlaps a still-running one.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use tokio::task::JoinHandle;

use crate::service::DailyQuoteRotator;

/// Next instant strictly after `now` whose UTC time of day is `at`
pub fn next_rotation_after(now: DateTime<Utc>, at: NaiveTime) -> DateTime<Utc> {
    let today = now.date_naive().and_time(at).and_utc();
    if today > now {
        today
    } else {
        (now.date_naive() + Duration::days(1)).and_time(at).and_utc()
    }
}

/// Spawn background daily rotation task
pub fn spawn_rotation_task(rotator: Arc<DailyQuoteRotator>, at: NaiveTime) -> JoinHandle<()> {
    let handle = tokio::spawn(async move {
        loop {
            let now = Utc::now();
            let next = next_rotation_after(now, at);
            let wait = (next - now).to_std().unwrap_or_default();

            tracing::info!(next_run = %next, "Next daily quote rotation scheduled");
            tokio::time::sleep(wait).await;

            let rotator = rotator.clone();
            tokio::spawn(async move {
                let outcome = rotator.run_scheduled().await;
                tracing::debug!(?outcome, "Scheduled rotation finished");
            });
        }
    });

    tracing::info!(time_of_day = %at, "Daily rotation task spawned");
    handle
}
