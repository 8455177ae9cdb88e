//! Daily quote rotation
//!
//! Owns the at-most-one-daily invariant. Every rotation runs under a single
//! async mutex, so no two rotations interleave their clear/pick/set steps.
//! Deletes take the same mutex through [`DailyQuoteRotator::exclusive`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tokio::sync::{Mutex, MutexGuard};

use crate::data::{Quote, QuoteStore, StoreError, StoreResult};

/// Result of a scheduled rotation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationOutcome {
    /// A new daily quote was flagged
    Rotated(i64),
    /// Store was empty; no daily quote is set
    NoQuotes,
    /// Another scheduled rotation was still running
    Skipped,
    /// Rotation failed; the next scheduled run proceeds normally
    Failed,
}

impl RotationOutcome {
    fn label(&self) -> &'static str {
        match self {
            Self::Rotated(_) => "rotated",
            Self::NoQuotes => "empty",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

/// Daily quote rotator
pub struct DailyQuoteRotator {
    store: Arc<dyn QuoteStore>,
    /// Held for the whole clear/pick/set sequence
    flag_lock: Mutex<()>,
    /// Set while a scheduled run is in flight
    scheduled_running: AtomicBool,
}

/// Clears `scheduled_running` even if the rotation future is dropped
struct ScheduledRunGuard<'a>(&'a AtomicBool);

impl Drop for ScheduledRunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl DailyQuoteRotator {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self {
            store,
            flag_lock: Mutex::new(()),
            scheduled_running: AtomicBool::new(false),
        }
    }

    /// Rotate the daily quote now
    ///
    /// Waits for any in-flight rotation to finish first.
    ///
    /// # Errors
    /// Returns `StoreError::EmptyStore` if there are no quotes to pick from;
    /// in that case no quote is left flagged.
    pub async fn rotate(&self) -> StoreResult<Quote> {
        let _guard = self.flag_lock.lock().await;
        let started = Instant::now();

        let result = self.rotate_locked().await;

        let status = match &result {
            Ok(_) => "rotated",
            Err(StoreError::EmptyStore) => "empty",
            Err(_) => "failed",
        };
        record_rotation("manual", status, started);

        result
    }

    /// Timer entry point
    ///
    /// Never propagates errors. If a previous scheduled run has not
    /// finished, this fire is skipped rather than queued.
    pub async fn run_scheduled(&self) -> RotationOutcome {
        if self
            .scheduled_running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Previous scheduled rotation still running; skipping this run");
            let outcome = RotationOutcome::Skipped;
            record_rotation("scheduled", outcome.label(), Instant::now());
            return outcome;
        }
        let _running = ScheduledRunGuard(&self.scheduled_running);

        tracing::info!("Running scheduled daily quote rotation");
        let _guard = self.flag_lock.lock().await;
        let started = Instant::now();

        let outcome = match self.rotate_locked().await {
            Ok(quote) => RotationOutcome::Rotated(quote.id),
            Err(StoreError::EmptyStore) => {
                tracing::warn!("No quotes available to set as daily quote");
                RotationOutcome::NoQuotes
            }
            Err(error) => {
                tracing::error!(%error, "Scheduled daily quote rotation failed");
                RotationOutcome::Failed
            }
        };
        record_rotation("scheduled", outcome.label(), started);

        outcome
    }

    /// Hold the rotation lock
    ///
    /// Used for mutations that must not interleave with a rotation, such as
    /// deleting a row that may be flagged daily.
    pub async fn exclusive(&self) -> MutexGuard<'_, ()> {
        self.flag_lock.lock().await
    }

    /// Clear the old flag, pick, set the new flag. Caller holds `flag_lock`.
    async fn rotate_locked(&self) -> StoreResult<Quote> {
        match self.store.get_daily().await {
            Ok(previous) => match self.store.set_daily_flag(previous.id, false).await {
                Ok(_) => {
                    tracing::debug!(quote_id = previous.id, "Cleared previous daily quote");
                }
                Err(StoreError::NotFound(id)) => {
                    tracing::debug!(quote_id = id, "Previous daily quote already deleted");
                }
                Err(error) => return Err(error),
            },
            Err(StoreError::NoDailyQuote) => {}
            Err(error) => return Err(error),
        }

        let picked = self.store.pick_random().await?;
        let daily = self.store.set_daily_flag(picked.id, true).await?;

        tracing::info!(
            quote_id = daily.id,
            author = %daily.author,
            "New daily quote set"
        );

        Ok(daily)
    }
}

fn record_rotation(trigger: &str, status: &str, started: Instant) {
    use crate::metrics::{ROTATION_DURATION_SECONDS, ROTATIONS_TOTAL};

    ROTATIONS_TOTAL.with_label_values(&[trigger, status]).inc();
    ROTATION_DURATION_SECONDS
        .with_label_values(&[trigger])
        .observe(started.elapsed().as_secs_f64());
}
