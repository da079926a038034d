//! Live clock shown beside the form.
//!
//! The clock is a scoped subscription: [`ClockSubscription::mount`] starts a
//! repeating timer and dropping the subscription stops it. Nothing else is
//! tied to its lifetime.

use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Refresh period of the clock.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Format as a long US date followed by a 12-hour time,
/// e.g. `October 19, 2026 3:04:05 PM`.
pub fn format_clock<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%B %-d, %Y %-I:%M:%S %p").to_string()
}

fn local_now() -> String {
    format_clock(&Local::now())
}

/// A mounted clock. The timer task lives exactly as long as this value.
#[derive(Debug)]
pub struct ClockSubscription {
    receiver: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl ClockSubscription {
    /// Start a clock showing local time. Must be called inside a tokio runtime.
    #[must_use]
    pub fn mount(period: Duration) -> Self {
        Self::mount_with(period, local_now)
    }

    /// Start a clock whose text comes from `render` on every tick.
    #[must_use]
    pub fn mount_with<F>(period: Duration, render: F) -> Self
    where
        F: Fn() -> String + Send + 'static,
    {
        let (sender, receiver) = watch::channel(render());
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if sender.send(render()).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "clock mounted");
        Self { receiver, task }
    }

    /// Text of the most recent tick.
    #[must_use]
    pub fn current(&self) -> String {
        self.receiver.borrow().clone()
    }

    /// Wait for the next tick and return its text.
    pub async fn changed(&mut self) -> Option<String> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Stop the clock. Equivalent to dropping it.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for ClockSubscription {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("clock unmounted");
    }
}
