use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Resolution of the session countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owned periodic tick schedule.
///
/// The first tick fires one full period after arming. Dropping the ticker
/// cancels every pending tick, so whoever owns it decides how long the
/// schedule lives.
#[derive(Debug)]
pub struct Ticker {
    interval: Interval,
}

impl Ticker {
    /// Arm a schedule firing every `period`. Must be called inside a tokio
    /// runtime.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn arm(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        // Late ticks are delivered back to back so the countdown tracks wall time.
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        Self { interval }
    }

    /// Wait for the next scheduled tick. Cancel safe.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}
