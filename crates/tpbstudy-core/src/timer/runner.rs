//! Scheduled driver for [`SessionTimer`].
//!
//! The runner owns the timer together with its tick schedule. Every command
//! that stops the timer drops the schedule on the spot, and dropping the
//! runner drops it too, so no tick can reach a stale or discarded timer.

use super::engine::{SessionTimer, TimerState};
use super::mode::{SessionMode, TimerConfig};
use super::ticker::{Ticker, TICK_PERIOD};
use crate::error::ValidationError;
use crate::events::Event;

/// Receives automatic mode transitions (the alert/haptic signal).
/// Fire-and-forget: implementations must not block.
pub trait Notifier {
    fn notify(&mut self, event: &Event);
}

impl<F: FnMut(&Event)> Notifier for F {
    fn notify(&mut self, event: &Event) {
        self(event)
    }
}

/// Notifier that drops every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&mut self, _event: &Event) {}
}

#[derive(Debug)]
pub struct SessionRunner<N = SilentNotifier> {
    timer: SessionTimer,
    ticker: Option<Ticker>,
    notifier: N,
}

impl SessionRunner<SilentNotifier> {
    pub fn new(config: TimerConfig) -> Self {
        Self::with_notifier(config, SilentNotifier)
    }
}

impl<N: Notifier> SessionRunner<N> {
    pub fn with_notifier(config: TimerConfig, notifier: N) -> Self {
        Self {
            timer: SessionTimer::new(config),
            ticker: None,
            notifier,
        }
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Whether a tick schedule is currently held.
    pub fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn start(&mut self) -> Option<Event> {
        let event = self.timer.start();
        self.sync_ticker();
        event
    }

    pub fn pause(&mut self) -> Option<Event> {
        let event = self.timer.pause();
        self.sync_ticker();
        event
    }

    pub fn reset(&mut self) -> Event {
        let event = self.timer.reset();
        self.sync_ticker();
        event
    }

    pub fn switch_mode(&mut self, mode: SessionMode) -> Event {
        let event = self.timer.switch_mode(mode);
        self.sync_ticker();
        event
    }

    pub fn configure(
        &mut self,
        work_min: i64,
        short_break_min: i64,
        long_break_min: i64,
    ) -> Result<Event, ValidationError> {
        self.timer.configure(work_min, short_break_min, long_break_min)
    }

    /// Wait for the next one-second tick and apply it.
    ///
    /// Returns the transition event when the countdown ran out; the notifier
    /// has already seen it by then. Returns `None` straight away when the timer
    /// is paused. The schedule is armed on the first call after `start()`.
    /// Cancel safe: a dropped future leaves the timer untouched.
    pub async fn next_tick(&mut self) -> Option<Event> {
        if !self.timer.is_running() {
            self.ticker = None;
            return None;
        }
        self.ticker
            .get_or_insert_with(|| Ticker::arm(TICK_PERIOD))
            .tick()
            .await;

        let event = self.timer.tick()?;
        self.notifier.notify(&event);
        Some(event)
    }

    /// Tear down the schedule and hand back the timer.
    pub fn into_timer(self) -> SessionTimer {
        self.timer
    }

    fn sync_ticker(&mut self) {
        if !self.timer.is_running() && self.ticker.take().is_some() {
            tracing::debug!("tick schedule cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn paused_runner_returns_immediately() {
        let mut runner = SessionRunner::new(TimerConfig::default());
        let before = Instant::now();
        assert!(runner.next_tick().await.is_none());
        assert_eq!(before.elapsed(), std::time::Duration::ZERO);
        assert!(!runner.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_second() {
        let mut runner = SessionRunner::new(TimerConfig::default());
        runner.start();
        let before = Instant::now();
        for _ in 0..3 {
            assert!(runner.next_tick().await.is_none());
        }
        assert_eq!(before.elapsed(), TICK_PERIOD * 3);
        assert_eq!(runner.state().seconds_remaining, 1497);
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_commands_cancel_the_schedule() {
        let mut runner = SessionRunner::new(TimerConfig::default());
        runner.start();
        runner.next_tick().await;
        assert!(runner.is_armed());

        runner.pause();
        assert!(!runner.is_armed());

        runner.start();
        runner.next_tick().await;
        runner.reset();
        assert!(!runner.is_armed());

        runner.start();
        runner.next_tick().await;
        runner.switch_mode(SessionMode::LongBreak);
        assert!(!runner.is_armed());
        assert!(!runner.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_pause_waits_a_fresh_period() {
        let mut runner = SessionRunner::new(TimerConfig::default());
        runner.start();
        runner.next_tick().await;
        runner.pause();
        runner.start();
        let before = Instant::now();
        runner.next_tick().await;
        assert_eq!(before.elapsed(), TICK_PERIOD);
        assert_eq!(runner.state().seconds_remaining, 1498);
    }

    #[tokio::test(start_paused = true)]
    async fn notifier_sees_every_automatic_transition() {
        let mut seen = Vec::new();
        {
            let mut runner =
                SessionRunner::with_notifier(TimerConfig::default(), |e: &Event| seen.push(e.clone()));
            runner.configure(1, 1, 1).unwrap();
            runner.start();
            for _ in 0..120 {
                runner.next_tick().await;
            }
            assert_eq!(runner.state().mode, SessionMode::Work);
            assert!(runner.is_running());
        }
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(Event::is_transition));
    }
}
