//! Session timer implementation.
//!
//! The session timer is a countdown state machine. It does not own a clock -
//! the caller (usually [`SessionRunner`](super::SessionRunner)) is responsible
//! for calling `tick()` once per elapsed second while the timer runs.
//!
//! ## State Transitions
//!
//! ```text
//! (mode, Paused) -start-> (mode, Running) -pause/reset-> (mode, Paused)
//! (Work, Running) -countdown ends-> (ShortBreak, Running)
//! (ShortBreak | LongBreak, Running) -countdown ends-> (Work, Running)
//! (any) -switch_mode(m)-> (m, Paused)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = SessionTimer::new(TimerConfig::default());
//! timer.start();
//! // Once per second:
//! timer.tick(); // Returns Some(Event::ModeAdvanced) when a countdown ends
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::mode::{format_clock, SessionMode, TimerConfig};
use crate::error::ValidationError;
use crate::events::Event;

/// Readable state of the timer, polled by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: SessionMode,
    pub seconds_remaining: u64,
    pub running: bool,
}

/// Pomodoro countdown state machine.
///
/// Invariant: `seconds_remaining <= config.duration_secs(mode)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimer {
    config: TimerConfig,
    mode: SessionMode,
    seconds_remaining: u64,
    running: bool,
}

impl SessionTimer {
    /// Create a paused timer in Work mode with the full Work duration loaded.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            mode: SessionMode::Work,
            seconds_remaining: config.duration_secs(SessionMode::Work),
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        TimerState {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            running: self.running,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Full length of the current mode's countdown.
    pub fn total_secs(&self) -> u64 {
        self.config.duration_secs(self.mode)
    }

    /// 0.0 .. 1.0 progress within the current mode.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.seconds_remaining as f64 / total as f64)
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_clock(self.seconds_remaining)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            running: self.running,
            seconds_remaining: self.seconds_remaining,
            total_secs: self.total_secs(),
            display: self.display(),
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the durations, given in whole minutes.
    ///
    /// Rejected values leave the timer untouched. A paused timer reloads the
    /// full duration of its mode; a running one keeps counting, clamped to the
    /// new duration.
    pub fn configure(
        &mut self,
        work_min: i64,
        short_break_min: i64,
        long_break_min: i64,
    ) -> Result<Event, ValidationError> {
        let config = TimerConfig::from_minutes(work_min, short_break_min, long_break_min)
            .inspect_err(|err| tracing::debug!(%err, "rejected timer configuration"))?;
        Ok(self.apply_config(config))
    }

    /// Same as [`configure`](Self::configure) for an already validated config.
    pub fn apply_config(&mut self, config: TimerConfig) -> Event {
        self.config = config;
        let total = self.total_secs();
        self.seconds_remaining = if self.running {
            self.seconds_remaining.min(total)
        } else {
            total
        };
        tracing::debug!(?config, running = self.running, "timer configured");
        Event::ConfigChanged {
            config,
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        }
    }

    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        tracing::debug!(mode = ?self.mode, remaining = self.seconds_remaining, "timer started");
        Some(Event::TimerStarted {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        tracing::debug!(mode = ?self.mode, remaining = self.seconds_remaining, "timer paused");
        Some(Event::TimerPaused {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Stop and reload the full duration of the current mode.
    pub fn reset(&mut self) -> Event {
        self.running = false;
        self.seconds_remaining = self.total_secs();
        tracing::debug!(mode = ?self.mode, "timer reset");
        Event::TimerReset {
            mode: self.mode,
            duration_secs: self.seconds_remaining,
            at: Utc::now(),
        }
    }

    /// Select a mode explicitly. Interrupts a running countdown.
    pub fn switch_mode(&mut self, mode: SessionMode) -> Event {
        let from = self.mode;
        self.mode = mode;
        self.running = false;
        self.seconds_remaining = self.total_secs();
        tracing::debug!(?from, to = ?mode, "mode switched");
        Event::ModeSwitched {
            from,
            to: mode,
            duration_secs: self.seconds_remaining,
            at: Utc::now(),
        }
    }

    /// Apply one elapsed second. Returns `Some(Event::ModeAdvanced)` when the
    /// countdown ran out and the next mode was loaded; the timer keeps running.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.seconds_remaining <= 1 {
            return Some(self.advance());
        }
        self.seconds_remaining -= 1;
        tracing::trace!(remaining = self.seconds_remaining, "tick");
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn advance(&mut self) -> Event {
        let from = self.mode;
        self.mode = from.next_auto();
        self.seconds_remaining = self.total_secs();
        tracing::debug!(?from, to = ?self.mode, "countdown finished, mode advanced");
        Event::ModeAdvanced {
            from,
            to: self.mode,
            duration_secs: self.seconds_remaining,
            at: Utc::now(),
        }
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}
