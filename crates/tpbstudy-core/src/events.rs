use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{SessionMode, TimerConfig};

/// Every state change of the session timer produces an Event.
/// The shell polls the timer or subscribes to these to refresh its display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        mode: SessionMode,
        seconds_remaining: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: SessionMode,
        seconds_remaining: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: SessionMode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The user picked a mode; any running countdown was stopped.
    ModeSwitched {
        from: SessionMode,
        to: SessionMode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// A countdown ran out and the timer moved on by itself.
    ModeAdvanced {
        from: SessionMode,
        to: SessionMode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    ConfigChanged {
        config: TimerConfig,
        seconds_remaining: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: SessionMode,
        running: bool,
        seconds_remaining: u64,
        total_secs: u64,
        display: String,
        progress: f64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Automatic transitions are the ones the shell should alert the user about.
    pub fn is_transition(&self) -> bool {
        matches!(self, Event::ModeAdvanced { .. })
    }
}
