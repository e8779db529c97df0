use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionMode {
    pub const ALL: [SessionMode; 3] = [
        SessionMode::Work,
        SessionMode::ShortBreak,
        SessionMode::LongBreak,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SessionMode::Work => "Work",
            SessionMode::ShortBreak => "Short Break",
            SessionMode::LongBreak => "Long Break",
        }
    }

    /// Mode entered automatically when a countdown in `self` runs out.
    ///
    /// Only Work and ShortBreak alternate; LongBreak is reached by explicit
    /// selection and falls back into Work when it ends.
    pub fn next_auto(self) -> SessionMode {
        match self {
            SessionMode::Work => SessionMode::ShortBreak,
            SessionMode::ShortBreak | SessionMode::LongBreak => SessionMode::Work,
        }
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for SessionMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "work" => Ok(SessionMode::Work),
            "short" | "short_break" => Ok(SessionMode::ShortBreak),
            "long" | "long_break" => Ok(SessionMode::LongBreak),
            other => Err(ValidationError::input(
                "mode",
                format!("unknown mode '{other}' (expected work, short_break or long_break)"),
            )),
        }
    }
}

/// Countdown length of each mode, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub work_secs: u64,
    pub short_break_secs: u64,
    pub long_break_secs: u64,
}

impl TimerConfig {
    /// Build a config from whole minutes.
    ///
    /// Each value must be at least one minute. Values that are too large to
    /// express in seconds are rejected the same way.
    pub fn from_minutes(work: i64, short_break: i64, long_break: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            work_secs: minutes_to_secs("work", work)?,
            short_break_secs: minutes_to_secs("short_break", short_break)?,
            long_break_secs: minutes_to_secs("long_break", long_break)?,
        })
    }

    pub fn duration_secs(&self, mode: SessionMode) -> u64 {
        match mode {
            SessionMode::Work => self.work_secs,
            SessionMode::ShortBreak => self.short_break_secs,
            SessionMode::LongBreak => self.long_break_secs,
        }
    }

    /// Whole minutes per mode, in (work, short, long) order.
    pub fn minutes(&self) -> (u64, u64, u64) {
        (
            self.work_secs / 60,
            self.short_break_secs / 60,
            self.long_break_secs / 60,
        )
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_secs: 25 * 60,
            short_break_secs: 5 * 60,
            long_break_secs: 15 * 60,
        }
    }
}

fn minutes_to_secs(field: &str, minutes: i64) -> Result<u64, ValidationError> {
    if minutes < 1 {
        return Err(ValidationError::config(
            field,
            format!("must be at least 1 minute, got {minutes}"),
        ));
    }
    (minutes as u64)
        .checked_mul(60)
        .ok_or_else(|| ValidationError::config(field, format!("{minutes} minutes is too long")))
}

/// Render seconds as `MM:SS`. Minutes are padded to two digits but not capped.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
