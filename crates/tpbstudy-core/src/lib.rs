//! # TPBStudy Core Library
//!
//! This library provides the reusable logic behind the TPBStudy learning
//! companion. Screens, navigation and login live in the shell; everything
//! here is plain in-process calls, with the `tpbstudy-cli` binary as a thin
//! shell over the same API.
//!
//! ## Architecture
//!
//! - **Session Timer**: a pomodoro countdown state machine that requires the
//!   caller to invoke `tick()` once per second, plus a runner that owns the
//!   one-second schedule and cancels it whenever the countdown stops
//! - **Lab**: pure calculators for projectile motion, pH, linear functions and
//!   the power rule, plus the chemistry lab's periodic table
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`SessionTimer`]: Core timer state machine
//! - [`SessionRunner`]: Scheduled driver for the timer
//! - [`ProjectileLaunch`], [`LinearFunction`], [`PowerTerm`], [`lab::ph`]:
//!   calculators
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod lab;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, ValidationError};
pub use events::Event;
pub use lab::{
    power_rule_derivative, Classification, LinearFunction, PhReading, PowerTerm,
    ProjectileLaunch, ProjectileSummary, SolutionKind,
};
pub use storage::Config;
pub use timer::{
    format_clock, Notifier, SessionMode, SessionRunner, SessionTimer, SilentNotifier,
    TimerConfig, TimerState,
};
