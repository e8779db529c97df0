mod engine;
mod mode;
mod runner;
mod ticker;

pub use engine::{SessionTimer, TimerState};
pub use mode::{format_clock, SessionMode, TimerConfig};
pub use runner::{Notifier, SessionRunner, SilentNotifier};
pub use ticker::{Ticker, TICK_PERIOD};
