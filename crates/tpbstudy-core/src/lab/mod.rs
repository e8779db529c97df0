//! Virtual-lab calculators.
//!
//! Every calculator is a pure function of caller-supplied numbers and
//! validates its input up front, returning
//! [`ValidationError::InvalidInput`](crate::error::ValidationError::InvalidInput)
//! instead of producing NaN or infinite results.

pub mod acidity;
pub mod derivative;
pub mod linear;
pub mod periodic;
pub mod projectile;

pub use acidity::{ph, reading, Classification, PhReading, SolutionKind};
pub use derivative::{power_rule_derivative, PowerTerm};
pub use linear::{LinearFunction, Point, Samples, DEFAULT_PLOT_STEP, MAX_PLOT_SAMPLES};
pub use periodic::Element;
pub use projectile::{
    Position, ProjectileLaunch, ProjectileSummary, Trajectory, DEFAULT_TRAJECTORY_STEP, GRAVITY,
};
