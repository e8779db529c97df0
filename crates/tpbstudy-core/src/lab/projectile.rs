//! Projectile motion under constant gravity, no drag.
//!
//! A launch is validated once; after that every quantity is closed form.
//! The launch does not keep time: animation loops sample it through
//! [`ProjectileLaunch::trajectory`] or [`ProjectileLaunch::position_at`].

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Gravitational acceleration, m/s².
pub const GRAVITY: f64 = 9.8;

/// Sampling step used by the lab animation, in seconds.
pub const DEFAULT_TRAJECTORY_STEP: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSummary {
    /// Seconds until the projectile is back at launch height.
    pub time_of_flight: f64,
    /// Horizontal distance covered, m.
    pub max_range: f64,
    /// Apex height above the launch point, m.
    pub max_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub t: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileLaunch {
    initial_velocity: f64,
    angle_degrees: f64,
    v0x: f64,
    v0y: f64,
}

impl ProjectileLaunch {
    /// `initial_velocity` in m/s, must be positive. `angle_degrees` must lie
    /// strictly between 0 and 90.
    pub fn new(initial_velocity: f64, angle_degrees: f64) -> Result<Self, ValidationError> {
        if !initial_velocity.is_finite() || initial_velocity <= 0.0 {
            return Err(ValidationError::input(
                "initial_velocity",
                format!("must be a positive number, got {initial_velocity}"),
            ));
        }
        if !angle_degrees.is_finite() || angle_degrees <= 0.0 || angle_degrees >= 90.0 {
            return Err(ValidationError::input(
                "angle_degrees",
                format!("must be strictly between 0 and 90, got {angle_degrees}"),
            ));
        }
        let theta = angle_degrees.to_radians();
        Ok(Self {
            initial_velocity,
            angle_degrees,
            v0x: initial_velocity * theta.cos(),
            v0y: initial_velocity * theta.sin(),
        })
    }

    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Horizontal and vertical launch velocity components.
    pub fn components(&self) -> (f64, f64) {
        (self.v0x, self.v0y)
    }

    pub fn time_of_flight(&self) -> f64 {
        2.0 * self.v0y / GRAVITY
    }

    pub fn max_range(&self) -> f64 {
        self.v0x * self.time_of_flight()
    }

    pub fn max_height(&self) -> f64 {
        self.v0y * self.v0y / (2.0 * GRAVITY)
    }

    pub fn summary(&self) -> ProjectileSummary {
        ProjectileSummary {
            time_of_flight: self.time_of_flight(),
            max_range: self.max_range(),
            max_height: self.max_height(),
        }
    }

    /// Position `t` seconds after launch, for `t` in `[0, time_of_flight]`.
    pub fn position_at(&self, t: f64) -> Result<Position, ValidationError> {
        let tof = self.time_of_flight();
        if !t.is_finite() || t < 0.0 || t > tof {
            return Err(ValidationError::input(
                "t",
                format!("must lie within [0, {tof}], got {t}"),
            ));
        }
        Ok(self.position_unchecked(t))
    }

    /// Positions at `0, step, 2*step, ...` while before touchdown.
    pub fn trajectory(&self, step: f64) -> Result<Trajectory, ValidationError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ValidationError::input(
                "step",
                format!("must be a positive number, got {step}"),
            ));
        }
        Ok(Trajectory {
            launch: *self,
            step,
            index: 0,
        })
    }

    fn position_unchecked(&self, t: f64) -> Position {
        Position {
            t,
            x: self.v0x * t,
            y: self.v0y * t - 0.5 * GRAVITY * t * t,
        }
    }
}

/// Lazy, finite trajectory samples. Clone it to replay from the same point.
#[derive(Debug, Clone)]
pub struct Trajectory {
    launch: ProjectileLaunch,
    step: f64,
    index: u64,
}

impl Iterator for Trajectory {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let t = self.index as f64 * self.step;
        if t >= self.launch.time_of_flight() {
            return None;
        }
        self.index += 1;
        Some(self.launch.position_unchecked(t))
    }
}
