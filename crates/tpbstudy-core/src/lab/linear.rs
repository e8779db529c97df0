use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const PLOT_MIN_X: f64 = -10.0;
pub const PLOT_MAX_X: f64 = 10.0;
pub const DEFAULT_PLOT_STEP: f64 = 0.5;
/// Upper bound on points produced by one sampling pass.
pub const MAX_PLOT_SAMPLES: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// `y = gradient * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFunction {
    pub gradient: f64,
    pub intercept: f64,
}

impl LinearFunction {
    pub fn new(gradient: f64, intercept: f64) -> Result<Self, ValidationError> {
        if !gradient.is_finite() {
            return Err(ValidationError::input(
                "gradient",
                format!("must be a finite number, got {gradient}"),
            ));
        }
        if !intercept.is_finite() {
            return Err(ValidationError::input(
                "intercept",
                format!("must be a finite number, got {intercept}"),
            ));
        }
        Ok(Self {
            gradient,
            intercept,
        })
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.gradient * x + self.intercept
    }

    /// Points over `[-10, 10]` every 0.5, both ends included.
    pub fn samples(&self) -> Samples {
        Samples {
            function: *self,
            step: DEFAULT_PLOT_STEP,
            index: 0,
            count: sample_count(DEFAULT_PLOT_STEP).unwrap_or_default(),
        }
    }

    /// Points over `[-10, 10]` every `step`. Steps fine enough to exceed
    /// [`MAX_PLOT_SAMPLES`] points are rejected.
    pub fn samples_with_step(&self, step: f64) -> Result<Samples, ValidationError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ValidationError::input(
                "step",
                format!("must be a positive number, got {step}"),
            ));
        }
        let count = sample_count(step).ok_or_else(|| {
            ValidationError::input(
                "step",
                format!("{step} yields more than {MAX_PLOT_SAMPLES} points"),
            )
        })?;
        Ok(Samples {
            function: *self,
            step,
            index: 0,
            count,
        })
    }
}

impl std::fmt::Display for LinearFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "y = {}x", self.gradient)?;
        if self.intercept < 0.0 {
            write!(f, " - {}", -self.intercept)
        } else if self.intercept > 0.0 {
            write!(f, " + {}", self.intercept)
        } else {
            Ok(())
        }
    }
}

/// Lazy sample sequence. Each x is `-10 + i * step`, so there is no drift
/// and a clone restarts from the same position.
#[derive(Debug, Clone)]
pub struct Samples {
    function: LinearFunction,
    step: f64,
    index: u64,
    count: u64,
}

/// Number of points over the plot range, or `None` past the cap.
fn sample_count(step: f64) -> Option<u64> {
    // Tolerance keeps the right end when the span is a multiple of step.
    let intervals = ((PLOT_MAX_X - PLOT_MIN_X) / step + 1e-9).floor();
    if intervals >= MAX_PLOT_SAMPLES as f64 {
        return None;
    }
    (intervals as u64).checked_add(1)
}

impl Iterator for Samples {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.count {
            return None;
        }
        let x = PLOT_MIN_X + self.index as f64 * self.step;
        self.index += 1;
        Some(Point {
            x,
            y: self.function.eval(x),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.count - self.index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Samples {}
