use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// `coefficient * x^power`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerTerm {
    pub coefficient: f64,
    pub power: f64,
}

impl PowerTerm {
    pub fn new(coefficient: f64, power: f64) -> Result<Self, ValidationError> {
        if !coefficient.is_finite() {
            return Err(ValidationError::input(
                "coefficient",
                format!("must be a finite number, got {coefficient}"),
            ));
        }
        if !power.is_finite() {
            return Err(ValidationError::input(
                "power",
                format!("must be a finite number, got {power}"),
            ));
        }
        Ok(Self { coefficient, power })
    }

    /// d/dx (a x^n) = a n x^(n-1)
    pub fn derivative(&self) -> PowerTerm {
        PowerTerm {
            coefficient: self.coefficient * self.power,
            power: self.power - 1.0,
        }
    }
}

/// Derivative of `coefficient * x^power`.
pub fn power_rule_derivative(coefficient: f64, power: f64) -> Result<PowerTerm, ValidationError> {
    Ok(PowerTerm::new(coefficient, power)?.derivative())
}

impl std::fmt::Display for PowerTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.coefficient == 0.0 {
            // -0.0 included
            f.write_str("0")
        } else if self.power == 0.0 {
            write!(f, "{}", self.coefficient)
        } else if self.power == 1.0 {
            write!(f, "{}x", self.coefficient)
        } else {
            write!(f, "{}x^{}", self.coefficient, self.power)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_becomes_linear() {
        let d = power_rule_derivative(3.0, 2.0).unwrap();
        assert_eq!(
            d,
            PowerTerm {
                coefficient: 6.0,
                power: 1.0
            }
        );
        assert_eq!(d.to_string(), "6x");
    }

    #[test]
    fn linear_becomes_constant() {
        let d = power_rule_derivative(5.0, 1.0).unwrap();
        assert_eq!(d.coefficient, 5.0);
        assert_eq!(d.power, 0.0);
        assert_eq!(d.to_string(), "5");
    }

    #[test]
    fn display_shows_computed_power() {
        assert_eq!(power_rule_derivative(1.0, 4.0).unwrap().to_string(), "4x^3");
        assert_eq!(power_rule_derivative(2.0, -1.0).unwrap().to_string(), "-2x^-2");
        assert_eq!(power_rule_derivative(4.0, 0.5).unwrap().to_string(), "2x^-0.5");
    }

    #[test]
    fn constant_differentiates_to_zero() {
        let d = power_rule_derivative(7.0, 0.0).unwrap();
        assert_eq!(d.coefficient, 0.0);
        assert_eq!(d.to_string(), "0");
    }

    #[test]
    fn rejects_nan_inputs() {
        assert_eq!(
            power_rule_derivative(f64::NAN, 2.0).unwrap_err().field(),
            "coefficient"
        );
        assert_eq!(
            power_rule_derivative(1.0, f64::NAN).unwrap_err().field(),
            "power"
        );
    }
}
