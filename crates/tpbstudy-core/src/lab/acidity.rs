//! pH of strong acid and strong base solutions.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// pH + pOH of water at 25 °C.
pub const PKW: f64 = 14.0;

/// Which ion the given concentration measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionKind {
    /// Concentration is [H+].
    Acid,
    /// Concentration is [OH-].
    Base,
}

impl SolutionKind {
    pub fn from_is_acid(is_acid: bool) -> Self {
        if is_acid {
            SolutionKind::Acid
        } else {
            SolutionKind::Base
        }
    }
}

/// Advisory label from comparing pH against 7. Neutral only on exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Acid,
    Neutral,
    Base,
}

impl Classification {
    pub fn of(ph: f64) -> Self {
        if ph < 7.0 {
            Classification::Acid
        } else if ph > 7.0 {
            Classification::Base
        } else {
            Classification::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::Acid => "Acid",
            Classification::Neutral => "Neutral",
            Classification::Base => "Base",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhReading {
    pub ph: f64,
    pub poh: f64,
    pub classification: Classification,
}

/// pH of a solution with the given molar concentration (mol/L).
pub fn ph(concentration: f64, kind: SolutionKind) -> Result<f64, ValidationError> {
    reading(concentration, kind).map(|r| r.ph)
}

/// pH together with pOH and its classification.
pub fn reading(concentration: f64, kind: SolutionKind) -> Result<PhReading, ValidationError> {
    if !concentration.is_finite() || concentration <= 0.0 {
        return Err(ValidationError::input(
            "concentration",
            format!("must be a positive finite number, got {concentration}"),
        ));
    }
    let p = -concentration.log10();
    let (ph, poh) = match kind {
        SolutionKind::Acid => (p, PKW - p),
        SolutionKind::Base => (PKW - p, p),
    };
    Ok(PhReading {
        ph,
        poh,
        classification: Classification::of(ph),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_water_concentration() {
        let value = ph(1e-7, SolutionKind::Acid).unwrap();
        assert!((value - 7.0).abs() < 1e-9);
    }

    #[test]
    fn strong_acid_and_base() {
        let acid = reading(0.01, SolutionKind::Acid).unwrap();
        assert!((acid.ph - 2.0).abs() < 1e-12);
        assert!((acid.poh - 12.0).abs() < 1e-12);
        assert_eq!(acid.classification, Classification::Acid);

        let base = reading(0.001, SolutionKind::Base).unwrap();
        assert!((base.ph - 11.0).abs() < 1e-12);
        assert!((base.poh - 3.0).abs() < 1e-12);
        assert_eq!(base.classification, Classification::Base);
    }

    #[test]
    fn rejects_non_positive_or_non_finite_concentration() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ph(bad, SolutionKind::Acid).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidInput { .. }));
        }
    }

    #[test]
    fn classification_labels() {
        assert_eq!(Classification::of(6.99).label(), "Acid");
        assert_eq!(Classification::of(7.0).label(), "Neutral");
        assert_eq!(Classification::of(7.01).label(), "Base");
        assert_eq!(SolutionKind::from_is_acid(false), SolutionKind::Base);
    }
}
