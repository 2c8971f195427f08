//! Polynomial gradient correlation.

use crate::error::{GradientError, GradientResult};
use crate::model::GradientModel;
use wf_core::Real;

/// Gradient as a polynomial in average pressure:
/// `g(p) = c0 + c1 p + c2 p^2 + ...`.
///
/// An optional pressure window rejects evaluations outside the range the
/// coefficients were fitted over.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolynomialGradient {
    /// Coefficients in ascending power order
    coefficients: Vec<Real>,
    /// Inclusive valid pressure window, if any
    valid_range: Option<(Real, Real)>,
}

impl PolynomialGradient {
    /// Create a polynomial from ascending-order coefficients.
    pub fn new(coefficients: Vec<Real>) -> GradientResult<Self> {
        if coefficients.is_empty() {
            return Err(GradientError::InvalidArg {
                what: "polynomial needs at least one coefficient",
            });
        }
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(GradientError::InvalidArg {
                what: "polynomial coefficients must be finite",
            });
        }
        Ok(Self {
            coefficients,
            valid_range: None,
        })
    }

    /// Restrict evaluation to `[p_min, p_max]`.
    pub fn with_valid_range(mut self, p_min: Real, p_max: Real) -> GradientResult<Self> {
        if !(p_min.is_finite() && p_max.is_finite()) || p_min >= p_max {
            return Err(GradientError::InvalidArg {
                what: "valid range must be finite with p_min < p_max",
            });
        }
        self.valid_range = Some((p_min, p_max));
        Ok(self)
    }

    /// Cubic used for marcher checks:
    /// `0.09 + 1e-4 p + 5e-8 p^2 - 2e-11 p^3` (psi/ft over psi).
    pub fn reference_cubic() -> Self {
        Self {
            coefficients: vec![0.09, 1e-4, 5e-8, -2e-11],
            valid_range: None,
        }
    }

    pub fn coefficients(&self) -> &[Real] {
        &self.coefficients
    }

    pub fn valid_range(&self) -> Option<(Real, Real)> {
        self.valid_range
    }

    /// Horner evaluation.
    fn eval(&self, p: Real) -> Real {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * p + c)
    }
}

impl GradientModel for PolynomialGradient {
    fn name(&self) -> &str {
        "polynomial"
    }

    fn gradient(&self, p_avg: Real) -> GradientResult<Real> {
        if let Some((lo, hi)) = self.valid_range {
            if p_avg < lo || p_avg > hi {
                return Err(GradientError::OutOfRange {
                    what: "polynomial fit",
                    pressure: p_avg,
                });
            }
        }
        Ok(self.eval(p_avg))
    }
}
