//! Well description and validation.

use crate::error::{MarchError, MarchResult};
use wf_core::{Real, ensure_finite};
use wf_core::units::{Length, Pressure};

/// Immutable input for one marching run.
///
/// Values are unit-agnostic; the only requirement is that they agree with the
/// gradient model (e.g. psi, ft and psi/ft together).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WellSpec {
    /// Known pressure at the top of the string
    pub surface_pressure: Real,
    /// Depth of the first grid point
    pub top_depth: Real,
    /// Depth of the last grid point
    pub bottom_depth: Real,
    /// Number of equal-length segments
    pub segments: usize,
    /// Relative convergence tolerance for each segment
    pub tolerance: Real,
    /// Gradient used to extrapolate the first segment's outlet guess
    pub seed_gradient: Real,
}

impl WellSpec {
    pub fn new(
        surface_pressure: Real,
        top_depth: Real,
        bottom_depth: Real,
        segments: usize,
        tolerance: Real,
        seed_gradient: Real,
    ) -> MarchResult<Self> {
        let spec = Self {
            surface_pressure,
            top_depth,
            bottom_depth,
            segments,
            tolerance,
            seed_gradient,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Build from typed SI quantities.
    ///
    /// Pressures are stored in pascal and depths in metres, so the gradient
    /// model and `seed_gradient` must be in Pa/m.
    pub fn from_si(
        surface_pressure: Pressure,
        top_depth: Length,
        bottom_depth: Length,
        segments: usize,
        tolerance: Real,
        seed_gradient_pa_per_m: Real,
    ) -> MarchResult<Self> {
        Self::new(
            surface_pressure.value,
            top_depth.value,
            bottom_depth.value,
            segments,
            tolerance,
            seed_gradient_pa_per_m,
        )
    }

    /// Check the invariants the marcher relies on.
    ///
    /// A tolerance of exactly zero is accepted: it can never be met, and the
    /// iteration cap turns it into a convergence failure.
    pub fn validate(&self) -> MarchResult<()> {
        if self.segments < 1 {
            return Err(MarchError::invalid_spec("segment count must be at least 1"));
        }
        for (what, v) in [
            ("surface pressure", self.surface_pressure),
            ("top depth", self.top_depth),
            ("bottom depth", self.bottom_depth),
            ("tolerance", self.tolerance),
            ("seed gradient", self.seed_gradient),
        ] {
            ensure_finite(v, what).map_err(|e| MarchError::invalid_spec(e.to_string()))?;
        }
        if self.bottom_depth <= self.top_depth {
            return Err(MarchError::invalid_spec(format!(
                "bottom depth {} must be greater than top depth {}",
                self.bottom_depth, self.top_depth
            )));
        }
        if self.tolerance < 0.0 {
            return Err(MarchError::invalid_spec(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Total marched length.
    pub fn span(&self) -> Real {
        self.bottom_depth - self.top_depth
    }
}
