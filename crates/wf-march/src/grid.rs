//! Depth discretization.

use crate::error::{MarchError, MarchResult};
use crate::spec::WellSpec;
use wf_core::{Real, linspace};

/// `N + 1` equally spaced depths from top to bottom, both inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthGrid {
    depths: Vec<Real>,
}

impl DepthGrid {
    /// Discretize `[top, bottom]` into `segments` equal spans.
    pub fn new(top: Real, bottom: Real, segments: usize) -> MarchResult<Self> {
        if segments < 1 {
            return Err(MarchError::invalid_spec("segment count must be at least 1"));
        }
        if !(top.is_finite() && bottom.is_finite()) {
            return Err(MarchError::invalid_spec("grid bounds must be finite"));
        }
        if bottom <= top {
            return Err(MarchError::invalid_spec(format!(
                "bottom depth {bottom} must be greater than top depth {top}"
            )));
        }
        let depths = linspace(top, bottom, segments);
        if !depths.windows(2).all(|w| w[1] > w[0]) {
            return Err(MarchError::invalid_spec(format!(
                "segment length underflows depth resolution ({segments} segments over [{top}, {bottom}])"
            )));
        }
        Ok(Self { depths })
    }

    pub fn from_spec(spec: &WellSpec) -> MarchResult<Self> {
        Self::new(spec.top_depth, spec.bottom_depth, spec.segments)
    }

    pub fn depths(&self) -> &[Real] {
        &self.depths
    }

    pub fn segment_count(&self) -> usize {
        self.depths.len() - 1
    }

    pub fn top(&self) -> Real {
        self.depths[0]
    }

    pub fn bottom(&self) -> Real {
        self.depths[self.depths.len() - 1]
    }

    /// Upper and lower depth of segment `i` (1-based).
    pub fn segment_bounds(&self, i: usize) -> Option<(Real, Real)> {
        if i == 0 || i > self.segment_count() {
            return None;
        }
        Some((self.depths[i - 1], self.depths[i]))
    }

    /// Length of segment `i` (1-based).
    pub fn segment_length(&self, i: usize) -> Option<Real> {
        self.segment_bounds(i).map(|(upper, lower)| lower - upper)
    }

    /// Iterate `(index, upper, lower)` over all segments, 1-based.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Real, Real)> + '_ {
        self.depths
            .windows(2)
            .enumerate()
            .map(|(k, w)| (k + 1, w[0], w[1]))
    }
}
