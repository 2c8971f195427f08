//! Error types for marching runs.

use thiserror::Error;
use wf_core::error::WfError;
use wf_gradient::GradientError;

/// Errors that abort a marching run.
///
/// No variant leaves a usable partial profile behind: later segments depend on
/// earlier ones, so any failure invalidates the whole run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarchError {
    /// Malformed well spec or config, caught before marching.
    #[error("Invalid well spec: {what}")]
    InvalidSpec { what: String },

    /// Iteration cap reached without meeting the tolerance.
    #[error(
        "Segment {segment} (depth {depth}) did not converge after {iterations} iterations: \
         epsilon = {epsilon:e}, last p_calc = {p_calc}"
    )]
    ConvergenceFailure {
        segment: usize,
        depth: f64,
        iterations: usize,
        epsilon: f64,
        p_calc: f64,
    },

    /// Outlet pressure hit zero, changed sign, or went non-finite.
    #[error("Numeric degeneracy in segment {segment} (depth {depth}): {what} (value = {value})")]
    NumericDegeneracy {
        segment: usize,
        depth: f64,
        what: &'static str,
        value: f64,
    },

    /// The injected gradient model failed.
    #[error("Gradient model error in segment {segment}: {source}")]
    Gradient {
        segment: usize,
        #[source]
        source: GradientError,
    },

    /// Cancellation observed between segments.
    #[error("Run cancelled after {completed} of {total} segments")]
    Cancelled { completed: usize, total: usize },

    /// Profile query outside the marched depth range.
    #[error("Depth {depth} outside profile range [{top}, {bottom}]")]
    DepthOutOfRange { depth: f64, top: f64, bottom: f64 },
}

pub type MarchResult<T> = Result<T, MarchError>;

impl MarchError {
    pub(crate) fn invalid_spec(what: impl Into<String>) -> Self {
        MarchError::InvalidSpec { what: what.into() }
    }

    /// Segment index the failure is attributed to, if any.
    pub fn segment(&self) -> Option<usize> {
        match self {
            MarchError::ConvergenceFailure { segment, .. }
            | MarchError::NumericDegeneracy { segment, .. }
            | MarchError::Gradient { segment, .. } => Some(*segment),
            _ => None,
        }
    }
}

impl From<MarchError> for WfError {
    fn from(e: MarchError) -> Self {
        match e {
            MarchError::InvalidSpec { what: _ } => WfError::InvalidArg { what: "well spec" },
            MarchError::ConvergenceFailure { .. } => WfError::NotConverged {
                what: "segment fixed-point iteration",
            },
            MarchError::NumericDegeneracy { value, .. } => WfError::NonFinite {
                what: "segment pressure",
                value,
            },
            MarchError::Gradient { source, .. } => source.into(),
            MarchError::Cancelled { .. } => WfError::Invariant {
                what: "run cancelled",
            },
            MarchError::DepthOutOfRange { .. } => WfError::InvalidArg {
                what: "depth outside profile",
            },
        }
    }
}
