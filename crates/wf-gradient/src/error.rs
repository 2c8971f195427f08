//! Gradient model errors.

use thiserror::Error;
use wf_core::WfError;

/// Result type for gradient evaluations.
pub type GradientResult<T> = Result<T, GradientError>;

/// Errors a gradient model may report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    /// Pressure outside the range the correlation was fitted for.
    #[error("Pressure {pressure} out of range for {what}")]
    OutOfRange { what: &'static str, pressure: f64 },

    /// Model produced a NaN or infinite gradient.
    #[error("Non-finite gradient {value} at pressure {pressure}")]
    NonFinite { pressure: f64, value: f64 },

    /// Invalid model parameters.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Error raised by an external correlation backend.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<GradientError> for WfError {
    fn from(err: GradientError) -> Self {
        match err {
            GradientError::OutOfRange { what, .. } => WfError::InvalidArg { what },
            GradientError::NonFinite { value, .. } => WfError::NonFinite {
                what: "pressure gradient",
                value,
            },
            GradientError::InvalidArg { what } => WfError::InvalidArg { what },
            GradientError::Backend { .. } => WfError::Invariant {
                what: "gradient backend error",
            },
        }
    }
}
