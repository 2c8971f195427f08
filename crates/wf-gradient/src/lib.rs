//! Pressure-gradient models for wellbore marching.
//!
//! The marcher only needs one capability from a flow correlation: the local
//! pressure gradient as a function of the average pressure over a segment.
//! This crate defines that seam ([`GradientModel`]) and ships a polynomial
//! model useful for testing and for simple fitted correlations.

pub mod error;
pub mod model;
pub mod polynomial;

pub use error::{GradientError, GradientResult};
pub use model::{FnGradient, GradientModel};
pub use polynomial::PolynomialGradient;
