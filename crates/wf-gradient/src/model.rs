//! Gradient model trait and closure adapter.

use crate::error::{GradientError, GradientResult};
use wf_core::Real;

/// Maps the average pressure over a segment to a local pressure gradient.
///
/// Implementations stand in for fluid-property and multiphase flow
/// correlations. The marcher makes no assumption about the functional form;
/// it only requires the evaluation to be deterministic for a given pressure.
///
/// Units are whatever the caller uses consistently: a model returning psi/ft
/// must be fed psi and marched over feet.
pub trait GradientModel {
    /// Short model name for logs and diagnostics.
    fn name(&self) -> &str {
        "gradient"
    }

    /// Local pressure gradient at the given average pressure.
    fn gradient(&self, p_avg: Real) -> GradientResult<Real>;

    /// Evaluate and reject NaN/infinite results.
    fn checked_gradient(&self, p_avg: Real) -> GradientResult<Real> {
        let value = self.gradient(p_avg)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GradientError::NonFinite {
                pressure: p_avg,
                value,
            })
        }
    }
}

impl<M: GradientModel + ?Sized> GradientModel for &M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn gradient(&self, p_avg: Real) -> GradientResult<Real> {
        (**self).gradient(p_avg)
    }
}

impl<M: GradientModel + ?Sized> GradientModel for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn gradient(&self, p_avg: Real) -> GradientResult<Real> {
        (**self).gradient(p_avg)
    }
}

/// Adapter turning an infallible closure into a [`GradientModel`].
///
/// ```
/// use wf_gradient::{FnGradient, GradientModel};
///
/// let hydrostatic = FnGradient::new("hydrostatic", |_p| 0.433);
/// assert_eq!(hydrostatic.gradient(1500.0).unwrap(), 0.433);
/// ```
pub struct FnGradient<F> {
    name: String,
    f: F,
}

impl<F> FnGradient<F>
where
    F: Fn(Real) -> Real,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> GradientModel for FnGradient<F>
where
    F: Fn(Real) -> Real,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn gradient(&self, p_avg: Real) -> GradientResult<Real> {
        Ok((self.f)(p_avg))
    }
}

impl<F> std::fmt::Debug for FnGradient<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnGradient")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
