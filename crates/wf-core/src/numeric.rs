use crate::WfError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WfError::NonFinite { what, value: v })
    }
}

/// Relative deviation of `estimate` from `reference`, scaled by the reference.
///
/// Returns `None` when the reference is zero or the ratio is not finite.
pub fn relative_error(estimate: Real, reference: Real) -> Option<Real> {
    if reference == 0.0 {
        return None;
    }
    let eps = ((estimate - reference) / reference).abs();
    eps.is_finite().then_some(eps)
}

/// `n + 1` points linearly spaced from `start` to `end`, both inclusive.
///
/// The final point is pinned to `end` so it never picks up rounding drift.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n == 0 {
        return vec![start];
    }
    let step = (end - start) / n as Real;
    let mut points: Vec<Real> = (0..=n).map(|i| start + i as Real * step).collect();
    points[n] = end;
    points
}
