//! Fixed-point solve for a single segment.

use crate::error::{MarchError, MarchResult};
use tracing::trace;
use wf_core::{Real, relative_error};
use wf_gradient::{GradientError, GradientModel};

/// Inputs that pin down one segment's implicit equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentContext {
    /// 1-based segment index
    pub index: usize,
    /// Depth at the lower end of the segment
    pub depth: Real,
    /// Segment length
    pub length: Real,
    /// Converged pressure at the upper end
    pub p_in: Real,
    /// Gradient used for the initial outlet extrapolation
    pub seed_gradient: Real,
}

/// Converged values of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSolution {
    /// Outlet pressure (`p_calc` of the final iteration)
    pub pressure: Real,
    /// Average pressure the final gradient was evaluated at
    pub avg_pressure: Real,
    /// Final gradient
    pub gradient: Real,
    pub iterations: usize,
    /// Relative error at convergence
    pub epsilon: Real,
}

/// Mutable iteration state, owned by one `solve_segment` call.
#[derive(Debug)]
struct SegmentState {
    p_in: Real,
    p_out: Real,
    p_avg: Real,
    dp_dz: Real,
    iteration: usize,
    epsilon: Real,
    p_calc: Real,
}

impl SegmentState {
    fn seeded(ctx: &SegmentContext) -> Self {
        let p_out = ctx.p_in + ctx.seed_gradient * ctx.length;
        Self {
            p_in: ctx.p_in,
            p_out,
            p_avg: ctx.p_in,
            dp_dz: ctx.seed_gradient,
            iteration: 0,
            epsilon: Real::INFINITY,
            p_calc: p_out,
        }
    }
}

/// Solve `p_out = p_in + g((p_in + p_out) / 2) * dL` by successive substitution.
///
/// The relative error of each iteration is taken against the freshly computed
/// outlet pressure `p_calc`. The loop stops at the first iteration with
/// `epsilon < tolerance`, or fails once `max_iterations` have run.
pub fn solve_segment<M>(
    ctx: SegmentContext,
    model: &M,
    tolerance: Real,
    max_iterations: usize,
) -> MarchResult<SegmentSolution>
where
    M: GradientModel + ?Sized,
{
    let degenerate = |what: &'static str, value: Real| MarchError::NumericDegeneracy {
        segment: ctx.index,
        depth: ctx.depth,
        what,
        value,
    };

    let mut state = SegmentState::seeded(&ctx);
    if !state.p_out.is_finite() {
        return Err(degenerate("non-finite initial outlet estimate", state.p_out));
    }

    while state.iteration < max_iterations {
        state.iteration += 1;
        state.p_avg = 0.5 * (state.p_in + state.p_out);

        state.dp_dz = match model.checked_gradient(state.p_avg) {
            Ok(g) => g,
            Err(GradientError::NonFinite { value, .. }) => {
                return Err(degenerate("non-finite gradient", value));
            }
            Err(source) => {
                return Err(MarchError::Gradient {
                    segment: ctx.index,
                    source,
                });
            }
        };

        let p_calc = state.p_in + state.dp_dz * ctx.length;
        if !p_calc.is_finite() {
            return Err(degenerate("non-finite outlet pressure", p_calc));
        }
        if p_calc == 0.0 {
            return Err(degenerate("outlet pressure reached zero", p_calc));
        }
        if state.p_in != 0.0 && p_calc.signum() != state.p_in.signum() {
            return Err(degenerate("outlet pressure changed sign", p_calc));
        }
        state.p_calc = p_calc;

        state.epsilon = relative_error(state.p_out, p_calc)
            .ok_or_else(|| degenerate("relative error undefined", p_calc))?;

        trace!(
            segment = ctx.index,
            iteration = state.iteration,
            p_out = state.p_out,
            p_calc,
            epsilon = state.epsilon,
            "fixed-point iteration"
        );

        if state.epsilon < tolerance {
            return Ok(SegmentSolution {
                pressure: p_calc,
                avg_pressure: state.p_avg,
                gradient: state.dp_dz,
                iterations: state.iteration,
                epsilon: state.epsilon,
            });
        }

        state.p_out = p_calc;
    }

    Err(MarchError::ConvergenceFailure {
        segment: ctx.index,
        depth: ctx.depth,
        iterations: state.iteration,
        epsilon: state.epsilon,
        p_calc: state.p_calc,
    })
}
