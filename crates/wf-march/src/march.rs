//! Segment-by-segment pressure traverse.

use crate::cancel::CancelToken;
use crate::config::MarchConfig;
use crate::error::{MarchError, MarchResult};
use crate::grid::DepthGrid;
use crate::results::{ResultTable, SegmentResult};
use crate::segment::{SegmentContext, solve_segment};
use crate::spec::WellSpec;
use tracing::{debug, debug_span, info, warn};
use wf_core::Real;
use wf_gradient::GradientModel;

/// Emitted after each converged segment.
#[derive(Debug, Clone, PartialEq)]
pub struct MarchProgressEvent {
    /// 1-based index of the segment just solved
    pub segment: usize,
    pub total_segments: usize,
    pub depth: Real,
    pub pressure: Real,
    pub gradient: Real,
    pub iterations: usize,
}

impl MarchProgressEvent {
    pub fn fraction_complete(&self) -> f64 {
        self.segment as f64 / self.total_segments as f64
    }
}

/// March from surface to bottom and return the converged profile.
///
/// This function:
/// 1. Validates the well spec and config
/// 2. Discretizes the depth range into equal segments
/// 3. Solves each segment in order, chaining outlet pressure and gradient
///    into the next segment
///
/// Any failure aborts the run; no partial table is returned.
pub fn march<M>(spec: &WellSpec, model: &M, config: &MarchConfig) -> MarchResult<ResultTable>
where
    M: GradientModel + ?Sized,
{
    march_internal(spec, model, config, None, |_| {})
}

/// Like [`march`], checking `cancel` before every segment.
pub fn march_with_cancel<M>(
    spec: &WellSpec,
    model: &M,
    config: &MarchConfig,
    cancel: &CancelToken,
) -> MarchResult<ResultTable>
where
    M: GradientModel + ?Sized,
{
    march_internal(spec, model, config, Some(cancel), |_| {})
}

/// Like [`march_with_cancel`], reporting each converged segment to `on_progress`.
pub fn march_with_progress<M, F>(
    spec: &WellSpec,
    model: &M,
    config: &MarchConfig,
    cancel: Option<&CancelToken>,
    on_progress: F,
) -> MarchResult<ResultTable>
where
    M: GradientModel + ?Sized,
    F: FnMut(&MarchProgressEvent),
{
    march_internal(spec, model, config, cancel, on_progress)
}

fn march_internal<M, F>(
    spec: &WellSpec,
    model: &M,
    config: &MarchConfig,
    cancel: Option<&CancelToken>,
    mut on_progress: F,
) -> MarchResult<ResultTable>
where
    M: GradientModel + ?Sized,
    F: FnMut(&MarchProgressEvent),
{
    spec.validate()?;
    config.validate()?;
    let grid = DepthGrid::from_spec(spec)?;
    let total = grid.segment_count();

    let span = debug_span!("march", model = model.name(), segments = total);
    let _guard = span.enter();

    let mut table = ResultTable::with_capacity(spec.top_depth, spec.surface_pressure, total);
    let mut p_in = spec.surface_pressure;
    let mut seed_gradient = spec.seed_gradient;

    for (index, upper, lower) in grid.segments() {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            warn!(completed = index - 1, total, "march cancelled");
            return Err(MarchError::Cancelled {
                completed: index - 1,
                total,
            });
        }

        let ctx = SegmentContext {
            index,
            depth: lower,
            length: lower - upper,
            p_in,
            seed_gradient,
        };
        let sol = solve_segment(ctx, model, spec.tolerance, config.max_iterations)
            .inspect_err(|e| warn!(segment = index, depth = lower, error = %e, "segment failed"))?;

        debug!(
            segment = index,
            depth = lower,
            pressure = sol.pressure,
            gradient = sol.gradient,
            iterations = sol.iterations,
            "segment converged"
        );

        table.push(SegmentResult {
            segment: index,
            depth: lower,
            pressure: sol.pressure,
            avg_pressure: sol.avg_pressure,
            gradient: sol.gradient,
            iterations: sol.iterations,
        });

        on_progress(&MarchProgressEvent {
            segment: index,
            total_segments: total,
            depth: lower,
            pressure: sol.pressure,
            gradient: sol.gradient,
            iterations: sol.iterations,
        });

        p_in = sol.pressure;
        seed_gradient = sol.gradient;
    }

    info!(
        segments = total,
        bottomhole_pressure = p_in,
        total_iterations = table.total_iterations(),
        "march complete"
    );

    Ok(table)
}
