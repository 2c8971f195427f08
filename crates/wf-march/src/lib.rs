//! Wellbore pressure traverse by segment marching.
//!
//! The tubing string is split into equal depth segments. Starting from the
//! known surface pressure, each segment's outlet pressure is found by
//! successive substitution on the implicit relation
//! `p_out = p_in + g((p_in + p_out) / 2) * dL`, where `g` is an injected
//! [`GradientModel`](wf_gradient::GradientModel). Converged segments chain into
//! the next: outlet pressure becomes the next inlet, and the converged gradient
//! seeds the next extrapolation.

pub mod cancel;
pub mod config;
pub mod error;
pub mod grid;
pub mod march;
pub mod results;
pub mod segment;
pub mod spec;

pub use cancel::CancelToken;
pub use config::MarchConfig;
pub use error::{MarchError, MarchResult};
pub use grid::DepthGrid;
pub use march::{MarchProgressEvent, march, march_with_cancel, march_with_progress};
pub use results::{ResultTable, SegmentResult};
pub use segment::{SegmentContext, SegmentSolution, solve_segment};
pub use spec::WellSpec;
