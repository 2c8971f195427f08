//! wf-core: shared foundation for wellflow.
//!
//! Contains:
//! - units (uom SI types + oilfield constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{WfError, WfResult};
pub use numeric::*;
pub use units::*;
