//! Marching solver configuration.

use crate::error::{MarchError, MarchResult};

/// Marching solver configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarchConfig {
    /// Maximum fixed-point iterations per segment
    pub max_iterations: usize,
}

impl Default for MarchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
        }
    }
}

impl MarchConfig {
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    pub fn validate(&self) -> MarchResult<()> {
        if self.max_iterations == 0 {
            return Err(MarchError::invalid_spec(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}
