// error.rs - Error types for the simulation core

use std::collections::TryReserveError;
use thiserror::Error;

/// Structural failures of the simulation core.
///
/// Stepping, counting and comparing grids are total; only building an epoch can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("cannot allocate a {width}x{height} grid: {reason}")]
    Allocation {
        width: usize,
        height: usize,
        reason: String,
    },

    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl LifeError {
    pub(crate) fn empty_grid(width: usize, height: usize) -> Self {
        Self::Allocation {
            width,
            height,
            reason: "grid has no cells".to_owned(),
        }
    }

    pub(crate) fn out_of_memory(width: usize, height: usize, err: TryReserveError) -> Self {
        Self::Allocation {
            width,
            height,
            reason: err.to_string(),
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
