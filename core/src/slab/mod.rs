//! Slab planning.
//!
//! Decides how many bounded cube volumes of a fixed edge length are needed
//! to fill a vertical height interval, where each one is centered, and which
//! boolean operation merges them into a single volume.

pub mod planner;
pub mod types;

#[cfg(test)]
mod tests_planner;

pub use planner::{plan_interval, IntervalPlan, PlanStep, MAX_STACKED_SLABS};
pub use types::*;

use thiserror::Error;

/// Errors raised when planning inputs violate their constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error("Invalid interval: low ({low}) must be below high ({high})")]
    InvalidInterval { low: f64, high: f64 },

    #[error("Invalid side length: {0} (must be positive and finite)")]
    InvalidSide(f64),

    #[error("Invalid voxel size: {0} (must be positive and finite)")]
    InvalidVoxelSize(f64),

    #[error("Interval needs {ratio} stacked slabs, more than the limit of {max}")]
    TooManySlabs { ratio: f64, max: usize },
}

/// Result type for planning operations.
pub type PlanResult<T> = Result<T, PlanError>;
