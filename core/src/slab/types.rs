//! Value types shared by the planner and the command builder.

use serde::{Deserialize, Serialize};

use super::{PlanError, PlanResult};
use crate::geometry::{on_z_axis, Point3};

/// A vertical `[low, high]` range to be filled with slabs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeightInterval {
    low: f64,
    high: f64,
}

impl HeightInterval {
    /// Create an interval, rejecting `low >= high` and any bound or span
    /// that is not finite.
    pub fn new(low: f64, high: f64) -> PlanResult<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(PlanError::InvalidInterval { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    pub fn mid(&self) -> f64 {
        // `low + high` can overflow even when the span is finite.
        self.low + 0.5 * self.span()
    }
}

impl TryFrom<[f64; 2]> for HeightInterval {
    type Error = PlanError;

    fn try_from(arr: [f64; 2]) -> PlanResult<Self> {
        Self::new(arr[0], arr[1])
    }
}

/// One bounded cube-like volume with a fixed edge length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabSpec {
    pub voxel_size: f64,
    pub side_length: f64,
    pub center: Point3,
}

impl SlabSpec {
    pub fn new(voxel_size: f64, side_length: f64, center_z: f64) -> Self {
        Self {
            voxel_size,
            side_length,
            center: on_z_axis(center_z),
        }
    }

    pub fn center_z(&self) -> f64 {
        self.center.z
    }
}

/// Boolean combination of the two most recently built, unconsumed volumes.
///
/// Both sources are discarded and only the result is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanOp {
    Union,
    Intersection,
}

/// How an interval was decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanKind {
    /// The interval is exactly one slab tall.
    Single,
    /// Narrower than a slab: two offset slabs clipped by intersection.
    Clipped,
    /// Taller than a slab: a base slab plus `extra` slabs merged by union.
    Stacked { extra: usize },
}
