use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{BooleanOp, HeightInterval, PlanKind, SlabSpec};
use super::{PlanError, PlanResult};
use crate::geometry::ApproxEq;

/// One step of an interval plan, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlanStep {
    Slab(SlabSpec),
    Combine(BooleanOp),
}

/// Ordered construction steps that fill one interval with a single volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalPlan {
    pub interval: HeightInterval,
    pub kind: PlanKind,
    pub steps: Vec<PlanStep>,
}

impl IntervalPlan {
    fn new(interval: HeightInterval, kind: PlanKind) -> Self {
        Self {
            interval,
            kind,
            steps: Vec::new(),
        }
    }

    fn slab(&mut self, spec: SlabSpec) {
        self.steps.push(PlanStep::Slab(spec));
    }

    fn combine(&mut self, op: BooleanOp) {
        self.steps.push(PlanStep::Combine(op));
    }

    pub fn slabs(&self) -> impl Iterator<Item = &SlabSpec> {
        self.steps.iter().filter_map(|step| match step {
            PlanStep::Slab(spec) => Some(spec),
            PlanStep::Combine(_) => None,
        })
    }

    pub fn combinations(&self) -> impl Iterator<Item = BooleanOp> + '_ {
        self.steps.iter().filter_map(|step| match step {
            PlanStep::Combine(op) => Some(*op),
            PlanStep::Slab(_) => None,
        })
    }
}

/// Upper bound on the slabs stacked into one interval.
pub const MAX_STACKED_SLABS: usize = 100_000;

/// Plan the slabs covering `[low, high]` with cubes of edge `side`.
pub fn plan_interval(
    low: f64,
    high: f64,
    side: f64,
    voxel_size: f64,
) -> PlanResult<IntervalPlan> {
    if !side.is_finite() || side <= 0.0 {
        return Err(PlanError::InvalidSide(side));
    }
    if !voxel_size.is_finite() || voxel_size <= 0.0 {
        return Err(PlanError::InvalidVoxelSize(voxel_size));
    }
    let interval = HeightInterval::new(low, high)?;
    plan(interval, side, voxel_size)
}

/// `side` and `voxel_size` must already be validated.
fn plan(interval: HeightInterval, side: f64, voxel_size: f64) -> PlanResult<IntervalPlan> {
    let span = interval.span();
    let mid = interval.mid();

    if span.approx_eq(&side) {
        let mut plan = IntervalPlan::new(interval, PlanKind::Single);
        plan.slab(SlabSpec::new(voxel_size, side, mid));
        debug!(low = interval.low(), high = interval.high(), "single slab");
        return Ok(plan);
    }

    if span < side {
        // Two slabs pushed outward so that only their overlap remains.
        let offset = 0.5 * (side - span);
        let mut plan = IntervalPlan::new(interval, PlanKind::Clipped);
        plan.slab(SlabSpec::new(voxel_size, side, mid - offset));
        plan.slab(SlabSpec::new(voxel_size, side, mid + offset));
        plan.combine(BooleanOp::Intersection);
        debug!(low = interval.low(), high = interval.high(), offset, "clipped slab");
        return Ok(plan);
    }

    let ratio = (span / side).round_ties_even();
    if ratio > MAX_STACKED_SLABS as f64 {
        return Err(PlanError::TooManySlabs {
            ratio,
            max: MAX_STACKED_SLABS,
        });
    }
    let extra = ratio as usize;
    let mut plan = IntervalPlan::new(interval, PlanKind::Stacked { extra });
    plan.slab(SlabSpec::new(voxel_size, side, interval.low() + 0.5 * side));
    for i in 0..extra {
        let z = interval.high() - (i as f64 + 0.5) * side;
        plan.slab(SlabSpec::new(voxel_size, side, z));
        plan.combine(BooleanOp::Union);
    }
    debug!(low = interval.low(), high = interval.high(), extra, "stacked slabs");
    Ok(plan)
}
