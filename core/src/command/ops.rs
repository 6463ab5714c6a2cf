//! `vdb_tool` actions and their flag rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::slab::planner::PlanStep;
use crate::slab::{BooleanOp, SlabSpec};

/// Decimal places used when rendering numeric flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagStyle {
    pub voxel_precision: usize,
    pub scale_precision: usize,
    pub center_precision: usize,
}

impl Default for FlagStyle {
    fn default() -> Self {
        Self {
            voxel_precision: 3,
            scale_precision: 3,
            center_precision: 1,
        }
    }
}

/// A single `vdb_tool` action. Each one renders to exactly one flag string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VdbOp {
    /// Six-faced platonic level set, i.e. a cube.
    Platonic(SlabSpec),
    Boolean(BooleanOp),
    /// Print a summary of every grid on the stack.
    Print,
    /// Write the grid at stack position `index` (0 is the most recent) to `file`.
    Write { file: String, index: usize },
}

impl VdbOp {
    pub fn to_flag(&self, style: &FlagStyle) -> String {
        match self {
            VdbOp::Platonic(slab) => {
                let c = &slab.center;
                format!(
                    "-platonic faces=6 vox={:.vp$} scale={:.sp$} center={:.cp$},{:.cp$},{:.cp$}",
                    slab.voxel_size,
                    slab.side_length,
                    c.x,
                    c.y,
                    c.z,
                    vp = style.voxel_precision,
                    sp = style.scale_precision,
                    cp = style.center_precision,
                )
            }
            VdbOp::Boolean(BooleanOp::Union) => "-union vdb=0,1 keep=0".to_string(),
            VdbOp::Boolean(BooleanOp::Intersection) => "-intersection vdb=0,1 keep=0".to_string(),
            VdbOp::Print => "-print".to_string(),
            VdbOp::Write { file, index } => format!("-o {} vdb={} keep=1", file, index),
        }
    }
}

impl fmt::Display for VdbOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_flag(&FlagStyle::default()))
    }
}

impl From<PlanStep> for VdbOp {
    fn from(step: PlanStep) -> Self {
        match step {
            PlanStep::Slab(spec) => VdbOp::Platonic(spec),
            PlanStep::Combine(op) => VdbOp::Boolean(op),
        }
    }
}
