use serde::Serialize;
use tracing::{info, warn};

use super::ops::{FlagStyle, VdbOp};
use super::tokens::TokenSequence;
use crate::slab::{plan_interval, HeightInterval, IntervalPlan, PlanResult};

/// Parameters shared by every interval of one stack command.
#[derive(Debug, Clone, PartialEq)]
pub struct StackParams {
    pub program: String,
    pub voxel_size: f64,
    pub side: f64,
    /// Exported files are named `{export_prefix}{index}.vdb`.
    pub export_prefix: String,
    pub style: FlagStyle,
}

impl Default for StackParams {
    fn default() -> Self {
        Self {
            program: "vdb_tool".to_string(),
            voxel_size: 0.02,
            side: 2.0,
            export_prefix: "test".to_string(),
            style: FlagStyle::default(),
        }
    }
}

/// A fully built stack command together with the plans it was built from.
#[derive(Debug, Clone, Serialize)]
pub struct StackCommand {
    pub command: TokenSequence,
    pub plans: Vec<IntervalPlan>,
    pub exports: Vec<String>,
}

impl StackCommand {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build one `vdb_tool` invocation that fills every interval, prints the
/// grid summary and exports one file per interval.
pub fn build_stack_command(
    intervals: &[HeightInterval],
    params: &StackParams,
) -> PlanResult<StackCommand> {
    if intervals.is_empty() {
        warn!("No intervals given, the command will only print");
    }

    let mut command = TokenSequence::new(params.program.clone());
    let mut plans = Vec::with_capacity(intervals.len());

    for interval in intervals {
        let plan = plan_interval(interval.low(), interval.high(), params.side, params.voxel_size)?;
        for step in &plan.steps {
            command.push_op(&VdbOp::from(*step), &params.style);
        }
        plans.push(plan);
    }

    command.push_op(&VdbOp::Print, &params.style);

    // The boolean ops consume their sources, so after the loop the stack holds
    // exactly one grid per interval.
    let mut exports = Vec::with_capacity(intervals.len());
    for index in 0..intervals.len() {
        let file = format!("{}{}.vdb", params.export_prefix, index);
        command.push_op(&VdbOp::Write { file: file.clone(), index }, &params.style);
        exports.push(file);
    }

    info!(
        "Built stack command: {} intervals, {} flags",
        plans.len(),
        command.flag_count()
    );

    Ok(StackCommand {
        command,
        plans,
        exports,
    })
}
