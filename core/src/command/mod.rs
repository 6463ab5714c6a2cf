//! Command line construction for the external volume tools.
//!
//! Planned slabs and boolean steps are rendered as `vdb_tool` flags and
//! appended, in order, to a [`TokenSequence`] owned by the caller.

pub mod ops;
pub mod stack;
pub mod tokens;

#[cfg(test)]
mod tests_stack;

pub use ops::{FlagStyle, VdbOp};
pub use stack::{build_stack_command, StackCommand, StackParams};
pub use tokens::TokenSequence;
