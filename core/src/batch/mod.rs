//! Batch mesh conversion and rendering.
//!
//! Every mesh in the source directory is converted to a level-set volume
//! with `vdb_tool`, then optionally rendered to an image with `vdb_render`.

pub mod job;
pub mod layout;
pub mod render;

pub use job::{collect_stems, BatchConfig, BatchJob, BatchReport, StemCommands};
pub use layout::DirectoryLayout;
pub use render::{convert_command, render_command, RenderSettings};

use std::path::PathBuf;

use thiserror::Error;

use crate::exec::ExecError;

/// Errors that can occur while preparing or running a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Cannot create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot list directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;
