use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BatchError, BatchResult};

/// Directory names used by a batch, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryLayout {
    /// Input meshes.
    pub source: String,
    /// Converted volumes.
    pub output: String,
    /// Rendered images.
    pub render: String,
}

impl Default for DirectoryLayout {
    fn default() -> Self {
        Self {
            source: "stl".to_string(),
            output: "vdb".to_string(),
            render: "ppm".to_string(),
        }
    }
}

impl DirectoryLayout {
    /// Create the source, output and render directories under `base` if absent.
    pub fn ensure(&self, base: &Path) -> BatchResult<()> {
        for dir in [&self.source, &self.output, &self.render] {
            let path = base.join(dir);
            if !path.is_dir() {
                debug!("Creating {}", path.display());
            }
            fs::create_dir_all(&path).map_err(|source| BatchError::CreateDir { path, source })?;
        }
        Ok(())
    }

    pub fn mesh_path(&self, stem: &str, extension: &str) -> String {
        format!("{}/{}{}", self.source, stem, extension)
    }

    pub fn volume_path(&self, stem: &str) -> String {
        format!("{}/{}.vdb", self.output, stem)
    }

    pub fn image_path(&self, stem: &str) -> String {
        format!("{}/{}.ppm", self.render, stem)
    }
}
