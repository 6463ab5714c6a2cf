//! TOML configuration for both tools.
//!
//! Every field is optional; missing values fall back to the defaults the
//! tools have always used.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::batch::BatchConfig;
use crate::command::{FlagStyle, StackParams};
use crate::slab::{HeightInterval, PlanResult};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub stack: StackConfig,
    pub batch: BatchConfig,
}

impl Config {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Settings for the slab-stack command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub program: String,
    pub voxel_size: f64,
    pub side: f64,
    /// `[low, high]` pairs, filled in order.
    pub intervals: Vec<[f64; 2]>,
    pub export_prefix: String,
    /// Decimal places for slab centers.
    pub center_precision: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        let params = StackParams::default();
        Self {
            program: params.program,
            voxel_size: params.voxel_size,
            side: params.side,
            intervals: vec![[-1.0, 0.0], [0.0, 4.0], [4.0, 4.1]],
            export_prefix: params.export_prefix,
            center_precision: params.style.center_precision,
        }
    }
}

impl StackConfig {
    pub fn params(&self) -> StackParams {
        StackParams {
            program: self.program.clone(),
            voxel_size: self.voxel_size,
            side: self.side,
            export_prefix: self.export_prefix.clone(),
            style: FlagStyle {
                center_precision: self.center_precision,
                ..FlagStyle::default()
            },
        }
    }

    pub fn intervals(&self) -> PlanResult<Vec<HeightInterval>> {
        self.intervals.iter().map(|&pair| HeightInterval::try_from(pair)).collect()
    }
}
