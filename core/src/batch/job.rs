use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::layout::DirectoryLayout;
use super::render::{convert_command, render_command, RenderSettings};
use super::{BatchError, BatchResult};
use crate::command::TokenSequence;
use crate::exec::{execute, CommandRunner, ExitPolicy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub convert_program: String,
    pub render_program: String,
    /// File name suffix selecting input meshes. Matched case-sensitively.
    pub extension: String,
    /// Append `-quiet` to conversions.
    pub quiet: bool,
    /// Render each converted volume.
    pub render: bool,
    pub layout: DirectoryLayout,
    pub render_settings: RenderSettings,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            convert_program: "vdb_tool".to_string(),
            render_program: "vdb_render".to_string(),
            extension: ".stl".to_string(),
            quiet: true,
            render: true,
            layout: DirectoryLayout::default(),
            render_settings: RenderSettings::default(),
        }
    }
}

/// List the stems of files in `dir` whose names end with `extension`.
///
/// The scan is not recursive. Stems come back sorted so that repeated runs
/// issue commands in the same order.
pub fn collect_stems(dir: &Path, extension: &str) -> BatchResult<Vec<String>> {
    let read_err = |source| BatchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut stems = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            warn!("Skipping non UTF-8 file name {:?}", name);
            continue;
        };
        match name.strip_suffix(extension) {
            Some("") => debug!("Skipping {} (empty stem)", name),
            Some(stem) => stems.push(stem.to_string()),
            None => debug!("Ignoring {}", name),
        }
    }
    stems.sort();
    Ok(stems)
}

/// The commands issued for one input mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemCommands {
    pub stem: String,
    pub convert: TokenSequence,
    pub render: Option<TokenSequence>,
}

/// Summary of a finished batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: Vec<String>,
    /// Commands that exited unsuccessfully or could not be launched.
    pub failures: usize,
}

/// A batch rooted at one working directory.
#[derive(Debug, Clone)]
pub struct BatchJob {
    base: PathBuf,
    config: BatchConfig,
    create_dirs: bool,
}

impl BatchJob {
    pub fn new(base: impl Into<PathBuf>, config: BatchConfig) -> Self {
        Self {
            base: base.into(),
            config,
            create_dirs: true,
        }
    }

    /// Leave the filesystem untouched; a missing source directory then
    /// yields an empty batch.
    pub fn without_dir_creation(mut self) -> Self {
        self.create_dirs = false;
        self
    }

    /// Create the directories and build the command pairs for every input mesh.
    pub fn plan(&self) -> BatchResult<Vec<StemCommands>> {
        let cfg = &self.config;
        let source = self.base.join(&cfg.layout.source);
        if self.create_dirs {
            cfg.layout.ensure(&self.base)?;
        } else if !source.is_dir() {
            info!("Source directory {} does not exist", source.display());
            return Ok(Vec::new());
        }

        let stems = collect_stems(&source, &cfg.extension)?;
        info!("Found {} input meshes in {}", stems.len(), cfg.layout.source);

        Ok(stems
            .into_iter()
            .map(|stem| {
                let convert = convert_command(
                    &cfg.convert_program,
                    &stem,
                    &cfg.extension,
                    &cfg.layout,
                    cfg.quiet,
                );
                let render = cfg.render.then(|| {
                    render_command(&cfg.render_program, &stem, &cfg.layout, &cfg.render_settings)
                });
                StemCommands { stem, convert, render }
            })
            .collect())
    }

    /// Convert, then optionally render, every input mesh in order.
    ///
    /// `progress` is called with each stem once its commands have run.
    pub fn run<R, F>(
        &self,
        runner: &mut R,
        policy: ExitPolicy,
        mut progress: F,
    ) -> BatchResult<BatchReport>
    where
        R: CommandRunner + ?Sized,
        F: FnMut(&str),
    {
        let mut report = BatchReport::default();

        for job in self.plan()? {
            for command in std::iter::once(&job.convert).chain(job.render.as_ref()) {
                if !execute(runner, command, policy)?.is_success() {
                    report.failures += 1;
                }
            }
            progress(&job.stem);
            report.processed.push(job.stem);
        }

        if report.failures > 0 {
            warn!("{} commands failed", report.failures);
        }
        Ok(report)
    }
}
