use serde::{Deserialize, Serialize};

use super::layout::DirectoryLayout;
use crate::command::TokenSequence;

/// Camera and output options passed to `vdb_render`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub shader: String,
    pub width: u32,
    pub height: u32,
    /// Focal length in millimeters.
    pub focal: f64,
    pub samples: u32,
    /// Camera translation; the renderer picks its own position when unset.
    pub translate: Option<[f64; 3]>,
    pub lookat: [f64; 3],
    pub compression: String,
    pub verbose: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            shader: "diffuse".to_string(),
            width: 1920,
            height: 1080,
            focal: 35.0,
            samples: 4,
            translate: None,
            lookat: [0.0, 0.0, 0.0],
            compression: "rle".to_string(),
            verbose: true,
        }
    }
}

fn triple(v: &[f64; 3]) -> String {
    format!("{},{},{}", v[0], v[1], v[2])
}

/// `vdb_tool -read <mesh> -mesh2ls -write <volume> [-quiet]`
pub fn convert_command(
    program: &str,
    stem: &str,
    extension: &str,
    layout: &DirectoryLayout,
    quiet: bool,
) -> TokenSequence {
    let mut cmd = TokenSequence::new(program);
    cmd.push("-read")
        .push(layout.mesh_path(stem, extension))
        .push("-mesh2ls")
        .push("-write")
        .push(layout.volume_path(stem));
    if quiet {
        cmd.push("-quiet");
    }
    cmd
}

/// `vdb_render <volume> <image>` followed by the settings' flags.
pub fn render_command(
    program: &str,
    stem: &str,
    layout: &DirectoryLayout,
    settings: &RenderSettings,
) -> TokenSequence {
    let mut cmd = TokenSequence::new(program);
    cmd.push(layout.volume_path(stem))
        .push(layout.image_path(stem))
        .push("-shader")
        .push(settings.shader.as_str())
        .push("-res")
        .push(format!("{}x{}", settings.width, settings.height))
        .push("-focal")
        .push(settings.focal.to_string())
        .push("-samples")
        .push(settings.samples.to_string());
    if let Some(translate) = &settings.translate {
        cmd.push("-translate").push(triple(translate));
    }
    cmd.push("-lookat")
        .push(triple(&settings.lookat))
        .push("-compression")
        .push(settings.compression.as_str());
    if settings.verbose {
        cmd.push("-v");
    }
    cmd
}
