use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::synth::controller_class_name;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;

/// Which half of a descriptor's output an artifact is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Controller,
    View,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Controller => f.write_str("controller"),
            ArtifactKind::View => f.write_str("view"),
        }
    }
}

/// Rendered text bound for a deterministic path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

/// Compute where an artifact lives under `output_root`
///
/// - controller: `{root}/Controllers/{controller}Controller.{action}.{ext}`
/// - view: `{root}/Views/{controller}/{action}.{view_ext}`
pub fn artifact_path(
    output_root: &Path,
    kind: ArtifactKind,
    controller: &str,
    action: &str,
    config: &GeneratorConfig,
) -> PathBuf {
    match kind {
        ArtifactKind::Controller => output_root.join("Controllers").join(format!(
            "{}.{action}.{}",
            controller_class_name(controller),
            config.controller_extension
        )),
        ArtifactKind::View => output_root
            .join("Views")
            .join(controller)
            .join(format!("{action}.{}", config.view_extension)),
    }
}

/// Write an artifact, creating missing parent directories
///
/// Existing files are overwritten in full. Nothing is ever deleted, so files
/// from descriptors that no longer exist stay where they are.
///
/// # Errors
///
/// `Io` with the failing path if a directory cannot be created or the file
/// cannot be written.
pub fn write_artifact(artifact: &GeneratedArtifact) -> Result<(), GenerateError> {
    if let Some(parent) = artifact.path.parent() {
        fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
    }
    fs::write(&artifact.path, &artifact.content)
        .map_err(|e| GenerateError::io(&artifact.path, e))?;
    info!(kind = %artifact.kind, path = %artifact.path.display(), "wrote artifact");
    Ok(())
}
