use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::code::check_file_extension;
use super::materialize::{artifact_path, write_artifact, ArtifactKind, GeneratedArtifact};
use super::synth::{synthesize_controller, synthesize_view};
use super::templates::{render_controller, render_view};
use crate::config::GeneratorConfig;
use crate::descriptor::{Annotated, EndpointDescriptor};
use crate::error::GenerateError;
use crate::source::{DescriptorSource, Pivot, TypeCatalog};

/// Synthesize and render both artifacts of one descriptor.
///
/// Nothing is written here, so a descriptor that fails synthesis leaves no
/// trace on disk.
///
/// # Errors
///
/// As [`synthesize_controller`], plus `SynthesisInconsistency` when a
/// configured file extension could leave its directory.
pub fn artifacts_for(
    descriptor: &EndpointDescriptor,
    output_root: &Path,
    config: &GeneratorConfig,
) -> Result<[GeneratedArtifact; 2], GenerateError> {
    check_file_extension("controller extension", &config.controller_extension)?;
    check_file_extension("view extension", &config.view_extension)?;
    let controller = synthesize_controller(descriptor, config)?;
    let view = synthesize_view(descriptor, config)?;

    Ok([
        GeneratedArtifact {
            kind: ArtifactKind::Controller,
            path: artifact_path(
                output_root,
                ArtifactKind::Controller,
                &controller.controller,
                &controller.action,
                config,
            ),
            content: render_controller(&controller)?,
        },
        GeneratedArtifact {
            kind: ArtifactKind::View,
            path: artifact_path(
                output_root,
                ArtifactKind::View,
                &view.controller,
                &view.action,
                config,
            ),
            content: render_view(&view)?,
        },
    ])
}

fn each_descriptor<F>(
    source: &dyn DescriptorSource,
    pivots: &[Pivot],
    mut visit: F,
) -> Result<(), GenerateError>
where
    F: FnMut(&EndpointDescriptor) -> Result<(), GenerateError>,
{
    let types = source.annotated_types(pivots)?;
    debug!(types = types.len(), "discovered annotated types");
    for ty in &types {
        debug!(
            module = ty.module(),
            name = ty.name(),
            endpoints = ty.endpoints().len(),
            "generating type"
        );
        for descriptor in ty.endpoints() {
            visit(descriptor)?;
        }
    }
    Ok(())
}

/// Generate controller and view stubs for every descriptor reachable from `pivots`
///
/// Types are visited in source order and descriptors in declaration order.
/// Each descriptor is synthesized, rendered and written before the next one
/// is touched. The first failure aborts the run; artifacts written for
/// earlier descriptors stay on disk.
///
/// Returns the paths written, in order. A path appears twice when two
/// descriptors map to the same file; the later write wins.
///
/// # Errors
///
/// - `UnknownPivot` if the source cannot resolve a pivot
/// - `UnsupportedVerb` for a descriptor whose verb is not GET or POST
/// - `SynthesisInconsistency` for malformed names
/// - `Io` if a directory or file cannot be written
pub fn generate(
    source: &dyn DescriptorSource,
    pivots: &[Pivot],
    output_root: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut written = Vec::new();
    each_descriptor(source, pivots, |descriptor| {
        for artifact in artifacts_for(descriptor, output_root, config)? {
            write_artifact(&artifact)?;
            written.push(artifact.path);
        }
        Ok(())
    })?;
    info!(
        artifacts = written.len(),
        root = %output_root.display(),
        "generation finished"
    );
    Ok(written)
}

/// Compute every artifact [`generate`] would write, without touching the filesystem
///
/// Fails on the same inputs as [`generate`] except for filesystem errors.
pub fn plan(
    source: &dyn DescriptorSource,
    pivots: &[Pivot],
    output_root: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedArtifact>, GenerateError> {
    let mut planned = Vec::new();
    each_descriptor(source, pivots, |descriptor| {
        planned.extend(artifacts_for(descriptor, output_root, config)?);
        Ok(())
    })?;
    Ok(planned)
}

/// Generate from a single in-process type, using its own module as the pivot
pub fn generate_for<T: Annotated + ?Sized>(
    output_root: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut catalog = TypeCatalog::new();
    catalog.register::<T>();
    let pivots = vec![Pivot::module(T::module_path())];
    generate(&catalog, &pivots, output_root, config)
}
