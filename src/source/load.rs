use std::path::Path;

use anyhow::Context;
use http::Method;

use super::types::Manifest;
use super::TypeCatalog;
use crate::descriptor::{AnnotatedType, EndpointDescriptor};

/// Serialization format of a manifest file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    /// `.yaml` and `.yml` are YAML; anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => ManifestFormat::Yaml,
            _ => ManifestFormat::Json,
        }
    }
}

/// Read a manifest file and build a [`TypeCatalog`] from it.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or names a
/// verb that is not a valid HTTP method token. Verbs that are valid methods
/// but cannot be scaffolded (e.g. `PUT`) load fine and fail during generation.
pub fn load_manifest(path: &Path) -> anyhow::Result<TypeCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    parse_manifest(&content, ManifestFormat::from_path(path))
        .with_context(|| format!("Invalid manifest: {}", path.display()))
}

/// Parse manifest text into a [`TypeCatalog`], preserving declaration order.
pub fn parse_manifest(content: &str, format: ManifestFormat) -> anyhow::Result<TypeCatalog> {
    let manifest: Manifest = match format {
        ManifestFormat::Yaml => serde_yaml::from_str(content)?,
        ManifestFormat::Json => serde_json::from_str(content)?,
    };

    let mut catalog = TypeCatalog::new();
    for module in &manifest.modules {
        for ty in &module.types {
            let endpoints = ty
                .endpoints
                .iter()
                .map(|e| {
                    let verb = Method::from_bytes(e.verb.trim().to_ascii_uppercase().as_bytes())
                        .with_context(|| {
                            format!(
                                "{}.{}: `{}` is not an HTTP method",
                                module.name, ty.name, e.verb
                            )
                        })?;
                    Ok(EndpointDescriptor::new(verb, &e.controller, &e.action))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            catalog.insert(AnnotatedType::new(&module.name, &ty.name, endpoints));
        }
    }
    Ok(catalog)
}
