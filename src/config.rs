//! Generator configuration
//!
//! Settings that shape the emitted source: which base controller the partial
//! classes extend, which namespaces they live in, which imports they carry and
//! which file extensions they are written with. Every field has a default, so a
//! `dto2mvc.toml` only needs the keys it changes:
//!
//! ```toml
//! base_controller = "Web.Controllers.MyControllerBase"
//! namespace = "Web.Controllers"
//! extra_imports = ["Web.Models"]
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default file name looked up next to the manifest
pub const DEFAULT_CONFIG_FILE: &str = "dto2mvc.toml";

/// Configuration for synthesis, serialization and materialization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Type every generated controller derives from
    pub base_controller: String,
    /// Namespace of generated controllers
    pub namespace: String,
    /// Namespace of generated view stubs
    pub view_namespace: String,
    /// Imports emitted first, in this order
    pub core_imports: Vec<String>,
    /// Imports emitted after the core imports
    pub extra_imports: Vec<String>,
    /// Extension of controller files, without the dot
    pub controller_extension: String,
    /// Extension of view files, without the dot
    pub view_extension: String,
    /// Declared return type of every action
    pub action_result_type: String,
    /// Type constructed by every action body
    pub view_result_type: String,
    /// Attribute placed on GET actions
    pub get_marker: String,
    /// Attribute placed on POST actions
    pub post_marker: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_controller: "Controller".to_string(),
            namespace: "GeneratedControllers".to_string(),
            view_namespace: "GeneratedViews".to_string(),
            core_imports: vec!["System".to_string(), "Microsoft.AspNetCore.Mvc".to_string()],
            extra_imports: Vec::new(),
            controller_extension: "cs".to_string(),
            view_extension: "cshtml".to_string(),
            action_result_type: "ActionResult".to_string(),
            view_result_type: "ViewResult".to_string(),
            get_marker: "HttpGet".to_string(),
            post_marker: "HttpPost".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_base_controller(mut self, base: impl Into<String>) -> Self {
        self.base_controller = base.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Core imports followed by extra imports, first occurrence wins.
    pub fn imports(&self) -> Vec<String> {
        let mut imports: Vec<String> = Vec::new();
        for import in self.core_imports.iter().chain(&self.extra_imports) {
            if !imports.contains(import) {
                imports.push(import.clone());
            }
        }
        imports
    }
}

/// Load a generator configuration from a TOML file
///
/// Returns `Ok(None)` when the file does not exist and an error when it exists
/// but cannot be read or parsed.
pub fn load_generator_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path).with_context(|| {
        format!("Failed to read generator config: {}", config_path.display())
    })?;

    let config: GeneratorConfig = toml::from_str(&contents).with_context(|| {
        format!("Failed to parse generator config: {}", config_path.display())
    })?;

    Ok(Some(config))
}
