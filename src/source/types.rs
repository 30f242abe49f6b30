use serde::{Deserialize, Serialize};

/// Descriptor manifest consumed by `dto2mvc-gen`.
///
/// ```yaml
/// modules:
///   - name: Web.Models
///     types:
///       - name: CarModel
///         endpoints:
///           - { verb: GET, controller: Cars, action: Load }
///           - { verb: POST, controller: Cars, action: Save }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub modules: Vec<ManifestModule>,
}

/// A module and its types in declared order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ManifestModule {
    pub name: String,
    #[serde(default)]
    pub types: Vec<ManifestType>,
}

/// A data-model type; `endpoints` may be empty
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ManifestType {
    pub name: String,
    #[serde(default)]
    pub endpoints: Vec<ManifestEndpoint>,
}

/// One endpoint triple. The verb is kept as text until the manifest is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ManifestEndpoint {
    pub verb: String,
    pub controller: String,
    pub action: String,
}
