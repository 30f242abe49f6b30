//! # Generator Module
//!
//! The generator turns endpoint descriptors into C# scaffolding: one partial
//! controller file and one view stub per descriptor.
//!
//! ## Pipeline
//!
//! ```text
//! DescriptorSource → AnnotatedType → EndpointDescriptor → synth → templates → materialize
//! ```
//!
//! 1. **Discovery** - the [`DescriptorSource`](crate::DescriptorSource) expands pivots into annotated types
//! 2. **Synthesis** - [`synthesize_controller`] / [`synthesize_view`] build a small code model
//! 3. **Rendering** - [`render_namespace`] runs the Askama template over the model
//! 4. **Materialization** - [`write_artifact`] creates directories and overwrites the file
//!
//! The run is sequential and fail-fast. Nothing is rolled back: when descriptor
//! *k* fails, the files of descriptors `1..k-1` are already on disk.
//!
//! ## Generated Structure
//!
//! ```text
//! out/
//! ├── Controllers/
//! │   ├── CarsController.Index.cs   # partial class CarsController, action Index
//! │   ├── CarsController.Load.cs
//! │   └── CarsController.Save.cs
//! └── Views/
//!     └── Cars/
//!         ├── Index.cshtml          # empty placeholder
//!         ├── Load.cshtml
//!         └── Save.cshtml
//! ```
//!
//! Every controller file declares `partial class {Controller}Controller`, so the
//! C# compiler merges the per-action files into one class. No merging happens
//! here.
//!
//! Regeneration overwrites files in place and never deletes anything. Files
//! left over from removed descriptors must be cleaned up by hand.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dto2mvc::{generate, Endpoints, GeneratorConfig, Pivot, TypeCatalog};
//! use std::path::Path;
//!
//! #[derive(Endpoints)]
//! #[endpoint(GET, "Cars", "Load")]
//! #[endpoint(GET, "Cars", "Index")]
//! #[endpoint(POST, "Cars", "Save")]
//! pub struct Car;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut catalog = TypeCatalog::new();
//! catalog.register::<Car>();
//!
//! let config = GeneratorConfig::default().with_base_controller("Web.Controllers.MyControllerBase");
//! generate(&catalog, &[Pivot::type_name("Car")], Path::new("./out"), &config)?;
//! # Ok(())
//! # }
//! ```

mod code;
mod materialize;
mod project;
mod synth;
mod templates;

pub use code::{
    check_file_extension, check_identifier, check_qualified_name, escape_identifier,
    escape_qualified_name, CodeNamespace, Expression, MemberMethod, Statement, TypeDeclaration,
    TypeReference, Visibility,
};
pub use materialize::{artifact_path, write_artifact, ArtifactKind, GeneratedArtifact};
pub use project::{artifacts_for, generate, generate_for, plan};
pub use synth::{
    controller_class_name, synthesize_controller, synthesize_view, verb_marker, ControllerUnit,
    ViewUnit,
};
pub use templates::{render_controller, render_namespace, render_view, NamespaceTemplateData};
