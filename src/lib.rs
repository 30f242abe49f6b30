//! # dto2mvc
//!
//! **dto2mvc** scaffolds MVC boilerplate from declarative endpoint descriptors
//! attached to data-model types. Each descriptor (HTTP verb, controller name,
//! action name) yields one partial controller file and one empty view stub,
//! written to deterministic paths under an output root.
//!
//! ## Architecture
//!
//! - **[`descriptor`]** - [`EndpointDescriptor`], [`AnnotatedType`] and the [`Annotated`] trait
//! - **[`source`]** - pivot-driven type discovery ([`TypeCatalog`], descriptor manifests)
//! - **[`generator`]** - synthesis, Askama rendering and file materialization
//! - **[`config`]** - `dto2mvc.toml` generator settings
//! - **[`error`]** - the fatal error taxonomy of a run
//! - **[`logging`]** - `tracing-subscriber` setup for the binary
//! - **[`cli`]** - the `dto2mvc-gen` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant Source as DescriptorSource
//!     participant Synth as generator::synth
//!     participant Templates as generator::templates
//!     participant FS as File System
//!
//!     User->>Source: annotated_types(pivots)
//!     Source-->>User: Vec<AnnotatedType>
//!     loop every descriptor, in declaration order
//!         User->>Synth: synthesize_controller / synthesize_view
//!         Synth-->>User: ControllerUnit, ViewUnit
//!         User->>Templates: render_controller / render_view
//!         Templates-->>User: source text
//!         User->>FS: create_dir_all + overwrite
//!     end
//! ```
//!
//! The first failure ends the run. Files already written stay on disk.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dto2mvc::{generate_for, Endpoints, GeneratorConfig};
//! use std::path::Path;
//!
//! #[derive(Endpoints)]
//! #[endpoint(GET, "Cars", "Load")]
//! #[endpoint(POST, "Cars", "Save")]
//! pub struct Car;
//!
//! # fn main() -> Result<(), dto2mvc::GenerateError> {
//! let config = GeneratorConfig::default().with_base_controller("Web.Controllers.MyControllerBase");
//! let written = generate_for::<Car>(Path::new("./out"), &config)?;
//! assert_eq!(written.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! This writes:
//!
//! ```text
//! out/Controllers/CarsController.Load.cs
//! out/Views/Cars/Load.cshtml
//! out/Controllers/CarsController.Save.cs
//! out/Views/Cars/Save.cshtml
//! ```

// Lets `#[derive(Endpoints)]` expand to `::dto2mvc::...` paths inside this crate too
extern crate self as dto2mvc;

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod logging;
pub mod source;

pub use config::{load_generator_config, GeneratorConfig};
pub use descriptor::{Annotated, AnnotatedType, EndpointDescriptor};
pub use dto2mvc_macros::Endpoints;
pub use error::GenerateError;
pub use generator::{artifacts_for, generate, generate_for, plan, ArtifactKind, GeneratedArtifact};
pub use http::Method;
pub use source::{load_manifest, DescriptorSource, Pivot, TypeCatalog};
