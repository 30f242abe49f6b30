//! # Descriptor Sources
//!
//! A descriptor source turns a list of [`Pivot`]s into the ordered, deduplicated
//! set of [`AnnotatedType`]s that the generator walks.
//!
//! Rust has no runtime reflection over a module's type table, so the in-process
//! source is an explicit [`TypeCatalog`]: types register in declaration order,
//! and a pivot selects every annotated type registered under the pivot's module.
//! The `dto2mvc-gen` binary builds the same catalog from a YAML or JSON manifest
//! (see [`load_manifest`]).
//!
//! ```rust
//! use dto2mvc::{Endpoints, DescriptorSource, Pivot, TypeCatalog};
//!
//! #[derive(Endpoints)]
//! #[endpoint(GET, "Cars", "Index")]
//! struct Car;
//!
//! let mut catalog = TypeCatalog::new();
//! catalog.register::<Car>();
//!
//! let types = catalog.annotated_types(&[Pivot::type_name("Car")]).unwrap();
//! assert_eq!(types.len(), 1);
//! assert_eq!(types[0].name(), "Car");
//! ```

mod catalog;
mod load;
mod types;

pub use catalog::TypeCatalog;
pub use load::{load_manifest, parse_manifest, ManifestFormat};
pub use types::{Manifest, ManifestEndpoint, ManifestModule, ManifestType};

use std::fmt;

use crate::descriptor::{Annotated, AnnotatedType};
use crate::error::GenerateError;

/// Starting point for type discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pivot {
    /// Every type declared in this module
    Module(String),
    /// Every type declared in the module that defines the named type
    TypeName(String),
}

impl Pivot {
    /// The module that defines `T`, as recorded by `#[derive(Endpoints)]`.
    ///
    /// `T` may carry no descriptors itself.
    pub fn of<T: Annotated + ?Sized>() -> Self {
        Pivot::Module(T::module_path().to_string())
    }

    pub fn module(path: impl Into<String>) -> Self {
        Pivot::Module(path.into())
    }

    /// A bare (`Car`) or module-qualified (`web::models::Car`) type name.
    pub fn type_name(name: impl Into<String>) -> Self {
        Pivot::TypeName(name.into())
    }
}

impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pivot::Module(module) => write!(f, "module {module}"),
            Pivot::TypeName(name) => write!(f, "type {name}"),
        }
    }
}

/// Supplies the annotated types reachable from a set of pivots.
///
/// Implementations return each type at most once, in the declared-type order
/// of its module, and only types carrying at least one endpoint descriptor.
/// The generator applies no further filtering.
pub trait DescriptorSource {
    fn annotated_types(&self, pivots: &[Pivot]) -> Result<Vec<AnnotatedType>, GenerateError>;
}
