//! Endpoint descriptors and the types that carry them.
//!
//! A data-model type opts into scaffolding by deriving [`Endpoints`](crate::Endpoints):
//!
//! ```rust
//! use dto2mvc::{Annotated, AnnotatedType, Endpoints};
//!
//! #[derive(Endpoints)]
//! #[endpoint(GET, "Cars", "Load")]
//! #[endpoint(POST, "Cars", "Save")]
//! pub struct Car;
//!
//! let car = AnnotatedType::of::<Car>();
//! assert_eq!(car.name(), "Car");
//! assert_eq!(car.endpoints().len(), 2);
//! ```

use std::fmt;

use http::Method;

/// One `(verb, controller, action)` triple declared on a data-model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    verb: Method,
    controller: String,
    action: String,
}

impl EndpointDescriptor {
    pub fn new(verb: Method, controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            verb,
            controller: controller.into(),
            action: action.into(),
        }
    }

    pub fn verb(&self) -> &Method {
        &self.verb
    }

    /// Controller name without the `Controller` suffix, e.g. `Cars`.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

impl fmt::Display for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.verb, self.controller, self.action)
    }
}

/// A type that carries endpoint descriptors.
///
/// Normally implemented through `#[derive(Endpoints)]`.
pub trait Annotated {
    /// Bare type name, e.g. `Car`.
    fn type_name() -> &'static str;

    /// Path of the module that defines the type, e.g. `web::models`.
    fn module_path() -> &'static str;

    /// Descriptors in declaration order. Identical descriptors are all kept.
    fn endpoints() -> Vec<EndpointDescriptor>;
}

/// A data-model type together with its ordered endpoint descriptors.
///
/// Identity is `(module, name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedType {
    name: String,
    module: String,
    endpoints: Vec<EndpointDescriptor>,
}

impl AnnotatedType {
    pub fn new(
        module: impl Into<String>,
        name: impl Into<String>,
        endpoints: Vec<EndpointDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            endpoints,
        }
    }

    /// Collect the descriptors declared on `T`.
    pub fn of<T: Annotated + ?Sized>() -> Self {
        Self::new(T::module_path(), T::type_name(), T::endpoints())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Descriptors in declaration order, unfiltered and not deduplicated.
    ///
    /// An empty slice is valid and yields no artifacts.
    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    pub fn is_annotated(&self) -> bool {
        !self.endpoints.is_empty()
    }

    pub(crate) fn same_type(&self, other: &AnnotatedType) -> bool {
        self.module == other.module && self.name == other.name
    }

    /// Whether `name` is this type's bare name or its module-qualified name
    /// (with either `::` or `.` as separator).
    pub(crate) fn answers_to(&self, name: &str) -> bool {
        if self.name == name {
            return true;
        }
        [
            format!("{}::{}", self.module, self.name),
            format!("{}.{}", self.module, self.name),
        ]
        .iter()
        .any(|qualified| qualified == name)
    }
}
