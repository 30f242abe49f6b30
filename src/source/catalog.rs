use tracing::debug;

use super::{DescriptorSource, Pivot};
use crate::descriptor::{Annotated, AnnotatedType};
use crate::error::GenerateError;

/// Ordered registry of data-model types.
///
/// Registration order is the declared-type order used during discovery.
/// Types with no descriptors may be registered; they are simply never
/// returned from [`DescriptorSource::annotated_types`].
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: Vec<AnnotatedType>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`. Registering the same type twice keeps the first entry.
    pub fn register<T: Annotated + ?Sized>(&mut self) -> &mut Self {
        self.insert(AnnotatedType::of::<T>())
    }

    /// Register a type described at runtime, e.g. from a manifest.
    pub fn insert(&mut self, ty: AnnotatedType) -> &mut Self {
        if !self.types.iter().any(|known| known.same_type(&ty)) {
            self.types.push(ty);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Modules in first-registration order.
    pub fn modules(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = Vec::new();
        for ty in &self.types {
            if !modules.contains(&ty.module()) {
                modules.push(ty.module());
            }
        }
        modules
    }

    /// One module pivot per registered module.
    pub fn all_modules(&self) -> Vec<Pivot> {
        self.modules().into_iter().map(Pivot::module).collect()
    }

    fn resolve_module<'a>(&'a self, pivot: &'a Pivot) -> Result<&'a str, GenerateError> {
        match pivot {
            Pivot::Module(module) => Ok(module.as_str()),
            Pivot::TypeName(name) => self
                .types
                .iter()
                .find(|ty| ty.answers_to(name))
                .map(AnnotatedType::module)
                .ok_or_else(|| GenerateError::UnknownPivot {
                    pivot: name.clone(),
                }),
        }
    }
}

impl DescriptorSource for TypeCatalog {
    fn annotated_types(&self, pivots: &[Pivot]) -> Result<Vec<AnnotatedType>, GenerateError> {
        let mut found: Vec<AnnotatedType> = Vec::new();
        for pivot in pivots {
            let module = self.resolve_module(pivot)?;
            debug!(%pivot, module, "expanding pivot");
            for ty in self.types.iter().filter(|ty| ty.module() == module) {
                if ty.is_annotated() && !found.iter().any(|seen| seen.same_type(ty)) {
                    found.push(ty.clone());
                }
            }
        }
        Ok(found)
    }
}
