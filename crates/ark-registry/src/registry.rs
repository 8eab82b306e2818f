//! Component definition registry.
//!
//! Provides lookup of [`ComponentDefinition`]s by type, palette grouping by
//! category, and schema validation of property patches.

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;

use ark_model::{ComponentDefinition, ComponentType, PropertyMap};

use crate::catalog::builtin_definitions;
use crate::error::{RegistryError, Result};

static BUILTIN: LazyLock<Arc<ComponentRegistry>> = LazyLock::new(|| {
    tracing::debug!("building component registry");
    Arc::new(ComponentRegistry {
        definitions: builtin_definitions(),
    })
});

/// Catalog of component definitions, in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRegistry {
    definitions: Vec<ComponentDefinition>,
}

impl ComponentRegistry {
    /// The built-in catalog covering every [`ComponentType`].
    ///
    /// Built once per process and shared.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Build a registry from explicit definitions.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDefinition`] if a type appears twice.
    pub fn with_definitions(definitions: Vec<ComponentDefinition>) -> Result<Self> {
        for (index, definition) in definitions.iter().enumerate() {
            if definitions[..index]
                .iter()
                .any(|earlier| earlier.component_type == definition.component_type)
            {
                return Err(RegistryError::DuplicateDefinition(definition.component_type));
            }
        }
        Ok(Self { definitions })
    }

    /// Find the definition for a component type.
    ///
    /// A missing definition is a normal negative result; renderers should
    /// show a placeholder rather than fail.
    pub fn get_definition(&self, component_type: ComponentType) -> Option<&ComponentDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.component_type == component_type)
    }

    /// Like [`get_definition`](Self::get_definition), for callers that treat a
    /// missing definition as a precondition violation.
    pub fn require(&self, component_type: ComponentType) -> Result<&ComponentDefinition> {
        self.get_definition(component_type)
            .ok_or(RegistryError::UnknownType(component_type))
    }

    pub fn contains(&self, component_type: ComponentType) -> bool {
        self.get_definition(component_type).is_some()
    }

    /// All definitions in registration order.
    pub fn list_definitions(&self) -> &[ComponentDefinition] {
        &self.definitions
    }

    /// Definitions grouped by category label.
    ///
    /// Categories appear in the order they are first seen; each group keeps
    /// registration order.
    pub fn list_by_category(&self) -> IndexMap<&str, Vec<&ComponentDefinition>> {
        let mut groups: IndexMap<&str, Vec<&ComponentDefinition>> = IndexMap::new();
        for definition in &self.definitions {
            groups
                .entry(definition.category.as_str())
                .or_default()
                .push(definition);
        }
        groups
    }

    /// Validate a property patch against the schema of `component_type`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] if the type is not registered, or
    /// [`RegistryError::Schema`] for the first entry that does not fit.
    pub fn validate_patch(
        &self,
        component_type: ComponentType,
        patch: PropertyMap,
    ) -> Result<PropertyMap> {
        let definition = self.require(component_type)?;
        Ok(definition.validate_patch(patch)?)
    }
}
