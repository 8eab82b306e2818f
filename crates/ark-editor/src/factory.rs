//! Component instance factory.
//!
//! Builds new tree nodes from registry definitions: defaults first, then
//! validated overrides, plus a freshly generated id.

use std::fmt;
use std::sync::Arc;

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ark_model::{ComponentId, ComponentInstance, ComponentType, PropertyMap};
use ark_registry::{ComponentRegistry, RegistryError};

use crate::error::Result;

/// Source of id suffixes for new components.
pub trait IdGenerator: fmt::Debug + Send {
    /// Returns the suffix appended to `<type tag>_`.
    fn suffix(&mut self, component_type: ComponentType) -> String;
}

/// Random alphanumeric suffixes.
#[derive(Debug)]
pub struct RandomIdGenerator {
    len: usize,
    rng: StdRng,
}

impl RandomIdGenerator {
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(len: usize, seed: u64) -> Self {
        Self {
            len: len.max(1),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for RandomIdGenerator {
    fn suffix(&mut self, _component_type: ComponentType) -> String {
        (0..self.len)
            .map(|_| char::from(self.rng.sample(Alphanumeric)))
            .collect()
    }
}

/// Counter-based suffixes (`text_1`, `container_2`, ...).
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn suffix(&mut self, _component_type: ComponentType) -> String {
        self.next += 1;
        self.next.to_string()
    }
}

/// Creates component instances from registry definitions.
#[derive(Debug)]
pub struct ComponentFactory {
    registry: Arc<ComponentRegistry>,
    ids: Box<dyn IdGenerator>,
}

impl ComponentFactory {
    pub fn new(registry: Arc<ComponentRegistry>, ids: impl IdGenerator + 'static) -> Self {
        Self {
            registry,
            ids: Box::new(ids),
        }
    }

    /// Factory with random id suffixes of the given length.
    pub fn with_random_ids(registry: Arc<ComponentRegistry>, suffix_len: usize) -> Self {
        Self::new(registry, RandomIdGenerator::new(suffix_len))
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Build a new instance of `component_type`.
    ///
    /// Every declared property starts at its default; `overrides` are
    /// validated against the schema and win per key. The instance has no
    /// children.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] if the type has no definition,
    /// or a schema error for an invalid override.
    pub fn create(
        &mut self,
        component_type: ComponentType,
        overrides: PropertyMap,
    ) -> Result<ComponentInstance> {
        let definition = self.registry.require(component_type)?;
        let overrides = definition
            .validate_patch(overrides)
            .map_err(RegistryError::from)?;
        let mut properties = definition.default_properties();
        properties.extend(overrides);
        let id = self.next_id(component_type);
        Ok(ComponentInstance::new(id, component_type, properties))
    }

    /// Generate a fresh id for `component_type`.
    pub fn next_id(&mut self, component_type: ComponentType) -> ComponentId {
        let suffix = self.ids.suffix(component_type);
        ComponentId::generated(component_type, &suffix)
    }
}
