//! Error types for registry lookups and schema validation.

use ark_model::{ComponentType, ModelError};
use thiserror::Error;

/// Errors that can occur when building or querying a registry.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// No definition is registered for the type.
    #[error("component type {0} is not registered")]
    UnknownType(ComponentType),

    /// Two definitions were supplied for the same type.
    #[error("component type {0} is defined more than once")]
    DuplicateDefinition(ComponentType),

    /// A property value does not fit the schema.
    #[error(transparent)]
    Schema(#[from] ModelError),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
