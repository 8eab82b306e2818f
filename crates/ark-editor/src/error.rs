//! Error types for editor operations.

use ark_model::{ComponentId, ComponentType};
use ark_registry::RegistryError;
use thiserror::Error;

/// Errors returned by the factory, the tree and the editor controller.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EditorError {
    /// Unknown component type or a property value that does not fit the schema.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An inserted instance reuses an id already present in the tree.
    #[error("component '{0}' already exists")]
    DuplicateId(ComponentId),

    /// A referenced component is not in the tree (only under the reject policy).
    #[error("component '{0}' not found")]
    NotFound(ComponentId),

    /// The parent's type does not hold children.
    #[error("{parent_type} component '{parent}' cannot hold children")]
    ChildrenNotAllowed {
        parent: ComponentId,
        parent_type: ComponentType,
    },

    /// The move target is the moved component or lies inside it.
    #[error("cannot move '{moved}' to '{target}' inside its own subtree")]
    WouldCycle {
        moved: ComponentId,
        target: ComponentId,
    },

    /// Every generated id collided with an existing component.
    #[error("no unique id for a {component_type} component after {attempts} attempts")]
    IdExhausted {
        component_type: ComponentType,
        attempts: usize,
    },
}

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
