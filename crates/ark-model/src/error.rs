//! Error types for the component model.

use thiserror::Error;

use crate::component::ComponentType;
use crate::property::PropertyKind;

/// Errors raised when a value does not fit the component model.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// The type tag does not name a known component type.
    #[error("unknown component type '{0}'")]
    UnknownType(String),

    /// A component id was empty or contained whitespace.
    #[error("invalid component id '{0}'")]
    InvalidComponentId(String),

    /// The property is not part of the component's schema.
    #[error("{component_type} has no property '{property}'")]
    UnknownProperty {
        component_type: ComponentType,
        property: String,
    },

    /// The value kind does not match the property kind.
    #[error("property '{property}' expects a {expected} value, got {found}")]
    InvalidValue {
        property: String,
        expected: PropertyKind,
        found: PropertyKind,
    },

    /// The value is not one of the allowed options.
    #[error("'{value}' is not an option of '{property}' (expected one of {options:?})")]
    InvalidChoice {
        property: String,
        value: String,
        options: Vec<String>,
    },

    /// The value is not a hex color.
    #[error("'{value}' is not a valid color for '{property}'")]
    InvalidColor { property: String, value: String },

    /// Numeric properties only accept finite numbers.
    #[error("property '{property}' must be a finite number")]
    NonFiniteNumber { property: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
