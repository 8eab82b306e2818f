//! Component data model for the Ark visual builder.
//!
//! - [`ComponentType`]: the closed set of component kinds
//! - [`PropertyDefinition`] / [`PropertyValue`]: typed property schema and values
//! - [`ComponentDefinition`]: per-type palette metadata and schema
//! - [`ComponentInstance`]: an owned node of the editable tree

pub mod component;
pub mod definition;
pub mod error;
pub mod ids;
pub mod instance;
pub mod property;

pub use component::ComponentType;
pub use definition::ComponentDefinition;
pub use error::{ModelError, Result};
pub use ids::ComponentId;
pub use instance::{ComponentInstance, count_in, find_in};
pub use property::{
    PropertyDefinition, PropertyKind, PropertyMap, PropertyValue, is_css_color,
    is_hex_color,
};
