//! Component definition registry for the Ark visual builder.
//!
//! The registry is the static catalog that drives the palette, rendering and
//! the property panel. Use [`ComponentRegistry::builtin`] for the standard
//! catalog.

pub mod catalog;
pub mod error;
pub mod labels;
pub mod registry;

pub use catalog::builtin_definitions;
pub use error::{RegistryError, Result};
pub use labels::{category_label, property_label};
pub use registry::ComponentRegistry;
