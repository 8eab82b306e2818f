//! Editing core of the Ark visual builder.
//!
//! - [`ComponentFactory`]: builds new instances from registry definitions
//! - [`ComponentTree`]: arena-backed ordered forest of components
//! - [`Editor`]: owns tree and selection, the only mutation entry point
//! - [`EditorCommand`] / [`DropEvent`]: the serializable command surface

pub mod command;
pub mod editor;
pub mod error;
pub mod factory;
pub mod options;
pub mod panel;
pub mod traverse;
pub mod tree;

pub use command::{CommandOutcome, DropEvent, EditorCommand};
pub use editor::Editor;
pub use error::{EditorError, Result};
pub use factory::{ComponentFactory, IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use options::{CanvasOptions, EditorOptions, MissingReferencePolicy, MissingTargetPolicy};
pub use panel::{PropertyField, PropertyPanel};
pub use traverse::{Children, DepthFirst};
pub use tree::{ComponentTree, Insert, MoveOutcome, MovePosition, NodeRef};
