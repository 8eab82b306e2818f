//! Serializable editor commands and drag-and-drop payloads.

use serde::{Deserialize, Serialize};

use ark_model::{ComponentId, ComponentType, PropertyMap};

use crate::tree::MovePosition;

/// A single mutation of the editor state.
///
/// Scripts are JSON arrays of commands tagged by `op`:
///
/// ```json
/// [
///   { "op": "add", "component_type": "text", "parent_id": "container_1" },
///   { "op": "update", "id": "text_2", "properties": { "content": "Hello" } },
///   { "op": "move", "source_id": "text_2", "target_id": "container_1", "position": "before" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditorCommand {
    Add {
        component_type: ComponentType,
        #[serde(default)]
        parent_id: Option<ComponentId>,
        #[serde(default)]
        properties: PropertyMap,
    },
    Update {
        id: ComponentId,
        properties: PropertyMap,
    },
    Remove {
        id: ComponentId,
    },
    Select {
        #[serde(default)]
        id: Option<ComponentId>,
    },
    Move {
        source_id: ComponentId,
        target_id: ComponentId,
        #[serde(default)]
        position: MovePosition,
    },
    Clear,
    Initialize,
}

/// Payload delivered when something is dropped on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropEvent {
    /// A palette entry dropped onto a container (or the empty canvas).
    NewComponent {
        component_type: ComponentType,
        parent_id: Option<ComponentId>,
    },
    /// An existing component dropped onto another one.
    MoveComponent {
        source_id: ComponentId,
        target_id: ComponentId,
        #[serde(default)]
        position: MovePosition,
    },
}

impl From<DropEvent> for EditorCommand {
    fn from(event: DropEvent) -> Self {
        match event {
            DropEvent::NewComponent {
                component_type,
                parent_id,
            } => EditorCommand::Add {
                component_type,
                parent_id,
                properties: PropertyMap::new(),
            },
            DropEvent::MoveComponent {
                source_id,
                target_id,
                position,
            } => EditorCommand::Move {
                source_id,
                target_id,
                position,
            },
        }
    }
}

/// What [`Editor::apply`](crate::Editor::apply) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A component was created with this id.
    Added(ComponentId),
    /// The canvas was reset to a root container with this id.
    Initialized(ComponentId),
    Applied,
}

impl CommandOutcome {
    /// Id of the component the command created, if any.
    pub fn created_id(&self) -> Option<&ComponentId> {
        match self {
            CommandOutcome::Added(id) | CommandOutcome::Initialized(id) => Some(id),
            CommandOutcome::Applied => None,
        }
    }
}
