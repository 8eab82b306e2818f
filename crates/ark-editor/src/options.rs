//! Configuration options for the editor controller.

use serde::{Deserialize, Serialize};

use ark_model::{PropertyMap, PropertyValue};

/// How operations that reference a missing component behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingReferencePolicy {
    /// Treat the operation as a no-op; the reference may simply be stale.
    #[default]
    Ignore,
    /// Return [`EditorError::NotFound`](crate::EditorError::NotFound).
    Reject,
}

/// What a move does with the extracted subtree when the target is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTargetPolicy {
    /// Leave the subtree where it was.
    #[default]
    Restore,
    /// Discard the subtree.
    Drop,
}

/// Properties of the root container seeded by `initialize_canvas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasOptions {
    /// Overrides applied on top of the container defaults.
    pub root_overrides: PropertyMap,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        let mut root_overrides = PropertyMap::new();
        root_overrides.insert("height".to_string(), PropertyValue::text("500px"));
        root_overrides.insert(
            "backgroundColor".to_string(),
            PropertyValue::color("#f5f5f5"),
        );
        Self { root_overrides }
    }
}

/// Options controlling editor behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Length of the random alphanumeric id suffix.
    pub id_suffix_len: usize,

    /// How many ids to generate before giving up on a collision streak.
    pub max_id_attempts: usize,

    /// Behavior of update/remove/move/add when an id is missing.
    pub missing_references: MissingReferencePolicy,

    /// Behavior of a move whose target cannot be found.
    pub missing_target: MissingTargetPolicy,

    /// Refuse to place children under types that do not allow them.
    pub enforce_allows_children: bool,

    /// Initial canvas settings.
    pub canvas: CanvasOptions,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            id_suffix_len: 6,
            max_id_attempts: 8,
            missing_references: MissingReferencePolicy::Ignore,
            missing_target: MissingTargetPolicy::Restore,
            enforce_allows_children: true,
            canvas: CanvasOptions::default(),
        }
    }
}

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that report every missing reference as an error.
    pub fn strict() -> Self {
        Self {
            missing_references: MissingReferencePolicy::Reject,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_missing_references(mut self, policy: MissingReferencePolicy) -> Self {
        self.missing_references = policy;
        self
    }

    #[must_use]
    pub fn with_missing_target(mut self, policy: MissingTargetPolicy) -> Self {
        self.missing_target = policy;
        self
    }

    #[must_use]
    pub fn with_enforce_allows_children(mut self, enforce: bool) -> Self {
        self.enforce_allows_children = enforce;
        self
    }
}
