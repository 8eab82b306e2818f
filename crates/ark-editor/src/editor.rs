//! Editor state controller.
//!
//! [`Editor`] exclusively owns the component tree and the current selection.
//! Every mutation goes through one of its methods, so the tree is only ever
//! changed in dispatch order by a single writer.

use std::sync::Arc;

use tracing::{debug, info, warn};

use ark_model::{ComponentId, ComponentType, PropertyMap};
use ark_registry::ComponentRegistry;

use crate::command::{CommandOutcome, DropEvent, EditorCommand};
use crate::error::{EditorError, Result};
use crate::factory::{ComponentFactory, IdGenerator};
use crate::options::{EditorOptions, MissingReferencePolicy};
use crate::panel::PropertyPanel;
use crate::tree::{ComponentTree, Insert, MoveOutcome, MovePosition, NodeRef};

/// The editable canvas: a component tree plus selection.
#[derive(Debug)]
pub struct Editor {
    registry: Arc<ComponentRegistry>,
    factory: ComponentFactory,
    tree: ComponentTree,
    selected: Option<ComponentId>,
    options: EditorOptions,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(ComponentRegistry::builtin(), EditorOptions::default())
    }
}

impl Editor {
    /// Empty editor with random component ids.
    pub fn new(registry: Arc<ComponentRegistry>, options: EditorOptions) -> Self {
        let factory =
            ComponentFactory::with_random_ids(Arc::clone(&registry), options.id_suffix_len);
        Self::with_factory(registry, options, factory)
    }

    /// Empty editor drawing id suffixes from `ids`.
    pub fn with_id_generator(
        registry: Arc<ComponentRegistry>,
        options: EditorOptions,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        let factory = ComponentFactory::new(Arc::clone(&registry), ids);
        Self::with_factory(registry, options, factory)
    }

    fn with_factory(
        registry: Arc<ComponentRegistry>,
        options: EditorOptions,
        factory: ComponentFactory,
    ) -> Self {
        Self {
            factory,
            registry,
            tree: ComponentTree::new(),
            selected: None,
            options,
        }
    }

    // -- Read surface --

    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// The selected id. It is not guaranteed to exist in the tree.
    pub fn selected_id(&self) -> Option<&ComponentId> {
        self.selected.as_ref()
    }

    /// The selected component, if the selection names an existing node.
    pub fn selected(&self) -> Option<NodeRef<'_>> {
        self.selected
            .as_ref()
            .and_then(|id| self.tree.get(id.as_str()))
    }

    /// Property-editing view of `id`, or `None` if it is not in the tree.
    pub fn property_panel(&self, id: &str) -> Option<PropertyPanel> {
        let node = self.tree.get(id)?;
        Some(PropertyPanel::for_node(&self.registry, node))
    }

    // -- Commands --

    /// Create a component of `component_type` with default properties and
    /// append it under `parent` (or at the root level). The selection is not
    /// changed.
    ///
    /// # Errors
    ///
    /// Fails for an unregistered type, a parent that cannot hold children, an
    /// id collision streak, or (under [`MissingReferencePolicy::Reject`]) a
    /// missing parent.
    pub fn add_component(
        &mut self,
        component_type: ComponentType,
        parent: Option<&ComponentId>,
    ) -> Result<ComponentId> {
        self.add_component_with(component_type, parent, PropertyMap::new())
    }

    /// Like [`add_component`](Self::add_component), with property overrides
    /// applied on top of the defaults.
    pub fn add_component_with(
        &mut self,
        component_type: ComponentType,
        parent: Option<&ComponentId>,
        overrides: PropertyMap,
    ) -> Result<ComponentId> {
        if let Some(parent) = parent {
            match self.tree.get(parent.as_str()) {
                Some(node) => self.check_holds_children(node)?,
                None => self.missing_reference(parent, "add")?,
            }
        }

        let mut instance = self.factory.create(component_type, overrides)?;
        let max_attempts = self.options.max_id_attempts.max(1);
        let mut attempts = 1;
        while self.tree.contains(instance.id.as_str()) {
            if attempts >= max_attempts {
                return Err(EditorError::IdExhausted {
                    component_type,
                    attempts,
                });
            }
            debug!(component_id = %instance.id, "generated id collides, retrying");
            instance.id = self.factory.next_id(component_type);
            attempts += 1;
        }

        let id = instance.id.clone();
        match self.tree.insert(parent.map(ComponentId::as_str), instance)? {
            Insert::Inserted => debug!(
                component_id = %id,
                component_type = %component_type,
                parent_id = parent.map_or("<root>", ComponentId::as_str),
                "component added"
            ),
            Insert::ParentNotFound => warn!(
                component_id = %id,
                parent_id = parent.map_or("<root>", ComponentId::as_str),
                "parent not found, component discarded"
            ),
        }
        Ok(id)
    }

    /// Merge `patch` into the properties of `id`. Keys not in the patch keep
    /// their values.
    ///
    /// # Errors
    ///
    /// Fails if the patch does not fit the component's schema, or (under
    /// [`MissingReferencePolicy::Reject`]) if `id` is missing.
    pub fn update_component(&mut self, id: &ComponentId, patch: PropertyMap) -> Result<()> {
        let Some(node) = self.tree.get(id.as_str()) else {
            return self.missing_reference(id, "update");
        };
        let patch = self.registry.validate_patch(node.component_type(), patch)?;
        let keys = patch.len();
        self.tree.update(id.as_str(), patch);
        debug!(component_id = %id, keys, "component updated");
        Ok(())
    }

    /// Remove `id` and its subtree. Clears the selection if it pointed into
    /// the removed subtree.
    pub fn remove_component(&mut self, id: &ComponentId) -> Result<()> {
        let Some(removed) = self.tree.remove(id.as_str()) else {
            return self.missing_reference(id, "remove");
        };
        if let Some(selected) = &self.selected
            && removed.find(selected.as_str()).is_some()
        {
            self.selected = None;
        }
        debug!(component_id = %id, removed = removed.count(), "component removed");
        Ok(())
    }

    /// Set or clear the selection. No existence check is made.
    pub fn select_component(&mut self, id: Option<ComponentId>) {
        self.selected = id;
    }

    /// Move `source` (with its subtree) relative to `target`.
    ///
    /// Moving a component into itself or its own subtree changes nothing.
    /// A missing target is handled by
    /// [`missing_target`](EditorOptions::missing_target).
    ///
    /// # Errors
    ///
    /// Fails if the destination parent cannot hold children. Under
    /// [`MissingReferencePolicy::Reject`] also fails for missing ids and
    /// cyclic moves.
    pub fn move_component(
        &mut self,
        source: &ComponentId,
        target: &ComponentId,
        position: MovePosition,
    ) -> Result<()> {
        if self.options.missing_references == MissingReferencePolicy::Reject {
            for id in [source, target] {
                if !self.tree.contains(id.as_str()) {
                    return Err(EditorError::NotFound(id.clone()));
                }
            }
        }

        let Some(source_node) = self.tree.get(source.as_str()) else {
            return self.missing_reference(source, "move");
        };
        if let Some(target_node) = self.tree.get(target.as_str()) {
            if is_within(target_node, source_node) {
                return self.cyclic_move(source, target);
            }
            let destination = match position {
                MovePosition::Inside => Some(target_node),
                MovePosition::Before | MovePosition::After => target_node.parent(),
            };
            if let Some(parent) = destination {
                self.check_holds_children(parent)?;
            }
        }

        let selection_present = self.selected().is_some();
        match self.tree.move_node(
            source.as_str(),
            target.as_str(),
            position,
            self.options.missing_target,
        ) {
            MoveOutcome::Moved => {
                debug!(source_id = %source, target_id = %target, ?position, "component moved");
            }
            MoveOutcome::SourceNotFound => return self.missing_reference(source, "move"),
            MoveOutcome::TargetNotFound { dropped } => {
                warn!(
                    source_id = %source,
                    target_id = %target,
                    dropped,
                    "move target not found"
                );
                if dropped && selection_present && self.selected().is_none() {
                    self.selected = None;
                }
            }
            MoveOutcome::WouldCycle => return self.cyclic_move(source, target),
        }
        Ok(())
    }

    /// Remove every component and clear the selection.
    pub fn clear_canvas(&mut self) {
        self.tree.clear();
        self.selected = None;
        debug!("canvas cleared");
    }

    /// Replace the canvas with a single root container and select it.
    ///
    /// The root uses the container defaults plus the configured canvas
    /// overrides.
    pub fn initialize_canvas(&mut self) -> Result<ComponentId> {
        let root = self.factory.create(
            ComponentType::Container,
            self.options.canvas.root_overrides.clone(),
        )?;
        let id = root.id.clone();
        self.tree.clear();
        self.tree.insert(None, root)?;
        self.selected = Some(id.clone());
        info!(component_id = %id, "canvas initialized");
        Ok(id)
    }

    /// Initialize the canvas only if it is empty.
    ///
    /// Returns the new root id when initialization happened.
    pub fn ensure_initialized(&mut self) -> Result<Option<ComponentId>> {
        if self.tree.is_empty() {
            self.initialize_canvas().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Remove the selected component, if any.
    ///
    /// Returns the id that was removed.
    pub fn remove_selected(&mut self) -> Result<Option<ComponentId>> {
        let Some(id) = self.selected.clone() else {
            return Ok(None);
        };
        self.remove_component(&id)?;
        Ok(Some(id))
    }

    /// Apply one command.
    pub fn apply(&mut self, command: EditorCommand) -> Result<CommandOutcome> {
        match command {
            EditorCommand::Add {
                component_type,
                parent_id,
                properties,
            } => self
                .add_component_with(component_type, parent_id.as_ref(), properties)
                .map(CommandOutcome::Added),
            EditorCommand::Update { id, properties } => {
                self.update_component(&id, properties)?;
                Ok(CommandOutcome::Applied)
            }
            EditorCommand::Remove { id } => {
                self.remove_component(&id)?;
                Ok(CommandOutcome::Applied)
            }
            EditorCommand::Select { id } => {
                self.select_component(id);
                Ok(CommandOutcome::Applied)
            }
            EditorCommand::Move {
                source_id,
                target_id,
                position,
            } => {
                self.move_component(&source_id, &target_id, position)?;
                Ok(CommandOutcome::Applied)
            }
            EditorCommand::Clear => {
                self.clear_canvas();
                Ok(CommandOutcome::Applied)
            }
            EditorCommand::Initialize => self.initialize_canvas().map(CommandOutcome::Initialized),
        }
    }

    /// Apply a drag-and-drop payload.
    pub fn handle_drop(&mut self, event: DropEvent) -> Result<CommandOutcome> {
        self.apply(event.into())
    }

    // -- Internal helpers --

    fn check_holds_children(&self, parent: NodeRef<'_>) -> Result<()> {
        if !self.options.enforce_allows_children {
            return Ok(());
        }
        match self.registry.get_definition(parent.component_type()) {
            Some(definition) if !definition.allows_children => {
                Err(EditorError::ChildrenNotAllowed {
                    parent: parent.id().clone(),
                    parent_type: parent.component_type(),
                })
            }
            _ => Ok(()),
        }
    }

    fn cyclic_move(&self, source: &ComponentId, target: &ComponentId) -> Result<()> {
        match self.options.missing_references {
            MissingReferencePolicy::Ignore => {
                debug!(
                    source_id = %source,
                    target_id = %target,
                    "move into own subtree ignored"
                );
                Ok(())
            }
            MissingReferencePolicy::Reject => Err(EditorError::WouldCycle {
                moved: source.clone(),
                target: target.clone(),
            }),
        }
    }

    fn missing_reference(&self, id: &ComponentId, operation: &'static str) -> Result<()> {
        match self.options.missing_references {
            MissingReferencePolicy::Ignore => {
                warn!(component_id = %id, operation, "component not found, ignoring");
                Ok(())
            }
            MissingReferencePolicy::Reject => Err(EditorError::NotFound(id.clone())),
        }
    }
}

/// True if `node` is `ancestor` or lies below it.
fn is_within(node: NodeRef<'_>, ancestor: NodeRef<'_>) -> bool {
    let mut current = Some(node);
    while let Some(candidate) = current {
        if candidate.id() == ancestor.id() {
            return true;
        }
        current = candidate.parent();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::SequentialIdGenerator;
    use ark_model::PropertyValue;

    fn editor() -> Editor {
        Editor::with_id_generator(
            ComponentRegistry::builtin(),
            EditorOptions::default(),
            SequentialIdGenerator::new(),
        )
    }

    /// Always returns the same suffix.
    #[derive(Debug)]
    struct FixedIds;

    impl IdGenerator for FixedIds {
        fn suffix(&mut self, _component_type: ComponentType) -> String {
            "same".to_string()
        }
    }

    #[test]
    fn initialize_selects_configured_root() {
        let mut editor = editor();
        let root = editor.initialize_canvas().unwrap();
        assert_eq!(editor.selected_id(), Some(&root));
        let node = editor.tree().get(root.as_str()).unwrap();
        assert_eq!(node.component_type(), ComponentType::Container);
        assert_eq!(node.property("height"), Some(&PropertyValue::text("500px")));
        assert_eq!(
            node.property("backgroundColor"),
            Some(&PropertyValue::color("#f5f5f5"))
        );
        assert_eq!(node.property("padding"), Some(&PropertyValue::text("16px")));
    }

    #[test]
    fn colliding_ids_exhaust() {
        let mut editor = Editor::with_id_generator(
            ComponentRegistry::builtin(),
            EditorOptions::default(),
            FixedIds,
        );
        editor.add_component(ComponentType::Text, None).unwrap();
        let err = editor.add_component(ComponentType::Text, None).unwrap_err();
        assert_eq!(
            err,
            EditorError::IdExhausted {
                component_type: ComponentType::Text,
                attempts: 8,
            }
        );
        assert_eq!(editor.tree().len(), 1);
    }

    #[test]
    fn ensure_initialized_keeps_existing_content() {
        let mut editor = editor();
        let first = editor.ensure_initialized().unwrap();
        assert!(first.is_some());
        assert_eq!(editor.ensure_initialized().unwrap(), None);
        assert_eq!(editor.tree().len(), 1);
    }

    #[test]
    fn remove_selected_clears_selection() {
        let mut editor = editor();
        let root = editor.initialize_canvas().unwrap();
        assert_eq!(editor.remove_selected().unwrap(), Some(root));
        assert!(editor.tree().is_empty());
        assert_eq!(editor.selected_id(), None);
        assert_eq!(editor.remove_selected().unwrap(), None);
    }
}
