//! Arena-backed component tree.
//!
//! Nodes live in a slot arena and refer to each other by slot key: every node
//! records its parent and an ordered list of child keys, and an id index maps
//! [`ComponentId`]s to slots. Freed slots are recycled through a free list.
//! Structural edits are key rewrites; no subtree is ever copied to move it.
//!
//! # Revisions
//!
//! Every mutation bumps the tree [`revision`](ComponentTree::revision) and
//! stamps it on the changed node and each of its ancestors. A renderer that
//! remembers the revision it last drew for a node can skip the whole subtree
//! when [`NodeRef::revision`] has not moved.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use ark_model::{ComponentId, ComponentInstance, ComponentType, PropertyMap, PropertyValue};

use crate::error::{EditorError, Result};
use crate::options::MissingTargetPolicy;
use crate::traverse::{Children, DepthFirst};

/// Slot key of a live node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeKey(usize);

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) id: ComponentId,
    pub(crate) component_type: ComponentType,
    pub(crate) properties: PropertyMap,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    pub(crate) revision: u64,
}

/// Where a moved component lands relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovePosition {
    /// Last child of the target.
    #[default]
    Inside,
    /// Sibling immediately before the target.
    Before,
    /// Sibling immediately after the target.
    After,
}

/// Result of [`ComponentTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    /// The node was appended under its parent or at the root level.
    Inserted,
    /// No node has the requested parent id; the tree is unchanged.
    ParentNotFound,
}

/// Result of [`ComponentTree::move_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The source subtree now sits at the requested position.
    Moved,
    /// The source id is not in the tree; nothing changed.
    SourceNotFound,
    /// The target id is not in the tree. `dropped` tells whether the source
    /// subtree was discarded ([`MissingTargetPolicy::Drop`]) or left in place.
    TargetNotFound { dropped: bool },
    /// The target is the source or one of its descendants; nothing changed.
    WouldCycle,
}

/// Ordered forest of component instances.
#[derive(Debug, Clone, Default)]
pub struct ComponentTree {
    slots: Vec<Option<Node>>,
    free_list: Vec<usize>,
    index: HashMap<ComponentId, NodeKey>,
    roots: Vec<NodeKey>,
    revision: u64,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from owned root instances.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::DuplicateId`] if an id appears twice.
    pub fn from_instances(roots: Vec<ComponentInstance>) -> Result<Self> {
        let mut tree = Self::new();
        for root in roots {
            tree.insert(None, root)?;
        }
        Ok(tree)
    }

    /// Number of components in the tree.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Current revision; bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // -- Read API --

    pub fn get(&self, id: &str) -> Option<NodeRef<'_>> {
        self.index
            .get(id)
            .map(|&key| NodeRef { tree: self, key })
    }

    /// Id of the parent of `id`; `None` for roots and missing ids.
    pub fn parent_of(&self, id: &str) -> Option<&ComponentId> {
        self.get(id)?.parent().map(|parent| parent.id())
    }

    /// Root components in order.
    pub fn roots(&self) -> Children<'_> {
        Children::new(self, &self.roots)
    }

    /// Pre-order traversal of the whole forest.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst::new(self, &self.roots)
    }

    /// Owned copy of the subtree rooted at `id`.
    pub fn instance(&self, id: &str) -> Option<ComponentInstance> {
        self.get(id).map(|node| node.to_instance())
    }

    /// Owned copy of the whole forest.
    ///
    /// The snapshot is independent of the tree and unaffected by later edits.
    pub fn to_instances(&self) -> Vec<ComponentInstance> {
        self.roots().map(|node| node.to_instance()).collect()
    }

    // -- Mutation API --

    /// Append `instance` (with its subtree) to the roots, or as the last child
    /// of the node whose id is `parent`.
    ///
    /// A missing parent leaves the tree unchanged and reports
    /// [`Insert::ParentNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::DuplicateId`] if any id of the subtree is
    /// already used (in the tree or twice within the subtree).
    pub fn insert(&mut self, parent: Option<&str>, instance: ComponentInstance) -> Result<Insert> {
        let parent_key = match parent {
            Some(parent_id) => match self.index.get(parent_id) {
                Some(&key) => Some(key),
                None => return Ok(Insert::ParentNotFound),
            },
            None => None,
        };

        if let Some(id) = self.first_duplicate(&instance) {
            return Err(EditorError::DuplicateId(id));
        }

        let revision = self.bump();
        let key = self.alloc_subtree(instance, parent_key, revision);
        self.siblings_mut(parent_key).push(key);
        if let Some(parent_key) = parent_key {
            self.stamp_ancestors(parent_key, revision);
        }
        Ok(Insert::Inserted)
    }

    /// Merge `patch` into the properties of `id`; patched keys overwrite,
    /// other keys keep their values.
    ///
    /// Returns `false` (tree unchanged) if `id` is missing.
    pub fn update(&mut self, id: &str, patch: PropertyMap) -> bool {
        let Some(&key) = self.index.get(id) else {
            return false;
        };
        let revision = self.bump();
        self.node_mut(key).properties.extend(patch);
        self.stamp_ancestors(key, revision);
        true
    }

    /// Remove `id` together with its subtree; siblings are untouched.
    ///
    /// Returns the removed subtree, or `None` if `id` is missing.
    pub fn remove(&mut self, id: &str) -> Option<ComponentInstance> {
        let key = *self.index.get(id)?;
        let revision = self.bump();
        if let Some(parent) = self.detach(key) {
            self.stamp_ancestors(parent, revision);
        }
        Some(self.release(key))
    }

    /// Detach the subtree at `source` and reattach it relative to `target`.
    ///
    /// `Inside` appends to the target's children; `Before`/`After` insert it
    /// next to the target at whatever level the target lives.
    pub fn move_node(
        &mut self,
        source: &str,
        target: &str,
        position: MovePosition,
        missing_target: MissingTargetPolicy,
    ) -> MoveOutcome {
        let Some(&source_key) = self.index.get(source) else {
            return MoveOutcome::SourceNotFound;
        };
        let Some(&target_key) = self.index.get(target) else {
            return match missing_target {
                MissingTargetPolicy::Restore => MoveOutcome::TargetNotFound { dropped: false },
                MissingTargetPolicy::Drop => {
                    self.remove(source);
                    MoveOutcome::TargetNotFound { dropped: true }
                }
            };
        };
        if source_key == target_key || self.is_ancestor(source_key, target_key) {
            return MoveOutcome::WouldCycle;
        }

        let revision = self.bump();
        if let Some(old_parent) = self.detach(source_key) {
            self.stamp_ancestors(old_parent, revision);
        }

        let new_parent = match position {
            MovePosition::Inside => Some(target_key),
            MovePosition::Before | MovePosition::After => self.node(target_key).parent,
        };
        let siblings = self.siblings_mut(new_parent);
        match position {
            MovePosition::Inside => siblings.push(source_key),
            MovePosition::Before | MovePosition::After => {
                let at = siblings
                    .iter()
                    .position(|&key| key == target_key)
                    .unwrap_or(siblings.len());
                let at = if position == MovePosition::After { at + 1 } else { at };
                siblings.insert(at.min(siblings.len()), source_key);
            }
        }
        self.node_mut(source_key).parent = new_parent;
        self.stamp_ancestors(source_key, revision);
        MoveOutcome::Moved
    }

    /// Remove every component.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.index.clear();
        self.roots.clear();
        self.bump();
    }

    // -- Internal helpers --

    pub(crate) fn node(&self, key: NodeKey) -> &Node {
        match self.slots.get(key.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node key {}", key.0),
        }
    }

    fn node_mut(&mut self, key: NodeKey) -> &mut Node {
        match self.slots.get_mut(key.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node key {}", key.0),
        }
    }

    fn bump(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }

    fn siblings_mut(&mut self, parent: Option<NodeKey>) -> &mut Vec<NodeKey> {
        match parent {
            Some(parent) => &mut self.node_mut(parent).children,
            None => &mut self.roots,
        }
    }

    /// First id of `instance` (pre-order) that is already used in the tree
    /// or earlier in the same subtree.
    fn first_duplicate(&self, instance: &ComponentInstance) -> Option<ComponentId> {
        let mut seen = HashSet::new();
        instance
            .ids()
            .into_iter()
            .find(|&id| self.index.contains_key(id) || !seen.insert(id))
            .cloned()
    }

    /// Returns true if `ancestor` is a proper ancestor of `key`.
    fn is_ancestor(&self, ancestor: NodeKey, key: NodeKey) -> bool {
        let mut current = self.node(key).parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.node(parent).parent;
        }
        false
    }

    fn stamp_ancestors(&mut self, key: NodeKey, revision: u64) {
        let mut current = Some(key);
        while let Some(key) = current {
            let node = self.node_mut(key);
            node.revision = revision;
            current = node.parent;
        }
    }

    fn alloc(&mut self, node: Node) -> NodeKey {
        if let Some(slot) = self.free_list.pop() {
            self.slots[slot] = Some(node);
            NodeKey(slot)
        } else {
            self.slots.push(Some(node));
            NodeKey(self.slots.len() - 1)
        }
    }

    fn alloc_subtree(
        &mut self,
        instance: ComponentInstance,
        parent: Option<NodeKey>,
        revision: u64,
    ) -> NodeKey {
        let ComponentInstance {
            id,
            component_type,
            properties,
            children,
        } = instance;
        let key = self.alloc(Node {
            id: id.clone(),
            component_type,
            properties,
            parent,
            children: Vec::with_capacity(children.len()),
            revision,
        });
        self.index.insert(id, key);
        for child in children {
            let child_key = self.alloc_subtree(child, Some(key), revision);
            self.node_mut(key).children.push(child_key);
        }
        key
    }

    /// Unlink `key` from its parent's children (or the roots).
    ///
    /// Returns the former parent.
    fn detach(&mut self, key: NodeKey) -> Option<NodeKey> {
        let parent = self.node(key).parent;
        let siblings = self.siblings_mut(parent);
        if let Some(at) = siblings.iter().position(|&sibling| sibling == key) {
            siblings.remove(at);
        }
        self.node_mut(key).parent = None;
        parent
    }

    /// Free the slots of a detached subtree and return it as an instance.
    fn release(&mut self, key: NodeKey) -> ComponentInstance {
        let Some(node) = self.slots.get_mut(key.0).and_then(Option::take) else {
            panic!("dangling node key {}", key.0);
        };
        self.free_list.push(key.0);
        self.index.remove(&node.id);
        let children = node
            .children
            .into_iter()
            .map(|child| self.release(child))
            .collect();
        ComponentInstance {
            id: node.id,
            component_type: node.component_type,
            properties: node.properties,
            children,
        }
    }
}

impl PartialEq for ComponentTree {
    /// Structural equality: same forest shape, ids, types and properties.
    /// Slot layout and revisions are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.to_instances() == other.to_instances()
    }
}

/// Borrowed view of one node.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    pub(crate) tree: &'a ComponentTree,
    pub(crate) key: NodeKey,
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a Node {
        self.tree.node(self.key)
    }

    pub fn id(&self) -> &'a ComponentId {
        &self.node().id
    }

    pub fn component_type(&self) -> ComponentType {
        self.node().component_type
    }

    pub fn properties(&self) -> &'a PropertyMap {
        &self.node().properties
    }

    pub fn property(&self, name: &str) -> Option<&'a PropertyValue> {
        self.node().properties.get(name)
    }

    pub fn children(&self) -> Children<'a> {
        Children::new(self.tree, &self.node().children)
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|key| NodeRef {
            tree: self.tree,
            key,
        })
    }

    /// Zero for roots.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node().parent;
        while let Some(key) = current {
            depth += 1;
            current = self.tree.node(key).parent;
        }
        depth
    }

    /// Revision of the last change to this node or anything below it.
    pub fn revision(&self) -> u64 {
        self.node().revision
    }

    /// Owned copy of this subtree.
    pub fn to_instance(&self) -> ComponentInstance {
        ComponentInstance {
            id: self.id().clone(),
            component_type: self.component_type(),
            properties: self.properties().clone(),
            children: self.children().map(|child| child.to_instance()).collect(),
        }
    }
}
