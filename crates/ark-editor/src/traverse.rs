//! Borrowing iterators over a [`ComponentTree`].

use std::iter::FusedIterator;
use std::slice;

use crate::tree::{ComponentTree, NodeKey, NodeRef};

/// Ordered children of a node (or the roots of the tree).
#[derive(Debug, Clone)]
pub struct Children<'a> {
    tree: &'a ComponentTree,
    keys: slice::Iter<'a, NodeKey>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a ComponentTree, keys: &'a [NodeKey]) -> Self {
        Self {
            tree,
            keys: keys.iter(),
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = *self.keys.next()?;
        Some(NodeRef {
            tree: self.tree,
            key,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = *self.keys.next_back()?;
        Some(NodeRef {
            tree: self.tree,
            key,
        })
    }
}

impl ExactSizeIterator for Children<'_> {}
impl FusedIterator for Children<'_> {}

/// Pre-order walk: each node before its children, siblings in order.
#[derive(Debug, Clone)]
pub struct DepthFirst<'a> {
    tree: &'a ComponentTree,
    stack: Vec<NodeKey>,
}

impl<'a> DepthFirst<'a> {
    pub(crate) fn new(tree: &'a ComponentTree, roots: &[NodeKey]) -> Self {
        Self {
            tree,
            stack: roots.iter().rev().copied().collect(),
        }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        self.stack
            .extend(self.tree.node(key).children.iter().rev().copied());
        Some(NodeRef {
            tree: self.tree,
            key,
        })
    }
}

impl FusedIterator for DepthFirst<'_> {}
