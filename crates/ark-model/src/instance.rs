use crate::component::ComponentType;
use crate::ids::ComponentId;
use crate::property::{PropertyMap, PropertyValue};

/// An owned component subtree.
///
/// Used both as the payload inserted into a tree and as the read-only
/// snapshot handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInstance {
    pub id: ComponentId,
    pub component_type: ComponentType,
    pub properties: PropertyMap,
    /// Ordered children; only meaningful for types that allow children.
    pub children: Vec<ComponentInstance>,
}

impl ComponentInstance {
    pub fn new(id: ComponentId, component_type: ComponentType, properties: PropertyMap) -> Self {
        Self {
            id,
            component_type,
            properties,
            children: Vec::new(),
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Number of instances in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Depth-first search of this subtree, `self` first.
    pub fn find(&self, id: &str) -> Option<&ComponentInstance> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Ids of this subtree in pre-order.
    pub fn ids(&self) -> Vec<&ComponentId> {
        let mut out = Vec::with_capacity(self.count());
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a ComponentId>) {
        out.push(&self.id);
        for child in &self.children {
            child.collect_ids(out);
        }
    }
}

/// Depth-first search across a forest, first match wins.
pub fn find_in<'a>(forest: &'a [ComponentInstance], id: &str) -> Option<&'a ComponentInstance> {
    forest.iter().find_map(|root| root.find(id))
}

/// Total number of instances in a forest.
pub fn count_in(forest: &[ComponentInstance]) -> usize {
    forest.iter().map(ComponentInstance::count).sum()
}
