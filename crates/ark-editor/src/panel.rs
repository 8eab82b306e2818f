//! Property-editing view of a single component.

use ark_model::{ComponentId, ComponentType, PropertyKind, PropertyValue};
use ark_registry::{ComponentRegistry, property_label};

use crate::tree::NodeRef;

/// One editable property row.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyField {
    pub name: String,
    /// Display label derived from the property name.
    pub label: String,
    pub kind: PropertyKind,
    /// Allowed values for select fields.
    pub options: Vec<String>,
    /// Current value, or the schema default when the node has none.
    pub value: PropertyValue,
}

/// What a property panel shows for a component.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyPanel {
    Component {
        id: ComponentId,
        /// Definition display name.
        title: String,
        /// Fields in schema declaration order.
        fields: Vec<PropertyField>,
    },
    /// The component's type has no registered definition.
    Unknown {
        id: ComponentId,
        component_type: ComponentType,
    },
}

impl PropertyPanel {
    pub(crate) fn for_node(registry: &ComponentRegistry, node: NodeRef<'_>) -> Self {
        let id = node.id().clone();
        let Some(definition) = registry.get_definition(node.component_type()) else {
            return PropertyPanel::Unknown {
                id,
                component_type: node.component_type(),
            };
        };
        let fields = definition
            .properties
            .iter()
            .map(|(name, schema)| PropertyField {
                name: name.clone(),
                label: property_label(name),
                kind: schema.kind,
                options: schema.options.clone(),
                value: node
                    .property(name)
                    .cloned()
                    .unwrap_or_else(|| schema.default.clone()),
            })
            .collect();
        PropertyPanel::Component {
            id,
            title: definition.name.clone(),
            fields,
        }
    }

    pub fn id(&self) -> &ComponentId {
        match self {
            PropertyPanel::Component { id, .. } | PropertyPanel::Unknown { id, .. } => id,
        }
    }

    pub fn field(&self, name: &str) -> Option<&PropertyField> {
        match self {
            PropertyPanel::Component { fields, .. } => {
                fields.iter().find(|field| field.name == name)
            }
            PropertyPanel::Unknown { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ComponentTree;
    use ark_model::{ComponentDefinition, ComponentInstance, PropertyDefinition, PropertyMap};

    #[test]
    fn missing_definition_yields_placeholder() {
        let registry = ComponentRegistry::with_definitions(vec![
            ComponentDefinition::new(ComponentType::Text, "Text", "text_fields", "basic")
                .with_property("content", PropertyDefinition::text("Text content")),
        ])
        .unwrap();
        let mut tree = ComponentTree::new();
        let id = ComponentId::new("image_1").unwrap();
        tree.insert(
            None,
            ComponentInstance::new(id.clone(), ComponentType::Image, PropertyMap::new()),
        )
        .unwrap();

        let panel = PropertyPanel::for_node(&registry, tree.get("image_1").unwrap());
        assert_eq!(
            panel,
            PropertyPanel::Unknown {
                id,
                component_type: ComponentType::Image,
            }
        );
        assert!(panel.field("src").is_none());
    }

    #[test]
    fn absent_values_fall_back_to_defaults() {
        let registry = ComponentRegistry::builtin();
        let mut tree = ComponentTree::new();
        let mut properties = PropertyMap::new();
        properties.insert("text".to_string(), PropertyValue::text("Save"));
        tree.insert(
            None,
            ComponentInstance::new(
                ComponentId::new("button_1").unwrap(),
                ComponentType::Button,
                properties,
            ),
        )
        .unwrap();

        let panel = PropertyPanel::for_node(&registry, tree.get("button_1").unwrap());
        assert_eq!(panel.field("text").unwrap().value, PropertyValue::text("Save"));
        assert_eq!(
            panel.field("size").unwrap().value,
            PropertyValue::choice("medium")
        );
        assert_eq!(panel.field("fullWidth").unwrap().label, "Full Width");
    }
}
