use indexmap::IndexMap;

use crate::component::ComponentType;
use crate::error::ModelError;
use crate::property::{PropertyDefinition, PropertyMap};

/// Static description of a component type: palette metadata and property schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDefinition {
    pub component_type: ComponentType,
    /// Display name shown in the palette and property panel.
    pub name: String,
    /// Icon identifier for the palette entry.
    pub icon: String,
    /// Palette group label (e.g. "layout", "basic").
    pub category: String,
    /// Property schema, in declaration order.
    pub properties: IndexMap<String, PropertyDefinition>,
    /// Whether instances of this type may hold children.
    pub allows_children: bool,
}

impl ComponentDefinition {
    pub fn new(component_type: ComponentType, name: &str, icon: &str, category: &str) -> Self {
        Self {
            component_type,
            name: name.to_string(),
            icon: icon.to_string(),
            category: category.to_string(),
            properties: IndexMap::new(),
            allows_children: false,
        }
    }

    #[must_use]
    pub fn with_property(mut self, name: &str, definition: PropertyDefinition) -> Self {
        self.properties.insert(name.to_string(), definition);
        self
    }

    #[must_use]
    pub fn with_children(mut self, allows_children: bool) -> Self {
        self.allows_children = allows_children;
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.get(name)
    }

    /// Default value of every declared property.
    pub fn default_properties(&self) -> PropertyMap {
        self.properties
            .iter()
            .map(|(name, definition)| (name.clone(), definition.default.clone()))
            .collect()
    }

    /// Validate every entry of `patch` against the schema.
    ///
    /// Returns the patch with values narrowed to their declared kinds. The
    /// first invalid entry (in key order) is reported.
    pub fn validate_patch(&self, patch: PropertyMap) -> Result<PropertyMap, ModelError> {
        patch
            .into_iter()
            .map(|(name, value)| {
                let definition =
                    self.property(&name)
                        .ok_or_else(|| ModelError::UnknownProperty {
                            component_type: self.component_type,
                            property: name.clone(),
                        })?;
                let value = definition.coerce(&name, value)?;
                Ok((name, value))
            })
            .collect()
    }
}
