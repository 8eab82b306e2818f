//! Integration tests for the built-in registry.

use ark_model::{ComponentType, ModelError, PropertyKind, PropertyMap, PropertyValue};
use ark_registry::{ComponentRegistry, RegistryError, category_label};

fn patch(entries: &[(&str, PropertyValue)]) -> PropertyMap {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[test]
fn every_type_resolves() {
    let registry = ComponentRegistry::builtin();
    for ty in ComponentType::ALL {
        let definition = registry.get_definition(ty).expect("builtin definition");
        assert_eq!(definition.component_type, ty);
    }
}

#[test]
fn list_definitions_keeps_registration_order() {
    let registry = ComponentRegistry::builtin();
    let order: Vec<ComponentType> = registry
        .list_definitions()
        .iter()
        .map(|def| def.component_type)
        .collect();
    assert_eq!(
        order,
        vec![
            ComponentType::Container,
            ComponentType::Text,
            ComponentType::Button,
            ComponentType::Input,
            ComponentType::Image,
        ]
    );
}

#[test]
fn palette_grouping_snapshot() {
    let registry = ComponentRegistry::builtin();
    let rendered = registry
        .list_by_category()
        .iter()
        .map(|(category, definitions)| {
            let names: Vec<&str> = definitions.iter().map(|def| def.name.as_str()).collect();
            format!("{}: {}", category_label(category), names.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    Layout: Container
    Basic: Text, Button
    Form: Input Field
    Media: Image
    ");
}

#[test]
fn text_schema_matches_catalog() {
    let registry = ComponentRegistry::builtin();
    let text = registry.get_definition(ComponentType::Text).unwrap();
    assert_eq!(text.name, "Text");
    assert_eq!(text.icon, "text_fields");
    assert!(!text.allows_children);
    let names: Vec<&str> = text.properties.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["content", "color", "fontSize", "fontWeight", "textAlign"]
    );
    let weight = text.property("fontWeight").unwrap();
    assert_eq!(weight.kind, PropertyKind::Select);
    assert_eq!(weight.options, vec!["normal", "bold"]);
}

#[test]
fn validate_patch_accepts_text_for_select_and_color() {
    let registry = ComponentRegistry::builtin();
    let validated = registry
        .validate_patch(
            ComponentType::Text,
            patch(&[
                ("textAlign", PropertyValue::text("center")),
                ("color", PropertyValue::text("#336699")),
            ]),
        )
        .unwrap();
    assert_eq!(validated["textAlign"], PropertyValue::choice("center"));
    assert_eq!(validated["color"], PropertyValue::color("#336699"));
}

#[test]
fn validate_patch_rejects_schema_violations() {
    let registry = ComponentRegistry::builtin();

    let err = registry
        .validate_patch(
            ComponentType::Button,
            patch(&[("fullWidth", PropertyValue::text("yes"))]),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Schema(ModelError::InvalidValue {
            expected: PropertyKind::Boolean,
            found: PropertyKind::Text,
            ..
        })
    ));

    let err = registry
        .validate_patch(
            ComponentType::Image,
            patch(&[("caption", PropertyValue::text("x"))]),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Schema(ModelError::UnknownProperty { .. })
    ));
}
