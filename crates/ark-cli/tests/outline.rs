//! Outline rendering of replayed scripts.

use ark_cli::outline::{render_editor, render_outline};
use ark_cli::replay::{ReplaySettings, parse_script, replay};
use ark_editor::{ComponentTree, Editor, EditorOptions, SequentialIdGenerator};
use ark_model::{
    ComponentDefinition, ComponentId, ComponentInstance, ComponentType, PropertyDefinition,
    PropertyMap,
};
use ark_registry::ComponentRegistry;

fn editor() -> Editor {
    Editor::with_id_generator(
        ComponentRegistry::builtin(),
        EditorOptions::default(),
        SequentialIdGenerator::new(),
    )
}

const SCRIPT: &str = r#"[
    { "op": "add", "component_type": "text", "parent_id": "container_1" },
    { "op": "update", "id": "text_2", "properties": { "content": "Hello" } },
    { "op": "add", "component_type": "container", "parent_id": "container_1",
      "properties": { "padding": "8px" } },
    { "op": "add", "component_type": "button", "parent_id": "container_3",
      "properties": { "variant": "outlined", "fullWidth": true } },
    { "op": "add", "component_type": "image", "parent_id": "container_3" },
    { "op": "move", "source_id": "text_2", "target_id": "container_3", "position": "inside" },
    { "op": "select", "id": "button_4" }
]"#;

#[test]
fn replayed_script_outline() {
    let mut editor = editor();
    let commands = parse_script(SCRIPT).unwrap();
    let report = replay(&mut editor, commands, ReplaySettings::default()).unwrap();
    assert_eq!(report.applied, 7);
    assert!(report.failed.is_empty());

    let outline = render_editor(&editor);
    insta::assert_snapshot!(outline.trim_end());
}

#[test]
fn empty_canvas_outline() {
    let mut editor = editor();
    let commands = parse_script(r#"[{ "op": "clear" }]"#).unwrap();
    replay(&mut editor, commands, ReplaySettings::default()).unwrap();
    insta::assert_snapshot!(render_editor(&editor).trim_end(), @"(empty canvas)");
}

#[test]
fn unregistered_types_render_as_placeholders() {
    let registry = ComponentRegistry::with_definitions(vec![
        ComponentDefinition::new(ComponentType::Container, "Container", "dashboard", "layout")
            .with_property("width", PropertyDefinition::text("100%"))
            .with_children(true),
    ])
    .unwrap();

    let mut root = ComponentInstance::new(
        ComponentId::new("container_1").unwrap(),
        ComponentType::Container,
        PropertyMap::new(),
    );
    root.children.push(ComponentInstance::new(
        ComponentId::new("image_2").unwrap(),
        ComponentType::Image,
        PropertyMap::new(),
    ));
    let tree = ComponentTree::from_instances(vec![root]).unwrap();

    let outline = render_outline(&registry, &tree, None);
    insta::assert_snapshot!(outline.trim_end(), @r"
    Container #container_1
      [unknown component: image] #image_2
    ");
}
