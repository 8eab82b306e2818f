//! Plain-text rendering of a component tree.
//!
//! One line per component, indented two spaces per level:
//!
//! ```text
//! Container #container_1 (selected) height="500px", backgroundColor="#f5f5f5"
//!   Text #text_2 content="Hello"
//!   [unknown component: image] #image_3
//! ```
//!
//! Only properties that differ from the schema default are listed.

use std::fmt::Write;

use ark_editor::{ComponentTree, Editor, NodeRef};
use ark_model::{ComponentId, PropertyValue};
use ark_registry::ComponentRegistry;

/// Outline of the editor's tree, marking the selection.
pub fn render_editor(editor: &Editor) -> String {
    render_outline(editor.registry(), editor.tree(), editor.selected_id())
}

/// Outline of `tree`; components without a definition become placeholders.
pub fn render_outline(
    registry: &ComponentRegistry,
    tree: &ComponentTree,
    selected: Option<&ComponentId>,
) -> String {
    let mut out = String::new();
    if tree.is_empty() {
        out.push_str("(empty canvas)\n");
        return out;
    }
    for node in tree.depth_first() {
        render_line(&mut out, registry, node, selected);
    }
    out
}

fn render_line(
    out: &mut String,
    registry: &ComponentRegistry,
    node: NodeRef<'_>,
    selected: Option<&ComponentId>,
) {
    let indent = "  ".repeat(node.depth());
    let Some(definition) = registry.get_definition(node.component_type()) else {
        let _ = writeln!(
            out,
            "{indent}[unknown component: {}] #{}",
            node.component_type(),
            node.id()
        );
        return;
    };

    let _ = write!(out, "{indent}{} #{}", definition.name, node.id());
    if selected == Some(node.id()) {
        out.push_str(" (selected)");
    }

    let changed: Vec<String> = definition
        .properties
        .iter()
        .filter_map(|(name, schema)| {
            let value = node.property(name)?;
            (value != &schema.default).then(|| format!("{name}={}", display_value(value)))
        })
        .collect();
    if !changed.is_empty() {
        out.push(' ');
        out.push_str(&changed.join(", "));
    }
    out.push('\n');
}

fn display_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Text(s) | PropertyValue::Choice(s) | PropertyValue::Color(s) => {
            format!("{s:?}")
        }
        PropertyValue::Number(_) | PropertyValue::Boolean(_) => value.to_string(),
    }
}
