//! Built-in component catalog.

use ark_model::{ComponentDefinition, ComponentType, PropertyDefinition};

/// Definitions for every [`ComponentType`], in palette order.
pub fn builtin_definitions() -> Vec<ComponentDefinition> {
    vec![container(), text(), button(), input(), image()]
}

fn container() -> ComponentDefinition {
    ComponentDefinition::new(ComponentType::Container, "Container", "dashboard", "layout")
        .with_property("width", PropertyDefinition::text("100%"))
        .with_property("height", PropertyDefinition::text("auto"))
        .with_property("backgroundColor", PropertyDefinition::color("#ffffff"))
        .with_property("padding", PropertyDefinition::text("16px"))
        .with_property("border", PropertyDefinition::text("none"))
        .with_property("borderRadius", PropertyDefinition::text("0px"))
        .with_children(true)
}

fn text() -> ComponentDefinition {
    ComponentDefinition::new(ComponentType::Text, "Text", "text_fields", "basic")
        .with_property("content", PropertyDefinition::text("Text content"))
        .with_property("color", PropertyDefinition::color("#000000"))
        .with_property("fontSize", PropertyDefinition::text("16px"))
        .with_property(
            "fontWeight",
            PropertyDefinition::select(&["normal", "bold"], "normal"),
        )
        .with_property(
            "textAlign",
            PropertyDefinition::select(&["left", "center", "right"], "left"),
        )
}

fn button() -> ComponentDefinition {
    ComponentDefinition::new(ComponentType::Button, "Button", "smart_button", "basic")
        .with_property("text", PropertyDefinition::text("Button"))
        .with_property(
            "variant",
            PropertyDefinition::select(&["contained", "outlined", "text"], "contained"),
        )
        .with_property(
            "color",
            PropertyDefinition::select(
                &["primary", "secondary", "error", "info", "success", "warning"],
                "primary",
            ),
        )
        .with_property(
            "size",
            PropertyDefinition::select(&["small", "medium", "large"], "medium"),
        )
        .with_property("fullWidth", PropertyDefinition::boolean(false))
}

fn input() -> ComponentDefinition {
    ComponentDefinition::new(ComponentType::Input, "Input Field", "input", "form")
        .with_property("label", PropertyDefinition::text("Label"))
        .with_property("placeholder", PropertyDefinition::text("Enter text..."))
        .with_property(
            "variant",
            PropertyDefinition::select(&["outlined", "filled", "standard"], "outlined"),
        )
        .with_property("required", PropertyDefinition::boolean(false))
        .with_property("fullWidth", PropertyDefinition::boolean(true))
}

fn image() -> ComponentDefinition {
    ComponentDefinition::new(ComponentType::Image, "Image", "image", "media")
        .with_property(
            "src",
            PropertyDefinition::text("https://via.placeholder.com/300x200"),
        )
        .with_property("alt", PropertyDefinition::text("Image description"))
        .with_property("width", PropertyDefinition::text("100%"))
        .with_property("height", PropertyDefinition::text("auto"))
        .with_property(
            "objectFit",
            PropertyDefinition::select(&["fill", "contain", "cover", "none", "scale-down"], "cover"),
        )
}
