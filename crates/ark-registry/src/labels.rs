//! Display labels for palettes and property panels.

/// Turn a camelCase property name into a display label.
///
/// `backgroundColor` becomes `Background Color`.
pub fn property_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (index, c) in name.chars().enumerate() {
        if index == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

/// Capitalize a category label (`layout` becomes `Layout`).
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
