//! Typed property values and their schema.
//!
//! Component properties are stored as a [`PropertyMap`] of named
//! [`PropertyValue`]s. Each component type declares a [`PropertyDefinition`]
//! per property; definitions own the default value and decide which incoming
//! values are acceptable (see [`PropertyDefinition::coerce`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ModelError;

/// Current property values of a component, keyed by property name.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// The input kind of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Free-form text.
    Text,
    /// Numeric value.
    Number,
    /// On/off switch.
    Boolean,
    /// One of an ordered set of options.
    Select,
    /// Hex color string.
    Color,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Text => "text",
            PropertyKind::Number => "number",
            PropertyKind::Boolean => "boolean",
            PropertyKind::Select => "select",
            PropertyKind::Color => "color",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property value.
///
/// Deserialized untagged: JSON strings become [`PropertyValue::Text`] and are
/// narrowed to `Choice` or `Color` by the owning definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Choice(String),
    Color(String),
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Text(value.into())
    }

    pub fn choice(value: impl Into<String>) -> Self {
        PropertyValue::Choice(value.into())
    }

    pub fn color(value: impl Into<String>) -> Self {
        PropertyValue::Color(value.into())
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Text(_) => PropertyKind::Text,
            PropertyValue::Number(_) => PropertyKind::Number,
            PropertyValue::Boolean(_) => PropertyKind::Boolean,
            PropertyValue::Choice(_) => PropertyKind::Select,
            PropertyValue::Color(_) => PropertyKind::Color,
        }
    }

    /// Returns the string payload of text, choice and color values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) | PropertyValue::Choice(s) | PropertyValue::Color(s) => {
                Some(s.as_str())
            }
            PropertyValue::Number(_) | PropertyValue::Boolean(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) | PropertyValue::Choice(s) | PropertyValue::Color(s) => {
                f.write_str(s)
            }
            PropertyValue::Number(n) => write!(f, "{n}"),
            PropertyValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

/// Schema of one configurable property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    pub kind: PropertyKind,
    pub default: PropertyValue,
    /// Allowed values for [`PropertyKind::Select`]; empty otherwise.
    pub options: Vec<String>,
}

impl PropertyDefinition {
    pub fn text(default: &str) -> Self {
        Self {
            kind: PropertyKind::Text,
            default: PropertyValue::text(default),
            options: Vec::new(),
        }
    }

    pub fn number(default: f64) -> Self {
        Self {
            kind: PropertyKind::Number,
            default: PropertyValue::Number(default),
            options: Vec::new(),
        }
    }

    pub fn boolean(default: bool) -> Self {
        Self {
            kind: PropertyKind::Boolean,
            default: PropertyValue::Boolean(default),
            options: Vec::new(),
        }
    }

    pub fn select(options: &[&str], default: &str) -> Self {
        Self {
            kind: PropertyKind::Select,
            default: PropertyValue::choice(default),
            options: options.iter().map(|option| option.to_string()).collect(),
        }
    }

    pub fn color(default: &str) -> Self {
        Self {
            kind: PropertyKind::Color,
            default: PropertyValue::color(default),
            options: Vec::new(),
        }
    }

    /// Check `value` against this definition, narrowing plain text to the
    /// property's kind where that is unambiguous.
    ///
    /// Text is accepted for select properties when it names an option and for
    /// color properties when it is a hex color.
    pub fn coerce(&self, property: &str, value: PropertyValue) -> Result<PropertyValue, ModelError> {
        match (self.kind, value) {
            (PropertyKind::Text, PropertyValue::Text(s)) => Ok(PropertyValue::Text(s)),
            (PropertyKind::Boolean, PropertyValue::Boolean(b)) => Ok(PropertyValue::Boolean(b)),
            (PropertyKind::Number, PropertyValue::Number(n)) => {
                if n.is_finite() {
                    Ok(PropertyValue::Number(n))
                } else {
                    Err(ModelError::NonFiniteNumber {
                        property: property.to_string(),
                    })
                }
            }
            (PropertyKind::Select, PropertyValue::Choice(s) | PropertyValue::Text(s)) => {
                if self.options.iter().any(|option| *option == s) {
                    Ok(PropertyValue::Choice(s))
                } else {
                    Err(ModelError::InvalidChoice {
                        property: property.to_string(),
                        value: s,
                        options: self.options.clone(),
                    })
                }
            }
            (PropertyKind::Color, PropertyValue::Color(s) | PropertyValue::Text(s)) => {
                if is_css_color(&s) {
                    Ok(PropertyValue::Color(s))
                } else {
                    Err(ModelError::InvalidColor {
                        property: property.to_string(),
                        value: s,
                    })
                }
            }
            (expected, other) => Err(ModelError::InvalidValue {
                property: property.to_string(),
                expected,
                found: other.kind(),
            }),
        }
    }
}

/// Returns true for `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Returns true for strings a color field accepts: a hex color, a functional
/// notation such as `rgb(0, 0, 0)` or `hsla(...)`, or a keyword such as
/// `red` or `transparent`.
///
/// Keywords are checked for shape only, not against the CSS name list.
pub fn is_css_color(value: &str) -> bool {
    let value = value.trim();
    if value.starts_with('#') {
        return is_hex_color(value);
    }
    if let Some((function, rest)) = value.split_once('(') {
        let function = function.trim_end().to_ascii_lowercase();
        return matches!(function.as_str(), "rgb" | "rgba" | "hsl" | "hsla")
            && rest
                .strip_suffix(')')
                .is_some_and(|args| !args.trim().is_empty() && !args.contains(['(', ')']));
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#f5f5f5"));
        assert!(is_hex_color("#00000080"));
        assert!(!is_hex_color("f5f5f5"));
        assert!(!is_hex_color("#f5f5f"));
        assert!(!is_hex_color("#ggg"));
    }

    #[test]
    fn css_colors() {
        for color in [
            "red",
            "transparent",
            "#333333",
            "rgb(0,0,0)",
            "rgba(0, 0, 0, 0.5)",
            "hsl(120 50% 50%)",
        ] {
            assert!(is_css_color(color), "{color}");
        }
        for color in [
            "",
            "   ",
            "#12",
            "not a color",
            "rgb()",
            "rgb(0,0,0",
            "url(x.png)",
            "12px",
        ] {
            assert!(!is_css_color(color), "{color:?}");
        }
    }

    #[test]
    fn text_narrows_to_color_keyword() {
        let def = PropertyDefinition::color("#333333");
        assert_eq!(
            def.coerce("color", PropertyValue::text("red")),
            Ok(PropertyValue::color("red"))
        );
    }

    #[test]
    fn text_narrows_to_choice() {
        let def = PropertyDefinition::select(&["left", "center", "right"], "left");
        assert_eq!(
            def.coerce("textAlign", PropertyValue::text("center")),
            Ok(PropertyValue::choice("center"))
        );
    }

    #[test]
    fn choice_outside_options_is_rejected() {
        let def = PropertyDefinition::select(&["normal", "bold"], "normal");
        let err = def
            .coerce("fontWeight", PropertyValue::choice("heavy"))
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidChoice { ref value, .. } if value == "heavy"));
    }

    #[test]
    fn kind_mismatch_reports_both_kinds() {
        let def = PropertyDefinition::boolean(false);
        assert_eq!(
            def.coerce("required", PropertyValue::text("yes")),
            Err(ModelError::InvalidValue {
                property: "required".to_string(),
                expected: PropertyKind::Boolean,
                found: PropertyKind::Text,
            })
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let def = PropertyDefinition::number(0.0);
        assert!(def.coerce("opacity", PropertyValue::Number(f64::NAN)).is_err());
        assert_eq!(
            def.coerce("opacity", PropertyValue::Number(0.5)),
            Ok(PropertyValue::Number(0.5))
        );
    }

    #[test]
    fn untagged_json_values() {
        let map: PropertyMap =
            serde_json::from_str(r#"{"content":"Hello","fullWidth":true,"size":12.5}"#).unwrap();
        assert_eq!(map["content"], PropertyValue::text("Hello"));
        assert_eq!(map["fullWidth"], PropertyValue::Boolean(true));
        assert_eq!(map["size"], PropertyValue::Number(12.5));
    }
}
