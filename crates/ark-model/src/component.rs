use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The closed set of component kinds a canvas can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Container,
    Text,
    Button,
    Input,
    Image,
}

impl ComponentType {
    /// Every component type, in catalog order.
    pub const ALL: [ComponentType; 5] = [
        ComponentType::Container,
        ComponentType::Text,
        ComponentType::Button,
        ComponentType::Input,
        ComponentType::Image,
    ];

    /// Returns the type tag used in ids and command payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Container => "container",
            ComponentType::Text => "text",
            ComponentType::Button => "button",
            ComponentType::Input => "input",
            ComponentType::Image => "image",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = ModelError;

    /// Parse a type tag (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ComponentType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("Container".parse::<ComponentType>(), Ok(ComponentType::Container));
        assert_eq!(" image ".parse::<ComponentType>(), Ok(ComponentType::Image));
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert_eq!(
            "video".parse::<ComponentType>(),
            Err(ModelError::UnknownType("video".to_string()))
        );
    }

    #[test]
    fn display_matches_tag() {
        for ty in ComponentType::ALL {
            assert_eq!(ty.to_string(), ty.as_str());
        }
    }
}
