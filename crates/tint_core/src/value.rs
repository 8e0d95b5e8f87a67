//! Resource values and the attribute slots they are applied to

use crate::color::Color;
use std::fmt;
use std::sync::Arc;

/// A value that can be stored in a resource table and applied to an attribute
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceValue {
    Color(Color),
    Number(f32),
    Text(Arc<str>),
}

impl ResourceValue {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Color> for ResourceValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<f32> for ResourceValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ResourceValue {
    fn from(text: &str) -> Self {
        Self::Text(Arc::from(text))
    }
}

impl From<String> for ResourceValue {
    fn from(text: String) -> Self {
        Self::Text(Arc::from(text))
    }
}

impl fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{color}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Opaque handle naming a settable attribute on an element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeSlot(pub u32);

impl AttributeSlot {
    /// Human-readable name for the well-known slots, `None` for host-defined ones
    pub fn name(self) -> Option<&'static str> {
        use attributes::*;
        let name = match self {
            BACKGROUND => "background",
            FOREGROUND => "foreground",
            BORDER_BRUSH => "border-brush",
            ACCENT => "accent",
            SELECTION => "selection",
            OPACITY => "opacity",
            CORNER_RADIUS => "corner-radius",
            BORDER_WIDTH => "border-width",
            FONT_SIZE => "font-size",
            FONT_FAMILY => "font-family",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for AttributeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "slot#{}", self.0),
        }
    }
}

/// Well-known attribute slots
///
/// Hosts may define their own slots above [`attributes::HOST_DEFINED`].
pub mod attributes {
    use super::AttributeSlot;

    // Brushes
    pub const BACKGROUND: AttributeSlot = AttributeSlot(1);
    pub const FOREGROUND: AttributeSlot = AttributeSlot(2);
    pub const BORDER_BRUSH: AttributeSlot = AttributeSlot(3);
    pub const ACCENT: AttributeSlot = AttributeSlot(4);
    pub const SELECTION: AttributeSlot = AttributeSlot(5);

    // Metrics
    pub const OPACITY: AttributeSlot = AttributeSlot(10);
    pub const CORNER_RADIUS: AttributeSlot = AttributeSlot(11);
    pub const BORDER_WIDTH: AttributeSlot = AttributeSlot(12);
    pub const FONT_SIZE: AttributeSlot = AttributeSlot(13);

    // Text
    pub const FONT_FAMILY: AttributeSlot = AttributeSlot(20);

    /// First slot id free for host-defined attributes
    pub const HOST_DEFINED: u32 = 1000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_slots_have_names() {
        assert_eq!(attributes::ACCENT.to_string(), "accent");
        assert_eq!(
            AttributeSlot(attributes::HOST_DEFINED + 7).to_string(),
            "slot#1007"
        );
    }

    #[test]
    fn accessors_match_variant() {
        let value = ResourceValue::from(Color::RED);
        assert_eq!(value.as_color(), Some(Color::RED));
        assert_eq!(value.as_number(), None);
        assert_eq!(ResourceValue::from("Inter").as_text(), Some("Inter"));
    }
}
