//! Color values carried by theme resources

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Error returned when a `#RRGGBB` / `#RRGGBBAA` string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string did not start with `#`
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),

    /// Wrong number of hex digits
    #[error("color `{0}` must have 6 or 8 hex digits")]
    InvalidLength(String),

    /// A non-hex character was found
    #[error("color `{0}` contains non-hex digits")]
    InvalidDigit(String),
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(input.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))?;

        if digits.len() == 6 {
            Ok(Self::from_hex(value))
        } else {
            let alpha = (value & 0xFF) as f32 / 255.0;
            Ok(Self::from_hex(value >> 8).with_alpha(alpha))
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )?;
        if self.a < 1.0 {
            write!(f, "{:02X}", channel(self.a))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(Color::parse_hex("#FF0000").unwrap(), Color::RED);
        let translucent = Color::parse_hex("#0000FF80").unwrap();
        assert_eq!(translucent.b, 1.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            Color::parse_hex("FF0000"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::parse_hex("#FFF"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            "#GG0000".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn display_is_uppercase_hex() {
        assert_eq!(Color::from_hex(0x0078D4).to_string(), "#0078D4");
        assert_eq!(Color::WHITE.with_alpha(0.0).to_string(), "#FFFFFF00");
    }
}
