use std::fmt::Display;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

lazy_static::lazy_static! {
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// An RGB palette color. Serialized as a `#rrggbb` string.
#[derive(Debug, Clone, Default, Eq)]
pub struct Color {
    pub name: Option<String>,
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: r={:02X}, g={:02X}, b={:02X}}}", self.r, self.g, self.b)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { name: None, r, g, b }
    }

    pub fn get_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses a `#rrggbb` (or bare `rrggbb`) string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHexColor`] for anything else.
    pub fn from_hex(hex: &str) -> Result<Self> {
        if let Some(cap) = HEX_COLOR_REGEX.captures(hex) {
            let (_, [r, g, b]) = cap.extract();
            let r = u8::from_str_radix(r, 16)?;
            let g = u8::from_str_radix(g, 16)?;
            let b = u8::from_str_radix(b, 16)?;
            Ok(Color::new(r, g, b))
        } else {
            Err(EngineError::InvalidHexColor { value: hex.to_string() })
        }
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Color::from_hex(&value).map_err(serde::de::Error::custom)
    }
}

/// The preset paint colors offered by the editor.
pub const EDITOR_DEFAULT_PALETTE: [Color; 8] = [
    Color::new(0xFF, 0x00, 0x00),
    Color::new(0x00, 0xFF, 0x00),
    Color::new(0x00, 0x00, 0xFF),
    Color::new(0xFF, 0xFF, 0x00),
    Color::new(0xFF, 0x00, 0xFF),
    Color::new(0x00, 0xFF, 0xFF),
    Color::new(0x00, 0x00, 0x00),
    Color::new(0xFF, 0xFF, 0xFF),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: EDITOR_DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Palette { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::new(0xFF, 0x00, 0x00), Color::from_hex("#FF0000").unwrap());
        assert_eq!(Color::new(0xCC, 0xCC, 0xCC), Color::from_hex("cccccc").unwrap());
        assert!(Color::from_hex("#ABC").is_err());
        assert!(Color::from_hex("red").is_err());
        assert!(Color::from_hex("#FF0000FF").is_err());
    }

    #[test]
    fn test_to_hex_round_trip() {
        let color = Color::new(0xF5, 0xF5, 0xF5);
        assert_eq!("#f5f5f5", color.to_hex());
        assert_eq!(color, Color::from_hex(&color.to_hex()).unwrap());
    }

    #[test]
    fn test_default_palette_presets() {
        let palette = Palette::default();
        assert_eq!(8, palette.len());
        assert_eq!(Some(&Color::new(0xFF, 0x00, 0x00)), palette.get(0));
        assert_eq!(Some(&Color::new(0xFF, 0xFF, 0xFF)), palette.get(7));
        assert_eq!(None, palette.get(8));
        assert_eq!((0xFF, 0x00, 0x00), palette.get(0).unwrap().get_rgb());
        assert_eq!(8, palette.iter().count());
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::new(vec![Color::new(0x12, 0x34, 0x56)]);
        assert_eq!(1, palette.len());
        assert!(!palette.is_empty());
        assert_eq!("#123456", palette.get(0).unwrap().to_hex());
    }
}
