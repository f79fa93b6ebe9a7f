//! Color values as the map widget accepts them.
//!
//! The widget takes CSS-style colors: hex strings (`#RGB` or `#RRGGBB`) or a
//! small set of named colors. [`MapColor`] keeps the exact text so that data
//! round-trips unchanged, and resolves it to an [`RgbColor`] on demand.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named colors recognized in addition to hex notation (CSS level 1 keywords).
const NAMED_COLORS: &[(&str, RgbColor)] = &[
    ("aqua", RgbColor::new(0, 255, 255)),
    ("black", RgbColor::new(0, 0, 0)),
    ("blue", RgbColor::new(0, 0, 255)),
    ("fuchsia", RgbColor::new(255, 0, 255)),
    ("gray", RgbColor::new(128, 128, 128)),
    ("green", RgbColor::new(0, 128, 0)),
    ("grey", RgbColor::new(128, 128, 128)),
    ("lime", RgbColor::new(0, 255, 0)),
    ("maroon", RgbColor::new(128, 0, 0)),
    ("navy", RgbColor::new(0, 0, 128)),
    ("olive", RgbColor::new(128, 128, 0)),
    ("orange", RgbColor::new(255, 165, 0)),
    ("purple", RgbColor::new(128, 0, 128)),
    ("red", RgbColor::new(255, 0, 0)),
    ("silver", RgbColor::new(192, 192, 192)),
    ("teal", RgbColor::new(0, 128, 128)),
    ("white", RgbColor::new(255, 255, 255)),
    ("yellow", RgbColor::new(255, 255, 0)),
];

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB" in either case.
    /// The short form expands each digit (`#fa0` is `#ffaa00`).
    ///
    /// # Examples
    ///
    /// ```
    /// use ukmap::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#616d57").unwrap();
    /// assert_eq!(color, RgbColor::new(0x61, 0x6d, 0x57));
    ///
    /// let color = RgbColor::from_hex("#FFF").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 255, 255));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        // from_str_radix alone would accept a leading sign in each slice
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected hex digits only");
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .context(format!("Invalid red channel in hex color '{hex}'"))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .context(format!("Invalid green channel in hex color '{hex}'"))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .context(format!("Invalid blue channel in hex color '{hex}'"))?;
                Ok(Self::new(r, g, b))
            }
            3 => {
                let expand = |digit: &str| -> Result<u8> {
                    let v = u8::from_str_radix(digit, 16)
                        .context(format!("Invalid digit '{digit}' in hex color '{hex}'"))?;
                    Ok(v * 17)
                };
                Ok(Self::new(
                    expand(&hex[0..1])?,
                    expand(&hex[1..2])?,
                    expand(&hex[2..3])?,
                ))
            }
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 3 or 6 hex digits (RGB or RRGGBB)"
            ),
        }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

/// A color setting exactly as written in the map data.
///
/// The text is kept verbatim (`"#ffffff"` stays lowercase, `"white"` stays a
/// name). Use [`MapColor::to_rgb`] to check and resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapColor(String);

impl MapColor {
    /// Wraps color text without checking it. See [`MapColor::parse`].
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Parses and checks color text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukmap::models::MapColor;
    ///
    /// assert!(MapColor::parse("#88a4bc").is_ok());
    /// assert!(MapColor::parse("white").is_ok());
    /// assert!(MapColor::parse("not-a-color").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let color = Self::new(text);
        color.to_rgb()?;
        Ok(color)
    }

    /// Returns the color text as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is a named color rather than hex notation.
    pub fn is_named(&self) -> bool {
        !self.0.trim_start().starts_with('#')
    }

    /// Resolves the color to RGB channels.
    ///
    /// Hex colors must carry a leading `#`; names are matched case-insensitively.
    pub fn to_rgb(&self) -> Result<RgbColor> {
        let text = self.0.trim();
        if text.starts_with('#') {
            return RgbColor::from_hex(text);
        }

        let lower = text.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, rgb)| *rgb)
            .with_context(|| format!("Unrecognized color '{text}'. Expected #RGB, #RRGGBB or a color name"))
    }
}

impl fmt::Display for MapColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MapColor {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<RgbColor> for MapColor {
    fn from(rgb: RgbColor) -> Self {
        Self(rgb.to_hex())
    }
}
