//! Tab color type

use std::fmt;

/// An opaque RGB color.
///
/// The notebook host emits HTML-style color strings on notebooks and
/// sections: either the literal `"none"` or a `#RRGGBB`/`#AARRGGBB` hex
/// value (occasionally a CSS basic color name). Decoding is best-effort and
/// never fails; anything unrecognized is treated the same as `"none"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Decode an HTML-style color string.
    ///
    /// `"none"`, absence of a value, and undecodable input all mean "no
    /// color" and yield `None`. `#AARRGGBB` is accepted; the alpha byte is
    /// dropped. Decoding is deterministic: the same input always produces
    /// the same color.
    pub fn from_html(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value == "none" {
            return None;
        }

        if let Some(hex) = value.strip_prefix('#') {
            return Self::from_hex(hex);
        }

        named_color(value)
    }

    /// Decode a hex string without the `#` prefix (`RRGGBB` or `AARRGGBB`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color { r, g, b })
            }
            8 => {
                // Alpha first, as the host emits it
                let r = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let g = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let b = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Color { r, g, b })
            }
            _ => None,
        }
    }

    /// Format as `RRGGBB` hex (without the `#` prefix)
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// The CSS basic color names. The host normally emits hex, but named
/// values show up in hand-edited hierarchy exports.
fn named_color(name: &str) -> Option<Color> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => (0x00, 0x00, 0x00),
        "silver" => (0xC0, 0xC0, 0xC0),
        "gray" => (0x80, 0x80, 0x80),
        "white" => (0xFF, 0xFF, 0xFF),
        "maroon" => (0x80, 0x00, 0x00),
        "red" => (0xFF, 0x00, 0x00),
        "purple" => (0x80, 0x00, 0x80),
        "fuchsia" => (0xFF, 0x00, 0xFF),
        "green" => (0x00, 0x80, 0x00),
        "lime" => (0x00, 0xFF, 0x00),
        "olive" => (0x80, 0x80, 0x00),
        "yellow" => (0xFF, 0xFF, 0x00),
        "navy" => (0x00, 0x00, 0x80),
        "blue" => (0x00, 0x00, 0xFF),
        "teal" => (0x00, 0x80, 0x80),
        "aqua" => (0x00, 0xFF, 0xFF),
        _ => return None,
    };
    Some(Color::rgb(rgb.0, rgb.1, rgb.2))
}
