//! Colour asset and hex parsing.

use palette::Srgba;

use crate::error::{Result, TokexError};

use super::{asset_identity, Asset, Platform};

/// A named colour with channels in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Color {
    pub name: String,
    pub platform: Option<Platform>,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Create a colour applying to every platform.
    pub fn new(name: impl Into<String>, red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            name: name.into(),
            platform: None,
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Restrict the colour to one platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Create a colour from 8-bit RGBA channels.
    pub fn from_rgba8(name: impl Into<String>, rgba: [u8; 4]) -> Self {
        let (red, green, blue, alpha) = Srgba::new(rgba[0], rgba[1], rgba[2], rgba[3])
            .into_format::<f64, f64>()
            .into_components();
        Self::new(name, red, green, blue, alpha)
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    ///
    /// The leading `#` is optional.
    pub fn from_hex(name: impl Into<String>, s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let digits = hex
            .chars()
            .map(parse_hex_digit)
            .collect::<Result<Vec<u8>>>()?;

        let rgba = match digits.as_slice() {
            [r, g, b] => [r << 4 | r, g << 4 | g, b << 4 | b, 255],
            [r, g, b, a] => [r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a],
            [r1, r2, g1, g2, b1, b2] => [r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2, 255],
            [r1, r2, g1, g2, b1, b2, a1, a2] => {
                [r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2, a1 << 4 | a2]
            }
            _ => {
                return Err(TokexError::Parse {
                    message: format!("Invalid hex colour: {}", s),
                    help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
                })
            }
        };

        Ok(Self::from_rgba8(name, rgba))
    }

    /// Channels rounded to 8 bits.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let (r, g, b, a) = Srgba::new(self.red, self.green, self.blue, self.alpha)
            .into_format::<u8, u8>()
            .into_components();
        [r, g, b, a]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.to_rgba8()[3] == 255
    }

    /// Android resource notation: `#RRGGBB`, or `#AARRGGBB` when translucent.
    pub fn android_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
        }
    }

    /// Compose `Color(...)` literal: always `0xAARRGGBB`.
    pub fn argb_literal(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("0x{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
    }
}

impl Asset for Color {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn platform(&self) -> Option<Platform> {
        self.platform
    }
}

asset_identity!(Color);

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| TokexError::parse(format!("Invalid hex digit: {}", c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Color::from_hex("red", "#FF0000").unwrap();
        assert_eq!(c.to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(c.red, 1.0);
        assert_eq!(c.green, 0.0);

        let c = Color::from_hex("navy", "#1a1a2e").unwrap();
        assert_eq!(c.to_rgba8(), [0x1a, 0x1a, 0x2e, 255]);
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Color::from_hex("c", "#ABC").unwrap();
        assert_eq!(c.to_rgba8(), [0xAA, 0xBB, 0xCC, 255]);
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Color::from_hex("c", "#FF000080").unwrap();
        assert_eq!(c.to_rgba8(), [255, 0, 0, 128]);
        assert!(!c.is_opaque());
    }

    #[test]
    fn test_from_hex_4digit() {
        let c = Color::from_hex("c", "#F008").unwrap();
        assert_eq!(c.to_rgba8(), [255, 0, 0, 0x88]);
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Color::from_hex("c", "00FF00").unwrap();
        assert_eq!(c.to_rgba8(), [0, 255, 0, 255]);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Color::from_hex("c", "#GGG").is_err());
        assert!(Color::from_hex("c", "#12345").is_err());
        assert!(Color::from_hex("c", "").is_err());
        assert!(Color::from_hex("c", "{blue.500}").is_err());
    }

    #[test]
    fn test_android_hex() {
        assert_eq!(Color::from_hex("c", "#FF0000").unwrap().android_hex(), "#FF0000");
        assert_eq!(Color::from_hex("c", "#FF000080").unwrap().android_hex(), "#80FF0000");
    }

    #[test]
    fn test_argb_literal() {
        assert_eq!(Color::from_hex("c", "#1A1A2E").unwrap().argb_literal(), "0xFF1A1A2E");
        assert_eq!(Color::new("c", 0.0, 0.0, 0.0, 0.0).argb_literal(), "0x00000000");
    }
}
