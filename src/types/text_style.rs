//! Typography styles.

use super::{asset_identity, Asset, Platform};

/// Standard font weights with a named face suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// Map a numeric CSS-style weight to a named weight.
    pub fn from_value(value: f64) -> Option<Self> {
        match value as i64 {
            300 => Some(FontWeight::Light),
            400 => Some(FontWeight::Regular),
            500 => Some(FontWeight::Medium),
            600 => Some(FontWeight::Semibold),
            700 => Some(FontWeight::Bold),
            _ => None,
        }
    }

    /// Face suffix appended to the family name (`SFProDisplay-Medium`).
    pub fn suffix(self) -> &'static str {
        match self {
            FontWeight::Light => "Light",
            FontWeight::Regular => "Regular",
            FontWeight::Medium => "Medium",
            FontWeight::Semibold => "Semibold",
            FontWeight::Bold => "Bold",
        }
    }

    /// Font name for `family` in this weight, e.g. `SFProDisplay-Bold`.
    pub fn font_name(weight: Option<Self>, family: &str) -> String {
        match weight {
            Some(weight) => format!("{}-{}", family, weight.suffix()),
            None => family.to_string(),
        }
    }
}

/// A named text style.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub name: String,
    pub platform: Option<Platform>,
    pub font_name: String,
    pub font_size: f64,
    pub line_height: Option<f64>,
    pub letter_spacing: f64,
    pub paragraph_spacing: Option<f64>,
    /// Numeric weight (400, 700 ...) when known.
    pub weight: Option<f64>,
}

impl TextStyle {
    pub fn new(name: impl Into<String>, font_name: impl Into<String>, font_size: f64) -> Self {
        Self {
            name: name.into(),
            platform: None,
            font_name: font_name.into(),
            font_size,
            line_height: None,
            letter_spacing: 0.0,
            paragraph_spacing: None,
            weight: None,
        }
    }
}

impl Asset for TextStyle {
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

asset_identity!(TextStyle);
