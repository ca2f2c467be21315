//! Core domain types for tokex.
//!
//! Every exportable entity implements [`Asset`]: it has a name (its identity
//! within one collection) and an optional platform restriction.
//! - `Color` - RGBA colour values in `[0, 1]`
//! - `Image` / `ImagePack` - icons and illustrations, optionally per scale
//! - `TextStyle` - typography metrics
//! - `SpaceToken` - spacing and corner-radius constants

mod colour;
mod image;
mod space;
mod text_style;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokexError};

pub use colour::Color;
pub use image::{Image, ImagePack, ImageSource, Scale, ScaledImages};
pub use space::{RoundedTheme, SpaceToken};
pub use text_style::{FontWeight, TextStyle};

/// The consuming codebase an asset is exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Raw value used in design-tool descriptions and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = TokexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(TokexError::Parse {
                message: format!("Unknown platform: {}", other),
                help: Some("Use 'ios' or 'android'".to_string()),
            }),
        }
    }
}

/// An exportable design entity.
///
/// Identity is the name alone: two assets with the same name are the same
/// asset as far as de-duplication and pairing are concerned.
pub trait Asset: Clone {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    /// `None` means the asset applies to every platform.
    fn platform(&self) -> Option<Platform>;

    /// Whether the asset should be exported for `platform`.
    fn is_exported_to(&self, platform: Platform) -> bool {
        self.platform().map_or(true, |p| p == platform)
    }
}

/// One logical asset in both variants (light/dark, default/white-label).
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPair<T> {
    pub base: T,
    pub target: Option<T>,
}

impl<T> AssetPair<T> {
    pub fn single(base: T) -> Self {
        Self { base, target: None }
    }

    pub fn new(base: T, target: T) -> Self {
        Self {
            base,
            target: Some(target),
        }
    }
}

/// Implements name-based equality and hashing for an asset type.
macro_rules! asset_identity {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::types::Asset::name(self) == $crate::types::Asset::name(other)
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::types::Asset::name(self).hash(state);
            }
        }
    };
}

pub(crate) use asset_identity;
