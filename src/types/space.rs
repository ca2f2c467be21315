//! Spacing and corner-radius tokens.

use serde::{Deserialize, Serialize};

use super::{asset_identity, Asset, Platform};

/// Which `Rounded/*` category of the spacing tokens is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundedTheme {
    #[default]
    Smooth,
    Rounded,
    None,
}

/// A numeric layout constant (points on iOS, dp on Android).
#[derive(Debug, Clone)]
pub struct SpaceToken {
    pub name: String,
    pub platform: Option<Platform>,
    pub value: f64,
    /// Output grouping, e.g. `space` or `rounded`.
    pub group: String,
}

impl SpaceToken {
    pub fn new(name: impl Into<String>, group: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            platform: None,
            value,
            group: group.into(),
        }
    }
}

impl Asset for SpaceToken {
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

asset_identity!(SpaceToken);
