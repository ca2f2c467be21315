//! Asset normalization and pairing.
//!
//! An [`AssetsProcessor`] turns raw decoded assets into a validated,
//! de-duplicated, sorted and renamed list. Every failure of a pass is
//! collected into one [`ErrorGroup`]; a pass never returns partial results.
//!
//! Single-collection mode ([`AssetsProcessor::process`]) checks names and
//! duplicates. Dual-collection mode ([`AssetsProcessor::process_pair`]) also
//! checks that the base and target collections describe the same assets,
//! then pairs them by name.

mod error;
pub mod names;
mod scale;
mod set;

use regex::Regex;

use crate::config::NameRules;
use crate::error::{Result, TokexError};
use crate::types::{Asset, AssetPair, Platform};

pub use error::{AssetsValidatorError, ErrorGroup};
pub use names::NameStyle;
pub use scale::{ScaleBucket, ScaleCollision};
pub use set::{build_set, AssetSet};

/// Outcome of one processing pass.
pub type ProcessResult<T> = std::result::Result<T, ErrorGroup>;

/// Validates and renames assets for one platform.
#[derive(Debug, Clone)]
pub struct AssetsProcessor {
    platform: Platform,
    name_validate: Option<Regex>,
    name_replace: Option<String>,
    name_style: Option<NameStyle>,
}

impl AssetsProcessor {
    /// A processor with no name rules: every name is valid and kept as is.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            name_validate: None,
            name_replace: None,
            name_style: None,
        }
    }

    /// Build a processor from configured name rules.
    pub fn from_rules(
        platform: Platform,
        rules: &NameRules,
        style: Option<NameStyle>,
    ) -> Result<Self> {
        Ok(Self::new(platform)
            .with_validation(rules.name_validate_regexp.as_deref())?
            .with_replace(rules.name_replace_regexp.as_deref())
            .with_style(style))
    }

    /// Set the name validation pattern. An invalid pattern is a config error.
    pub fn with_validation(mut self, pattern: Option<&str>) -> Result<Self> {
        self.name_validate = match pattern {
            Some(pattern) => Some(Regex::new(pattern).map_err(|e| TokexError::Config {
                message: format!("Invalid name_validate_regexp '{}': {}", pattern, e),
                help: Some("The pattern must be a valid regular expression".to_string()),
            })?),
            None => None,
        };
        Ok(self)
    }

    /// Set the replacement template applied to names matching the
    /// validation pattern. `$1`..`$9` refer to capture groups.
    pub fn with_replace(mut self, template: Option<&str>) -> Self {
        self.name_replace = template.map(str::to_string);
        self
    }

    pub fn with_style(mut self, style: Option<NameStyle>) -> Self {
        self.name_style = style;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Single-collection mode.
    pub fn process<T: Asset>(&self, assets: Vec<T>) -> ProcessResult<Vec<AssetPair<T>>> {
        let assets = self.process_assets(assets)?;
        Ok(assets.into_iter().map(AssetPair::single).collect())
    }

    /// Single-collection mode returning bare assets.
    pub fn process_assets<T: Asset>(&self, assets: Vec<T>) -> ProcessResult<Vec<T>> {
        let assets = canonicalize_names(assets);
        let mut errors = ErrorGroup::new();

        self.check_names(&assets, &mut errors);
        let set = build_set(assets, &mut errors);

        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "single collection rejected");
            return Err(errors);
        }

        let assets: Vec<T> = set
            .into_sorted()
            .into_iter()
            .filter(|asset| asset.is_exported_to(self.platform))
            .map(|mut asset| {
                let name = self.rename(asset.name());
                asset.set_name(name);
                asset
            })
            .collect();

        tracing::debug!(count = assets.len(), platform = %self.platform, "processed assets");
        Ok(assets)
    }

    /// Dual-collection mode: base (light / default) against target (dark /
    /// white-label).
    pub fn process_pair<T: Asset>(
        &self,
        base: Vec<T>,
        target: Vec<T>,
    ) -> ProcessResult<Vec<AssetPair<T>>> {
        let base = canonicalize_names(base);
        let target = canonicalize_names(target);
        let mut errors = ErrorGroup::new();

        if base.len() != target.len() {
            errors.push(AssetsValidatorError::CountMismatch {
                light: base.len(),
                dark: target.len(),
            });
        }

        self.check_names(&base, &mut errors);
        let base_set = build_set(base, &mut errors);
        let mut target_set = build_set(target, &mut errors);

        let missing_in_target = base_set.difference(&target_set);
        if !missing_in_target.is_empty() {
            errors.push(AssetsValidatorError::LightAssetsNotFoundInDarkPalette {
                assets: missing_in_target,
            });
        }

        let missing_in_base = target_set.difference(&base_set);
        if !missing_in_base.is_empty() {
            errors.push(AssetsValidatorError::DarkAssetsNotFoundInLightPalette {
                assets: missing_in_base,
            });
        }

        let base = base_set.into_sorted();

        for asset in &base {
            let Some(platform) = asset.platform() else {
                continue;
            };
            let target_platform = target_set.get(asset.name()).and_then(Asset::platform);
            if target_platform != Some(platform) {
                errors.push(AssetsValidatorError::DescriptionMismatch {
                    asset_name: asset.name().to_string(),
                    light: platform.to_string(),
                    dark: target_platform.map(|p| p.to_string()).unwrap_or_default(),
                });
            }
        }

        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "paired collections rejected");
            return Err(errors);
        }

        let pairs: Vec<AssetPair<T>> = base
            .into_iter()
            .map(|base| {
                let target = target_set.remove(base.name());
                (base, target)
            })
            .filter(|(base, target)| {
                base.is_exported_to(self.platform)
                    && target
                        .as_ref()
                        .map_or(true, |t| t.is_exported_to(self.platform))
            })
            .map(|(mut base, target)| {
                let name = self.rename(base.name());
                let target = target.map(|mut t| {
                    t.set_name(name.clone());
                    t
                });
                base.set_name(name);
                AssetPair { base, target }
            })
            .collect();

        tracing::debug!(count = pairs.len(), platform = %self.platform, "paired assets");
        Ok(pairs)
    }

    /// Dual-collection mode when a target collection was supplied, single
    /// mode otherwise.
    pub fn process_optional<T: Asset>(
        &self,
        base: Vec<T>,
        target: Option<Vec<T>>,
    ) -> ProcessResult<Vec<AssetPair<T>>> {
        match target {
            Some(target) => self.process_pair(base, target),
            None => self.process(base),
        }
    }

    fn check_names<T: Asset>(&self, assets: &[T], errors: &mut ErrorGroup) {
        for asset in assets {
            if !names::is_name_valid(asset.name(), self.name_validate.as_ref()) {
                errors.push(AssetsValidatorError::BadName {
                    name: asset.name().to_string(),
                });
            }
        }
    }

    fn rename(&self, name: &str) -> String {
        let mut name = match (&self.name_validate, &self.name_replace) {
            (Some(pattern), Some(template)) => names::replace(name, pattern, template),
            _ => name.to_string(),
        };
        if let Some(style) = self.name_style {
            name = names::normalize_name(&name, style);
        }
        name
    }
}

fn canonicalize_names<T: Asset>(assets: Vec<T>) -> Vec<T> {
    assets
        .into_iter()
        .map(|mut asset| {
            let name = names::canonicalize(asset.name());
            asset.set_name(name);
            asset
        })
        .collect()
}
