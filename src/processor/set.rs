//! Name-keyed asset sets used for duplicate and membership checks.

use std::collections::HashMap;

use crate::types::Asset;

use super::error::{AssetsValidatorError, ErrorGroup};

/// Assets keyed by name. The first asset inserted under a name wins.
#[derive(Debug, Clone)]
pub struct AssetSet<T> {
    assets: HashMap<String, T>,
}

impl<T: Asset> AssetSet<T> {
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
        }
    }

    /// Insert an asset, returning false if one with the same name exists.
    pub fn insert(&mut self, asset: T) -> bool {
        if self.assets.contains_key(asset.name()) {
            return false;
        }
        self.assets.insert(asset.name().to_string(), asset);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.assets.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.assets.remove(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Names present here but not in `other`, sorted.
    pub fn difference(&self, other: &AssetSet<T>) -> Vec<String> {
        let mut names: Vec<String> = self
            .assets
            .keys()
            .filter(|name| !other.contains(name))
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Consume the set, returning assets sorted byte-wise by name.
    pub fn into_sorted(self) -> Vec<T> {
        let mut assets: Vec<T> = self.assets.into_values().collect();
        assets.sort_by(|a, b| a.name().cmp(b.name()));
        assets
    }
}

impl<T: Asset> Default for AssetSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a set from `assets`, recording one `FoundDuplicate` per repeated
/// insertion into `errors`.
pub fn build_set<T: Asset>(assets: Vec<T>, errors: &mut ErrorGroup) -> AssetSet<T> {
    let mut set = AssetSet::new();
    for asset in assets {
        let name = asset.name().to_string();
        if !set.insert(asset) {
            errors.push(AssetsValidatorError::FoundDuplicate { asset_name: name });
        }
    }
    set
}
