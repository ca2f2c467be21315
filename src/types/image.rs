//! Image assets: single renditions and per-scale packs.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use super::{asset_identity, Asset, Platform};

/// A resolution multiplier (1x, 1.5x, 2x ...). Always positive and finite.
#[derive(Debug, Clone, Copy)]
pub struct Scale(f64);

impl Scale {
    pub const ONE: Scale = Scale(1.0);

    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scale {}

impl PartialOrd for Scale {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scale {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Scale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// Where the bytes of an image come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// A file on disk, copied as-is by the writer.
    Path(PathBuf),
    /// A remote location. Downloading is left to the caller.
    Url(String),
    /// Content decoded inline (e.g. SVG markup from an icon payload).
    Inline(Vec<u8>),
}

/// One image rendition.
#[derive(Debug, Clone)]
pub struct Image {
    pub name: String,
    pub platform: Option<Platform>,
    /// File format / extension: `png`, `svg`, `pdf`, `webp` ...
    pub format: String,
    pub source: ImageSource,
}

impl Image {
    pub fn new(name: impl Into<String>, format: impl Into<String>, source: ImageSource) -> Self {
        Self {
            name: name.into(),
            platform: None,
            format: format.into(),
            source,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

impl Asset for Image {
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

asset_identity!(Image);

/// Renditions of one logical image keyed by scale.
#[derive(Debug, Clone)]
pub struct ScaledImages {
    name: String,
    platform: Option<Platform>,
    images: BTreeMap<Scale, Image>,
}

impl ScaledImages {
    pub fn new(name: impl Into<String>, platform: Option<Platform>) -> Self {
        Self {
            name: name.into(),
            platform,
            images: BTreeMap::new(),
        }
    }

    /// Store a rendition, returning the one it replaced.
    pub fn insert(&mut self, scale: Scale, mut image: Image) -> Option<Image> {
        image.name = self.name.clone();
        self.images.insert(scale, image)
    }

    pub fn get(&self, scale: Scale) -> Option<&Image> {
        self.images.get(&scale)
    }

    /// Renditions in ascending scale order.
    pub fn iter(&self) -> impl Iterator<Item = (Scale, &Image)> {
        self.images.iter().map(|(scale, image)| (*scale, image))
    }

    pub fn scales(&self) -> impl Iterator<Item = Scale> + '_ {
        self.images.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// An image asset: one canonical rendition or a set of per-scale renditions.
#[derive(Debug, Clone)]
pub enum ImagePack {
    Single(Image),
    IndividualScales(ScaledImages),
}

impl ImagePack {
    /// The canonical image, if this pack is not split by scale.
    pub fn single(&self) -> Option<&Image> {
        match self {
            ImagePack::Single(image) => Some(image),
            ImagePack::IndividualScales(_) => None,
        }
    }
}

impl Asset for ImagePack {
    fn name(&self) -> &str {
        match self {
            ImagePack::Single(image) => &image.name,
            ImagePack::IndividualScales(scaled) => &scaled.name,
        }
    }

    fn set_name(&mut self, name: String) {
        match self {
            ImagePack::Single(image) => image.name = name,
            ImagePack::IndividualScales(scaled) => {
                for image in scaled.images.values_mut() {
                    image.name = name.clone();
                }
                scaled.name = name;
            }
        }
    }

    fn platform(&self) -> Option<Platform> {
        match self {
            ImagePack::Single(image) => image.platform,
            ImagePack::IndividualScales(scaled) => scaled.platform,
        }
    }
}

asset_identity!(ImagePack);
