//! Grouping of per-scale renditions into image packs.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Image, ImagePack, ImageSource, Platform, Scale, ScaledImages};

/// Two renditions of one image were observed at the same scale.
///
/// The later rendition is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleCollision {
    pub name: String,
    pub scale: Scale,
    /// Source of the discarded rendition.
    pub replaced: String,
}

impl fmt::Display for ScaleCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has more than one {} rendition, {} was replaced",
            self.name, self.scale, self.replaced
        )
    }
}

/// Collects `(scale, image)` observations and yields one pack per name.
#[derive(Debug, Default)]
pub struct ScaleBucket {
    packs: BTreeMap<String, ScaledImages>,
    collisions: Vec<ScaleCollision>,
}

impl ScaleBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rendition of `name`.
    pub fn add(&mut self, name: &str, platform: Option<Platform>, scale: Scale, image: Image) {
        let pack = self
            .packs
            .entry(name.to_string())
            .or_insert_with(|| ScaledImages::new(name, platform));

        if let Some(previous) = pack.insert(scale, image) {
            let replaced = describe_source(&previous);
            tracing::warn!(name, %scale, replaced = %replaced, "scale collision");
            self.collisions.push(ScaleCollision {
                name: name.to_string(),
                scale,
                replaced,
            });
        }
    }

    /// Overwrites observed so far.
    pub fn collisions(&self) -> &[ScaleCollision] {
        &self.collisions
    }

    /// Finish, returning packs in name order and every collision.
    pub fn finish(self) -> (Vec<ImagePack>, Vec<ScaleCollision>) {
        let packs = self
            .packs
            .into_values()
            .map(ImagePack::IndividualScales)
            .collect();
        (packs, self.collisions)
    }
}

fn describe_source(image: &Image) -> String {
    match &image.source {
        ImageSource::Path(path) => path.display().to_string(),
        ImageSource::Url(url) => url.clone(),
        ImageSource::Inline(bytes) => format!("<{} inline bytes>", bytes.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Asset;
    use std::path::PathBuf;

    fn png(file: &str) -> Image {
        Image::new("", "png", ImageSource::Path(PathBuf::from(file)))
    }

    fn scale(value: f64) -> Scale {
        Scale::new(value).unwrap()
    }

    #[test]
    fn test_groups_by_name() {
        let mut bucket = ScaleBucket::new();
        bucket.add("logo", None, scale(1.0), png("logo.png"));
        bucket.add("logo", None, scale(2.0), png("logo@2x.png"));
        bucket.add("hero", None, scale(3.0), png("hero@3x.png"));

        let (packs, collisions) = bucket.finish();
        assert!(collisions.is_empty());
        assert_eq!(packs.len(), 2);
        assert_eq!(packs[0].name(), "hero");
        assert_eq!(packs[1].name(), "logo");

        match &packs[1] {
            ImagePack::IndividualScales(scaled) => {
                assert_eq!(scaled.len(), 2);
                assert!(scaled.iter().all(|(_, image)| image.name == "logo"));
            }
            ImagePack::Single(_) => panic!("expected scaled pack"),
        }
    }

    #[test]
    fn test_collision_is_last_write_wins_and_reported() {
        let mut bucket = ScaleBucket::new();
        bucket.add("logo", None, scale(2.0), png("a/logo@2x.png"));
        bucket.add("logo", None, scale(2.0), png("b/logo@2x.png"));

        assert_eq!(bucket.collisions().len(), 1);
        let (packs, collisions) = bucket.finish();

        assert_eq!(collisions[0].name, "logo");
        assert_eq!(collisions[0].scale, scale(2.0));
        assert_eq!(collisions[0].replaced, "a/logo@2x.png");

        match &packs[0] {
            ImagePack::IndividualScales(scaled) => {
                let kept = scaled.get(scale(2.0)).map(|i| i.source.clone());
                assert_eq!(kept, Some(ImageSource::Path(PathBuf::from("b/logo@2x.png"))));
            }
            ImagePack::Single(_) => panic!("expected scaled pack"),
        }
    }

    #[test]
    fn test_platform_is_kept() {
        let mut bucket = ScaleBucket::new();
        bucket.add("x", Some(Platform::Ios), scale(1.0), png("x.png"));
        let (packs, _) = bucket.finish();
        assert_eq!(packs[0].platform(), Some(Platform::Ios));
    }
}
