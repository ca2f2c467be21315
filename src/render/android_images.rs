//! Android drawable output.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{Asset, AssetPair, ImagePack, Scale};

use super::FileContents;

/// Density qualifier for a scale: 1x is `mdpi`, 4x is `xxxhdpi`.
pub fn android_density(scale: Scale) -> Option<&'static str> {
    match scale.value() {
        v if v == 1.0 => Some("mdpi"),
        v if v == 1.5 => Some("hdpi"),
        v if v == 2.0 => Some("xhdpi"),
        v if v == 3.0 => Some("xxhdpi"),
        v if v == 4.0 => Some("xxxhdpi"),
        _ => None,
    }
}

fn drawable_dir(res: &Path, dark: bool, density: Option<&str>) -> PathBuf {
    let mut dir = String::from("drawable");
    if dark {
        dir.push_str("-night");
    }
    if let Some(density) = density {
        dir.push('-');
        dir.push_str(density);
    }
    res.join(dir)
}

/// Place every rendition into its `drawable[-night][-<density>]` folder.
///
/// Renditions at scales without a density qualifier are skipped.
pub fn render_android_images(pairs: &[AssetPair<ImagePack>], res: &Path) -> Result<Vec<FileContents>> {
    let mut files = Vec::new();

    for pair in pairs {
        let variants = std::iter::once((&pair.base, false))
            .chain(pair.target.as_ref().map(|target| (target, true)));

        for (pack, dark) in variants {
            match pack {
                ImagePack::Single(image) => {
                    let file = format!("{}.{}", pack.name(), image.format);
                    files.push(FileContents::image(drawable_dir(res, dark, None).join(file), image)?);
                }
                ImagePack::IndividualScales(scaled) => {
                    for (scale, image) in scaled.iter() {
                        let Some(density) = android_density(scale) else {
                            tracing::warn!(name = pack.name(), %scale, "no android density for scale");
                            continue;
                        };
                        let file = format!("{}.{}", pack.name(), image.format);
                        files.push(FileContents::image(
                            drawable_dir(res, dark, Some(density)).join(file),
                            image,
                        )?);
                    }
                }
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Image, ImageSource, ScaledImages};

    fn png(name: &str) -> Image {
        Image::new(name, "png", ImageSource::Path(PathBuf::from(format!("{}.png", name))))
    }

    #[test]
    fn test_density() {
        assert_eq!(android_density(Scale::ONE), Some("mdpi"));
        assert_eq!(android_density(Scale::new(1.5).unwrap()), Some("hdpi"));
        assert_eq!(android_density(Scale::new(4.0).unwrap()), Some("xxxhdpi"));
        assert_eq!(android_density(Scale::new(2.5).unwrap()), None);
    }

    #[test]
    fn test_scaled_and_night() {
        let mut light = ScaledImages::new("hero_banner", None);
        light.insert(Scale::ONE, png("a"));
        light.insert(Scale::new(3.0).unwrap(), png("b"));
        light.insert(Scale::new(2.5).unwrap(), png("skipped"));
        let mut dark = ScaledImages::new("hero_banner", None);
        dark.insert(Scale::new(2.0).unwrap(), png("c"));

        let pairs = vec![AssetPair::new(
            ImagePack::IndividualScales(light),
            ImagePack::IndividualScales(dark),
        )];
        let files = render_android_images(&pairs, Path::new("res")).unwrap();

        let destinations: Vec<_> = files.iter().map(|f| f.destination.clone()).collect();
        assert_eq!(
            destinations,
            vec![
                PathBuf::from("res/drawable-mdpi/hero_banner.png"),
                PathBuf::from("res/drawable-xxhdpi/hero_banner.png"),
                PathBuf::from("res/drawable-night-xhdpi/hero_banner.png"),
            ]
        );
    }

    #[test]
    fn test_single_goes_to_drawable() {
        let icon = Image::new("ic_close", "svg", ImageSource::Inline(b"<svg/>".to_vec()));
        let pairs = vec![AssetPair::single(ImagePack::Single(icon))];
        let files = render_android_images(&pairs, Path::new("res")).unwrap();
        assert_eq!(files[0].destination, PathBuf::from("res/drawable/ic_close.svg"));
    }
}
