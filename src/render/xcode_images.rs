//! Xcode image output: `.imageset` catalogs and a `UIImage` accessor file.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Result, TokexError};
use crate::types::{Asset, AssetPair, Image, ImagePack, Scale};

use super::{number, slash_banner, FileContents};

/// Where and how one image category is written.
#[derive(Debug, Clone)]
pub struct XcodeImagesOutput {
    /// The catalog folder holding the `.imageset` directories.
    pub assets_folder: PathBuf,
    /// The Swift accessor file.
    pub swift_file: PathBuf,
    /// Render as template images and keep vector data (icons).
    pub template: bool,
}

/// Render an imageset per pair plus the accessor file.
pub fn render_xcode_images(
    pairs: &[AssetPair<ImagePack>],
    output: &XcodeImagesOutput,
) -> Result<Vec<FileContents>> {
    let mut files = vec![FileContents::text(
        output.assets_folder.join("Contents.json"),
        to_json(&ImagesetContents::folder())?,
    )];

    for pair in pairs {
        let name = pair.base.name();
        let dir = output.assets_folder.join(format!("{}.imageset", name));
        let mut entries = Vec::new();

        let variants = std::iter::once((&pair.base, false))
            .chain(pair.target.as_ref().map(|target| (target, true)));
        for (pack, dark) in variants {
            for (scale, image) in renditions(pack) {
                let filename = rendition_filename(name, image, scale, dark);
                files.push(FileContents::image(dir.join(&filename), image)?);
                entries.push(ImageEntry::new(filename, scale, dark));
            }
        }

        let contents = ImagesetContents {
            images: entries,
            properties: output.template.then_some(Properties {
                preserves_vector_representation: true,
                template_rendering_intent: "template",
            }),
            ..ImagesetContents::folder()
        };
        files.push(FileContents::text(dir.join("Contents.json"), to_json(&contents)?));
    }

    files.push(FileContents::text(
        output.swift_file.clone(),
        accessor_extension(pairs),
    ));

    tracing::debug!(images = pairs.len(), files = files.len(), "rendered xcode images");
    Ok(files)
}

/// Renditions of a pack; a single image has no scale.
fn renditions(pack: &ImagePack) -> Vec<(Option<Scale>, &Image)> {
    match pack {
        ImagePack::Single(image) => vec![(None, image)],
        ImagePack::IndividualScales(scaled) => {
            scaled.iter().map(|(scale, image)| (Some(scale), image)).collect()
        }
    }
}

/// `logo.pdf`, `logo@2x.png`, `logo_dark@3x.png`.
fn rendition_filename(name: &str, image: &Image, scale: Option<Scale>, dark: bool) -> String {
    let mut filename = name.to_string();
    if dark {
        filename.push_str("_dark");
    }
    if let Some(scale) = scale {
        let _ = write!(filename, "@{}x", number(scale.value()));
    }
    let _ = write!(filename, ".{}", image.format);
    filename
}

fn accessor_extension(pairs: &[AssetPair<ImagePack>]) -> String {
    let mut out = slash_banner();
    out.push_str("import UIKit\n\npublic extension UIImage {\n");
    for pair in pairs {
        let _ = writeln!(
            out,
            "    static var {}: UIImage {{ UIImage(named: #function)! }}",
            pair.base.name()
        );
    }
    out.push_str("}\n");
    out
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| TokexError::Export {
            message: format!("Failed to encode asset catalog: {}", e),
            help: None,
        })
}

#[derive(Serialize)]
struct ImagesetContents {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<ImageEntry>,
    info: Info,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Properties>,
}

impl ImagesetContents {
    fn folder() -> Self {
        Self {
            images: Vec::new(),
            info: Info {
                author: "xcode",
                version: 1,
            },
            properties: None,
        }
    }
}

#[derive(Serialize)]
struct Info {
    author: &'static str,
    version: u32,
}

#[derive(Serialize)]
struct Properties {
    #[serde(rename = "preserves-vector-representation")]
    preserves_vector_representation: bool,
    #[serde(rename = "template-rendering-intent")]
    template_rendering_intent: &'static str,
}

#[derive(Serialize)]
struct ImageEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    appearances: Option<Vec<Appearance>>,
    filename: String,
    idiom: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scale: Option<String>,
}

#[derive(Serialize)]
struct Appearance {
    appearance: &'static str,
    value: &'static str,
}

impl ImageEntry {
    fn new(filename: String, scale: Option<Scale>, dark: bool) -> Self {
        Self {
            appearances: dark.then(|| {
                vec![Appearance {
                    appearance: "luminosity",
                    value: "dark",
                }]
            }),
            filename,
            idiom: "universal",
            scale: scale.map(|s| format!("{}x", number(s.value()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FileSource;
    use crate::types::{ImageSource, ScaledImages};
    use std::path::Path;

    fn scaled(name: &str, dir: &str) -> ImagePack {
        let mut scaled = ScaledImages::new(name, None);
        for scale in [1.0, 2.0, 3.0] {
            let file = format!("{}/{}@{}x.png", dir, name, scale);
            scaled.insert(
                Scale::new(scale).unwrap(),
                Image::new(name, "png", ImageSource::Path(PathBuf::from(file))),
            );
        }
        ImagePack::IndividualScales(scaled)
    }

    fn output(template: bool) -> XcodeImagesOutput {
        XcodeImagesOutput {
            assets_folder: PathBuf::from("out/Images"),
            swift_file: PathBuf::from("out/UIImage+Images.swift"),
            template,
        }
    }

    #[test]
    fn test_scaled_pair() {
        let pairs = vec![AssetPair::new(scaled("hero", "light"), scaled("hero", "dark"))];
        let files = render_xcode_images(&pairs, &output(false)).unwrap();

        // folder contents + 6 renditions + imageset contents + swift
        assert_eq!(files.len(), 9);
        assert_eq!(files[1].destination, Path::new("out/Images/hero.imageset/hero@1x.png"));
        assert_eq!(
            files[1].source,
            FileSource::Copy(PathBuf::from("light/hero@1x.png"))
        );
        assert_eq!(
            files[4].destination,
            Path::new("out/Images/hero.imageset/hero_dark@1x.png")
        );

        let contents: serde_json::Value =
            serde_json::from_str(files[7].as_text().unwrap()).unwrap();
        let images = contents["images"].as_array().unwrap();
        assert_eq!(images.len(), 6);
        assert_eq!(images[1]["scale"], "2x");
        assert_eq!(images[1]["filename"], "hero@2x.png");
        assert_eq!(images[4]["appearances"][0]["value"], "dark");
        assert!(contents.get("properties").is_none());

        let swift = files[8].as_text().unwrap();
        assert!(swift.contains("static var hero: UIImage { UIImage(named: #function)! }"));
    }

    #[test]
    fn test_template_icon() {
        let icon = Image::new("icClose", "svg", ImageSource::Inline(b"<svg/>".to_vec()));
        let pairs = vec![AssetPair::single(ImagePack::Single(icon))];
        let files = render_xcode_images(&pairs, &output(true)).unwrap();

        assert_eq!(files[1].destination, Path::new("out/Images/icClose.imageset/icClose.svg"));
        assert_eq!(files[1].source, FileSource::Data(b"<svg/>".to_vec()));

        let contents: serde_json::Value =
            serde_json::from_str(files[2].as_text().unwrap()).unwrap();
        assert!(contents["images"][0].get("scale").is_none());
        assert_eq!(contents["properties"]["template-rendering-intent"], "template");
        assert_eq!(contents["properties"]["preserves-vector-representation"], true);
    }
}
