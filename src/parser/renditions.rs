//! Rendition directory scanner.
//!
//! Walks an image directory and groups raster files by scale suffix:
//! `hero/banner.png`, `hero/banner@2x.png` and `hero/banner@3x.png` become
//! one pack named `hero/banner`. Vector files are single packs.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, TokexError};
use crate::processor::{ScaleBucket, ScaleCollision};
use crate::types::{Image, ImagePack, ImageSource, Scale};

/// Extensions picked up when the caller does not restrict them.
pub const DEFAULT_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "pdf", "svg"];

/// Formats exported as one scale-independent rendition.
const VECTOR_FORMATS: &[&str] = &["pdf", "svg", "xml"];

/// Result of scanning a rendition directory.
#[derive(Debug, Default)]
pub struct RenditionScan {
    pub packs: Vec<ImagePack>,
    pub collisions: Vec<ScaleCollision>,
}

impl RenditionScan {
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

/// Scan `root` for image renditions with one of `formats`.
///
/// Pack names are the path relative to `root` without extension or scale
/// suffix, using `/` as separator.
pub fn scan_renditions(root: &Path, formats: &[&str]) -> Result<RenditionScan> {
    if !root.is_dir() {
        return Err(TokexError::Io {
            path: root.to_path_buf(),
            message: "image directory not found".to_string(),
        });
    }

    let mut bucket = ScaleBucket::new();
    let mut singles = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let Some(format) = detect_format(path, formats) else {
            continue;
        };
        let Some(relative) = path.strip_prefix(root).ok().and_then(relative_stem) else {
            continue;
        };

        let (name, scale) = split_scale(&relative);
        let image = Image::new(name, format.clone(), ImageSource::Path(path.to_path_buf()));

        if VECTOR_FORMATS.contains(&format.as_str()) {
            singles.push(ImagePack::Single(image));
        } else {
            bucket.add(name, None, scale, image);
        }
    }

    let (mut packs, collisions) = bucket.finish();
    packs.extend(singles);

    tracing::debug!(
        root = %root.display(),
        packs = packs.len(),
        collisions = collisions.len(),
        "scanned renditions"
    );
    Ok(RenditionScan { packs, collisions })
}

/// Lowercased extension of `path` when it is one of `formats`.
fn detect_format(path: &Path, formats: &[&str]) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    formats
        .iter()
        .any(|f| f.eq_ignore_ascii_case(&ext))
        .then_some(ext)
}

/// `hero/banner@2x.png` -> `hero/banner@2x`.
fn relative_stem(relative: &Path) -> Option<String> {
    let stem = relative.file_stem()?.to_str()?;
    let parts: Vec<&str> = relative
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .filter_map(|c| c.as_os_str().to_str())
        .chain(std::iter::once(stem))
        .collect();
    Some(parts.join("/"))
}

/// Split a trailing `@<n>x` scale suffix. No suffix, or one that is not a
/// positive number, means 1x and stays part of the name.
pub fn split_scale(stem: &str) -> (&str, Scale) {
    if let Some((name, suffix)) = stem.rsplit_once('@') {
        let scale = suffix
            .strip_suffix('x')
            .and_then(|n| n.parse::<f64>().ok())
            .and_then(Scale::new);
        if let Some(scale) = scale {
            return (name, scale);
        }
    }
    (stem, Scale::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Asset;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_split_scale() {
        assert_eq!(split_scale("logo"), ("logo", Scale::ONE));
        assert_eq!(split_scale("logo@2x"), ("logo", Scale::new(2.0).unwrap()));
        assert_eq!(split_scale("logo@1.5x"), ("logo", Scale::new(1.5).unwrap()));
        assert_eq!(split_scale("user@home"), ("user@home", Scale::ONE));
        assert_eq!(split_scale("logo@0x"), ("logo@0x", Scale::ONE));
    }

    #[test]
    fn test_scan_groups_by_scale() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("hero")).unwrap();
        fs::write(dir.path().join("hero/banner.png"), b"1x").unwrap();
        fs::write(dir.path().join("hero/banner@2x.png"), b"2x").unwrap();
        fs::write(dir.path().join("hero/banner@3x.png"), b"3x").unwrap();
        fs::write(dir.path().join("logo.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("notes.txt"), b"skip").unwrap();

        let scan = scan_renditions(dir.path(), DEFAULT_FORMATS).unwrap();

        let names: Vec<&str> = scan.packs.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["hero/banner", "logo"]);
        assert!(scan.collisions.is_empty());

        match &scan.packs[0] {
            ImagePack::IndividualScales(scaled) => {
                let scales: Vec<f64> = scaled.scales().map(Scale::value).collect();
                assert_eq!(scales, vec![1.0, 2.0, 3.0]);
            }
            ImagePack::Single(_) => panic!("expected scaled pack"),
        }
        assert_eq!(scan.packs[1].single().map(|i| i.format.as_str()), Some("pdf"));
    }

    #[test]
    fn test_scan_reports_collisions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("icon@2x.png"), b"a").unwrap();
        fs::write(dir.path().join("icon@2x.webp"), b"b").unwrap();

        let scan = scan_renditions(dir.path(), DEFAULT_FORMATS).unwrap();
        assert_eq!(scan.packs.len(), 1);
        assert_eq!(scan.collisions.len(), 1);
        assert_eq!(scan.collisions[0].name, "icon");
    }

    #[test]
    fn test_scan_respects_formats() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.PNG"), b"a").unwrap();
        fs::write(dir.path().join("b.jpg"), b"b").unwrap();

        let scan = scan_renditions(dir.path(), &["png"]).unwrap();
        let names: Vec<&str> = scan.packs.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["a"]);
    }

    #[test]
    fn test_scan_missing_directory() {
        assert!(scan_renditions(Path::new("/nonexistent/images"), DEFAULT_FORMATS).is_err());
    }
}
