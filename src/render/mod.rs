//! Rendering of processed assets into platform source files.
//!
//! Every renderer turns processed pairs into a list of [`FileContents`]
//! without touching the filesystem; [`write_files`] performs the writes.

mod android_colors;
mod android_images;
mod spacing;
mod typography;
mod xcode_colors;
mod xcode_images;

use std::fs;
use std::path::PathBuf;

use crate::error::{Result, TokexError};
use crate::types::{Image, ImageSource};

pub use android_colors::{render_android_colors, render_compose_colors};
pub use android_images::{android_density, render_android_images};
pub use spacing::{render_android_dimens, render_swift_spacing};
pub use typography::render_swift_typography;
pub use xcode_colors::render_xcode_colors;
pub use xcode_images::{render_xcode_images, XcodeImagesOutput};

/// First line(s) of every generated source file.
pub const GENERATED_BANNER: &str = "THIS FILE IS GENERATED BY TOKEX. DO NOT EDIT.";

/// Where the bytes of an output file come from.
#[derive(Debug, Clone, PartialEq)]
pub enum FileSource {
    Data(Vec<u8>),
    /// Copy an existing file.
    Copy(PathBuf),
}

/// One file to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct FileContents {
    pub destination: PathBuf,
    pub source: FileSource,
}

impl FileContents {
    pub fn text(destination: impl Into<PathBuf>, text: String) -> Self {
        Self {
            destination: destination.into(),
            source: FileSource::Data(text.into_bytes()),
        }
    }

    /// The payload of `image`, placed at `destination`.
    pub fn image(destination: impl Into<PathBuf>, image: &Image) -> Result<Self> {
        let source = match &image.source {
            ImageSource::Path(path) => FileSource::Copy(path.clone()),
            ImageSource::Inline(bytes) => FileSource::Data(bytes.clone()),
            ImageSource::Url(url) => {
                return Err(TokexError::Export {
                    message: format!("{} refers to remote file {}", image.name, url),
                    help: Some("Download remote renditions before exporting".to_string()),
                })
            }
        };
        Ok(Self {
            destination: destination.into(),
            source,
        })
    }

    /// Generated text, if this file is not a copy.
    pub fn as_text(&self) -> Option<&str> {
        match &self.source {
            FileSource::Data(bytes) => std::str::from_utf8(bytes).ok(),
            FileSource::Copy(_) => None,
        }
    }
}

/// Write every file, creating parent directories. Returns the count written.
pub fn write_files(files: &[FileContents]) -> Result<usize> {
    for file in files {
        if let Some(parent) = file.destination.parent() {
            fs::create_dir_all(parent).map_err(|e| TokexError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create directory: {}", e),
            })?;
        }

        match &file.source {
            FileSource::Data(bytes) => fs::write(&file.destination, bytes).map_err(|e| {
                TokexError::Io {
                    path: file.destination.clone(),
                    message: format!("Failed to write file: {}", e),
                }
            })?,
            FileSource::Copy(from) => {
                fs::copy(from, &file.destination).map_err(|e| TokexError::Io {
                    path: from.clone(),
                    message: format!("Failed to copy to {}: {}", file.destination.display(), e),
                })?;
            }
        }
        tracing::debug!(path = %file.destination.display(), "wrote file");
    }

    Ok(files.len())
}

/// Banner as `//` comment lines, for Swift and Kotlin.
pub(crate) fn slash_banner() -> String {
    format!("//\n// {}\n//\n\n", GENERATED_BANNER)
}

/// Banner as an XML comment following the declaration.
pub(crate) fn xml_header() -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!-- {} -->\n",
        GENERATED_BANNER
    )
}

/// Shortest decimal form: `17.0` -> `17`, `1.50` -> `1.5`.
pub(crate) fn number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Channel in `[0, 1]` with at most three decimals.
pub(crate) fn channel(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    number(rounded)
}
