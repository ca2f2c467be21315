//! Xcode colour output: UIKit/SwiftUI extensions and `.colorset` catalogs.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::config::IosColorsConfig;
use crate::error::{Result, TokexError};
use crate::types::{AssetPair, Color};

use super::{channel, slash_banner, FileContents};

/// Render the colour extensions, plus catalogs when `use_color_assets` is set.
pub fn render_xcode_colors(
    pairs: &[AssetPair<Color>],
    output: &Path,
    config: &IosColorsConfig,
) -> Result<Vec<FileContents>> {
    let mut files = Vec::new();

    files.push(FileContents::text(
        output.join(&config.color_swift),
        uikit_extension(pairs, config.use_color_assets),
    ));

    if config.swiftui {
        files.push(FileContents::text(
            output.join(&config.swiftui_swift),
            swiftui_extension(pairs),
        ));
    }

    if config.use_color_assets {
        let folder = output.join(&config.assets_folder);
        files.push(FileContents::text(
            folder.join("Contents.json"),
            to_json(&CatalogContents::folder())?,
        ));
        for pair in pairs {
            files.push(FileContents::text(
                folder
                    .join(format!("{}.colorset", pair.base.name))
                    .join("Contents.json"),
                to_json(&CatalogContents::colorset(pair))?,
            ));
        }
    }

    Ok(files)
}

fn uikit_color(color: &Color) -> String {
    format!(
        "UIColor(red: {}, green: {}, blue: {}, alpha: {})",
        channel(color.red),
        channel(color.green),
        channel(color.blue),
        channel(color.alpha)
    )
}

fn uikit_extension(pairs: &[AssetPair<Color>], named: bool) -> String {
    let mut out = slash_banner();
    out.push_str("import UIKit\n\npublic extension UIColor {\n");

    for pair in pairs {
        let name = &pair.base.name;
        let _ = writeln!(out, "    static var {}: UIColor {{", name);
        if named {
            let _ = writeln!(out, "        UIColor(named: #function)!");
        } else if let Some(dark) = &pair.target {
            let _ = writeln!(out, "        UIColor {{ traitCollection -> UIColor in");
            let _ = writeln!(out, "            if traitCollection.userInterfaceStyle == .dark {{");
            let _ = writeln!(out, "                return {}", uikit_color(dark));
            let _ = writeln!(out, "            }} else {{");
            let _ = writeln!(out, "                return {}", uikit_color(&pair.base));
            let _ = writeln!(out, "            }}");
            let _ = writeln!(out, "        }}");
        } else {
            let _ = writeln!(out, "        {}", uikit_color(&pair.base));
        }
        let _ = writeln!(out, "    }}");
    }

    out.push_str("}\n");
    out
}

fn swiftui_extension(pairs: &[AssetPair<Color>]) -> String {
    let mut out = slash_banner();
    out.push_str("import SwiftUI\n\npublic extension Color {\n");
    for pair in pairs {
        let _ = writeln!(
            out,
            "    static var {0}: Color {{ Color(UIColor.{0}) }}",
            pair.base.name
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
struct CatalogInfo {
    author: &'static str,
    version: u32,
}

#[derive(Serialize)]
struct CatalogContents {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    colors: Vec<CatalogColor>,
    info: CatalogInfo,
}

#[derive(Serialize)]
struct CatalogColor {
    #[serde(skip_serializing_if = "Option::is_none")]
    appearances: Option<Vec<Appearance>>,
    color: ColorValue,
    idiom: &'static str,
}

#[derive(Serialize)]
struct Appearance {
    appearance: &'static str,
    value: &'static str,
}

#[derive(Serialize)]
struct ColorValue {
    #[serde(rename = "color-space")]
    color_space: &'static str,
    components: Components,
}

#[derive(Serialize)]
struct Components {
    alpha: String,
    blue: String,
    green: String,
    red: String,
}

impl CatalogContents {
    fn folder() -> Self {
        Self {
            colors: Vec::new(),
            info: CatalogInfo {
                author: "xcode",
                version: 1,
            },
        }
    }

    fn colorset(pair: &AssetPair<Color>) -> Self {
        let mut colors = vec![CatalogColor::new(&pair.base, false)];
        if let Some(dark) = &pair.target {
            colors.push(CatalogColor::new(dark, true));
        }
        Self {
            colors,
            ..Self::folder()
        }
    }
}

impl CatalogColor {
    fn new(color: &Color, dark: bool) -> Self {
        Self {
            appearances: dark.then(|| {
                vec![Appearance {
                    appearance: "luminosity",
                    value: "dark",
                }]
            }),
            color: ColorValue {
                color_space: "srgb",
                components: Components {
                    alpha: format!("{:.3}", color.alpha),
                    blue: format!("{:.3}", color.blue),
                    green: format!("{:.3}", color.green),
                    red: format!("{:.3}", color.red),
                },
            },
            idiom: "universal",
        }
    }
}
