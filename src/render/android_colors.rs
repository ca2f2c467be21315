//! Android colour resources and the Compose colour system.

use std::fmt::Write as _;
use std::path::Path;

use crate::processor::names::lower_camel_case;
use crate::types::{AssetPair, Color};

use super::{slash_banner, xml_header, FileContents};

/// `values/colors.xml`, plus `values-night/colors.xml` when any pair has a
/// dark variant.
pub fn render_android_colors(pairs: &[AssetPair<Color>], res: &Path) -> Vec<FileContents> {
    let mut files = vec![FileContents::text(
        res.join("values").join("colors.xml"),
        colors_xml(pairs.iter().map(|p| &p.base)),
    )];

    if pairs.iter().any(|p| p.target.is_some()) {
        files.push(FileContents::text(
            res.join("values-night").join("colors.xml"),
            colors_xml(pairs.iter().filter_map(|p| p.target.as_ref())),
        ));
    }

    files
}

fn colors_xml<'a>(colors: impl Iterator<Item = &'a Color>) -> String {
    let mut out = xml_header();
    out.push_str("<resources>\n");
    for color in colors {
        let _ = writeln!(
            out,
            "    <color name=\"{}\">{}</color>",
            color.name,
            color.android_hex()
        );
    }
    out.push_str("</resources>\n");
    out
}

/// `ColorSystem.kt` in `dir`. Pairs without a dark variant use the light
/// value in both themes.
pub fn render_compose_colors(pairs: &[AssetPair<Color>], dir: &Path, package: &str) -> FileContents {
    let names: Vec<String> = pairs.iter().map(|p| lower_camel_case(&p.base.name)).collect();

    let mut out = slash_banner();
    let _ = writeln!(out, "package {}\n", package);
    out.push_str("import androidx.compose.runtime.Immutable\n");
    out.push_str("import androidx.compose.runtime.staticCompositionLocalOf\n");
    out.push_str("import androidx.compose.ui.graphics.Color\n\n");

    out.push_str("@Immutable\nsealed interface ColorSystem {\n");
    for name in &names {
        let _ = writeln!(out, "    val {}: Color", name);
    }
    for variant in ["Light", "Dark"] {
        let _ = writeln!(out, "\n    data class {}(", variant);
        for name in &names {
            let _ = writeln!(out, "        override val {}: Color,", name);
        }
        out.push_str("    ) : ColorSystem\n");
    }
    out.push_str("}\n\n");

    out.push_str("val LocalColorSystem = staticCompositionLocalOf<ColorSystem> {\n");
    out.push_str("    error(\"ColorSystem is not provided\")\n}\n\n");
    out.push_str("fun createColorSystem(isSystemInDarkTheme: Boolean): ColorSystem =\n");
    out.push_str("    if (isSystemInDarkTheme) createDarkColorSystem() else createLightColorSystem()\n");

    for (variant, dark) in [("Light", false), ("Dark", true)] {
        let _ = writeln!(
            out,
            "\nprivate fun create{0}ColorSystem() = ColorSystem.{0}(",
            variant
        );
        for (pair, name) in pairs.iter().zip(&names) {
            let color = match (&pair.target, dark) {
                (Some(target), true) => target,
                _ => &pair.base,
            };
            let _ = writeln!(out, "    {} = Color({}),", name, color.argb_literal());
        }
        out.push_str(")\n");
    }

    FileContents::text(dir.join("ColorSystem.kt"), out)
}
