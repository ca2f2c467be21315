//! Icon JSON decoder.
//!
//! ```json
//! { "arrow-left": { "sm": { "solid": "<svg/>", "outline": "<svg/>" }, "lg": { ... } } }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Result, TokexError};
use crate::processor::names::upper_camel_case;
use crate::types::{Image, ImagePack, ImageSource};

/// Placeholder fill in icon markup, swapped for the configured colour.
const CURRENT_COLOR: &str = "currentColor";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IconVariants {
    solid: Option<String>,
    outline: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IconSizes {
    sm: Option<IconVariants>,
    lg: Option<IconVariants>,
}

/// Decode an icon payload into single-rendition SVG packs named
/// `ic<Name><Sm|Lg><Solid|Outline>`.
pub fn parse_icons(json: &str, icon_color: &str) -> Result<Vec<ImagePack>> {
    let icons: BTreeMap<String, IconSizes> =
        serde_json::from_str(json).map_err(|e| TokexError::Parse {
            message: format!("Invalid icon payload: {}", e),
            help: Some("Expected { name: { sm|lg: { solid|outline: svg } } }".to_string()),
        })?;

    let mut packs = Vec::new();

    for (name, sizes) in &icons {
        let base = format!("ic{}", upper_camel_case(name));
        for (size, variants) in [("Sm", &sizes.sm), ("Lg", &sizes.lg)] {
            let Some(variants) = variants else {
                continue;
            };
            for (style, svg) in [("Solid", &variants.solid), ("Outline", &variants.outline)] {
                let Some(svg) = svg else {
                    continue;
                };
                let markup = svg.replace(CURRENT_COLOR, icon_color);
                let image = Image::new(
                    format!("{}{}{}", base, size, style),
                    "svg",
                    ImageSource::Inline(markup.into_bytes()),
                );
                packs.push(ImagePack::Single(image));
            }
        }
    }

    tracing::debug!(icons = icons.len(), renditions = packs.len(), "decoded icons");
    Ok(packs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Asset;

    const PAYLOAD: &str = r#"{
        "arrow-left": {
            "sm": { "solid": "<svg fill=\"currentColor\"/>", "outline": "<svg stroke=\"currentColor\"/>" },
            "lg": { "solid": "<svg/>" }
        },
        "close": { "lg": { "outline": "<svg/>" } }
    }"#;

    #[test]
    fn test_names_per_size_and_style() {
        let packs = parse_icons(PAYLOAD, "@color/icon").unwrap();
        let names: Vec<&str> = packs.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "icArrowLeftSmSolid",
                "icArrowLeftSmOutline",
                "icArrowLeftLgSolid",
                "icCloseLgOutline",
            ]
        );
    }

    #[test]
    fn test_current_color_replaced() {
        let packs = parse_icons(PAYLOAD, "@color/icon").unwrap();
        let image = packs[0].single().unwrap();
        assert_eq!(image.format, "svg");
        assert_eq!(
            image.source,
            ImageSource::Inline(b"<svg fill=\"@color/icon\"/>".to_vec())
        );
    }

    #[test]
    fn test_invalid_payload() {
        assert!(parse_icons("[]", "x").is_err());
        assert!(parse_icons(r#"{ "a": { "sm": { "solid": 1 } } }"#, "x").is_err());
    }
}
