//! Typography design-token decoder.
//!
//! `Font-weight/<Name>` entries define the available weights. Every size
//! key of a `Typography/Mobile` group produces one style per weight, and
//! every `Control/Value.control` key does the same for control styles.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TokexError};
use crate::processor::names::upper_camel_case;
use crate::types::{FontWeight, TextStyle};

use super::token::TokenData;

const FONT_WEIGHT_PREFIX: &str = "Font-weight/";

#[derive(Debug, Deserialize)]
struct TypographyDocument {
    #[serde(rename = "Control/Value", default)]
    control: ControlValue,
    #[serde(rename = "Typography/Mobile", default)]
    mobile: TypographyMobile,
    /// `Font-weight/*` sections and anything else.
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct FontWeightData {
    #[serde(rename = "font-weight")]
    font_weight: TokenData,
}

type TokenMap = BTreeMap<String, TokenData>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ControlValue {
    #[serde(rename = "font-size")]
    font_size: TokenMap,
    #[serde(rename = "line-height")]
    line_height: TokenMap,
    #[serde(rename = "letter-spacing")]
    letter_spacing: TokenMap,
    #[serde(rename = "paragraph-spacing")]
    paragraph_spacing: TokenMap,
    control: TokenMap,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TypographyStyle {
    #[serde(rename = "font-size")]
    font_size: Option<TokenMap>,
    #[serde(rename = "line-height")]
    line_height: Option<TokenMap>,
    #[serde(rename = "letter-spacing")]
    letter_spacing: Option<TokenMap>,
    #[serde(rename = "paragraph-spacing")]
    paragraph_spacing: Option<TokenMap>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TypographyMobile {
    body: TypographyStyle,
    title: TypographyStyle,
    heading: TypographyStyle,
    display: TypographyStyle,
}

/// A weight key (`Semibold`) and its numeric value.
struct Weight {
    key: String,
    value: Option<f64>,
}

impl Weight {
    fn font_name(&self, family: &str) -> String {
        FontWeight::font_name(self.value.and_then(FontWeight::from_value), family)
    }
}

fn number(map: Option<&TokenMap>, key: &str) -> Option<f64> {
    map.and_then(|m| m.get(key)).and_then(TokenData::number)
}

/// Decode typography tokens into text styles using font `family`.
pub fn parse_typography(json: &str, family: &str) -> Result<Vec<TextStyle>> {
    let document: TypographyDocument = serde_json::from_str(json).map_err(|e| TokexError::Parse {
        message: format!("Invalid typography tokens: {}", e),
        help: Some("Expected Font-weight/*, Control/Value and Typography/Mobile sections".to_string()),
    })?;

    let mut weights = Vec::new();
    for (key, value) in &document.rest {
        let Some(name) = key.strip_prefix(FONT_WEIGHT_PREFIX) else {
            continue;
        };
        let data: FontWeightData =
            serde_json::from_value(value.clone()).map_err(|e| TokexError::Parse {
                message: format!("Invalid font weight {}: {}", key, e),
                help: None,
            })?;
        weights.push(Weight {
            key: name.to_string(),
            value: data.font_weight.number(),
        });
    }

    let mobile = &document.mobile;
    let groups = [
        ("body", &mobile.body),
        ("title", &mobile.title),
        ("heading", &mobile.heading),
        ("display", &mobile.display),
    ];

    let mut styles = Vec::new();

    for (group, style) in groups {
        let Some(sizes) = &style.font_size else {
            continue;
        };
        for size_key in sizes.keys() {
            for weight in &weights {
                let mut text_style = TextStyle::new(
                    format!("{}{}{}", group, upper_camel_case(size_key), upper_camel_case(&weight.key)),
                    weight.font_name(family),
                    number(Some(sizes), size_key).unwrap_or(0.0),
                );
                text_style.line_height = number(style.line_height.as_ref(), size_key);
                text_style.letter_spacing =
                    number(style.letter_spacing.as_ref(), size_key).unwrap_or(0.0);
                text_style.paragraph_spacing = number(style.paragraph_spacing.as_ref(), size_key);
                text_style.weight = weight.value;
                styles.push(text_style);
            }
        }
    }

    let control = &document.control;
    for control_key in control.control.keys() {
        for weight in &weights {
            let mut text_style = TextStyle::new(
                format!("control{}{}", upper_camel_case(&weight.key), upper_camel_case(control_key)),
                weight.font_name(family),
                number(Some(&control.font_size), control_key).unwrap_or(0.0),
            );
            text_style.line_height = number(Some(&control.line_height), control_key);
            text_style.letter_spacing =
                number(Some(&control.letter_spacing), control_key).unwrap_or(0.0);
            text_style.paragraph_spacing = number(Some(&control.paragraph_spacing), control_key);
            text_style.weight = weight.value;
            styles.push(text_style);
        }
    }

    tracing::debug!(weights = weights.len(), styles = styles.len(), "decoded typography");
    Ok(styles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "Font-weight/Regular": { "font-weight": { "value": 400, "type": "number" } },
        "Font-weight/Bold": { "font-weight": { "value": 700, "type": "number" } },
        "Control/Value": {
            "font-size": { "md": { "value": 14, "type": "number" } },
            "line-height": { "md": { "value": 20, "type": "number" } },
            "letter-spacing": {},
            "paragraph-spacing": {},
            "control": { "md": { "value": 1, "type": "number" } }
        },
        "Typography/Mobile": {
            "body": {
                "font-size": {
                    "sm": { "value": 12, "type": "number" },
                    "lg": { "value": 17, "type": "number" }
                },
                "line-height": { "lg": { "value": 24, "type": "number" } },
                "letter-spacing": { "lg": { "value": -0.4, "type": "number" } }
            },
            "title": {},
            "heading": {},
            "display": {}
        },
        "Layout/Mobile": { "gutter": { "value": 16, "type": "number" } }
    }"#;

    fn find<'a>(styles: &'a [TextStyle], name: &str) -> &'a TextStyle {
        styles
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("missing style {}", name))
    }

    #[test]
    fn test_style_per_size_and_weight() {
        let styles = parse_typography(DOCUMENT, "SFProDisplay").unwrap();

        let mut names: Vec<&str> = styles.iter().map(|s| s.name.as_str()).collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "bodyLgBold",
                "bodyLgRegular",
                "bodySmBold",
                "bodySmRegular",
                "controlBoldMd",
                "controlRegularMd",
            ]
        );
    }

    #[test]
    fn test_metrics() {
        let styles = parse_typography(DOCUMENT, "SFProDisplay").unwrap();

        let body = find(&styles, "bodyLgBold");
        assert_eq!(body.font_name, "SFProDisplay-Bold");
        assert_eq!(body.font_size, 17.0);
        assert_eq!(body.line_height, Some(24.0));
        assert_eq!(body.letter_spacing, -0.4);
        assert_eq!(body.weight, Some(700.0));

        let small = find(&styles, "bodySmRegular");
        assert_eq!(small.font_name, "SFProDisplay-Regular");
        assert_eq!(small.line_height, None);
        assert_eq!(small.letter_spacing, 0.0);

        let control = find(&styles, "controlRegularMd");
        assert_eq!(control.font_size, 14.0);
        assert_eq!(control.line_height, Some(20.0));
    }

    #[test]
    fn test_unknown_weight_uses_bare_family() {
        let json = r#"{ "Font-weight/Heavy": { "font-weight": { "value": 900, "type": "number" } },
            "Typography/Mobile": { "body": { "font-size": { "xs": { "value": 10, "type": "number" } } } } }"#;
        let styles = parse_typography(json, "Inter").unwrap();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].name, "bodyXsHeavy");
        assert_eq!(styles[0].font_name, "Inter");
    }

    #[test]
    fn test_invalid_documents() {
        assert!(parse_typography("[]", "Inter").is_err());
        assert!(parse_typography(r#"{ "Font-weight/Bold": { "weight": 1 } }"#, "Inter").is_err());
    }
}
