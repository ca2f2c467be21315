//! Spacing and corner-radius token decoder.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Result, TokexError};
use crate::processor::names::{kebab_to_camel, upper_camel_case};
use crate::types::{RoundedTheme, SpaceToken};

use super::token::TokenData;

/// Group label of `Space/Value` tokens.
pub const SPACE_GROUP: &str = "space";
/// Group label of `Rounded/*` tokens.
pub const ROUNDED_GROUP: &str = "rounded";

type TokenMap = BTreeMap<String, TokenData>;

#[derive(Debug, Deserialize)]
struct SpaceDocument {
    #[serde(rename = "Space/Value", default)]
    space_value: SpaceValue,
    #[serde(rename = "Rounded/Smooth", default)]
    rounded_smooth: RoundedCategory,
    #[serde(rename = "Rounded/Rounded", default)]
    rounded_rounded: RoundedCategory,
    #[serde(rename = "Rounded/None", default)]
    rounded_none: RoundedCategory,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SpaceValue {
    space: TokenMap,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RoundedCategory {
    #[serde(rename = "border-radius")]
    border_radius: Option<TokenMap>,
    outline: Option<TokenMap>,
    #[serde(rename = "conteiner-2")]
    conteiner2: Option<TokenMap>,
    #[serde(rename = "conteiner-4")]
    conteiner4: Option<TokenMap>,
    #[serde(rename = "conteiner-6")]
    conteiner6: Option<TokenMap>,
    #[serde(rename = "bg-1")]
    bg1: Option<TokenMap>,
    x4: Option<TokenMap>,
    x6: Option<TokenMap>,
}

impl RoundedCategory {
    /// Groups in output order, keyed by their JSON name.
    fn groups(&self) -> [(&'static str, Option<&TokenMap>); 8] {
        [
            ("border-radius", self.border_radius.as_ref()),
            ("outline", self.outline.as_ref()),
            ("conteiner-2", self.conteiner2.as_ref()),
            ("conteiner-4", self.conteiner4.as_ref()),
            ("conteiner-6", self.conteiner6.as_ref()),
            ("bg-1", self.bg1.as_ref()),
            ("x4", self.x4.as_ref()),
            ("x6", self.x6.as_ref()),
        ]
    }
}

impl SpaceDocument {
    fn rounded(&self, theme: RoundedTheme) -> &RoundedCategory {
        match theme {
            RoundedTheme::Smooth => &self.rounded_smooth,
            RoundedTheme::Rounded => &self.rounded_rounded,
            RoundedTheme::None => &self.rounded_none,
        }
    }
}

/// Decode spacing tokens and the rounded category selected by `theme`.
///
/// `Space/Value.space` keys become `space<key>` (`,` -> `_`); rounded
/// groups become `<group><Key>`, e.g. `borderRadiusSm`.
pub fn parse_space_tokens(json: &str, theme: RoundedTheme) -> Result<Vec<SpaceToken>> {
    let document: SpaceDocument = serde_json::from_str(json).map_err(|e| TokexError::Parse {
        message: format!("Invalid space tokens: {}", e),
        help: Some("Expected Space/Value and Rounded/* sections".to_string()),
    })?;

    let mut tokens = Vec::new();

    for (key, data) in &document.space_value.space {
        let name = format!("{}{}", SPACE_GROUP, key.replace(',', "_"));
        push_numeric(&mut tokens, name, SPACE_GROUP, data);
    }

    for (group, values) in document.rounded(theme).groups() {
        let Some(values) = values else {
            continue;
        };
        let prefix = kebab_to_camel(group);
        for (key, data) in values {
            let name = format!("{}{}", prefix, upper_camel_case(key));
            push_numeric(&mut tokens, name, ROUNDED_GROUP, data);
        }
    }

    tracing::debug!(count = tokens.len(), ?theme, "decoded space tokens");
    Ok(tokens)
}

fn push_numeric(tokens: &mut Vec<SpaceToken>, name: String, group: &str, data: &TokenData) {
    match data.number() {
        Some(value) => tokens.push(SpaceToken::new(name, group, value)),
        None => tracing::debug!(name = %name, "skipping non-numeric space token"),
    }
}
