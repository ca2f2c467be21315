//! Colour-token JSON decoder.
//!
//! The document has component state trees (`State/Active`, `State/Focus`,
//! `State/Rest`), a typed role tree (`Roles/Light`) and a palette
//! (`Palettes/Value`). Leaves are `{ "value": ..., "type": ... }`. String
//! values like `{blue.500}` are aliases into the roles, then the palette.
//!
//! Every leaf that resolves to a hex colour becomes one [`Color`], named by
//! its path: `stateActiveButtonPrimaryGroupBorder`, `rolePrimaryCore`.
//!
//! The whole document is decoded once; alias lookup walks the decoded trees.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Result, TokexError};
use crate::processor::names::{kebab_to_camel, lower_first, upper_first};
use crate::types::Color;

use super::token::{TokenData, TokenValue};

/// Top-level colour-token document.
#[derive(Debug, Deserialize)]
pub struct ColorTokens {
    #[serde(rename = "State/Active", default)]
    pub state_active: ComponentStates,
    #[serde(rename = "State/Focus", default)]
    pub state_focus: ComponentStates,
    #[serde(rename = "State/Rest", default)]
    pub state_rest: ComponentStates,
    #[serde(rename = "Roles/Light")]
    pub roles_light: RolesLight,
    #[serde(rename = "Palettes/Value", default)]
    pub palettes: Palette,
}

/// Component name to its token tree (`button`, `form-control`, ...).
pub type ComponentStates = BTreeMap<String, TokenNode>;

/// Palette group name to its shades (`blue` -> `500` -> leaf).
pub type Palette = BTreeMap<String, TokenNode>;

/// A token leaf or a nested group of tokens.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TokenNode {
    Leaf(TokenData),
    Group(BTreeMap<String, TokenNode>),
}

#[derive(Debug, Deserialize)]
pub struct RolesLight {
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct Role {
    pub primary: ColorRole,
    #[serde(default)]
    pub surface: SurfaceRole,
    #[serde(default)]
    pub extended: ExtendedRole,
    pub secondary: Option<ColorRole>,
    pub tertiary: Option<ColorRole>,
    pub addition: Option<ColorRole>,
    pub success: Option<ColorRole>,
    pub error: Option<ColorRole>,
    pub warning: Option<ColorRole>,
    pub info: Option<ColorRole>,
    pub accent: Option<ColorRole>,
    /// Named accent hues (`gray`, `teal`, ...).
    #[serde(default)]
    pub vibecolor: BTreeMap<String, ColorRole>,
}

#[derive(Debug, Deserialize)]
pub struct ColorRole {
    pub core: TokenData,
    pub on: Option<TokenData>,
    pub container: Option<ColorContainer>,
    pub dim: Option<TokenData>,
    pub chroma: Option<TokenData>,
    #[serde(rename = "on-dim")]
    pub on_dim: Option<TokenData>,
    pub angle: Option<TokenData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ColorContainer {
    pub core: Option<TokenData>,
    #[serde(rename = "on-high")]
    pub on_high: Option<TokenData>,
    pub dim: Option<TokenData>,
    pub chroma: Option<TokenData>,
    pub on: Option<TokenData>,
    #[serde(rename = "on-low")]
    pub on_low: Option<TokenData>,
    #[serde(rename = "on-lowest")]
    pub on_lowest: Option<TokenData>,
    #[serde(rename = "on-highest")]
    pub on_highest: Option<TokenData>,
    pub base: Option<TokenData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SurfaceRole {
    pub surface: Option<TokenData>,
    pub dim: Option<TokenData>,
    pub bright: Option<TokenData>,
    pub container: Option<SurfaceContainer>,
    #[serde(rename = "on-highest")]
    pub on_highest: Option<TokenData>,
    #[serde(rename = "on-high")]
    pub on_high: Option<TokenData>,
    pub on: Option<TokenData>,
    #[serde(rename = "on-low")]
    pub on_low: Option<TokenData>,
    pub transparent: Option<TokenData>,
    pub chromatic: Option<SurfaceChromatic>,
    #[serde(rename = "on-lowest")]
    pub on_lowest: Option<TokenData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SurfaceContainer {
    pub lowest: Option<TokenData>,
    pub low: Option<TokenData>,
    pub container: Option<TokenData>,
    pub high: Option<TokenData>,
    pub highest: Option<TokenData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SurfaceChromatic {
    pub start: Option<TokenData>,
    #[serde(rename = "mid-start")]
    pub mid_start: Option<TokenData>,
    #[serde(rename = "mid-end")]
    pub mid_end: Option<TokenData>,
    pub end: Option<TokenData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExtendedRole {
    pub inverse: Option<ExtendedInverse>,
    pub shadow: Option<ExtendedShadow>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExtendedInverse {
    pub surface: Option<TokenData>,
    #[serde(rename = "on-surface")]
    pub on_surface: Option<TokenData>,
    pub primary: Option<TokenData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExtendedShadow {
    pub opacity1: Option<TokenData>,
    pub opacity2: Option<TokenData>,
    pub opacity3: Option<TokenData>,
    #[serde(rename = "shadow-color")]
    pub shadow_color: Option<TokenData>,
}

/// Resolves `{a.b.c}` alias paths against the roles, then the palette.
#[derive(Debug, Clone, Copy)]
pub struct AliasResolver<'a> {
    roles: &'a RolesLight,
    palettes: &'a Palette,
}

impl<'a> AliasResolver<'a> {
    pub fn new(roles: &'a RolesLight, palettes: &'a Palette) -> Self {
        Self { roles, palettes }
    }

    /// Whether `value` refers to another token.
    pub fn is_alias(value: &str) -> bool {
        value.starts_with('{') && !value.contains("opacity")
    }

    /// Resolve an alias to its final value.
    ///
    /// A role hit that is itself an alias is looked up in the palette.
    pub fn resolve(&self, alias: &str) -> Result<TokenValue> {
        if let Some(role) = self.roles.token(&alias_path(alias)) {
            return match &role.value {
                TokenValue::Text(inner) if Self::is_alias(inner) => self.palette_value(inner),
                value => Ok(value.clone()),
            };
        }
        self.palette_value(alias)
    }

    fn palette_value(&self, alias: &str) -> Result<TokenValue> {
        self.palettes
            .token(&alias_path(alias))
            .map(|leaf| leaf.value.clone())
            .ok_or_else(|| unresolved(alias))
    }
}

fn alias_path(alias: &str) -> Vec<&str> {
    alias
        .trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .split('.')
        .collect()
}

fn unresolved(alias: &str) -> TokexError {
    TokexError::Parse {
        message: format!("Unresolved colour alias {}", alias),
        help: Some("Define the path under Roles/Light or Palettes/Value".to_string()),
    }
}

/// Collects colours emitted while walking a token tree.
pub struct ColorSink<'a> {
    resolver: AliasResolver<'a>,
    colors: Vec<Color>,
}

impl<'a> ColorSink<'a> {
    pub fn new(resolver: AliasResolver<'a>) -> Self {
        Self {
            resolver,
            colors: Vec::new(),
        }
    }

    /// Emit a colour for a leaf if it resolves to a hex value.
    pub fn leaf(&mut self, name: &str, data: &TokenData) -> Result<()> {
        let value = match &data.value {
            TokenValue::Text(raw) if AliasResolver::is_alias(raw) => self.resolver.resolve(raw)?,
            value => value.clone(),
        };
        let TokenValue::Text(value) = value else {
            tracing::debug!(name, "skipping numeric token");
            return Ok(());
        };

        match Color::from_hex(name, &value) {
            Ok(color) => self.colors.push(color),
            Err(_) => tracing::debug!(name, value = %value, "skipping non-colour token"),
        }
        Ok(())
    }

    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

/// A token tree node that can emit colours.
pub trait EmitColors {
    fn emit(&self, name: &str, sink: &mut ColorSink<'_>) -> Result<()>;
}

/// A token tree node that can look up a leaf by its key path.
pub trait TokenPath {
    fn token(&self, path: &[&str]) -> Option<&TokenData>;
}

/// Append a JSON key to a token name: the first segment starts lowercase,
/// later ones are capitalized.
fn child_name(prefix: &str, key: &str) -> String {
    let segment = kebab_to_camel(key);
    if prefix.is_empty() {
        lower_first(&segment)
    } else {
        format!("{}{}", prefix, upper_first(&segment))
    }
}

impl EmitColors for TokenData {
    fn emit(&self, name: &str, sink: &mut ColorSink<'_>) -> Result<()> {
        sink.leaf(name, self)
    }
}

impl TokenPath for TokenData {
    fn token(&self, path: &[&str]) -> Option<&TokenData> {
        path.is_empty().then_some(self)
    }
}

impl<T: EmitColors> EmitColors for Option<T> {
    fn emit(&self, name: &str, sink: &mut ColorSink<'_>) -> Result<()> {
        match self {
            Some(node) => node.emit(name, sink),
            None => Ok(()),
        }
    }
}

impl<T: TokenPath> TokenPath for Option<T> {
    fn token(&self, path: &[&str]) -> Option<&TokenData> {
        self.as_ref()?.token(path)
    }
}

impl<T: EmitColors> EmitColors for BTreeMap<String, T> {
    fn emit(&self, name: &str, sink: &mut ColorSink<'_>) -> Result<()> {
        for (key, node) in self {
            node.emit(&child_name(name, key), sink)?;
        }
        Ok(())
    }
}

impl<T: TokenPath> TokenPath for BTreeMap<String, T> {
    fn token(&self, path: &[&str]) -> Option<&TokenData> {
        let (key, rest) = path.split_first()?;
        self.get(*key)?.token(rest)
    }
}

impl EmitColors for TokenNode {
    fn emit(&self, name: &str, sink: &mut ColorSink<'_>) -> Result<()> {
        match self {
            TokenNode::Leaf(data) => data.emit(name, sink),
            TokenNode::Group(children) => children.emit(name, sink),
        }
    }
}

impl TokenPath for TokenNode {
    fn token(&self, path: &[&str]) -> Option<&TokenData> {
        match self {
            TokenNode::Leaf(data) => data.token(path),
            TokenNode::Group(children) => children.token(path),
        }
    }
}

/// Implements [`EmitColors`] and [`TokenPath`] for a struct from its
/// field-to-JSON-key table.
macro_rules! token_fields {
    ($ty:ty { $($field:ident => $key:literal),* $(,)? }) => {
        impl EmitColors for $ty {
            fn emit(&self, name: &str, sink: &mut ColorSink<'_>) -> Result<()> {
                $( self.$field.emit(&child_name(name, $key), sink)?; )*
                Ok(())
            }
        }

        impl TokenPath for $ty {
            fn token(&self, path: &[&str]) -> Option<&TokenData> {
                let (key, rest) = path.split_first()?;
                match *key {
                    $( $key => self.$field.token(rest), )*
                    _ => None,
                }
            }
        }
    };
}

token_fields!(RolesLight { role => "role" });

token_fields!(Role {
    primary => "primary",
    surface => "surface",
    extended => "extended",
    secondary => "secondary",
    tertiary => "tertiary",
    addition => "addition",
    success => "success",
    error => "error",
    warning => "warning",
    info => "info",
    accent => "accent",
    vibecolor => "vibecolor",
});

token_fields!(ColorRole {
    core => "core",
    on => "on",
    container => "container",
    dim => "dim",
    chroma => "chroma",
    on_dim => "on-dim",
    angle => "angle",
});

token_fields!(ColorContainer {
    core => "core",
    on_high => "on-high",
    dim => "dim",
    chroma => "chroma",
    on => "on",
    on_low => "on-low",
    on_lowest => "on-lowest",
    on_highest => "on-highest",
    base => "base",
});

token_fields!(SurfaceRole {
    surface => "surface",
    dim => "dim",
    bright => "bright",
    container => "container",
    on_highest => "on-highest",
    on_high => "on-high",
    on => "on",
    on_low => "on-low",
    transparent => "transparent",
    chromatic => "chromatic",
    on_lowest => "on-lowest",
});

token_fields!(SurfaceContainer {
    lowest => "lowest",
    low => "low",
    container => "container",
    high => "high",
    highest => "highest",
});

token_fields!(SurfaceChromatic {
    start => "start",
    mid_start => "mid-start",
    mid_end => "mid-end",
    end => "end",
});

token_fields!(ExtendedRole {
    inverse => "inverse",
    shadow => "shadow",
});

token_fields!(ExtendedInverse {
    surface => "surface",
    on_surface => "on-surface",
    primary => "primary",
});

token_fields!(ExtendedShadow {
    opacity1 => "opacity1",
    opacity2 => "opacity2",
    opacity3 => "opacity3",
    shadow_color => "shadow-color",
});

impl ColorTokens {
    pub fn resolver(&self) -> AliasResolver<'_> {
        AliasResolver::new(&self.roles_light, &self.palettes)
    }

    /// Emit every colour, state trees first, then roles.
    pub fn to_colors(&self) -> Result<Vec<Color>> {
        let mut sink = ColorSink::new(self.resolver());
        self.state_active.emit("stateActive", &mut sink)?;
        self.state_focus.emit("stateFocus", &mut sink)?;
        self.state_rest.emit("stateRest", &mut sink)?;
        self.roles_light.emit("", &mut sink)?;
        Ok(sink.into_colors())
    }
}

/// Decode a colour-token document into colours.
pub fn parse_color_tokens(json: &str) -> Result<Vec<Color>> {
    let tokens: ColorTokens = serde_json::from_str(json).map_err(|e| TokexError::Parse {
        message: format!("Invalid colour tokens: {}", e),
        help: Some("Expected State/*, Roles/Light and Palettes/Value sections".to_string()),
    })?;

    let colors = tokens.to_colors()?;
    tracing::debug!(count = colors.len(), "decoded colour tokens");
    Ok(colors)
}
