//! Front-ends decoding design-token exports into assets.
//!
//! Each format has one entry point:
//! - [`parse_color_tokens`] - colour-token JSON with role and palette aliases
//! - [`parse_css_colors`] - `.light` / `.dark` theme stylesheets
//! - [`parse_typography`] - font weights and type scales
//! - [`parse_space_tokens`] - spacing and corner radii
//! - [`parse_icons`] - inline SVG icon payloads
//! - [`scan_renditions`] - raster and vector files on disk
//!
//! # Usage
//!
//! ```ignore
//! use tokex::parser::parse_css_colors;
//!
//! let css = std::fs::read_to_string("tokens/theme.css")?;
//! let theme = parse_css_colors(&css)?;
//! println!("{} light colours", theme.light.len());
//! ```

mod token;
pub mod color_tokens;
pub mod css;
pub mod icons;
pub mod renditions;
pub mod spacing;
pub mod typography;

pub use color_tokens::{parse_color_tokens, AliasResolver};
pub use css::{parse_css_colors, CssTheme};
pub use icons::parse_icons;
pub use renditions::{scan_renditions, RenditionScan, DEFAULT_FORMATS};
pub use spacing::parse_space_tokens;
pub use typography::parse_typography;
