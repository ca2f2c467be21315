//! Theme CSS parser.
//!
//! Reads `--name: R G B;` custom properties from class blocks. The `.light`
//! block holds the light theme; every other block counts as dark.
//!
//! ```css
//! .light { --bg-primary: 255 255 255; }
//! .dark  { --bg-primary: 18 18 18; }
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, TokexError};
use crate::processor::names::capitalize;
use crate::types::Color;

/// Colours of a theme stylesheet, split by theme.
#[derive(Debug, Default)]
pub struct CssTheme {
    pub light: Vec<Color>,
    pub dark: Vec<Color>,
}

impl CssTheme {
    /// The dark collection, or `None` when the stylesheet has no dark block.
    pub fn dark_or_none(&self) -> Option<Vec<Color>> {
        (!self.dark.is_empty()).then(|| self.dark.clone())
    }
}

/// `.selector { body }`
static THEME_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([^{]+)\{([^}]*)\}").expect("valid regex"));

/// Parse a theme stylesheet.
pub fn parse_css_colors(css: &str) -> Result<CssTheme> {
    let opens = css.matches('{').count();
    let closes = css.matches('}').count();
    if opens != closes {
        return Err(TokexError::Parse {
            message: format!("Invalid theme CSS: {} '{{' but {} '}}'", opens, closes),
            help: Some("Every theme block must be closed".to_string()),
        });
    }

    let mut theme = CssTheme::default();

    for caps in THEME_BLOCK.captures_iter(css) {
        let selector = caps[1].trim();
        let is_light = selector == "light";

        for declaration in caps[2].split(';') {
            let Some(color) = parse_declaration(declaration) else {
                continue;
            };
            if is_light {
                theme.light.push(color);
            } else {
                theme.dark.push(color);
            }
        }
    }

    tracing::debug!(
        light = theme.light.len(),
        dark = theme.dark.len(),
        "parsed theme css"
    );
    Ok(theme)
}

/// `--bg-primary: 18 18 18` -> colour `bgPrimary`. Channels are 0-255;
/// missing or malformed channels read as 0.
fn parse_declaration(declaration: &str) -> Option<Color> {
    let parts: Vec<&str> = declaration.split(':').collect();
    let [key, value] = parts.as_slice() else {
        return None;
    };

    let name = css_name_to_camel(key);
    if name.is_empty() {
        return None;
    }

    let mut channels = value
        .split_whitespace()
        .map(|c| c.parse::<f64>().unwrap_or(0.0) / 255.0);
    let red = channels.next().unwrap_or(0.0);
    let green = channels.next().unwrap_or(0.0);
    let blue = channels.next().unwrap_or(0.0);

    Some(Color::new(name, red, green, blue, 1.0))
}

/// `--bg-primary` -> `bgPrimary`, `--text-URL` -> `textUrl`.
fn css_name_to_camel(key: &str) -> String {
    let trimmed = key.trim().trim_matches('-');
    let mut parts = trimmed.split('-').filter(|p| !p.is_empty());

    let mut out = parts.next().map(str::to_lowercase).unwrap_or_default();
    for part in parts {
        out.push_str(&capitalize(part));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Asset;

    const THEME: &str = r#"
.light {
    --bg-primary: 255 255 255;
    --text-main: 0 0 0;
}
.dark {
    --bg-primary: 18 18 18;
    --text-main: 255 255 255;
}
"#;

    #[test]
    fn test_split_by_theme() {
        let theme = parse_css_colors(THEME).unwrap();

        let light: Vec<&str> = theme.light.iter().map(|c| c.name()).collect();
        let dark: Vec<&str> = theme.dark.iter().map(|c| c.name()).collect();
        assert_eq!(light, vec!["bgPrimary", "textMain"]);
        assert_eq!(dark, vec!["bgPrimary", "textMain"]);

        assert_eq!(theme.light[0].to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(theme.dark[0].to_rgba8(), [18, 18, 18, 255]);
    }

    #[test]
    fn test_other_selectors_count_as_dark() {
        let theme = parse_css_colors(".midnight { --a: 1 2 3; }").unwrap();
        assert!(theme.light.is_empty());
        assert_eq!(theme.dark.len(), 1);
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(parse_css_colors(".light { --a: 1 2 3;").is_err());
        assert!(parse_css_colors(".light { --a: 1 2 3; }}").is_err());
    }

    #[test]
    fn test_skips_malformed_declarations() {
        let theme =
            parse_css_colors(".light { --a: 1 2 3; garbage; --b: x: y; --c: 10; }").unwrap();
        let names: Vec<&str> = theme.light.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "c"]);
        // missing channels default to zero
        assert_eq!(theme.light[1].to_rgba8(), [10, 0, 0, 255]);
    }

    #[test]
    fn test_dark_or_none() {
        let theme = parse_css_colors(".light { --a: 1 2 3; }").unwrap();
        assert!(theme.dark_or_none().is_none());

        let theme = parse_css_colors(THEME).unwrap();
        assert_eq!(theme.dark_or_none().map(|d| d.len()), Some(2));
    }

    #[test]
    fn test_css_name_to_camel() {
        assert_eq!(css_name_to_camel("  --bg-primary "), "bgPrimary");
        assert_eq!(css_name_to_camel("--text-URL"), "textUrl");
        assert_eq!(css_name_to_camel("--Accent--Soft"), "accentSoft");
        assert_eq!(css_name_to_camel("--"), "");
    }
}
