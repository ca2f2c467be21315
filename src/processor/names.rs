//! Asset name normalization.
//!
//! Pure string functions: word splitting, camelCase / snake_case styling,
//! regex validation and `$n` template replacement.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Identifier casing convention for exported symbol names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameStyle {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
}

/// Apply `style` to `name`.
pub fn normalize_name(name: &str, style: NameStyle) -> String {
    match style {
        NameStyle::CamelCase => lower_camel_case(name),
        NameStyle::SnakeCase => snake_case(name),
    }
}

/// Returns true when no pattern is configured, otherwise whether the pattern
/// matches anywhere in `name`.
pub fn is_name_valid(name: &str, pattern: Option<&Regex>) -> bool {
    pattern.map_or(true, |regex| regex.is_match(name))
}

/// Replace every match of `pattern` in `name` with `template`.
///
/// `$0`..`$9` in the template expand to the corresponding capture group of
/// the match; groups that did not participate expand to nothing. Any other
/// `$` is kept literally.
pub fn replace(name: &str, pattern: &Regex, template: &str) -> String {
    pattern
        .replace_all(name, |caps: &Captures<'_>| expand_template(template, caps))
        .into_owned()
}

fn expand_template(template: &str, caps: &Captures<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(index) = chars.peek().and_then(|d| d.to_digit(10)) {
                chars.next();
                if let Some(group) = caps.get(index as usize) {
                    out.push_str(group.as_str());
                }
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Replace every `/` with `_` (`color/primary/light` -> `color_primary_light`).
pub fn canonicalize(name: &str) -> String {
    name.replace('/', "_")
}

/// Split an identifier into words.
///
/// Boundaries are non-alphanumeric characters, a lowercase letter or digit
/// followed by an uppercase letter, and the last capital of an uppercase run
/// that is followed by a lowercase letter (`URLPath` -> `URL`, `Path`).
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let starts_word = prev.is_lowercase()
                || prev.is_numeric()
                || (prev.is_uppercase() && next_is_lower);
            if starts_word {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// `hero banner` -> `heroBanner`.
pub fn lower_camel_case(s: &str) -> String {
    let mut out = String::new();
    for (i, word) in split_words(s).iter().enumerate() {
        if i == 0 {
            out.push_str(&alphanumeric(word.to_lowercase()));
        } else {
            out.push_str(&alphanumeric(capitalize(word)));
        }
    }
    out
}

/// `hero banner` -> `HeroBanner`.
pub fn upper_camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| alphanumeric(capitalize(w)))
        .collect()
}

/// `heroBanner` -> `hero_banner`.
pub fn snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| alphanumeric(w.to_lowercase()))
        .collect::<Vec<_>>()
        .join("_")
}

/// Drop characters that case mapping introduced and that `split_words`
/// would read as a boundary (`İ` lowercases to `i` plus U+0307).
fn alphanumeric(word: String) -> String {
    if word.chars().all(char::is_alphanumeric) {
        return word;
    }
    word.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Join kebab-case parts, capitalizing every part after the first and
/// keeping the rest of each part as written (`group-border` -> `groupBorder`).
pub fn kebab_to_camel(s: &str) -> String {
    let mut parts = s.split('-').filter(|p| !p.is_empty());
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        out.push_str(&upper_first(part));
    }
    out
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// First character uppercased, the rest untouched.
pub fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First character lowercased, the rest untouched.
pub fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("color_primary_light"), vec!["color", "primary", "light"]);
        assert_eq!(split_words("colorPrimary"), vec!["color", "Primary"]);
        assert_eq!(split_words("URLPath"), vec!["URL", "Path"]);
        assert_eq!(split_words("icon-24 Back"), vec!["icon", "24", "Back"]);
        assert_eq!(split_words("h1Bold"), vec!["h1", "Bold"]);
        assert!(split_words("--__").is_empty());
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(lower_camel_case("color_primary_light"), "colorPrimaryLight");
        assert_eq!(lower_camel_case("Background Main"), "backgroundMain");
        assert_eq!(lower_camel_case("URLPath"), "urlPath");
        assert_eq!(lower_camel_case("x_y"), "xY");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("colorPrimaryLight"), "color_primary_light");
        assert_eq!(snake_case("Background Main"), "background_main");
        assert_eq!(snake_case("ic24Back"), "ic24_back");
        assert_eq!(snake_case("x/y"), "x_y");
    }

    #[test]
    fn test_upper_camel_case() {
        assert_eq!(upper_camel_case("arrow-right"), "ArrowRight");
        assert_eq!(upper_camel_case("xl"), "Xl");
        assert_eq!(upper_camel_case("semi bold"), "SemiBold");
    }

    #[test]
    fn test_case_mapping_drops_combining_marks() {
        assert_eq!(normalize_name("İstanbul", NameStyle::CamelCase), "istanbul");
        assert_eq!(normalize_name("İstanbul", NameStyle::SnakeCase), "istanbul");
        assert_eq!(normalize_name("go_İzmir", NameStyle::CamelCase), "goİzmir");
        assert_eq!(upper_camel_case("İzmir"), "İzmir");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "color/primary/light",
            "Background Main",
            "URLPath",
            "ic_24_Back",
            "state-active-button",
            "x_y",
            "a_1b",
            "color_1_2",
            "ÄpfelGrün",
            "İstanbul",
            "cafe\u{301}_İzmir",
            "",
        ];

        for style in [NameStyle::CamelCase, NameStyle::SnakeCase] {
            for input in inputs {
                let once = normalize_name(input, style);
                let twice = normalize_name(&once, style);
                assert_eq!(once, twice, "style {:?} not idempotent for {:?}", style, input);
            }
        }
    }

    #[test]
    fn test_is_name_valid() {
        assert!(is_name_valid("anything goes", None));

        let regex = Regex::new(r"^color_").unwrap();
        assert!(is_name_valid("color_primary", Some(&regex)));
        assert!(!is_name_valid("primary", Some(&regex)));

        // search, not full match
        let regex = Regex::new(r"primary").unwrap();
        assert!(is_name_valid("color_primary_light", Some(&regex)));
    }

    #[test]
    fn test_replace_with_groups() {
        let regex = Regex::new(r"^color_(\w+)_(light|dark)$").unwrap();
        assert_eq!(replace("color_primary_light", &regex, "$2_$1"), "light_primary");
        assert_eq!(replace("unrelated", &regex, "$2_$1"), "unrelated");
    }

    #[test]
    fn test_replace_identity_is_noop() {
        let regex = Regex::new(r"(?s).*").unwrap();
        for name in ["color_primary", "", "a/b c", "ünïcode"] {
            assert_eq!(replace(name, &regex, "$0"), name);
        }
    }

    #[test]
    fn test_replace_missing_group_is_empty() {
        let regex = Regex::new(r"^(a)|(b)$").unwrap();
        assert_eq!(replace("b", &regex, "[$1]"), "[]");
        assert_eq!(replace("a", &regex, "$$1"), "$a");
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("color/primary/light"), "color_primary_light");
        assert_eq!(canonicalize("plain"), "plain");
    }

    #[test]
    fn test_kebab_to_camel() {
        assert_eq!(kebab_to_camel("group-border"), "groupBorder");
        assert_eq!(kebab_to_camel("outlineVariant"), "outlineVariant");
        assert_eq!(kebab_to_camel("conteiner-4"), "conteiner4");
        assert_eq!(kebab_to_camel("tsar-check-radio"), "tsarCheckRadio");
    }
}
