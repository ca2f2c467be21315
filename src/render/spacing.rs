//! Spacing output: a Swift constants enum and Android `dimens.xml`.

use std::fmt::Write as _;
use std::path::Path;

use crate::processor::names::upper_camel_case;
use crate::types::SpaceToken;

use super::{number, slash_banner, xml_header, FileContents};

/// `enum SpaceTokens` with one nested enum per token group.
pub fn render_swift_spacing(tokens: &[SpaceToken], file: &Path) -> FileContents {
    let mut out = slash_banner();
    out.push_str("import CoreGraphics\n\npublic enum SpaceTokens {\n");

    for (i, group) in groups(tokens).into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "    public enum {} {{", upper_camel_case(group));
        for token in tokens.iter().filter(|t| &t.group == group) {
            let _ = writeln!(
                out,
                "        public static let {}: CGFloat = {}",
                token.name,
                number(token.value)
            );
        }
        out.push_str("    }\n");
    }

    out.push_str("}\n");
    FileContents::text(file, out)
}

/// `<dimen name="...">Ndp</dimen>` for every token.
pub fn render_android_dimens(tokens: &[SpaceToken], file: &Path) -> FileContents {
    let mut out = xml_header();
    out.push_str("<resources>\n");
    for token in tokens {
        let _ = writeln!(
            out,
            "    <dimen name=\"{}\">{}dp</dimen>",
            token.name,
            number(token.value)
        );
    }
    out.push_str("</resources>\n");
    FileContents::text(file, out)
}

/// Groups in first-seen order.
fn groups(tokens: &[SpaceToken]) -> Vec<&String> {
    let mut groups: Vec<&String> = Vec::new();
    for token in tokens {
        if !groups.contains(&&token.group) {
            groups.push(&token.group);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<SpaceToken> {
        vec![
            SpaceToken::new("space0_5", "space", 2.0),
            SpaceToken::new("space4", "space", 16.0),
            SpaceToken::new("borderRadiusSm", "rounded", 6.5),
        ]
    }

    #[test]
    fn test_swift_spacing() {
        let file = render_swift_spacing(&tokens(), Path::new("SpaceTokens.swift"));
        insta::assert_snapshot!(file.as_text().unwrap(), @r"
        //
        // THIS FILE IS GENERATED BY TOKEX. DO NOT EDIT.
        //

        import CoreGraphics

        public enum SpaceTokens {
            public enum Space {
                public static let space0_5: CGFloat = 2
                public static let space4: CGFloat = 16
            }

            public enum Rounded {
                public static let borderRadiusSm: CGFloat = 6.5
            }
        }
        ");
    }

    #[test]
    fn test_android_dimens() {
        let file = render_android_dimens(&tokens(), Path::new("res/values/dimens.xml"));
        let xml = file.as_text().unwrap();
        assert!(xml.contains("    <dimen name=\"space0_5\">2dp</dimen>\n"));
        assert!(xml.contains("    <dimen name=\"borderRadiusSm\">6.5dp</dimen>\n"));
        assert!(xml.ends_with("</resources>\n"));
    }
}
