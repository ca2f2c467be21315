//! Swift typography output.

use std::fmt::Write as _;
use std::path::Path;

use crate::types::TextStyle;

use super::{number, slash_banner, FileContents};

/// `UIFont` accessors for every style, plus a `TextStyleMetrics` table
/// carrying line height and spacing.
pub fn render_swift_typography(styles: &[TextStyle], file: &Path) -> FileContents {
    let mut out = slash_banner();
    out.push_str("import UIKit\n\npublic extension UIFont {\n");
    for style in styles {
        let _ = writeln!(
            out,
            "    static var {}: UIFont {{ font(\"{}\", size: {}) }}",
            style.name,
            style.font_name,
            number(style.font_size)
        );
    }
    out.push_str(
        "\n    private static func font(_ name: String, size: CGFloat) -> UIFont {\n        \
         UIFont(name: name, size: size) ?? .systemFont(ofSize: size)\n    }\n}\n\n",
    );

    out.push_str("public struct TextStyleMetrics {\n");
    out.push_str("    public let lineHeight: CGFloat?\n");
    out.push_str("    public let letterSpacing: CGFloat\n");
    out.push_str("    public let paragraphSpacing: CGFloat?\n}\n\n");

    out.push_str("public extension TextStyleMetrics {\n");
    for style in styles {
        let _ = writeln!(
            out,
            "    static let {} = TextStyleMetrics(lineHeight: {}, letterSpacing: {}, paragraphSpacing: {})",
            style.name,
            optional(style.line_height),
            number(style.letter_spacing),
            optional(style.paragraph_spacing)
        );
    }
    out.push_str("}\n");

    FileContents::text(file, out)
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "nil".to_string(), number)
}
