//! Tag Scanner
//!
//! Line-oriented front end: comment stripping followed by tag tokenization.
//! No nesting logic lives here.

pub mod lexer;
pub mod preprocess;

pub use lexer::{TagKind, TagToken, TagTokens, VOID_ELEMENTS, classify, tokenize_line};
pub use preprocess::strip_line_comment;

/// Scan a raw source line for tags
///
/// Strips the trailing `//` comment, then tokenizes what is left.
pub fn scan_line(line: &str, line_num: usize) -> TagTokens<'_> {
    lexer::tokenize_line(preprocess::strip_line_comment(line), line_num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_line_ignores_commented_tags() {
        assert_eq!(scan_line("text // <div>", 1).count(), 0);
    }

    #[test]
    fn test_scan_line_keeps_tags_before_comment() {
        let tokens: Vec<_> = scan_line("<div> // </div>", 7).collect();

        assert_eq!(
            tokens,
            vec![TagToken {
                kind: TagKind::Opening,
                name: "div",
                line: 7,
            }]
        );
    }

    #[test]
    fn test_scan_line_url_attribute_drops_tag() {
        assert_eq!(scan_line("<a href=\"https://example.com\">", 1).count(), 0);
    }
}
