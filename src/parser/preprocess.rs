//! Line Preprocessor
//!
//! Strips same-line `//` comments before tag scanning.

/// Line comment marker.
pub const LINE_COMMENT: &str = "//";

/// Return the part of `line` before the first `//`, or the whole line.
///
/// The marker is matched anywhere, including inside attribute values and
/// string literals: `<a href="http://x">` is cut down to `<a href="http:`.
/// Block comments are not tracked.
pub fn strip_line_comment(line: &str) -> &str {
    match line.find(LINE_COMMENT) {
        Some(idx) => &line[..idx],
        None => line,
    }
}
