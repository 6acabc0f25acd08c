//! Tag Tokenizer
//!
//! Extracts tag tokens from a single (comment-stripped) line.
//! Attributes are not parsed: everything between the tag name and the
//! first `>` is skipped.

use std::sync::LazyLock;

use regex::Regex;

/// `<`, optional `/`, a word-character name, anything but `>`, then `>`.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(\w+)[^>]*>").expect("tag pattern is valid"));

/// Elements that never take a closing tag.
pub const VOID_ELEMENTS: [&str; 4] = ["input", "img", "br", "hr"];

/// How a tag affects nesting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<div ...>`: opens a new nesting level
    Opening,
    /// `</div>`: closes the most recently opened tag
    Closing,
    /// `<div />` or a void element: no effect on nesting
    SelfClosing,
}

/// A tag occurrence on a source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken<'a> {
    pub kind: TagKind,
    /// Tag name, case-sensitive
    pub name: &'a str,
    /// 1-based line number
    pub line: usize,
}

/// Classify a full tag match given its captured name.
///
/// A trailing `/>` wins over a leading `</`, so `</br/>` is self-closing.
/// The void check is case-sensitive.
pub fn classify(tag_text: &str, name: &str) -> TagKind {
    if tag_text.ends_with("/>") {
        TagKind::SelfClosing
    } else if tag_text.starts_with("</") {
        TagKind::Closing
    } else if VOID_ELEMENTS.contains(&name) {
        TagKind::SelfClosing
    } else {
        TagKind::Opening
    }
}

/// Lazy iterator over the tags of one line, left to right.
///
/// Cloning the iterator restarts scanning from the clone's position.
#[derive(Debug, Clone)]
pub struct TagTokens<'a> {
    line: &'a str,
    line_num: usize,
    pos: usize,
}

impl<'a> Iterator for TagTokens<'a> {
    type Item = TagToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.line.len() {
            return None;
        }

        let captures = TAG_PATTERN.captures_at(self.line, self.pos)?;
        let whole = captures.get(0)?;
        let name = captures.get(1)?.as_str();
        self.pos = whole.end();

        let kind = classify(whole.as_str(), name);
        log::trace!("line {}: {:?} <{}>", self.line_num, kind, name);

        Some(TagToken {
            kind,
            name,
            line: self.line_num,
        })
    }
}

/// Tokenize one line. `line_num` is stamped on every token.
pub fn tokenize_line(line: &str, line_num: usize) -> TagTokens<'_> {
    TagTokens {
        line,
        line_num,
        pos: 0,
    }
}
