//! Nesting Validator
//!
//! Stack-based matching of opening and closing tags, separated from
//! scanning and output concerns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::{self, TagKind, TagToken};

/// The one tag name whose mismatches are reported under [`MismatchPolicy::DivOnly`].
pub const DISTINGUISHED_TAG: &str = "div";

/// Which closing-tag name mismatches produce a diagnostic.
///
/// A mismatched closing tag always pops the stack; the policy only decides
/// whether the mismatch is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchPolicy {
    /// Report only when the expected or the found name is `div`.
    ///
    /// This is narrower than a general nesting check: `<span><em></span>`
    /// passes silently. Use [`MismatchPolicy::All`] for the general check.
    #[default]
    DivOnly,
    /// Report every mismatch.
    All,
}

impl MismatchPolicy {
    pub fn reports(self, expected: &str, found: &str) -> bool {
        match self {
            MismatchPolicy::DivOnly => expected == DISTINGUISHED_TAG || found == DISTINGUISHED_TAG,
            MismatchPolicy::All => true,
        }
    }
}

/// A tag that has been opened and not yet closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenTag {
    pub name: String,
    /// Line the tag was opened on
    pub line: usize,
}

/// What went wrong at a diagnostic's line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Closing tag with nothing open. Halts the scan.
    UnexpectedClosing { name: String },
    /// Closing tag whose name differs from the innermost open tag
    Mismatch {
        expected: String,
        opened_at: usize,
        found: String,
    },
    /// Tag still open at end of input
    UnclosedTag { name: String },
}

/// A diagnostic tied to a 1-based line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn is_unclosed(&self) -> bool {
        matches!(self.kind, DiagnosticKind::UnclosedTag { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnexpectedClosing { name } => {
                write!(f, "Line {}: Unexpected closing tag {}", self.line, name)
            }
            DiagnosticKind::Mismatch {
                expected,
                opened_at,
                found,
            } => write!(
                f,
                "Line {}: Mismatch! Expected closing {} (opened at {}), found {}",
                self.line, expected, opened_at, found
            ),
            DiagnosticKind::UnclosedTag { name } => write!(f, "{} at line {}", name, self.line),
        }
    }
}

/// Outcome of a whole scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub diagnostics: Vec<Diagnostic>,
    /// True when an unexpected closing tag stopped the scan early
    pub halted: bool,
    /// Lines processed, including the line that halted the scan
    pub lines_scanned: usize,
}

impl BalanceReport {
    /// No diagnostics of any kind and no halt
    pub fn is_balanced(&self) -> bool {
        !self.halted && self.diagnostics.is_empty()
    }

    /// True when the scan ran to the end with nothing left open.
    ///
    /// Reported mismatches do not affect this.
    pub fn stack_emptied(&self) -> bool {
        !self.halted && !self.diagnostics.iter().any(Diagnostic::is_unclosed)
    }

    /// Unclosed-tag diagnostics in opening order
    pub fn unclosed(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_unclosed())
    }
}

/// Whether scanning may continue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Halt,
}

/// Per-scan nesting state
#[derive(Debug, Default)]
pub struct Validator {
    stack: Vec<OpenTag>,
    diagnostics: Vec<Diagnostic>,
    policy: MismatchPolicy,
    halted: bool,
    lines_scanned: usize,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: MismatchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> MismatchPolicy {
        self.policy
    }

    /// Open tags, outermost first
    pub fn open_tags(&self) -> &[OpenTag] {
        &self.stack
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Scan one raw line. Once halted, every call is a no-op.
    pub fn feed_line(&mut self, line_num: usize, line: &str) -> LineOutcome {
        if self.halted {
            return LineOutcome::Halt;
        }
        self.lines_scanned += 1;

        for token in parser::scan_line(line, line_num) {
            if self.process_token(&token) == LineOutcome::Halt {
                return LineOutcome::Halt;
            }
        }

        LineOutcome::Continue
    }

    /// Apply one token to the stack
    pub fn process_token(&mut self, token: &TagToken<'_>) -> LineOutcome {
        if self.halted {
            return LineOutcome::Halt;
        }

        match token.kind {
            TagKind::SelfClosing => {}
            TagKind::Opening => {
                log::debug!("line {}: push <{}>", token.line, token.name);
                self.stack.push(OpenTag {
                    name: token.name.to_string(),
                    line: token.line,
                });
            }
            TagKind::Closing => {
                let Some(open) = self.stack.pop() else {
                    log::debug!(
                        "line {}: </{}> with empty stack, halting",
                        token.line,
                        token.name
                    );
                    self.diagnostics.push(Diagnostic {
                        line: token.line,
                        kind: DiagnosticKind::UnexpectedClosing {
                            name: token.name.to_string(),
                        },
                    });
                    self.halted = true;
                    return LineOutcome::Halt;
                };

                if open.name == token.name {
                    log::debug!("line {}: pop <{}>", token.line, open.name);
                } else if self.policy.reports(&open.name, token.name) {
                    log::debug!(
                        "line {}: </{}> closes <{}> from line {}",
                        token.line,
                        token.name,
                        open.name,
                        open.line
                    );
                    self.diagnostics.push(Diagnostic {
                        line: token.line,
                        kind: DiagnosticKind::Mismatch {
                            expected: open.name,
                            opened_at: open.line,
                            found: token.name.to_string(),
                        },
                    });
                } else {
                    log::debug!(
                        "line {}: </{}> silently pops <{}>",
                        token.line,
                        token.name,
                        open.name
                    );
                }
            }
        }

        LineOutcome::Continue
    }

    /// End the scan, reporting leftover open tags outermost first
    pub fn finish(mut self) -> BalanceReport {
        if !self.halted {
            self.diagnostics
                .extend(self.stack.drain(..).map(|open| Diagnostic {
                    line: open.line,
                    kind: DiagnosticKind::UnclosedTag { name: open.name },
                }));
        }

        BalanceReport {
            diagnostics: self.diagnostics,
            halted: self.halted,
            lines_scanned: self.lines_scanned,
        }
    }
}

/// Check a sequence of lines, numbered from 1
pub fn check_lines<I, S>(lines: I, policy: MismatchPolicy) -> BalanceReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut validator = Validator::with_policy(policy);

    for (idx, line) in lines.into_iter().enumerate() {
        if validator.feed_line(idx + 1, line.as_ref()) == LineOutcome::Halt {
            break;
        }
    }

    validator.finish()
}

/// Check a whole document with the given policy
pub fn check_document_with(content: &str, policy: MismatchPolicy) -> BalanceReport {
    check_lines(content.lines(), policy)
}

/// Check a whole document with the default (div-only) mismatch policy
pub fn check_document(content: &str) -> BalanceReport {
    check_document_with(content, MismatchPolicy::default())
}
