//! Nesting Validation
//!
//! Stack-based tag matching, kept apart from scanning and rendering.

pub mod engine;

pub use engine::{
    BalanceReport, DISTINGUISHED_TAG, Diagnostic, DiagnosticKind, LineOutcome, MismatchPolicy,
    OpenTag, Validator, check_document, check_document_with, check_lines,
};
