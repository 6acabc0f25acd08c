//! Tag Balance Checker
//!
//! Checks that markup tags embedded in a source file (HTML, XML, JSX-style
//! templates) are opened and closed in a properly nested order.
//!
//! This library provides:
//! - Line-oriented tag scanning with `//` comment stripping
//! - A stack-based nesting validator with line-numbered diagnostics
//! - Text and JSON report rendering
//! - Configuration management

pub mod config;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use parser::{TagKind, TagToken, scan_line};
pub use report::{OutputFormat, render_text};
pub use validation::{
    BalanceReport, Diagnostic, DiagnosticKind, MismatchPolicy, Validator, check_document,
    check_document_with,
};
