//! Report rendering
//!
//! Turns a [`BalanceReport`] into the text the binary prints.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::validation::{BalanceReport, Diagnostic};

pub const BALANCED_MESSAGE: &str = "All tags balanced!";
pub const UNCLOSED_HEADER: &str = "Unclosed tags:";

/// Output format for the command-line tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render the human-readable report, one line per entry.
///
/// Mismatches come first in scan order. A halted scan stops there;
/// otherwise the unclosed-tag block or the balanced message follows.
pub fn render_text(report: &BalanceReport) -> String {
    let mut out = String::new();

    for diagnostic in report.diagnostics.iter().filter(|d| !d.is_unclosed()) {
        push_line(&mut out, &diagnostic.to_string());
    }

    if report.halted {
        return out;
    }

    let mut unclosed = report.unclosed().peekable();
    if unclosed.peek().is_some() {
        push_line(&mut out, UNCLOSED_HEADER);
        for diagnostic in unclosed {
            push_line(&mut out, &format!("  {}", diagnostic));
        }
    } else {
        push_line(&mut out, BALANCED_MESSAGE);
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
    message: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a Path,
    balanced: bool,
    halted: bool,
    lines_scanned: usize,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

/// Render the report as pretty-printed JSON
pub fn render_json(path: &Path, report: &BalanceReport) -> Result<String> {
    let json = JsonReport {
        path,
        balanced: report.is_balanced(),
        halted: report.halted,
        lines_scanned: report.lines_scanned,
        diagnostics: report
            .diagnostics
            .iter()
            .map(|diagnostic| JsonDiagnostic {
                diagnostic,
                message: diagnostic.to_string(),
            })
            .collect(),
    };

    let mut rendered = serde_json::to_string_pretty(&json)?;
    rendered.push('\n');
    Ok(rendered)
}

pub fn render(format: OutputFormat, path: &Path, report: &BalanceReport) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(path, report),
    }
}
