// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Terminal formatter for diagnostics.
//!
//! Produces compact, color-coded output:
//!
//! ```text
//! warning[L0002]: unhandled instruction `bind_memory`
//!   --> example.swift:10:5-10:17
//!   in: main
//!    = note: lowered to an empty node
//! ```

use colored::Colorize;

use crate::{Diagnostic, Severity};

/// Formats diagnostics for terminal output.
pub struct DiagnosticFormatter {
    color: bool,
}

impl DiagnosticFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn without_color() -> Self {
        Self { color: false }
    }

    pub fn format(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        let header = match diag.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        };
        let header = match &diag.code {
            Some(code) => format!("{}[{}]", header, code.0),
            None => header.to_string(),
        };
        let header = if self.color {
            match diag.severity {
                Severity::Error => header.red().bold().to_string(),
                Severity::Warning => header.yellow().bold().to_string(),
                Severity::Note => header.blue().bold().to_string(),
            }
        } else {
            header
        };
        out.push_str(&format!("{}: {}\n", header, diag.message));

        if let Some(pos) = &diag.pos {
            out.push_str(&format!("  --> {}\n", pos));
        }
        if let Some(function) = &diag.function {
            out.push_str(&format!("  in: {}\n", function));
        }
        for note in &diag.notes {
            out.push_str(&format!("   = note: {}\n", note));
        }
        out
    }

    pub fn format_all(&self, diags: &[Diagnostic]) -> String {
        diags.iter().map(|d| self.format(d)).collect()
    }
}

impl Default for DiagnosticFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silt_ast::SourceRange;

    #[test]
    fn plain_output_has_location_and_notes() {
        let diag = Diagnostic::warning("unhandled instruction `keypath`")
            .with_code("L0002")
            .in_function("main")
            .at(SourceRange::point("example.swift", 10, 5))
            .with_note("lowered to an empty node");
        let text = DiagnosticFormatter::without_color().format(&diag);
        assert!(text.starts_with("warning[L0002]: unhandled instruction `keypath`"));
        assert!(text.contains("--> example.swift:10:5-10:5"));
        assert!(text.contains("in: main"));
        assert!(text.contains("= note: lowered to an empty node"));
    }
}
