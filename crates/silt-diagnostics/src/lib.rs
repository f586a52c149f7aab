// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Lowering diagnostics.
//!
//! Provides a unified diagnostic type for everything the lowering pass can
//! report without aborting: unimplemented instructions, unresolved callees,
//! functions skipped for missing bodies. Fatal conditions are a separate
//! error type in the lowering crate; these are the survivable tier.

pub mod formatter;
pub mod json;

use serde::Serialize;
use silt_ast::SourceRange;

// ============================================================================
// Core Types
// ============================================================================

/// A single diagnostic with enough context for display.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: Option<DiagCode>,
    pub message: String,
    /// The function being lowered when this was reported.
    pub function: Option<String>,
    pub pos: Option<SourceRange>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Note,
}

/// A diagnostic code like L0002.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct DiagCode(pub String);

// ============================================================================
// Builder API
// ============================================================================

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: None,
            message: message.into(),
            function: None,
            pos: None,
            notes: Vec::new(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            function: None,
            pos: None,
            notes: Vec::new(),
        }
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            code: None,
            message: message.into(),
            function: None,
            pos: None,
            notes: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(DiagCode(code.into()));
        self
    }

    pub fn in_function(mut self, name: impl Into<String>) -> Self {
        self.function = Some(name.into());
        self
    }

    pub fn at(mut self, pos: SourceRange) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_context() {
        let d = Diagnostic::warning("unhandled instruction `bind_memory`")
            .with_code("L0002")
            .in_function("main")
            .with_note("lowered to an empty node");
        assert_eq!(d.severity, Severity::Warning);
        assert_eq!(d.code.as_ref().unwrap().0, "L0002");
        assert_eq!(d.function.as_deref(), Some("main"));
        assert_eq!(d.notes.len(), 1);
        assert!(!d.is_error());
    }
}
