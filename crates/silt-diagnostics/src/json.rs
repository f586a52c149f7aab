// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! JSON diagnostic output for machine consumption.
//!
//! Produces structured JSON that downstream analysis tooling can parse to
//! decide whether a lowered module is complete enough to analyze.

use serde::Serialize;

use crate::{Diagnostic, Severity};

/// A complete JSON report for one lowering run.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    /// Schema version for forward compatibility.
    pub version: u32,
    /// The module that was lowered.
    pub module: String,
    /// Whether lowering produced no error-severity diagnostics.
    pub success: bool,
    pub diagnostics: Vec<JsonDiagnostic>,
    pub error_count: usize,
    pub warning_count: usize,
}

/// A single diagnostic in JSON form.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    /// Severity: "error", "warning", or "note".
    pub severity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl DiagnosticReport {
    pub fn new(module: impl Into<String>, diagnostics: &[Diagnostic]) -> Self {
        let error_count = diagnostics.iter().filter(|d| d.is_error()).count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        Self {
            version: 1,
            module: module.into(),
            success: error_count == 0,
            diagnostics: diagnostics.iter().map(JsonDiagnostic::from).collect(),
            error_count,
            warning_count,
        }
    }

    pub fn to_json(&self) -> String {
        // Serialization of plain structs with string keys cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<&Diagnostic> for JsonDiagnostic {
    fn from(d: &Diagnostic) -> Self {
        let severity = match d.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        };
        Self {
            severity: severity.to_string(),
            code: d.code.as_ref().map(|c| c.0.clone()),
            message: d.message.clone(),
            function: d.function.clone(),
            location: d.pos.as_ref().map(|p| p.to_string()),
            notes: d.notes.clone(),
        }
    }
}
