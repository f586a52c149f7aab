// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Source location tracking.

/// A line/column range in a source file.
///
/// Ranges come straight from the frontend's debug info and are best-effort:
/// synthesized instructions have none, and some frontends only report a
/// start position (`end_line == start_line`, `end_col == start_col`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceRange {
    pub file: String,
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl SourceRange {
    pub fn new(file: impl Into<String>, start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            file: file.into(),
            start_line: start.0,
            start_col: start.1,
            end_line: end.0,
            end_col: end.1,
        }
    }

    /// A range covering a single point.
    pub fn point(file: impl Into<String>, line: u32, col: u32) -> Self {
        Self::new(file, (line, col), (line, col))
    }
}

impl std::fmt::Display for SourceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}-{}:{}",
            self.file, self.start_line, self.start_col, self.end_line, self.end_col
        )
    }
}
