// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Per-function lowering result.

use silt_ast::{Node, SourceRange};
use std::collections::HashMap;
use std::fmt;

/// Everything the pass produced for one function, in a shape a downstream
/// analyzer can wire into its own entity model.
#[derive(Debug, Clone)]
pub struct FunctionEntity {
    /// Demangled function name.
    pub name: String,
    pub pos: Option<SourceRange>,
    /// `"void"` for no results, the single result type, or
    /// `"MultiResultType"` for a result bundle.
    pub return_type: String,
    pub argument_names: Vec<String>,
    pub argument_types: Vec<String>,
    /// One labeled statement per basic block, in declaration order.
    pub blocks: Vec<Node>,
    pub block_labels: Vec<String>,
    /// Declarations synthesized on first resolution, in resolution order.
    pub declarations: Vec<Node>,
    /// Every call node that targets a non-builtin function.
    pub call_sites: Vec<Node>,
    /// Every control-flow node emitted for a terminator.
    pub cf_nodes: Vec<Node>,
    /// Declared variable name to frontend type.
    pub variable_types: HashMap<String, String>,
}

impl FunctionEntity {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pos: None,
            return_type: return_type.into(),
            argument_names: Vec::new(),
            argument_types: Vec::new(),
            blocks: Vec::new(),
            block_labels: Vec::new(),
            declarations: Vec::new(),
            call_sites: Vec::new(),
            cf_nodes: Vec::new(),
            variable_types: HashMap::new(),
        }
    }
}

impl fmt::Display for FunctionEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "entity `{}`", self.name)?;
        writeln!(f, "  return type: {}", self.return_type)?;
        write!(f, "  args:")?;
        for (name, ty) in self.argument_names.iter().zip(&self.argument_types) {
            write!(f, " {}: {}", name, ty)?;
        }
        writeln!(f)?;
        writeln!(f, "  blocks: {}", self.block_labels.join(", "))?;
        writeln!(f, "  declarations: {}", self.declarations.len())?;
        writeln!(f, "  call sites: {}", self.call_sites.len())?;
        writeln!(f, "  control flow nodes: {}", self.cf_nodes.len())?;
        for block in &self.blocks {
            writeln!(f, "  {}", block)?;
        }
        Ok(())
    }
}
