// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Module, function and basic-block containers.

use crate::{Instr, Terminator};
use silt_ast::SourceRange;

/// A compilation unit: every function the frontend emitted for one module.
#[derive(Debug, Clone)]
pub struct Module {
    pub name: String,
    pub functions: Vec<Function>,
}

/// A single function in SSA form.
///
/// Functions with no blocks are external or intrinsic stubs; the lowering
/// driver skips them.
#[derive(Debug, Clone)]
pub struct Function {
    /// Demangled function name.
    pub name: String,
    pub pos: Option<SourceRange>,
    /// Printed result types. Empty means no results, more than one means the
    /// function returns a result bundle.
    pub result_types: Vec<String>,
    pub blocks: Vec<Block>,
}

/// Basic block: zero or more parameters, straight-line instructions, one
/// terminator. The first block's parameters are the function's arguments.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    pub params: Vec<BlockParam>,
    pub instructions: Vec<Instr>,
    pub terminator: Terminator,
    /// Source position of the terminator, when the frontend reported one.
    pub terminator_pos: Option<SourceRange>,
}

/// A block parameter (SSA phi input).
#[derive(Debug, Clone)]
pub struct BlockParam {
    pub value: ValueId,
    pub ty: String,
    /// Source-level name, present on function arguments the frontend named.
    pub name: Option<String>,
}

/// Opaque handle for an SSA value, unique within a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub u32);

impl Function {
    pub fn entry(&self) -> Option<&Block> {
        self.blocks.first()
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }
}
