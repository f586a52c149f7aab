// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! FunctionBuilder - helper for assembling SSA functions.

use crate::{Block, BlockId, BlockParam, Function, InstKind, Instr, Terminator, ValueId};
use silt_ast::SourceRange;

pub struct FunctionBuilder {
    function: Function,
    current_block: BlockId,
    next_value: u32,
    next_block: u32,
}

impl FunctionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let entry = BlockId(0);
        let function = Function {
            name: name.into(),
            pos: None,
            result_types: Vec::new(),
            blocks: vec![Block {
                id: entry,
                params: Vec::new(),
                instructions: Vec::new(),
                terminator: Terminator::Unreachable,
                terminator_pos: None,
            }],
        };

        Self {
            function,
            current_block: entry,
            next_value: 0,
            next_block: 1,
        }
    }

    pub fn set_pos(&mut self, pos: SourceRange) {
        self.function.pos = Some(pos);
    }

    pub fn add_result_type(&mut self, ty: impl Into<String>) {
        self.function.result_types.push(ty.into());
    }

    pub fn create_block(&mut self) -> BlockId {
        let id = BlockId(self.next_block);
        self.next_block += 1;
        self.function.blocks.push(Block {
            id,
            params: Vec::new(),
            instructions: Vec::new(),
            terminator: Terminator::Unreachable,
            terminator_pos: None,
        });
        id
    }

    pub fn switch_to_block(&mut self, block: BlockId) {
        self.current_block = block;
    }

    pub fn fresh_value(&mut self) -> ValueId {
        let id = ValueId(self.next_value);
        self.next_value += 1;
        id
    }

    /// Add a parameter to a block. On the entry block these are the
    /// function's arguments.
    pub fn add_block_param(
        &mut self,
        block: BlockId,
        ty: impl Into<String>,
        name: Option<&str>,
    ) -> ValueId {
        let value = self.fresh_value();
        self.block_mut(block).params.push(BlockParam {
            value,
            ty: ty.into(),
            name: name.map(str::to_owned),
        });
        value
    }

    pub fn emit(&mut self, kind: InstKind) {
        self.emit_at(kind, None);
    }

    pub fn emit_at(&mut self, kind: InstKind, pos: Option<SourceRange>) {
        let block = self.current_block;
        self.block_mut(block).instructions.push(Instr { kind, pos });
    }

    pub fn terminate(&mut self, terminator: Terminator) {
        self.terminate_at(terminator, None);
    }

    pub fn terminate_at(&mut self, terminator: Terminator, pos: Option<SourceRange>) {
        let block = self.current_block;
        let block = self.block_mut(block);
        block.terminator = terminator;
        block.terminator_pos = pos;
    }

    pub fn finish(self) -> Function {
        self.function
    }

    fn block_mut(&mut self, id: BlockId) -> &mut Block {
        self.function
            .blocks
            .iter_mut()
            .find(|b| b.id == id)
            .unwrap_or_else(|| panic!("no such block: {}", id))
    }
}
