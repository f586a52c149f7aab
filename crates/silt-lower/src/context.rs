// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Per-function lowering state and the operand resolution protocol.

use crate::{block_label, FunctionEntity, LoweringError, NodeCache, SymbolTable};
use silt_ast::{Node, SourceRange};
use silt_diagnostics::Diagnostic;
use silt_ir::{BlockId, BlockParam, ValueId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Pass-level knobs. Carried by value; there is no global state.
#[derive(Debug, Clone)]
pub struct LowerConfig {
    /// Feed `debug_value` name hints into generated variable names.
    pub use_name_hints: bool,
    /// Abort on instructions the pass does not lower, instead of emitting
    /// an empty node and a warning diagnostic.
    pub fail_on_unhandled: bool,
}

impl Default for LowerConfig {
    fn default() -> Self {
        Self {
            use_name_hints: true,
            fail_on_unhandled: false,
        }
    }
}

/// State for lowering one function.
///
/// The symbol table, pending cache and declared set live for the whole
/// function: a value defined in one block can be consumed in a later one.
pub struct LowerCtx<'a> {
    pub config: &'a LowerConfig,
    pub function_name: String,
    pub symbols: SymbolTable,
    pub cache: NodeCache,
    pub entity: FunctionEntity,
    /// Position of the instruction currently being lowered.
    pub pos: Option<SourceRange>,
    declared: HashSet<ValueId>,
    fields_seen: HashSet<String>,
    body: Vec<Stmt>,
    /// Body serial of the retractable statement a pending value emitted.
    pending_stmts: HashMap<ValueId, u64>,
    next_serial: u64,
    diagnostics: &'a mut Vec<Diagnostic>,
}

/// A body statement, tagged so retraction removes exactly the statement a
/// pending value emitted, not a structurally identical sibling.
struct Stmt {
    serial: u64,
    node: Node,
}

impl<'a> LowerCtx<'a> {
    pub fn new(
        config: &'a LowerConfig,
        function_name: &str,
        entity: FunctionEntity,
        diagnostics: &'a mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            config,
            function_name: function_name.to_string(),
            symbols: SymbolTable::new(),
            cache: NodeCache::new(),
            entity,
            pos: None,
            declared: HashSet::new(),
            fields_seen: HashSet::new(),
            body: Vec::new(),
            pending_stmts: HashMap::new(),
            next_serial: 0,
            diagnostics,
        }
    }

    // ── Operand resolution ──────────────────────────────────────────────

    /// Resolve a value to the node that reads it.
    ///
    /// Declared values resolve to a variable reference, synthesizing the
    /// declaration on first resolution. Otherwise the pending node is
    /// consumed, inlined into its first consumer, and the value is named in
    /// the symbol table so every later use reads a variable instead. A value
    /// in neither place is a definition-order violation and aborts the pass.
    pub fn resolve(&mut self, value: ValueId) -> Result<Node, LoweringError> {
        if self.symbols.has(value) {
            self.declare_if_needed(value);
            // has() checked above
            let name = self.symbols.get(value).map(|s| s.name.clone()).unwrap_or_default();
            return Ok(Node::var(name).with_pos(self.pos.clone()));
        }
        if let Some(node) = self.take(value) {
            self.symbols.insert(value, "Any", None);
            return Ok(node);
        }
        Err(LoweringError::UndefinedValue {
            value,
            function: self.function_name.clone(),
        })
    }

    /// Resolution for positions where the reference may legitimately be
    /// missing (call arguments): an unknown value becomes an empty node.
    pub fn resolve_or_empty(&mut self, value: ValueId) -> Node {
        if !self.symbols.has(value) && !self.cache.has(value) {
            debug!(%value, function = %self.function_name, "operand not found, using empty node");
            return Node::empty();
        }
        match self.resolve(value) {
            Ok(node) => node,
            Err(_) => Node::empty(),
        }
    }

    /// Consume a pending node. Also retracts the exact statement it was
    /// emitted as, where call nodes sit until something consumes them.
    pub fn take(&mut self, value: ValueId) -> Option<Node> {
        let node = self.cache.take(value)?;
        if let Some(serial) = self.pending_stmts.remove(&value) {
            self.body.retain(|stmt| stmt.serial != serial);
        }
        Some(node)
    }

    /// Consume and drop a pending node, if any.
    pub fn discard(&mut self, value: ValueId) {
        let _ = self.take(value);
    }

    pub fn cache_result(&mut self, value: ValueId, node: Node) {
        // A replaced pending node no longer owns its emitted statement.
        self.pending_stmts.remove(&value);
        self.cache.put(value, node);
    }

    fn declare_if_needed(&mut self, value: ValueId) {
        if !self.declared.insert(value) {
            return;
        }
        if let Some(symbol) = self.symbols.get(value) {
            let (name, ty) = (symbol.name.clone(), symbol.ty.clone());
            self.entity.declarations.push(Node::decl(&name, &ty));
            self.entity.variable_types.insert(name, ty);
        }
    }

    /// Late name hint from debug info. Only applies before the value's
    /// declaration is synthesized; renaming afterwards would orphan it.
    pub fn apply_hint(&mut self, value: ValueId, hint: &str) {
        if !self.config.use_name_hints || self.declared.contains(&value) {
            return;
        }
        self.symbols.set_hint(value, hint);
    }

    /// Register a function argument: exact source name when present,
    /// pre-declared so no declaration statement is synthesized for it.
    pub fn declare_argument(&mut self, param: &BlockParam) {
        let name = match &param.name {
            Some(name) => {
                self.symbols.insert_named(param.value, name, &param.ty);
                name.clone()
            }
            None => self.symbols.insert(param.value, &param.ty, None),
        };
        self.declared.insert(param.value);
        self.entity.argument_names.push(name.clone());
        self.entity.argument_types.push(param.ty.clone());
        self.entity.variable_types.insert(name, param.ty.clone());
    }

    /// Field names render as variables. The placeholder is declared on
    /// first sight and shared by every access to that field name.
    pub fn field_var(&mut self, name: &str) -> Node {
        if self.fields_seen.insert(name.to_string()) {
            self.entity.declarations.push(Node::decl(name, "Any"));
            self.entity
                .variable_types
                .insert(name.to_string(), "Any".to_string());
        }
        Node::var(name)
    }

    // ── Statement emission ──────────────────────────────────────────────

    pub fn emit(&mut self, node: Node) {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.body.push(Stmt { serial, node });
    }

    /// Emit a statement that is also consumable as an expression (calls).
    /// If a later instruction takes it, `take` retracts the statement.
    pub fn emit_and_cache(&mut self, value: ValueId, node: Node) {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.body.push(Stmt {
            serial,
            node: node.clone(),
        });
        self.pending_stmts.insert(value, serial);
        self.cache.put(value, node);
    }

    /// Emit a control-flow node and record it on the entity. The node picks
    /// up the current position unless it already carries one.
    pub fn emit_cf(&mut self, node: Node) {
        let node = if node.pos.is_none() {
            node.with_pos(self.pos.clone())
        } else {
            node
        };
        self.entity.cf_nodes.push(node.clone());
        self.emit(node);
    }

    /// Wrap the accumulated statements as the labeled body of `block`.
    pub fn finish_block(&mut self, block: BlockId) {
        let label = block_label(block);
        let body = std::mem::take(&mut self.body)
            .into_iter()
            .map(|stmt| stmt.node)
            .collect();
        self.entity.block_labels.push(label.clone());
        self.entity
            .blocks
            .push(Node::label_stmt(label, Node::block_stmt(body)));
    }

    pub fn diag(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn finish(self) -> FunctionEntity {
        self.entity
    }
}
