// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Symbol table - values with a declared variable identity.
//!
//! Values land here when an instruction gives them storage semantics
//! (allocations, globals, branch-bound block parameters, function
//! arguments). Every later use of such a value reads through its generated
//! variable name instead of inlining an expression.

use silt_ir::ValueId;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub ty: String,
}

/// Function-scoped map from value identity to generated name and type.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<ValueId, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, value: ValueId) -> bool {
        self.entries.contains_key(&value)
    }

    pub fn get(&self, value: ValueId) -> Option<&Symbol> {
        self.entries.get(&value)
    }

    /// Insert a value with a generated name: `<hint>_<hex>` when a source
    /// name hint is available, the bare hex of the identity otherwise.
    pub fn insert(&mut self, value: ValueId, ty: &str, hint: Option<&str>) -> String {
        let name = match hint {
            Some(hint) => format!("{}_{:x}", hint, value.0),
            None => format!("{:x}", value.0),
        };
        self.entries.insert(
            value,
            Symbol {
                name: name.clone(),
                ty: ty.to_string(),
            },
        );
        name
    }

    /// Insert a value under an exact name, bypassing name generation. Used
    /// for function arguments, globals, and the `result_of_try` binding.
    pub fn insert_named(&mut self, value: ValueId, name: &str, ty: &str) {
        self.entries.insert(
            value,
            Symbol {
                name: name.to_string(),
                ty: ty.to_string(),
            },
        );
    }

    /// Make `dst` an exact alias of `src`: same name, same type. Used by
    /// box and value-buffer projections, whose result is the same storage.
    pub fn duplicate(&mut self, dst: ValueId, src: ValueId) -> bool {
        match self.entries.get(&src).cloned() {
            Some(symbol) => {
                self.entries.insert(dst, symbol);
                true
            }
            None => false,
        }
    }

    /// Re-generate a value's name from a late-arriving hint. The caller is
    /// responsible for not renaming values that were already declared.
    pub fn set_hint(&mut self, value: ValueId, hint: &str) {
        if let Some(symbol) = self.entries.get_mut(&value) {
            symbol.name = format!("{}_{:x}", hint, value.0);
        }
    }

    /// Remove a value. Removing an absent value is fine: deallocations can
    /// target storage this pass never modeled.
    pub fn remove(&mut self, value: ValueId) -> bool {
        self.entries.remove(&value).is_some()
    }
}
