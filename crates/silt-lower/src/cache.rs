// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Pending node cache.
//!
//! Expression-producing instructions park their tree here, keyed by result
//! value, until the single consuming instruction takes it. `take` is the
//! only read: consuming removes the entry, so a node is spliced into the
//! output exactly once.

use silt_ast::Node;
use silt_ir::ValueId;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct NodeCache {
    nodes: HashMap<ValueId, Node>,
}

impl NodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, value: ValueId) -> bool {
        self.nodes.contains_key(&value)
    }

    pub fn put(&mut self, value: ValueId, node: Node) {
        if self.nodes.insert(value, node).is_some() {
            debug!(%value, "pending node overwritten");
        }
    }

    /// Take the pending node for `value`, if present. Consumes the entry.
    pub fn take(&mut self, value: ValueId) -> Option<Node> {
        self.nodes.remove(&value)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_consumes_the_entry() {
        let mut c = NodeCache::new();
        c.put(ValueId(1), Node::var("x"));
        assert_eq!(c.take(ValueId(1)), Some(Node::var("x")));
        assert_eq!(c.take(ValueId(1)), None);
    }

    #[test]
    fn put_overwrites_silently() {
        let mut c = NodeCache::new();
        c.put(ValueId(1), Node::var("x"));
        c.put(ValueId(1), Node::var("y"));
        assert_eq!(c.take(ValueId(1)), Some(Node::var("y")));
    }

    #[test]
    fn clear_empties_everything() {
        let mut c = NodeCache::new();
        c.put(ValueId(1), Node::empty());
        c.put(ValueId(2), Node::empty());
        c.clear();
        assert!(!c.has(ValueId(1)));
        assert!(!c.has(ValueId(2)));
    }
}
