// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Tree-shaped output representation for lowered SIL functions.
//!
//! This crate defines the node vocabulary the lowering pass emits: plain
//! expression and statement trees with labels and gotos, never re-structured
//! control flow. Nodes are owned values; consumers clone freely.

pub mod display;
pub mod node;
pub mod pos;

pub use node::{BinOp, Literal, Node, NodeKind, UnaryOp};
pub use pos::SourceRange;
