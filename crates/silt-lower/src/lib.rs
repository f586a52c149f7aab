// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Lowering from SSA-form input to labeled statement trees.
//!
//! One pass per function: blocks are visited in declaration order, each
//! instruction either contributes a statement to the current block or parks
//! an expression for a later consumer, and every terminator becomes an
//! explicit control-flow node (`goto`, `if`, `switch`, ...). The result is a
//! [`FunctionEntity`] per function, handed to an [`EntitySink`].
//!
//! Three error tiers:
//! - survivable gaps (unhandled instructions, unresolved callees) become
//!   empty nodes plus a [`silt_diagnostics::Diagnostic`];
//! - missing data (no source position, no function body) is logged and
//!   skipped;
//! - a value used before any instruction defined it aborts the pass with
//!   [`LoweringError`], since the input is malformed.

pub mod builtins;
mod cache;
mod context;
mod driver;
mod entity;
mod error;
mod labels;
mod rules;
mod symbols;

pub use cache::NodeCache;
pub use context::{LowerConfig, LowerCtx};
pub use driver::{EntitySink, LowerOutput, Lowering};
pub use entity::FunctionEntity;
pub use error::LoweringError;
pub use labels::block_label;
pub use symbols::{Symbol, SymbolTable};
