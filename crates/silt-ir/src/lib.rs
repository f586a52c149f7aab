// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! SSA-form input model - modules, functions, blocks, instructions.
//!
//! This is the already-parsed, already-demangled view of a frontend's
//! intermediate language that the lowering pass consumes. Values are opaque
//! integer handles assigned at construction time; types are carried as the
//! frontend's printed type names.

mod builder;
mod display;
mod function;
mod instr;

pub use builder::FunctionBuilder;
pub use function::{Block, BlockId, BlockParam, Function, Module, ValueId};
pub use instr::{
    ConversionKind, InstKind, Instr, MethodKind, RefCountKind, Terminator,
};
