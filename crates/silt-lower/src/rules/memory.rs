// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Allocation, deallocation and memory-access rules.

use crate::{LowerCtx, LoweringError};
use silt_ast::Node;
use silt_ir::ValueId;
use tracing::debug;

/// Allocations define storage: the result goes straight into the symbol
/// table and produces no statement here.
pub(crate) fn alloc(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    ty: &str,
    hint: Option<&str>,
) -> Result<(), LoweringError> {
    let hint = if ctx.config.use_name_hints { hint } else { None };
    let name = ctx.symbols.insert(result, ty, hint);
    debug!(value = %result, name = %name, ty = %ty, "allocated");
    Ok(())
}

pub(crate) fn dealloc(ctx: &mut LowerCtx<'_>, operand: ValueId) -> Result<(), LoweringError> {
    if !ctx.symbols.remove(operand) {
        debug!(value = %operand, "deallocating storage this pass never modeled");
    }
    Ok(())
}

/// Box and buffer projections: the projected address is the same storage,
/// so the result aliases the operand's exact name.
pub(crate) fn project(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    operand: ValueId,
) -> Result<(), LoweringError> {
    if ctx.symbols.duplicate(result, operand) {
        return Ok(());
    }
    // The box itself was never given storage; fall back to forwarding
    // whatever expression produced it.
    passthrough(ctx, result, operand)
}

pub(crate) fn debug_value(
    ctx: &mut LowerCtx<'_>,
    operand: ValueId,
    name: Option<&str>,
) -> Result<(), LoweringError> {
    if let Some(name) = name {
        ctx.apply_hint(operand, name);
    }
    Ok(())
}

/// Loads, borrows and other identity-preserving reads forward the operand's
/// node to the result.
pub(crate) fn passthrough(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    operand: ValueId,
) -> Result<(), LoweringError> {
    let node = ctx.resolve(operand)?;
    ctx.cache_result(result, node);
    Ok(())
}

/// Stores become assignments when the destination has storage; otherwise
/// the destination simply takes over the source's pending node.
pub(crate) fn store(
    ctx: &mut LowerCtx<'_>,
    src: ValueId,
    dest: ValueId,
) -> Result<(), LoweringError> {
    let value = ctx.resolve(src)?;
    if ctx.symbols.has(dest) {
        let target = ctx.resolve(dest)?;
        let pos = ctx.pos.clone();
        ctx.emit(Node::assign(target, value).with_pos(pos));
    } else {
        ctx.cache_result(dest, value);
    }
    Ok(())
}

pub(crate) fn index(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    base: ValueId,
    index: ValueId,
) -> Result<(), LoweringError> {
    let base = ctx.resolve(base)?;
    let index = ctx.resolve(index)?;
    ctx.cache_result(result, Node::object_ref(base, index));
    Ok(())
}
