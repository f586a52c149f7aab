// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Conversion and existential rules.

use crate::rules::memory;
use crate::{LowerCtx, LoweringError};
use silt_ast::Node;
use silt_ir::{ConversionKind, ValueId};

pub(crate) fn cast(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    operand: ValueId,
    ty: &str,
) -> Result<(), LoweringError> {
    let value = ctx.resolve(operand)?;
    ctx.cache_result(result, Node::cast(value, ty).with_pos(ctx.pos.clone()));
    Ok(())
}

/// Representational conversions forward the operand untouched; everything
/// else is a real cast.
pub(crate) fn conversion(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    operand: ValueId,
    ty: &str,
    kind: ConversionKind,
) -> Result<(), LoweringError> {
    if kind.is_representational() {
        memory::passthrough(ctx, result, operand)
    } else {
        cast(ctx, result, operand, ty)
    }
}

/// Address-form checked cast: cast the source, then store into the
/// destination like any other store.
pub(crate) fn cast_addr(
    ctx: &mut LowerCtx<'_>,
    src: ValueId,
    dest: ValueId,
    ty: &str,
) -> Result<(), LoweringError> {
    let value = ctx.resolve(src)?;
    let node = Node::cast(value, ty).with_pos(ctx.pos.clone());
    if ctx.symbols.has(dest) {
        let target = ctx.resolve(dest)?;
        let pos = ctx.pos.clone();
        ctx.emit(Node::assign(target, node).with_pos(pos));
    } else {
        ctx.cache_result(dest, node);
    }
    Ok(())
}

/// Boxing a value into an existential keeps the value's identity: when the
/// operand has storage the result aliases its name, otherwise the pending
/// expression is forwarded.
pub(crate) fn init_existential(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    operand: ValueId,
    _ty: &str,
) -> Result<(), LoweringError> {
    if ctx.symbols.duplicate(result, operand) {
        return Ok(());
    }
    memory::passthrough(ctx, result, operand)
}
