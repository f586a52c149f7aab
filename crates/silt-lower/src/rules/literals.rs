// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Literal and reference rules.

use crate::{builtins, LowerCtx, LoweringError};
use silt_ast::{Literal, Node};
use silt_ir::ValueId;
use tracing::debug;

/// References to functions with downstream summaries become name constants;
/// everything else becomes a function expression that call sites unwrap.
pub(crate) fn function_ref(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    name: &str,
) -> Result<(), LoweringError> {
    let node = if builtins::is_built_in(name) {
        Node::string(name)
    } else {
        Node::function_expr(name)
    };
    ctx.cache_result(result, node.with_pos(ctx.pos.clone()));
    Ok(())
}

/// Globals are storage with a known source name.
pub(crate) fn global_addr(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    name: &str,
    ty: &str,
) -> Result<(), LoweringError> {
    ctx.symbols.insert_named(result, name, ty);
    Ok(())
}

/// Integers narrower than 33 bits stay 32-bit constants; anything wider
/// widens to 64-bit.
pub(crate) fn integer(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    value: i128,
) -> Result<(), LoweringError> {
    let lit = if let Ok(v) = i32::try_from(value) {
        Literal::Int(v)
    } else if let Ok(v) = u32::try_from(value) {
        Literal::Int(v as i32)
    } else if let Ok(v) = i64::try_from(value) {
        Literal::Long(v)
    } else if let Ok(v) = u64::try_from(value) {
        Literal::Long(v as i64)
    } else {
        debug!(%value, "integer literal truncated to 64 bits");
        Literal::Long(value as i64)
    };
    ctx.cache_result(result, Node::constant(lit).with_pos(ctx.pos.clone()));
    Ok(())
}

/// Floats keep the narrowest type that holds them. Wider-than-double
/// literals go through the decimal-text constructor, except non-finite
/// values, which the decimal constructor cannot represent and every
/// double can.
pub(crate) fn float(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    bits: u32,
    value: f64,
    text: &str,
) -> Result<(), LoweringError> {
    let lit = if bits <= 32 {
        Literal::Float(value as f32)
    } else if bits <= 64 || !value.is_finite() {
        Literal::Double(value)
    } else {
        Literal::BigDecimal(text.to_string())
    };
    ctx.cache_result(result, Node::constant(lit).with_pos(ctx.pos.clone()));
    Ok(())
}

pub(crate) fn string(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    value: &str,
) -> Result<(), LoweringError> {
    ctx.cache_result(result, Node::string(value).with_pos(ctx.pos.clone()));
    Ok(())
}

/// Metatypes are name constants. The operand of a value-metatype carries no
/// dataflow into the result; its pending node, if any, is dropped.
pub(crate) fn metatype(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    ty: &str,
    operand: Option<ValueId>,
) -> Result<(), LoweringError> {
    if let Some(operand) = operand {
        ctx.discard(operand);
    }
    ctx.cache_result(result, Node::string(ty).with_pos(ctx.pos.clone()));
    Ok(())
}
