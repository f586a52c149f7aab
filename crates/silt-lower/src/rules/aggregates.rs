// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Aggregate construction and field access rules.

use crate::{LowerCtx, LoweringError};
use silt_ast::{Literal, Node};
use silt_ir::ValueId;

/// Tuples are object literals with positional field names.
pub(crate) fn tuple(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    elements: &[ValueId],
) -> Result<(), LoweringError> {
    let mut fields = Vec::with_capacity(elements.len());
    for (i, element) in elements.iter().enumerate() {
        let value = ctx.resolve(*element)?;
        fields.push((Node::constant(Literal::Int(i as i32)), value));
    }
    ctx.cache_result(result, Node::object_literal(fields).with_pos(ctx.pos.clone()));
    Ok(())
}

pub(crate) fn tuple_field(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    operand: ValueId,
    index: u32,
) -> Result<(), LoweringError> {
    let base = ctx.resolve(operand)?;
    let node = Node::object_ref(base, Node::constant(Literal::Int(index as i32)));
    ctx.cache_result(result, node.with_pos(ctx.pos.clone()));
    Ok(())
}

/// Full tuple destructuring: every result reads its own element of the one
/// resolved tuple expression.
pub(crate) fn destructure(
    ctx: &mut LowerCtx<'_>,
    results: &[ValueId],
    operand: ValueId,
) -> Result<(), LoweringError> {
    let base = ctx.resolve(operand)?;
    for (i, result) in results.iter().enumerate() {
        let node = Node::object_ref(base.clone(), Node::constant(Literal::Int(i as i32)));
        ctx.cache_result(*result, node);
    }
    Ok(())
}

pub(crate) fn struct_literal(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    ty: &str,
    field_values: &[(String, ValueId)],
) -> Result<(), LoweringError> {
    let mut fields = Vec::with_capacity(field_values.len() + 1);
    fields.push((Node::string("type"), Node::string(ty)));
    for (name, value) in field_values {
        let value = ctx.resolve(*value)?;
        fields.push((Node::string(name), value));
    }
    ctx.cache_result(result, Node::object_literal(fields).with_pos(ctx.pos.clone()));
    Ok(())
}

/// Named field access. The field renders as a variable placeholder,
/// declared the first time the name appears in the function.
pub(crate) fn field(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    operand: ValueId,
    name: &str,
) -> Result<(), LoweringError> {
    let base = ctx.resolve(operand)?;
    let field = ctx.field_var(name);
    let node = Node::object_ref(base, field);
    ctx.cache_result(result, node.with_pos(ctx.pos.clone()));
    Ok(())
}

/// Enum values carry their qualified case tag and, when present, a payload
/// under the `data` field.
pub(crate) fn enum_literal(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    ty: &str,
    case: &str,
    payload: Option<ValueId>,
) -> Result<(), LoweringError> {
    let mut fields = vec![(
        Node::string("type"),
        Node::string(format!("{}.{}", ty, case)),
    )];
    if let Some(payload) = payload {
        let value = ctx.resolve(payload)?;
        fields.push((Node::string("data"), value));
    }
    ctx.cache_result(result, Node::object_literal(fields).with_pos(ctx.pos.clone()));
    Ok(())
}

pub(crate) fn enum_data(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    operand: ValueId,
) -> Result<(), LoweringError> {
    let base = ctx.resolve(operand)?;
    let node = Node::object_ref(base, Node::string("data"));
    ctx.cache_result(result, node.with_pos(ctx.pos.clone()));
    Ok(())
}

/// `select_enum` is the expression-valued cousin of the switch terminator.
pub(crate) fn select_enum(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    operand: ValueId,
    cases: &[(String, ValueId)],
    default: Option<ValueId>,
) -> Result<(), LoweringError> {
    let scrutinee = ctx.resolve(operand)?;
    let mut arms = Vec::with_capacity(cases.len());
    for (tag, value) in cases {
        let value = ctx.resolve(*value)?;
        arms.push((Node::string(tag), value));
    }
    let default = match default {
        Some(value) => Some(ctx.resolve(value)?),
        None => None,
    };
    let node = Node::switch(scrutinee, arms, default).with_pos(ctx.pos.clone());
    ctx.cache_result(result, node);
    Ok(())
}
