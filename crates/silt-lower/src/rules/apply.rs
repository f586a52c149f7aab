// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Call-site lowering and dynamic dispatch.

use crate::builtins::{self, Operator};
use crate::{LowerCtx, LoweringError};
use silt_ast::{Literal, Node, NodeKind};
use silt_diagnostics::Diagnostic;
use silt_ir::{MethodKind, ValueId};
use tracing::error;

/// Direct and partial application.
///
/// A callee that resolved to a summarized-operator name collapses into a
/// unary or binary expression, and any other summarized callee stays an
/// opaque name constant. A function-expression callee becomes a call node,
/// emitted as a statement but still consumable as an expression.
pub(crate) fn apply(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    callee: ValueId,
    args: &[ValueId],
) -> Result<(), LoweringError> {
    let Some(callee_node) = ctx.take(callee) else {
        unresolved_callee(ctx, callee);
        ctx.cache_result(result, Node::empty());
        return Ok(());
    };
    if let NodeKind::Constant(Literal::Str(name)) = &callee_node.kind {
        if let Some(op) = builtins::operator_for(name) {
            if lower_operator(ctx, result, op, args) {
                return Ok(());
            }
        }
    }
    let call = finish_call(ctx, callee_node, args);
    if matches!(call.kind, NodeKind::Constant(_)) {
        // Summarized application: nothing to emit, the name stands in.
        ctx.cache_result(result, call);
    } else {
        ctx.emit_and_cache(result, call);
    }
    Ok(())
}

/// Coroutine application: the call is keyed by its token, and each yielded
/// result reads its own element of the call expression.
pub(crate) fn begin_apply(
    ctx: &mut LowerCtx<'_>,
    results: &[ValueId],
    token: ValueId,
    callee: ValueId,
    args: &[ValueId],
) -> Result<(), LoweringError> {
    let Some(callee_node) = ctx.take(callee) else {
        unresolved_callee(ctx, callee);
        ctx.cache_result(token, Node::empty());
        for result in results {
            ctx.cache_result(*result, Node::empty());
        }
        return Ok(());
    };
    let call = finish_call(ctx, callee_node, args);
    if matches!(call.kind, NodeKind::Constant(_)) {
        for result in results {
            ctx.cache_result(*result, call.clone());
        }
        ctx.cache_result(token, call);
        return Ok(());
    }
    for (i, result) in results.iter().enumerate() {
        let node = Node::object_ref(call.clone(), Node::constant(Literal::Int(i as i32)));
        ctx.cache_result(*result, node);
    }
    ctx.emit_and_cache(token, call);
    Ok(())
}

/// Compiler intrinsics are calls on a namespaced name constant. They have
/// no body to analyze, so they never count as call sites.
pub(crate) fn builtin(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    name: &str,
    args: &[ValueId],
) -> Result<(), LoweringError> {
    let callee = Node::string(format!("Builtin.{}", name));
    let args = resolve_args(ctx, args);
    let call = Node::call(callee, args).with_pos(ctx.pos.clone());
    ctx.emit_and_cache(result, call);
    Ok(())
}

/// Dynamic dispatch: a member lookup on the receiver, producing a function
/// value a later apply consumes.
pub(crate) fn method(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    _kind: MethodKind,
    receiver: Option<ValueId>,
    holder: &str,
    member: &str,
) -> Result<(), LoweringError> {
    let base = match receiver {
        Some(receiver) => ctx.resolve(receiver)?,
        // Protocol-table lookup: no receiver value, only the holder type.
        None => Node::string(holder),
    };
    let node = Node::object_ref(base, Node::function_expr(member));
    ctx.cache_result(result, node.with_pos(ctx.pos.clone()));
    Ok(())
}

/// Build the call node shared by `apply`, `begin_apply` and `try_apply`.
/// Unresolvable arguments degrade to empty nodes and are filtered out;
/// calls to functions without summaries are recorded as call sites.
///
/// A callee that resolved to a name constant has a downstream summary: the
/// application is an opaque value, so the constant itself is returned
/// unwrapped. The arguments are still resolved, consuming their pending
/// nodes, and no call site is recorded.
pub(crate) fn finish_call(ctx: &mut LowerCtx<'_>, callee: Node, args: &[ValueId]) -> Node {
    let args = resolve_args(ctx, args);
    if matches!(callee.kind, NodeKind::Constant(_)) {
        return callee;
    }
    let call = Node::call(callee, args).with_pos(ctx.pos.clone());
    ctx.entity.call_sites.push(call.clone());
    call
}

pub(crate) fn unresolved_callee(ctx: &mut LowerCtx<'_>, callee: ValueId) {
    error!(value = %callee, function = %ctx.function_name, "unresolved callee");
    let mut diag = Diagnostic::error("unresolved callee")
        .with_code("L0001")
        .in_function(&ctx.function_name)
        .with_note("the call lowered to an empty node");
    if let Some(pos) = &ctx.pos {
        diag = diag.at(pos.clone());
    }
    ctx.diag(diag);
}

fn lower_operator(
    ctx: &mut LowerCtx<'_>,
    result: ValueId,
    op: Operator,
    args: &[ValueId],
) -> bool {
    match op {
        Operator::Binary(op) if args.len() >= 2 => {
            let lhs = ctx.resolve_or_empty(args[0]);
            let rhs = ctx.resolve_or_empty(args[1]);
            let node = Node::binary(op, lhs, rhs).with_pos(ctx.pos.clone());
            ctx.cache_result(result, node);
            true
        }
        Operator::Unary(op) if !args.is_empty() => {
            let operand = ctx.resolve_or_empty(args[0]);
            let node = Node::unary(op, operand).with_pos(ctx.pos.clone());
            ctx.cache_result(result, node);
            true
        }
        // Wrong arity for the operator form; fall through to the shared
        // call path, where the constant callee stays opaque.
        _ => false,
    }
}

fn resolve_args(ctx: &mut LowerCtx<'_>, args: &[ValueId]) -> Vec<Node> {
    args.iter()
        .map(|arg| ctx.resolve_or_empty(*arg))
        .filter(|node| !node.is_empty())
        .collect()
}
