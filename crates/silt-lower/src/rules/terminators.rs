// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Terminator lowering - every block ends in explicit control flow.

use crate::rules::apply;
use crate::{block_label, LowerCtx, LoweringError};
use silt_ast::Node;
use silt_ir::{Block, BlockId, Function, Terminator, ValueId};
use tracing::debug;

pub(crate) fn lower(
    ctx: &mut LowerCtx<'_>,
    function: &Function,
    term: &Terminator,
) -> Result<(), LoweringError> {
    debug!(terminator = term.name(), "lowering terminator");
    match term {
        Terminator::Unreachable => {
            ctx.emit_cf(Node::unreachable());
            Ok(())
        }

        Terminator::Return { value } => {
            let value = match value {
                Some(value) => Some(ctx.resolve(*value)?),
                None => None,
            };
            ctx.emit_cf(Node::ret(value));
            Ok(())
        }

        Terminator::Throw { value } => {
            let value = ctx.resolve(*value)?;
            ctx.emit_cf(Node::throw(value));
            Ok(())
        }

        Terminator::Yield {
            values,
            resume,
            unwind,
        } => {
            let mut yielded = Vec::with_capacity(values.len());
            for value in values {
                yielded.push(ctx.resolve(*value)?);
            }
            ctx.emit_cf(Node::yield_stmt(
                yielded,
                goto(*resume),
                goto(*unwind),
            ));
            Ok(())
        }

        Terminator::Unwind => {
            ctx.emit_cf(Node::unwind());
            Ok(())
        }

        Terminator::Br { dest, args } => {
            bind_args(ctx, function, *dest, args)?;
            ctx.emit_cf(goto(*dest));
            Ok(())
        }

        Terminator::CondBr {
            cond,
            true_dest,
            true_args,
            false_dest,
            false_args,
        } => {
            let cond = ctx.resolve(*cond)?;
            bind_args(ctx, function, *true_dest, true_args)?;
            bind_args(ctx, function, *false_dest, false_args)?;
            ctx.emit_cf(Node::if_stmt(
                cond,
                goto(*true_dest),
                Some(goto(*false_dest)),
            ));
            Ok(())
        }

        Terminator::SwitchValue {
            operand,
            cases,
            default,
        } => {
            let value = ctx.resolve(*operand)?;
            let mut arms = Vec::with_capacity(cases.len());
            for (case, dest) in cases {
                let tag = ctx.resolve(*case)?;
                arms.push((tag, goto(*dest)));
            }
            ctx.emit_cf(Node::switch(value, arms, default.map(goto)));
            Ok(())
        }

        Terminator::SwitchEnum {
            operand,
            cases,
            default,
        }
        | Terminator::SwitchEnumAddr {
            operand,
            cases,
            default,
        } => {
            let value = ctx.resolve(*operand)?;
            let mut arms = Vec::with_capacity(cases.len());
            for (tag, dest) in cases {
                let body = enum_case_body(ctx, function, *dest, &value)?;
                arms.push((Node::string(tag), body));
            }
            ctx.emit_cf(Node::switch(value, arms, default.map(goto)));
            Ok(())
        }

        Terminator::CheckedCastBr {
            operand,
            ty,
            success,
            failure,
        } => {
            let value = ctx.resolve(*operand)?;
            let cast = Node::cast(value, ty);
            // The success block's parameter is the cast value.
            if let Some(param) = block_of(function, *success, &ctx.function_name)?
                .params
                .first()
                .cloned()
            {
                if !ctx.symbols.has(param.value) {
                    ctx.symbols
                        .insert(param.value, &param.ty, param.name.as_deref());
                }
                let target = ctx.resolve(param.value)?;
                ctx.emit(Node::assign(target, cast.clone()));
            }
            ctx.emit_cf(Node::if_stmt(cast, goto(*success), Some(goto(*failure))));
            Ok(())
        }

        Terminator::CheckedCastAddrBr {
            src,
            dest,
            ty,
            success,
            failure,
        } => {
            let value = ctx.resolve(*src)?;
            let cast = Node::cast(value, ty);
            if ctx.symbols.has(*dest) {
                let target = ctx.resolve(*dest)?;
                ctx.emit(Node::assign(target, cast.clone()));
            } else {
                ctx.cache_result(*dest, cast.clone());
            }
            ctx.emit_cf(Node::if_stmt(cast, goto(*success), Some(goto(*failure))));
            Ok(())
        }

        Terminator::TryApply {
            callee,
            args,
            normal,
            error,
        } => {
            debug!(error_dest = %error, "error path of try_apply is not modeled");
            let Some(callee_node) = ctx.take(*callee) else {
                apply::unresolved_callee(ctx, *callee);
                ctx.emit_cf(goto(*normal));
                return Ok(());
            };
            let call = apply::finish_call(ctx, callee_node, args);
            let try_node = Node::try_stmt(call);
            // The normal destination's parameter receives the call's result.
            if let Some(param) = block_of(function, *normal, &ctx.function_name)?
                .params
                .first()
                .cloned()
            {
                ctx.symbols
                    .insert_named(param.value, "result_of_try", &param.ty);
                let target = ctx.resolve(param.value)?;
                ctx.emit(Node::assign(target, try_node));
            } else {
                ctx.emit(try_node);
            }
            ctx.emit_cf(goto(*normal));
            Ok(())
        }
    }
}

fn goto(dest: BlockId) -> Node {
    Node::goto(block_label(dest))
}

fn block_of<'f>(
    function: &'f Function,
    id: BlockId,
    function_name: &str,
) -> Result<&'f Block, LoweringError> {
    function.block(id).ok_or_else(|| LoweringError::UnknownBlock {
        block: id,
        function: function_name.to_string(),
    })
}

/// Declare the destination's parameters and assign the branch arguments,
/// in order, before the goto.
fn bind_args(
    ctx: &mut LowerCtx<'_>,
    function: &Function,
    dest: BlockId,
    args: &[ValueId],
) -> Result<(), LoweringError> {
    if args.is_empty() {
        return Ok(());
    }
    let params = block_of(function, dest, &ctx.function_name)?.params.clone();
    for (param, arg) in params.iter().zip(args) {
        if !ctx.symbols.has(param.value) {
            ctx.symbols
                .insert(param.value, &param.ty, param.name.as_deref());
        }
        let target = ctx.resolve(param.value)?;
        let value = ctx.resolve(*arg)?;
        ctx.emit(Node::assign(target, value));
    }
    Ok(())
}

/// The body of a switch-enum arm: bind the payload parameter, if the
/// destination takes one, then jump.
fn enum_case_body(
    ctx: &mut LowerCtx<'_>,
    function: &Function,
    dest: BlockId,
    scrutinee: &Node,
) -> Result<Node, LoweringError> {
    let param = block_of(function, dest, &ctx.function_name)?
        .params
        .first()
        .cloned();
    let Some(param) = param else {
        return Ok(goto(dest));
    };
    if !ctx.symbols.has(param.value) {
        ctx.symbols
            .insert(param.value, &param.ty, param.name.as_deref());
    }
    let target = ctx.resolve(param.value)?;
    let payload = Node::object_ref(scrutinee.clone(), Node::string("data"));
    Ok(Node::block_stmt(vec![
        Node::assign(target, payload),
        goto(dest),
    ]))
}
