// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Per-instruction lowering rules, grouped by shape.

pub(crate) mod aggregates;
pub(crate) mod apply;
pub(crate) mod casts;
pub(crate) mod literals;
pub(crate) mod memory;
pub(crate) mod terminators;

use crate::{LowerCtx, LoweringError};
use silt_ast::Node;
use silt_diagnostics::Diagnostic;
use silt_ir::{InstKind, Instr, ValueId};
use tracing::{debug, warn};

pub(crate) fn lower(ctx: &mut LowerCtx<'_>, inst: &Instr) -> Result<(), LoweringError> {
    ctx.pos = inst.pos.clone();
    debug!(instruction = inst.kind.name(), "lowering instruction");

    match &inst.kind {
        // Allocations put the result in the symbol table; the declaration
        // appears when something first reads it.
        InstKind::AllocStack { result, ty, hint } => {
            memory::alloc(ctx, *result, ty, hint.as_deref())
        }
        InstKind::AllocBox { result, ty, hint } => memory::alloc(ctx, *result, ty, hint.as_deref()),
        InstKind::AllocRef { result, ty }
        | InstKind::AllocRefDynamic { result, ty }
        | InstKind::AllocExistentialBox { result, ty } => memory::alloc(ctx, *result, ty, None),
        InstKind::AllocValueBuffer { result, ty, .. } => memory::alloc(ctx, *result, ty, None),
        InstKind::AllocGlobal { .. } => Ok(()),

        InstKind::DeallocStack { operand }
        | InstKind::DeallocBox { operand }
        | InstKind::DeallocRef { operand }
        | InstKind::DeallocValueBuffer { operand }
        | InstKind::DeallocExistentialBox { operand }
        | InstKind::DeinitExistential { operand } => memory::dealloc(ctx, *operand),
        InstKind::DeallocPartialRef { instance, .. } => memory::dealloc(ctx, *instance),

        InstKind::ProjectBox { result, operand }
        | InstKind::ProjectValueBuffer { result, operand }
        | InstKind::ProjectExistentialBox { result, operand } => {
            memory::project(ctx, *result, *operand)
        }

        InstKind::DebugValue { operand, name } => {
            memory::debug_value(ctx, *operand, name.as_deref())
        }

        InstKind::Load { result, operand }
        | InstKind::LoadBorrow { result, operand }
        | InstKind::BeginBorrow { result, operand }
        | InstKind::BeginAccess { result, operand }
        | InstKind::MarkUninitialized { result, operand }
        | InstKind::CopyValue { result, operand }
        | InstKind::InitEnumDataAddr { result, operand }
        | InstKind::RefTailAddr { result, operand } => memory::passthrough(ctx, *result, *operand),
        InstKind::MarkDependence { result, value, .. } => memory::passthrough(ctx, *result, *value),

        InstKind::Store { src, dest }
        | InstKind::StoreBorrow { src, dest }
        | InstKind::Assign { src, dest }
        | InstKind::CopyAddr { src, dest } => memory::store(ctx, *src, *dest),

        InstKind::EndBorrow { operand }
        | InstKind::EndAccess { operand }
        | InstKind::DestroyAddr { operand } => {
            ctx.discard(*operand);
            Ok(())
        }

        InstKind::IndexAddr {
            result,
            base,
            index,
        }
        | InstKind::TailAddr {
            result,
            base,
            index,
        } => memory::index(ctx, *result, *base, *index),

        InstKind::RefCountOp { kind, operand } => {
            debug!(op = kind.name(), value = %operand, "reference counting is identity-preserving");
            Ok(())
        }

        InstKind::FunctionRef { result, name } => literals::function_ref(ctx, *result, name),
        InstKind::GlobalAddr { result, name, ty } => literals::global_addr(ctx, *result, name, ty),
        InstKind::IntegerLiteral { result, value } => literals::integer(ctx, *result, *value),
        InstKind::FloatLiteral {
            result,
            bits,
            value,
            text,
        } => literals::float(ctx, *result, *bits, *value, text),
        InstKind::StringLiteral { result, value } => literals::string(ctx, *result, value),

        InstKind::Metatype { result, ty } => literals::metatype(ctx, *result, ty, None),
        InstKind::ValueMetatype {
            result,
            ty,
            operand,
        }
        | InstKind::ExistentialMetatype {
            result,
            ty,
            operand,
        } => literals::metatype(ctx, *result, ty, Some(*operand)),

        InstKind::Method {
            result,
            kind,
            receiver,
            holder,
            member,
        } => apply::method(ctx, *result, *kind, *receiver, holder, member),

        InstKind::Apply {
            result,
            callee,
            args,
        }
        | InstKind::PartialApply {
            result,
            callee,
            args,
        } => apply::apply(ctx, *result, *callee, args),
        InstKind::BeginApply {
            results,
            token,
            callee,
            args,
        } => apply::begin_apply(ctx, results, *token, *callee, args),
        InstKind::EndApply { token } | InstKind::AbortApply { token } => {
            ctx.discard(*token);
            Ok(())
        }
        InstKind::Builtin { result, name, args } => apply::builtin(ctx, *result, name, args),

        InstKind::Tuple { result, elements } => aggregates::tuple(ctx, *result, elements),
        InstKind::TupleExtract {
            result,
            operand,
            index,
        }
        | InstKind::TupleElementAddr {
            result,
            operand,
            index,
        } => aggregates::tuple_field(ctx, *result, *operand, *index),
        InstKind::DestructureTuple { results, operand } => {
            aggregates::destructure(ctx, results, *operand)
        }
        InstKind::Struct { result, ty, fields } => aggregates::struct_literal(ctx, *result, ty, fields),
        InstKind::StructExtract {
            result,
            operand,
            field,
        }
        | InstKind::StructElementAddr {
            result,
            operand,
            field,
        }
        | InstKind::RefElementAddr {
            result,
            operand,
            field,
        } => aggregates::field(ctx, *result, *operand, field),

        InstKind::Enum {
            result,
            ty,
            case,
            payload,
        } => aggregates::enum_literal(ctx, *result, ty, case, *payload),
        InstKind::UncheckedEnumData { result, operand }
        | InstKind::UncheckedTakeEnumDataAddr { result, operand } => {
            aggregates::enum_data(ctx, *result, *operand)
        }
        InstKind::InjectEnumAddr { operand, case } => {
            debug!(value = %operand, case = %case, "enum tag injection has no dataflow");
            Ok(())
        }
        InstKind::SelectEnum {
            result,
            operand,
            cases,
            default,
        } => aggregates::select_enum(ctx, *result, *operand, cases, *default),

        InstKind::InitExistential {
            result,
            operand,
            ty,
        } => casts::init_existential(ctx, *result, *operand, ty),
        InstKind::OpenExistential {
            result,
            operand,
            ty,
        }
        | InstKind::UnconditionalCheckedCast {
            result,
            operand,
            ty,
        } => casts::cast(ctx, *result, *operand, ty),
        InstKind::Conversion {
            result,
            operand,
            ty,
            kind,
        } => casts::conversion(ctx, *result, *operand, ty, *kind),
        InstKind::UnconditionalCheckedCastAddr { src, dest, ty } => {
            casts::cast_addr(ctx, *src, *dest, ty)
        }

        InstKind::CondFail { operand, message } => {
            if let Some(message) = message {
                debug!(message = %message, "cond_fail message not carried");
            }
            let cond = ctx.resolve_or_empty(*operand);
            let node = Node::assert(cond).with_pos(ctx.pos.clone());
            ctx.emit(node);
            Ok(())
        }

        InstKind::KeyPath { result } => unhandled(ctx, inst.kind.name(), Some(*result)),
        InstKind::IndexRawPointer { result, .. }
        | InstKind::IsUnique { result, .. }
        | InstKind::IsEscapingClosure { result, .. } => {
            unhandled(ctx, inst.kind.name(), Some(*result))
        }
        InstKind::BindMemory { .. } | InstKind::MarkFunctionEscape { .. } => {
            unhandled(ctx, inst.kind.name(), None)
        }
    }
}

/// An instruction with no lowering rule: empty node plus a warning, or a
/// hard error when the pass is configured to be strict.
fn unhandled(
    ctx: &mut LowerCtx<'_>,
    name: &str,
    result: Option<ValueId>,
) -> Result<(), LoweringError> {
    if ctx.config.fail_on_unhandled {
        return Err(LoweringError::UnhandledInstruction {
            name: name.to_string(),
            function: ctx.function_name.clone(),
        });
    }
    warn!(instruction = name, function = %ctx.function_name, "unhandled instruction");
    let mut diag = Diagnostic::warning(format!("unhandled instruction `{}`", name))
        .with_code("L0002")
        .in_function(&ctx.function_name)
        .with_note("lowered to an empty node");
    if let Some(pos) = &ctx.pos {
        diag = diag.at(pos.clone());
    }
    ctx.diag(diag);
    if let Some(result) = result {
        ctx.cache_result(result, Node::empty());
    }
    Ok(())
}
