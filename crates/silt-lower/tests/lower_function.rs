// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! End-to-end lowering tests: build a function, lower it, inspect the
//! rendered blocks and the entity bookkeeping.

use silt_ast::{NodeKind, SourceRange};
use silt_diagnostics::{Diagnostic, Severity};
use silt_ir::{BlockId, FunctionBuilder, InstKind, Terminator};
use silt_lower::{FunctionEntity, LowerConfig, Lowering, LoweringError};

fn lower(function: silt_ir::Function) -> (FunctionEntity, Vec<Diagnostic>) {
    let mut entities = Vec::new();
    let mut diagnostics = Vec::new();
    Lowering::default()
        .lower_function(&function, &mut entities, &mut diagnostics)
        .expect("lowering failed");
    assert_eq!(entities.len(), 1);
    (entities.remove(0), diagnostics)
}

fn block_text(entity: &FunctionEntity, index: usize) -> String {
    entity.blocks[index].to_string()
}

#[test]
fn store_into_local_becomes_named_assignment() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let slot = b.fresh_value();
    b.emit(InstKind::AllocStack {
        result: slot,
        ty: "Swift.Int".into(),
        hint: Some("count".into()),
    });
    let lit = b.fresh_value();
    b.emit(InstKind::IntegerLiteral {
        result: lit,
        value: 42,
    });
    b.emit(InstKind::Store {
        src: lit,
        dest: slot,
    });
    b.terminate(Terminator::Return { value: None });

    let (entity, diagnostics) = lower(b.finish());
    assert!(diagnostics.is_empty());
    assert_eq!(block_text(&entity, 0), "BLOCK #0: { count_0 = 42; return; }");
    assert_eq!(entity.declarations.len(), 1);
    assert_eq!(entity.declarations[0].to_string(), "decl count_0: Swift.Int");
    assert_eq!(
        entity.variable_types.get("count_0").map(String::as_str),
        Some("Swift.Int")
    );
}

#[test]
fn wide_integer_literal_widens_to_long() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let slot = b.fresh_value();
    b.emit(InstKind::AllocStack {
        result: slot,
        ty: "Swift.Int64".into(),
        hint: Some("big".into()),
    });
    let lit = b.fresh_value();
    b.emit(InstKind::IntegerLiteral {
        result: lit,
        value: 5_000_000_000,
    });
    b.emit(InstKind::Store {
        src: lit,
        dest: slot,
    });
    b.terminate(Terminator::Return { value: None });

    let (entity, _) = lower(b.finish());
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { big_0 = 5000000000L; return; }"
    );
}

#[test]
fn unsigned_32_bit_values_stay_int() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let slot = b.fresh_value();
    b.emit(InstKind::AllocStack {
        result: slot,
        ty: "Swift.UInt32".into(),
        hint: Some("u".into()),
    });
    let lit = b.fresh_value();
    // Fits in 32 unsigned bits, not 32 signed bits.
    b.emit(InstKind::IntegerLiteral {
        result: lit,
        value: u32::MAX as i128,
    });
    b.emit(InstKind::Store {
        src: lit,
        dest: slot,
    });
    b.terminate(Terminator::Return { value: None });

    let (entity, _) = lower(b.finish());
    // Reinterpreted as a 32-bit constant, not widened.
    assert_eq!(block_text(&entity, 0), "BLOCK #0: { u_0 = -1; return; }");
}

#[test]
fn float_literals_route_by_width() {
    let cases = [
        (32, 1.5, "1.5", "f_0 = 1.5f"),
        (64, 2.25, "2.25", "f_0 = 2.25"),
        // Wider than double: keep the decimal text, even when the value
        // happens to be representable.
        (80, 2.25, "2.25", "f_0 = big(2.25)"),
        (80, 0.1, "0.1000000000000000000001", "f_0 = big(0.1000000000000000000001)"),
        // Non-finite is the one exception; the decimal constructor cannot
        // hold it and every double can.
        (80, f64::INFINITY, "inf", "f_0 = inf"),
    ];
    for (bits, value, text, expected) in cases {
        let mut b = FunctionBuilder::new("main.f() -> ()");
        let slot = b.fresh_value();
        b.emit(InstKind::AllocStack {
            result: slot,
            ty: "Swift.Double".into(),
            hint: Some("f".into()),
        });
        let lit = b.fresh_value();
        b.emit(InstKind::FloatLiteral {
            result: lit,
            bits,
            value,
            text: text.into(),
        });
        b.emit(InstKind::Store {
            src: lit,
            dest: slot,
        });
        b.terminate(Terminator::Return { value: None });

        let (entity, _) = lower(b.finish());
        assert_eq!(
            block_text(&entity, 0),
            format!("BLOCK #0: {{ {}; return; }}", expected)
        );
    }
}

#[test]
fn summarized_operator_collapses_to_binary_expr() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let slot = b.fresh_value();
    b.emit(InstKind::AllocStack {
        result: slot,
        ty: "Swift.Int".into(),
        hint: Some("sum".into()),
    });
    let op = b.fresh_value();
    b.emit(InstKind::FunctionRef {
        result: op,
        name: "static Swift.Int.+ infix(Swift.Int, Swift.Int) -> Swift.Int".into(),
    });
    let a = b.fresh_value();
    b.emit(InstKind::IntegerLiteral { result: a, value: 1 });
    let c = b.fresh_value();
    b.emit(InstKind::IntegerLiteral { result: c, value: 2 });
    let r = b.fresh_value();
    b.emit(InstKind::Apply {
        result: r,
        callee: op,
        args: vec![a, c],
    });
    b.emit(InstKind::Store { src: r, dest: slot });
    b.terminate(Terminator::Return { value: None });

    let (entity, _) = lower(b.finish());
    assert_eq!(block_text(&entity, 0), "BLOCK #0: { sum_0 = (1 + 2); return; }");
    // Operator applications are not call sites.
    assert!(entity.call_sites.is_empty());
}

#[test]
fn user_calls_are_registered_and_retractable() {
    // Unused result: the call stays a statement.
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let callee = b.fresh_value();
    b.emit(InstKind::FunctionRef {
        result: callee,
        name: "main.callee() -> ()".into(),
    });
    let r = b.fresh_value();
    b.emit(InstKind::Apply {
        result: r,
        callee,
        args: vec![],
    });
    b.terminate(Terminator::Return { value: None });

    let (entity, _) = lower(b.finish());
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { func main.callee() -> ()(); return; }"
    );
    assert_eq!(entity.call_sites.len(), 1);

    // Consumed result: the statement is retracted into the consumer.
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let slot = b.fresh_value();
    b.emit(InstKind::AllocStack {
        result: slot,
        ty: "Swift.Int".into(),
        hint: Some("x".into()),
    });
    let callee = b.fresh_value();
    b.emit(InstKind::FunctionRef {
        result: callee,
        name: "main.callee() -> Swift.Int".into(),
    });
    let r = b.fresh_value();
    b.emit(InstKind::Apply {
        result: r,
        callee,
        args: vec![],
    });
    b.emit(InstKind::Store { src: r, dest: slot });
    b.terminate(Terminator::Return { value: None });

    let (entity, _) = lower(b.finish());
    let text = block_text(&entity, 0);
    assert_eq!(
        text,
        "BLOCK #0: { x_0 = func main.callee() -> Swift.Int(); return; }"
    );
    assert_eq!(entity.call_sites.len(), 1);
}

#[test]
fn shared_producer_materializes_on_second_use() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let a = b.fresh_value();
    b.emit(InstKind::AllocStack {
        result: a,
        ty: "Swift.Int".into(),
        hint: Some("a".into()),
    });
    let c = b.fresh_value();
    b.emit(InstKind::AllocStack {
        result: c,
        ty: "Swift.Int".into(),
        hint: Some("b".into()),
    });
    let lit = b.fresh_value();
    b.emit(InstKind::IntegerLiteral {
        result: lit,
        value: 42,
    });
    // One producer, two consumers.
    b.emit(InstKind::Store { src: lit, dest: a });
    b.emit(InstKind::Store { src: lit, dest: c });
    b.terminate(Terminator::Return { value: None });

    let (entity, diagnostics) = lower(b.finish());
    assert!(diagnostics.is_empty());
    // First use inlines the literal; the second reads the variable it was
    // materialized into.
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { a_0 = 42; b_1 = 2; return; }"
    );
    let declared: Vec<String> = entity.declarations.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        declared,
        vec!["decl a_0: Swift.Int", "decl 2: Any", "decl b_1: Swift.Int"]
    );
}

#[test]
fn summarized_callee_stays_an_opaque_value() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let slot = b.fresh_value();
    b.emit(InstKind::AllocStack {
        result: slot,
        ty: "Swift.Int".into(),
        hint: Some("x".into()),
    });
    let callee = b.fresh_value();
    b.emit(InstKind::FunctionRef {
        result: callee,
        name: "Swift.Int.init(_builtinIntegerLiteral: Builtin.IntLiteral) -> Swift.Int".into(),
    });
    let lit = b.fresh_value();
    b.emit(InstKind::IntegerLiteral { result: lit, value: 1 });
    let r = b.fresh_value();
    b.emit(InstKind::Apply {
        result: r,
        callee,
        args: vec![lit],
    });
    b.emit(InstKind::Store { src: r, dest: slot });
    b.terminate(Terminator::Return { value: None });

    let (entity, _) = lower(b.finish());
    // No call node is built around the summarized name; the constant itself
    // stands in for the application.
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { x_0 = \"Swift.Int.init(_builtinIntegerLiteral: Builtin.IntLiteral) -> Swift.Int\"; return; }"
    );
    assert!(entity.call_sites.is_empty());
}

#[test]
fn unreachable_terminator_is_marked() {
    let mut b = FunctionBuilder::new("main.f(Swift.Bool) -> ()");
    let flag = b.add_block_param(BlockId(0), "Swift.Bool", Some("flag"));
    let bb1 = b.create_block();
    let bb2 = b.create_block();
    b.terminate(Terminator::CondBr {
        cond: flag,
        true_dest: bb1,
        true_args: vec![],
        false_dest: bb2,
        false_args: vec![],
    });
    b.switch_to_block(bb1);
    b.terminate(Terminator::Return { value: None });
    b.switch_to_block(bb2);
    b.terminate(Terminator::Unreachable);

    let (entity, _) = lower(b.finish());
    assert_eq!(block_text(&entity, 2), "BLOCK #2: { unreachable; }");
    // The flat edge list carries the marker too.
    assert_eq!(entity.cf_nodes.len(), 3);
    assert!(entity
        .cf_nodes
        .iter()
        .any(|n| n.kind == NodeKind::Unreachable));
}

#[test]
fn terminator_positions_reach_cf_nodes() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    b.terminate_at(
        Terminator::Return { value: None },
        Some(SourceRange::point("main.swift", 9, 1)),
    );

    let (entity, _) = lower(b.finish());
    assert_eq!(entity.cf_nodes.len(), 1);
    assert_eq!(
        entity.cf_nodes[0].pos,
        Some(SourceRange::point("main.swift", 9, 1))
    );
}

#[test]
fn unresolved_callee_degrades_to_empty() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let phantom = b.fresh_value();
    let r = b.fresh_value();
    b.emit(InstKind::Apply {
        result: r,
        callee: phantom,
        args: vec![],
    });
    b.terminate(Terminator::Return { value: None });

    let (entity, diagnostics) = lower(b.finish());
    assert_eq!(block_text(&entity, 0), "BLOCK #0: { return; }");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert!(entity.call_sites.is_empty());
}

#[test]
fn branch_with_arguments_declares_then_assigns() {
    let mut b = FunctionBuilder::new("main.f() -> Swift.Int");
    b.add_result_type("Swift.Int");
    let bb1 = b.create_block();
    let param = b.add_block_param(bb1, "Swift.Int", None);
    let lit = b.fresh_value();
    b.emit(InstKind::IntegerLiteral {
        result: lit,
        value: 10,
    });
    b.terminate(Terminator::Br {
        dest: bb1,
        args: vec![lit],
    });
    b.switch_to_block(bb1);
    b.terminate(Terminator::Return { value: Some(param) });

    let (entity, _) = lower(b.finish());
    assert_eq!(block_text(&entity, 0), "BLOCK #0: { 0 = 10; goto BLOCK #1; }");
    assert_eq!(block_text(&entity, 1), "BLOCK #1: { return 0; }");
    assert_eq!(entity.declarations.len(), 1);
    assert_eq!(entity.declarations[0].to_string(), "decl 0: Swift.Int");
}

#[test]
fn converging_branches_declare_the_target_once() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let bb1 = b.create_block();
    let bb2 = b.create_block();
    let join = b.create_block();
    let param = b.add_block_param(join, "Swift.Int", Some("merged"));
    let cond = b.add_block_param(BlockId(0), "Swift.Bool", Some("flag"));
    b.terminate(Terminator::CondBr {
        cond,
        true_dest: bb1,
        true_args: vec![],
        false_dest: bb2,
        false_args: vec![],
    });
    for block in [bb1, bb2] {
        b.switch_to_block(block);
        let lit = b.fresh_value();
        b.emit(InstKind::IntegerLiteral {
            result: lit,
            value: 1,
        });
        b.terminate(Terminator::Br {
            dest: join,
            args: vec![lit],
        });
    }
    b.switch_to_block(join);
    b.terminate(Terminator::Return { value: Some(param) });

    let (entity, _) = lower(b.finish());
    let declared: Vec<String> = entity.declarations.iter().map(|d| d.to_string()).collect();
    assert_eq!(declared, vec!["decl merged_0: Swift.Int"]);
    assert_eq!(
        block_text(&entity, 1),
        "BLOCK #1: { merged_0 = 1; goto BLOCK #3; }"
    );
    assert_eq!(
        block_text(&entity, 2),
        "BLOCK #2: { merged_0 = 1; goto BLOCK #3; }"
    );
}

#[test]
fn cond_br_lowers_to_if_with_two_gotos() {
    let mut b = FunctionBuilder::new("main.f(Swift.Bool) -> ()");
    let flag = b.add_block_param(BlockId(0), "Swift.Bool", Some("flag"));
    let bb1 = b.create_block();
    let bb2 = b.create_block();
    b.terminate(Terminator::CondBr {
        cond: flag,
        true_dest: bb1,
        true_args: vec![],
        false_dest: bb2,
        false_args: vec![],
    });
    for block in [bb1, bb2] {
        b.switch_to_block(block);
        b.terminate(Terminator::Return { value: None });
    }

    let (entity, _) = lower(b.finish());
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { if flag goto BLOCK #1 else goto BLOCK #2; }"
    );
    assert_eq!(entity.cf_nodes.len(), 3);
}

#[test]
fn switch_value_pairs_cases_with_gotos() {
    let mut b = FunctionBuilder::new("main.f(Swift.Int) -> ()");
    let x = b.add_block_param(BlockId(0), "Swift.Int", Some("x"));
    let bb1 = b.create_block();
    let bb2 = b.create_block();
    let bb3 = b.create_block();
    let zero = b.fresh_value();
    b.emit(InstKind::IntegerLiteral {
        result: zero,
        value: 0,
    });
    let one = b.fresh_value();
    b.emit(InstKind::IntegerLiteral {
        result: one,
        value: 1,
    });
    b.terminate(Terminator::SwitchValue {
        operand: x,
        cases: vec![(zero, bb1), (one, bb2)],
        default: Some(bb3),
    });
    for block in [bb1, bb2, bb3] {
        b.switch_to_block(block);
        b.terminate(Terminator::Return { value: None });
    }

    let (entity, _) = lower(b.finish());
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { switch x { 0 => goto BLOCK #1; 1 => goto BLOCK #2; default => goto BLOCK #3; }; }"
    );
}

#[test]
fn switch_enum_binds_the_case_payload() {
    let mut b = FunctionBuilder::new("main.f(Swift.Optional<Swift.Int>) -> ()");
    let e = b.add_block_param(BlockId(0), "Swift.Optional<Swift.Int>", Some("e"));
    let bb1 = b.create_block();
    let payload = b.add_block_param(bb1, "Swift.Int", None);
    let bb2 = b.create_block();
    b.terminate(Terminator::SwitchEnum {
        operand: e,
        cases: vec![("Swift.Optional.some".into(), bb1)],
        default: Some(bb2),
    });
    b.switch_to_block(bb1);
    b.terminate(Terminator::Return { value: Some(payload) });
    b.switch_to_block(bb2);
    b.terminate(Terminator::Return { value: None });

    let (entity, _) = lower(b.finish());
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { switch e { \"Swift.Optional.some\" => { 1 = e[\"data\"]; goto BLOCK #1; }; default => goto BLOCK #2; }; }"
    );
    assert_eq!(block_text(&entity, 1), "BLOCK #1: { return 1; }");
}

#[test]
fn try_apply_binds_result_of_try() {
    let mut b = FunctionBuilder::new("main.f() -> Swift.Int");
    b.add_result_type("Swift.Int");
    let callee = b.fresh_value();
    b.emit(InstKind::FunctionRef {
        result: callee,
        name: "main.g() throws -> Swift.Int".into(),
    });
    let normal = b.create_block();
    let result = b.add_block_param(normal, "Swift.Int", None);
    let error = b.create_block();
    b.terminate(Terminator::TryApply {
        callee,
        args: vec![],
        normal,
        error,
    });
    b.switch_to_block(normal);
    b.terminate(Terminator::Return {
        value: Some(result),
    });
    b.switch_to_block(error);
    b.terminate(Terminator::Unreachable);

    let (entity, _) = lower(b.finish());
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { result_of_try = try func main.g() throws -> Swift.Int(); goto BLOCK #1; }"
    );
    assert_eq!(block_text(&entity, 1), "BLOCK #1: { return result_of_try; }");
    assert_eq!(entity.call_sites.len(), 1);
    assert!(entity
        .declarations
        .iter()
        .any(|d| d.to_string() == "decl result_of_try: Swift.Int"));
}

#[test]
fn checked_cast_br_wraps_the_cast_in_an_if() {
    let mut b = FunctionBuilder::new("main.f(Any) -> ()");
    let x = b.add_block_param(BlockId(0), "Any", Some("x"));
    let success = b.create_block();
    let _casted = b.add_block_param(success, "Swift.Int", None);
    let failure = b.create_block();
    b.terminate(Terminator::CheckedCastBr {
        operand: x,
        ty: "Swift.Int".into(),
        success,
        failure,
    });
    for block in [success, failure] {
        b.switch_to_block(block);
        b.terminate(Terminator::Return { value: None });
    }

    let (entity, _) = lower(b.finish());
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { 1 = (x as Swift.Int); if (x as Swift.Int) goto BLOCK #1 else goto BLOCK #2; }"
    );
}

#[test]
fn struct_field_reads_declare_the_placeholder_once() {
    let mut b = FunctionBuilder::new("main.f(main.Point) -> Swift.Int");
    b.add_result_type("Swift.Int");
    let pt = b.add_block_param(BlockId(0), "main.Point", Some("pt"));
    let op = b.fresh_value();
    b.emit(InstKind::FunctionRef {
        result: op,
        name: "static Swift.Int.+ infix(Swift.Int, Swift.Int) -> Swift.Int".into(),
    });
    let a = b.fresh_value();
    b.emit(InstKind::StructExtract {
        result: a,
        operand: pt,
        field: "x".into(),
    });
    let c = b.fresh_value();
    b.emit(InstKind::StructExtract {
        result: c,
        operand: pt,
        field: "x".into(),
    });
    let sum = b.fresh_value();
    b.emit(InstKind::Apply {
        result: sum,
        callee: op,
        args: vec![a, c],
    });
    b.terminate(Terminator::Return { value: Some(sum) });

    let (entity, _) = lower(b.finish());
    // The field renders as a variable, not a string constant.
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { return (pt[x] + pt[x]); }"
    );
    let declared: Vec<String> = entity.declarations.iter().map(|d| d.to_string()).collect();
    assert_eq!(declared, vec!["decl x: Any"]);
}

#[test]
fn box_projection_aliases_the_box_name() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let boxed = b.fresh_value();
    b.emit(InstKind::AllocBox {
        result: boxed,
        ty: "Swift.Int".into(),
        hint: Some("counter".into()),
    });
    let addr = b.fresh_value();
    b.emit(InstKind::ProjectBox {
        result: addr,
        operand: boxed,
    });
    let lit = b.fresh_value();
    b.emit(InstKind::IntegerLiteral {
        result: lit,
        value: 7,
    });
    b.emit(InstKind::Store {
        src: lit,
        dest: addr,
    });
    b.terminate(Terminator::Return { value: None });

    let (entity, _) = lower(b.finish());
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { counter_0 = 7; return; }"
    );
}

#[test]
fn debug_value_hint_renames_before_declaration() {
    let build = || {
        let mut b = FunctionBuilder::new("main.f() -> ()");
        let slot = b.fresh_value();
        b.emit(InstKind::AllocStack {
            result: slot,
            ty: "Swift.Int".into(),
            hint: None,
        });
        b.emit(InstKind::DebugValue {
            operand: slot,
            name: Some("count".into()),
        });
        let lit = b.fresh_value();
        b.emit(InstKind::IntegerLiteral {
            result: lit,
            value: 3,
        });
        b.emit(InstKind::Store {
            src: lit,
            dest: slot,
        });
        b.terminate(Terminator::Return { value: None });
        b.finish()
    };

    let (entity, _) = lower(build());
    assert_eq!(block_text(&entity, 0), "BLOCK #0: { count_0 = 3; return; }");

    // With hints disabled the bare hex name is kept.
    let mut entities = Vec::new();
    let mut diagnostics = Vec::new();
    let config = LowerConfig {
        use_name_hints: false,
        ..LowerConfig::default()
    };
    Lowering::new(config)
        .lower_function(&build(), &mut entities, &mut diagnostics)
        .unwrap();
    assert_eq!(
        entities[0].blocks[0].to_string(),
        "BLOCK #0: { 0 = 3; return; }"
    );
}

#[test]
fn use_before_definition_is_fatal() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let slot = b.fresh_value();
    b.emit(InstKind::AllocStack {
        result: slot,
        ty: "Swift.Int".into(),
        hint: None,
    });
    let phantom = b.fresh_value();
    b.emit(InstKind::Store {
        src: phantom,
        dest: slot,
    });
    b.terminate(Terminator::Return { value: None });

    let mut entities: Vec<FunctionEntity> = Vec::new();
    let mut diagnostics = Vec::new();
    let err = Lowering::default()
        .lower_function(&b.finish(), &mut entities, &mut diagnostics)
        .unwrap_err();
    assert!(matches!(err, LoweringError::UndefinedValue { .. }));
    assert!(entities.is_empty());
}

#[test]
fn unhandled_instructions_warn_and_yield_empty() {
    let build = || {
        let mut b = FunctionBuilder::new("main.f() -> ()");
        let slot = b.fresh_value();
        b.emit(InstKind::AllocStack {
            result: slot,
            ty: "Swift.KeyPath".into(),
            hint: Some("kp".into()),
        });
        let kp = b.fresh_value();
        b.emit(InstKind::KeyPath { result: kp });
        b.emit(InstKind::Store {
            src: kp,
            dest: slot,
        });
        b.terminate(Terminator::Return { value: None });
        b.finish()
    };

    let (entity, diagnostics) = lower(build());
    assert_eq!(
        block_text(&entity, 0),
        "BLOCK #0: { kp_0 = <empty>; return; }"
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert!(diagnostics[0].message.contains("keypath"));

    // Strict mode turns the warning into a hard error.
    let mut entities: Vec<FunctionEntity> = Vec::new();
    let mut diags = Vec::new();
    let config = LowerConfig {
        fail_on_unhandled: true,
        ..LowerConfig::default()
    };
    let err = Lowering::new(config)
        .lower_function(&build(), &mut entities, &mut diags)
        .unwrap_err();
    assert!(matches!(err, LoweringError::UnhandledInstruction { .. }));
}

#[test]
fn instruction_positions_reach_emitted_nodes() {
    let mut b = FunctionBuilder::new("main.f() -> ()");
    let slot = b.fresh_value();
    b.emit(InstKind::AllocStack {
        result: slot,
        ty: "Swift.Int".into(),
        hint: Some("x".into()),
    });
    let lit = b.fresh_value();
    b.emit(InstKind::IntegerLiteral {
        result: lit,
        value: 1,
    });
    b.emit_at(
        InstKind::Store {
            src: lit,
            dest: slot,
        },
        Some(SourceRange::point("main.swift", 3, 5)),
    );
    b.terminate(Terminator::Return { value: None });

    let (entity, _) = lower(b.finish());
    let NodeKind::LabelStmt { body, .. } = &entity.blocks[0].kind else {
        panic!("expected a labeled block");
    };
    let NodeKind::BlockStmt { stmts } = &body.kind else {
        panic!("expected a block body");
    };
    assert_eq!(
        stmts[0].pos,
        Some(SourceRange::point("main.swift", 3, 5))
    );
}

#[test]
fn entity_display_summarizes_the_function() {
    let mut b = FunctionBuilder::new("main.f(Swift.Int) -> Swift.Int");
    b.add_result_type("Swift.Int");
    let n = b.add_block_param(BlockId(0), "Swift.Int", Some("n"));
    b.terminate(Terminator::Return { value: Some(n) });

    let (entity, _) = lower(b.finish());
    let text = entity.to_string();
    assert!(text.contains("entity `main.f(Swift.Int) -> Swift.Int`"));
    assert!(text.contains("return type: Swift.Int"));
    assert!(text.contains("args: n: Swift.Int"));
    assert!(text.contains("blocks: BLOCK #0"));
}
