// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Known standard-library symbols and builtin operators.
//!
//! Functions listed here have analysis-time summaries downstream, so a
//! reference to one lowers to a plain name constant instead of a function
//! expression, and calls to them never land in an entity's call-site list.

use silt_ast::{BinOp, UnaryOp};

/// Demangled names the downstream analyzer summarizes.
pub const BUILT_IN_FUNCTIONS: &[&str] = &[
    "Swift._allocateUninitializedArray<A>(Builtin.Word) -> (Swift.Array<A>, Builtin.RawPointer)",
    "Swift.Int.init(_builtinIntegerLiteral: Builtin.IntLiteral) -> Swift.Int",
    "Swift.UInt.init(_builtinIntegerLiteral: Builtin.IntLiteral) -> Swift.UInt",
    "Swift.Double.init(_builtinFloatLiteral: Builtin.FPIEEE64) -> Swift.Double",
    "Swift.Bool.init(_builtinBooleanLiteral: Builtin.Int1) -> Swift.Bool",
    "Swift.String.init(_builtinStringLiteral: Builtin.RawPointer, utf8CodeUnitCount: Builtin.Word, isASCII: Builtin.Int1) -> Swift.String",
    "Swift.print(_: Any..., separator: Swift.String, terminator: Swift.String) -> ()",
    "default argument 1 of Swift.print(_: Any..., separator: Swift.String, terminator: Swift.String) -> ()",
    "default argument 2 of Swift.print(_: Any..., separator: Swift.String, terminator: Swift.String) -> ()",
    "static Swift.Int.+ infix(Swift.Int, Swift.Int) -> Swift.Int",
    "static Swift.Int.- infix(Swift.Int, Swift.Int) -> Swift.Int",
    "static Swift.Int.* infix(Swift.Int, Swift.Int) -> Swift.Int",
    "static Swift.Int./ infix(Swift.Int, Swift.Int) -> Swift.Int",
    "static Swift.Int.== infix(Swift.Int, Swift.Int) -> Swift.Bool",
    "static Swift.Int.< infix(Swift.Int, Swift.Int) -> Swift.Bool",
    "static Swift.Int.> infix(Swift.Int, Swift.Int) -> Swift.Bool",
    "Swift.DefaultStringInterpolation.init(literalCapacity: Swift.Int, interpolationCount: Swift.Int) -> Swift.DefaultStringInterpolation",
    "Swift.DefaultStringInterpolation.appendLiteral(Swift.String) -> ()",
    "Swift.DefaultStringInterpolation.appendInterpolation<A>(A) -> ()",
    "Swift.String.init(stringInterpolation: Swift.DefaultStringInterpolation) -> Swift.String",
];

pub fn is_built_in(name: &str) -> bool {
    BUILT_IN_FUNCTIONS.contains(&name)
}

/// An operator a call site can collapse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Binary(BinOp),
    Unary(UnaryOp),
}

/// Recognize a callee name as a builtin operator.
///
/// Accepts both a bare operator token and the demangled summary form
/// (`static Swift.Int.+ infix(...)`). `&&` and `||` are deliberately not
/// operators here: they short-circuit, so they must stay calls.
pub fn operator_for(name: &str) -> Option<Operator> {
    let token = operator_token(name);
    match token {
        "==" => Some(Operator::Binary(BinOp::Eq)),
        "!=" => Some(Operator::Binary(BinOp::Ne)),
        "+" => Some(Operator::Binary(BinOp::Add)),
        "-" => Some(Operator::Binary(BinOp::Sub)),
        "*" => Some(Operator::Binary(BinOp::Mul)),
        "/" => Some(Operator::Binary(BinOp::Div)),
        "<<" => Some(Operator::Binary(BinOp::Shl)),
        ">>" => Some(Operator::Binary(BinOp::Shr)),
        ">=" => Some(Operator::Binary(BinOp::Ge)),
        ">" => Some(Operator::Binary(BinOp::Gt)),
        "<=" => Some(Operator::Binary(BinOp::Le)),
        "<" => Some(Operator::Binary(BinOp::Lt)),
        "&" => Some(Operator::Binary(BinOp::BitAnd)),
        "|" => Some(Operator::Binary(BinOp::BitOr)),
        "^" => Some(Operator::Binary(BinOp::BitXor)),
        "!" => Some(Operator::Unary(UnaryOp::Not)),
        "~" => Some(Operator::Unary(UnaryOp::BitNot)),
        _ => None,
    }
}

fn operator_token(name: &str) -> &str {
    for marker in [" infix(", " prefix(", " postfix("] {
        if let Some(idx) = name.find(marker) {
            let qualified = &name[..idx];
            return qualified.rsplit('.').next().unwrap_or(qualified);
        }
    }
    name
}
