// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Display implementations for output trees.
//!
//! Single-line pseudo-code, meant for debug dumps and test assertions.

use crate::{BinOp, Literal, Node, NodeKind, UnaryOp};
use std::fmt;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Empty => write!(f, "<empty>"),
            NodeKind::Constant(lit) => write!(f, "{}", lit),
            NodeKind::Var(name) => write!(f, "{}", name),
            NodeKind::FunctionExpr(name) => write!(f, "func {}", name),
            NodeKind::Decl { name, ty } => write!(f, "decl {}: {}", name, ty),
            NodeKind::Assign { target, value } => write!(f, "{} = {}", target, value),
            NodeKind::ObjectLiteral { fields } => {
                write!(f, "{{")?;
                for (i, (field, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field, value)?;
                }
                write!(f, "}}")
            }
            NodeKind::ObjectRef { base, field } => write!(f, "{}[{}]", base, field),
            NodeKind::Cast { value, ty } => write!(f, "({} as {})", value, ty),
            NodeKind::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            NodeKind::Unary { op, operand } => write!(f, "{}{}", op, operand),
            NodeKind::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
            NodeKind::Assert { cond } => write!(f, "assert {}", cond),
            NodeKind::LabelStmt { label, body } => write!(f, "{}: {}", label, body),
            NodeKind::BlockStmt { stmts } => {
                write!(f, "{{ ")?;
                for stmt in stmts {
                    write!(f, "{}; ", stmt)?;
                }
                write!(f, "}}")
            }
            NodeKind::Goto { label } => write!(f, "goto {}", label),
            NodeKind::If {
                cond,
                then_stmt,
                else_stmt,
            } => {
                write!(f, "if {} {}", cond, then_stmt)?;
                if let Some(else_stmt) = else_stmt {
                    write!(f, " else {}", else_stmt)?;
                }
                Ok(())
            }
            NodeKind::Switch {
                value,
                cases,
                default,
            } => {
                write!(f, "switch {} {{ ", value)?;
                for (tag, body) in cases {
                    write!(f, "{} => {}; ", tag, body)?;
                }
                if let Some(default) = default {
                    write!(f, "default => {}; ", default)?;
                }
                write!(f, "}}")
            }
            NodeKind::Return { value } => match value {
                Some(value) => write!(f, "return {}", value),
                None => write!(f, "return"),
            },
            NodeKind::Throw { value } => write!(f, "throw {}", value),
            NodeKind::Try { body } => write!(f, "try {}", body),
            NodeKind::Yield {
                values,
                resume,
                unwind,
            } => {
                write!(f, "yield (")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, ") resume {} unwind {}", resume, unwind)
            }
            NodeKind::Unwind => write!(f, "unwind"),
            NodeKind::Unreachable => write!(f, "unreachable"),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Long(v) => write!(f, "{}L", v),
            Literal::Float(v) => write!(f, "{}f", v),
            Literal::Double(v) => write!(f, "{}", v),
            Literal::BigDecimal(s) => write!(f, "big({})", s),
            Literal::Str(s) => write!(f, "\"{}\"", s),
            Literal::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::Ge => ">=",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Lt => "<",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
        };
        write!(f, "{}", sym)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        };
        write!(f, "{}", sym)
    }
}
