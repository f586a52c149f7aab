// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Output tree nodes.

use crate::SourceRange;

/// A node in the lowered tree, with an optional source position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    pub kind: NodeKind,
    pub pos: Option<SourceRange>,
}

/// The kind of node.
///
/// Expressions and statements share one enum: the lowering pass freely nests
/// expression-valued nodes (e.g. a `Switch` produced by `select_enum`) inside
/// statements, and block bodies are plain `Vec<Node>`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeKind {
    /// Produced for instructions that lower to nothing observable.
    Empty,
    Constant(Literal),
    /// Reference to a declared variable.
    Var(String),
    /// Reference to a function by (demangled) name.
    FunctionExpr(String),
    /// Variable declaration with its frontend type name.
    Decl { name: String, ty: String },
    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },
    /// Aggregate construction: ordered (field, value) pairs.
    ObjectLiteral { fields: Vec<(Node, Node)> },
    /// Field or element access.
    ObjectRef {
        base: Box<Node>,
        field: Box<Node>,
    },
    Cast {
        value: Box<Node>,
        ty: String,
    },
    Call {
        callee: Box<Node>,
        args: Vec<Node>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Binary {
        op: BinOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    /// Runtime assertion over a condition.
    Assert { cond: Box<Node> },
    /// A labeled statement; every lowered basic block becomes one.
    LabelStmt {
        label: String,
        body: Box<Node>,
    },
    /// Ordered statement sequence.
    BlockStmt { stmts: Vec<Node> },
    Goto { label: String },
    If {
        cond: Box<Node>,
        then_stmt: Box<Node>,
        else_stmt: Option<Box<Node>>,
    },
    /// Switch over (tag, body) arms with an optional default body.
    Switch {
        value: Box<Node>,
        cases: Vec<(Node, Node)>,
        default: Option<Box<Node>>,
    },
    Return { value: Option<Box<Node>> },
    Throw { value: Box<Node> },
    /// Wraps a call that may transfer to an error handler.
    Try { body: Box<Node> },
    /// Coroutine yield: values handed to the caller plus resume/abort exits.
    Yield {
        values: Vec<Node>,
        resume: Box<Node>,
        unwind: Box<Node>,
    },
    /// Coroutine unwind exit.
    Unwind,
    /// Terminal marker for a block control flow never leaves.
    Unreachable,
}

/// Literal constants, split by the width and precision rules of the source IR.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    /// Decimal text for values no IEEE double can represent exactly.
    BigDecimal(String),
    Str(String),
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BinOp {
    Eq,
    Ne,
    Add,
    Sub,
    Mul,
    Div,
    Shl,
    Shr,
    Ge,
    Gt,
    Le,
    Lt,
    BitAnd,
    BitOr,
    BitXor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnaryOp {
    Not,
    BitNot,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, pos: None }
    }

    pub fn with_pos(mut self, pos: Option<SourceRange>) -> Self {
        self.pos = pos;
        self
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, NodeKind::Empty)
    }

    pub fn empty() -> Self {
        Self::new(NodeKind::Empty)
    }

    pub fn constant(lit: Literal) -> Self {
        Self::new(NodeKind::Constant(lit))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::constant(Literal::Str(s.into()))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Var(name.into()))
    }

    pub fn function_expr(name: impl Into<String>) -> Self {
        Self::new(NodeKind::FunctionExpr(name.into()))
    }

    pub fn decl(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(NodeKind::Decl {
            name: name.into(),
            ty: ty.into(),
        })
    }

    pub fn assign(target: Node, value: Node) -> Self {
        Self::new(NodeKind::Assign {
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    pub fn object_literal(fields: Vec<(Node, Node)>) -> Self {
        Self::new(NodeKind::ObjectLiteral { fields })
    }

    pub fn object_ref(base: Node, field: Node) -> Self {
        Self::new(NodeKind::ObjectRef {
            base: Box::new(base),
            field: Box::new(field),
        })
    }

    pub fn cast(value: Node, ty: impl Into<String>) -> Self {
        Self::new(NodeKind::Cast {
            value: Box::new(value),
            ty: ty.into(),
        })
    }

    pub fn call(callee: Node, args: Vec<Node>) -> Self {
        Self::new(NodeKind::Call {
            callee: Box::new(callee),
            args,
        })
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        Self::new(NodeKind::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn binary(op: BinOp, lhs: Node, rhs: Node) -> Self {
        Self::new(NodeKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn assert(cond: Node) -> Self {
        Self::new(NodeKind::Assert {
            cond: Box::new(cond),
        })
    }

    pub fn label_stmt(label: impl Into<String>, body: Node) -> Self {
        Self::new(NodeKind::LabelStmt {
            label: label.into(),
            body: Box::new(body),
        })
    }

    pub fn block_stmt(stmts: Vec<Node>) -> Self {
        Self::new(NodeKind::BlockStmt { stmts })
    }

    pub fn goto(label: impl Into<String>) -> Self {
        Self::new(NodeKind::Goto {
            label: label.into(),
        })
    }

    pub fn if_stmt(cond: Node, then_stmt: Node, else_stmt: Option<Node>) -> Self {
        Self::new(NodeKind::If {
            cond: Box::new(cond),
            then_stmt: Box::new(then_stmt),
            else_stmt: else_stmt.map(Box::new),
        })
    }

    pub fn switch(value: Node, cases: Vec<(Node, Node)>, default: Option<Node>) -> Self {
        Self::new(NodeKind::Switch {
            value: Box::new(value),
            cases,
            default: default.map(Box::new),
        })
    }

    pub fn ret(value: Option<Node>) -> Self {
        Self::new(NodeKind::Return {
            value: value.map(Box::new),
        })
    }

    pub fn throw(value: Node) -> Self {
        Self::new(NodeKind::Throw {
            value: Box::new(value),
        })
    }

    pub fn try_stmt(body: Node) -> Self {
        Self::new(NodeKind::Try {
            body: Box::new(body),
        })
    }

    pub fn yield_stmt(values: Vec<Node>, resume: Node, unwind: Node) -> Self {
        Self::new(NodeKind::Yield {
            values,
            resume: Box::new(resume),
            unwind: Box::new(unwind),
        })
    }

    pub fn unwind() -> Self {
        Self::new(NodeKind::Unwind)
    }

    pub fn unreachable() -> Self {
        Self::new(NodeKind::Unreachable)
    }
}
