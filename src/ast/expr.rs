use crate::symbol::SymbolId;
use crate::token::Line;
use crate::types::Typed;

use super::TypeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
    AddrOf,
    Deref,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl BinaryOp {
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

/// An expression node. `resolved` is filled in by the resolver in place;
/// it is `None` until resolution visits the node and always `Some` after
/// a successful resolve pass.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: Line,
    pub resolved: Option<Typed>,
}

impl Expr {
    pub fn new(kind: ExprKind, line: Line) -> Self {
        Self {
            kind,
            line,
            resolved: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    IntLiteral(i64),
    StringLiteral(String),
    Var {
        name: String,
        resolved_as: Option<SymbolId>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        callee: String,
        args: Vec<Expr>,
        resolved_as: Option<SymbolId>,
    },
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    SizeofType(TypeName),
    SizeofExpr(Box<Expr>),
    Cast {
        ty: TypeName,
        expr: Box<Expr>,
    },
}

impl Expr {
    pub fn var(name: impl Into<String>, line: Line) -> Expr {
        Expr::new(
            ExprKind::Var {
                name: name.into(),
                resolved_as: None,
            },
            line,
        )
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>, line: Line) -> Expr {
        Expr::new(
            ExprKind::Call {
                callee: callee.into(),
                args,
                resolved_as: None,
            },
            line,
        )
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr, line: Line) -> Expr {
        Expr::new(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            line,
        )
    }

    pub fn unary(op: UnaryOp, expr: Expr, line: Line) -> Expr {
        Expr::new(ExprKind::Unary { op, expr: Box::new(expr) }, line)
    }
}
