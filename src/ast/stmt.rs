use crate::token::Line;

use super::{BaseType, Declarator, Expr};

#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Expr(Expr),
    VarDecl {
        base: BaseType,
        is_static: bool,
        declarators: Vec<Declarator>,
        line: Line,
    },
    Return {
        value: Option<Expr>,
        line: Line,
    },
    Block(Block),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
        line: Line,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
        line: Line,
    },
    Break(Line),
    Continue(Line),
}

impl Stmt {
    /// Lowers `for (init; cond; step) body` to
    /// `{ init; while (cond) { body; step; } }`, per the grammar's
    /// parse-time desugaring of `for`.
    pub fn desugar_for(
        init: Option<Stmt>,
        cond: Option<Expr>,
        step: Option<Expr>,
        body: Stmt,
        line: Line,
    ) -> Stmt {
        let cond = cond.unwrap_or_else(|| Expr::new(super::ExprKind::IntLiteral(1), line));
        let mut inner_stmts = vec![body];
        if let Some(step) = step {
            inner_stmts.push(Stmt::Expr(step));
        }
        let while_stmt = Stmt::While {
            cond,
            body: Box::new(Stmt::Block(Block { stmts: inner_stmts })),
            line,
        };
        match init {
            Some(init) => Stmt::Block(Block {
                stmts: vec![init, while_stmt],
            }),
            None => while_stmt,
        }
    }
}
