use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::symbol::Symbol;
use crate::token::Line;
use crate::types::{Type, Typed};

use super::error::{Bail, ResolveResult};
use super::Resolver;

impl Resolver {
    pub(super) fn resolve_expr(&mut self, expr: &mut Expr) -> ResolveResult<Typed> {
        let line = expr.line;
        let typed = match &mut expr.kind {
            ExprKind::IntLiteral(_) => Typed::rvalue(Type::Int),
            ExprKind::StringLiteral(_) => Typed::rvalue(Type::pointer(Type::Char)),
            ExprKind::Var { name, resolved_as } => {
                let id = self.lookup_value(name, line)?;
                *resolved_as = Some(id);
                Typed::lvalue(self.symbol(id).ty())
            }
            ExprKind::Unary { op, expr: inner } => self.resolve_unary(*op, inner, line)?,
            ExprKind::Binary { op, lhs, rhs } => self.resolve_binary(*op, lhs, rhs, line)?,
            ExprKind::Call { callee, args, resolved_as } => {
                self.resolve_call(callee, args, resolved_as, line)?
            }
            ExprKind::Assign { target, value } => self.resolve_assign(target, value, line)?,
            ExprKind::SizeofType(ty) => {
                let _ = ty.to_type();
                Typed::rvalue(Type::Int)
            }
            ExprKind::SizeofExpr(inner) => {
                self.resolve_expr(inner)?;
                Typed::rvalue(Type::Int)
            }
            ExprKind::Cast { ty, expr: inner } => {
                self.resolve_expr(inner)?;
                Typed::rvalue(ty.to_type())
            }
        };
        expr.resolved = Some(typed.clone());
        Ok(typed)
    }

    fn lookup_value(&mut self, name: &str, line: Line) -> ResolveResult<crate::symbol::SymbolId> {
        let id = self
            .scopes
            .find(name)
            .or_else(|| self.globals.get(name).copied());
        match id {
            None => {
                self.error(format!("variable '{name}' not declared"), line);
                Err(Bail)
            }
            Some(id) if self.symbol(id).is_function_like() => {
                self.error(format!("'{name}' is a function and cannot be used as a value"), line);
                Err(Bail)
            }
            Some(id) => Ok(id),
        }
    }

    fn resolve_unary(&mut self, op: UnaryOp, inner: &mut Expr, line: Line) -> ResolveResult<Typed> {
        let inner_t = self.resolve_expr(inner)?;
        Ok(match op {
            UnaryOp::AddrOf => {
                if !inner_t.is_lvalue() {
                    self.error("cannot take the address of a non-lvalue expression", line);
                    return Err(Bail);
                }
                Typed::rvalue(Type::pointer(inner_t.ty))
            }
            UnaryOp::Deref => match inner_t.ty.pointee() {
                Some(pointee) => Typed::lvalue(pointee),
                None => {
                    self.error(format!("cannot dereference a value of type '{}'", inner_t.ty), line);
                    return Err(Bail);
                }
            },
            UnaryOp::Neg | UnaryOp::Not | UnaryOp::BitNot => {
                self.expect_int(&inner_t, line)?;
                Typed::rvalue(Type::Int)
            }
        })
    }

    fn resolve_binary(
        &mut self,
        op: BinaryOp,
        lhs: &mut Expr,
        rhs: &mut Expr,
        line: Line,
    ) -> ResolveResult<Typed> {
        let lhs_t = self.resolve_expr(lhs)?;
        let rhs_t = self.resolve_expr(rhs)?;

        if op.is_comparison() {
            if lhs_t.ty != rhs_t.ty {
                self.error(
                    format!("cannot compare '{}' with '{}'", lhs_t.ty, rhs_t.ty),
                    line,
                );
                return Err(Bail);
            }
            return Ok(Typed::rvalue(Type::Int));
        }

        if matches!(op, BinaryOp::Add | BinaryOp::Sub) {
            return self.resolve_additive(op, lhs, rhs, lhs_t, rhs_t, line);
        }

        self.expect_int(&lhs_t, line)?;
        self.expect_int(&rhs_t, line)?;
        Ok(Typed::rvalue(Type::Int))
    }

    /// `+`/`-` admit either two ints, or a pointer and an int. In the
    /// mixed case the int operand is rewritten in place, wrapped in a
    /// multiplication by the pointee's size, so the code generator only
    /// ever sees plain integer addition.
    fn resolve_additive(
        &mut self,
        op: BinaryOp,
        lhs: &mut Expr,
        rhs: &mut Expr,
        lhs_t: Typed,
        rhs_t: Typed,
        line: Line,
    ) -> ResolveResult<Typed> {
        if lhs_t.ty.is_int() && rhs_t.ty.is_int() {
            return Ok(Typed::rvalue(Type::Int));
        }

        let lhs_ptr = lhs_t.ty.decay().is_pointer_like();
        let rhs_ptr = rhs_t.ty.decay().is_pointer_like();

        if lhs_ptr && rhs_t.ty.is_int() {
            let pointee = lhs_t.ty.decay().pointee().expect("checked pointer-like");
            scale_operand(rhs, pointee.size());
            return Ok(Typed::rvalue(lhs_t.ty.decay()));
        }
        if rhs_ptr && lhs_t.ty.is_int() && op == BinaryOp::Add {
            let pointee = rhs_t.ty.decay().pointee().expect("checked pointer-like");
            scale_operand(lhs, pointee.size());
            return Ok(Typed::rvalue(rhs_t.ty.decay()));
        }

        self.error(
            format!("cannot apply '{:?}' to '{}' and '{}'", op, lhs_t.ty, rhs_t.ty),
            line,
        );
        Err(Bail)
    }

    fn resolve_call(
        &mut self,
        callee: &str,
        args: &mut [Expr],
        resolved_as: &mut Option<crate::symbol::SymbolId>,
        line: Line,
    ) -> ResolveResult<Typed> {
        let mut arg_types = Vec::with_capacity(args.len());
        for arg in args.iter_mut() {
            arg_types.push(self.resolve_expr(arg)?);
        }

        let id = self
            .scopes
            .find(callee)
            .or_else(|| self.globals.get(callee).copied());
        let Some(id) = id else {
            self.error(format!("function '{callee}' not declared"), line);
            return Err(Bail);
        };

        let ret = match self.symbol(id).clone() {
            Symbol::NativeFunction { name, kind } => {
                self.check_native_call(kind, &name, args, &arg_types, line)?
            }
            Symbol::Function { ty: Type::Function(sig), .. } => {
                if sig.params.len() != arg_types.len() {
                    self.error(
                        format!(
                            "'{callee}' expects {} argument(s) but {} were given",
                            sig.params.len(),
                            arg_types.len()
                        ),
                        line,
                    );
                    return Err(Bail);
                }
                for (i, (param_ty, arg_t)) in sig.params.iter().zip(arg_types.iter()).enumerate() {
                    if *param_ty != arg_t.ty.decay() {
                        self.error(
                            format!(
                                "argument {} to '{callee}' has type '{}', expected '{param_ty}'",
                                i + 1,
                                arg_t.ty
                            ),
                            line,
                        );
                        return Err(Bail);
                    }
                }
                sig.ret.clone()
            }
            _ => {
                self.error(format!("'{callee}' is not callable"), line);
                return Err(Bail);
            }
        };
        *resolved_as = Some(id);
        Ok(Typed::rvalue(ret))
    }

    fn resolve_assign(&mut self, target: &mut Expr, value: &mut Expr, line: Line) -> ResolveResult<Typed> {
        let target_t = self.resolve_expr(target)?;
        let value_t = self.resolve_expr(value)?;

        if !target_t.is_lvalue() {
            self.error("left-hand side of assignment is not an lvalue", line);
            return Err(Bail);
        }
        if matches!(target_t.ty, Type::Array(_, _)) {
            self.error("cannot assign to an array", line);
            return Err(Bail);
        }
        if target_t.ty != value_t.ty.decay() {
            self.error(
                format!("cannot assign value of type '{}' to variable of type '{}'", value_t.ty, target_t.ty),
                line,
            );
            return Err(Bail);
        }
        Ok(Typed::rvalue(target_t.ty))
    }

    pub(super) fn expect_int(&mut self, t: &Typed, line: Line) -> ResolveResult<()> {
        if t.ty.is_int() {
            Ok(())
        } else {
            self.error(format!("expected 'int', found '{}'", t.ty), line);
            Err(Bail)
        }
    }
}

/// Replaces `expr` in place with `expr * size`, the in-AST rewrite that
/// normalises pointer arithmetic before code generation sees it.
fn scale_operand(expr: &mut Expr, size: u32) {
    let line = expr.line;
    let taken = std::mem::replace(expr, Expr::new(ExprKind::IntLiteral(0), line));
    let mut size_lit = Expr::new(ExprKind::IntLiteral(size as i64), line);
    size_lit.resolved = Some(Typed::rvalue(Type::Int));
    let mut scaled = Expr::binary(BinaryOp::Mul, taken, size_lit, line);
    scaled.resolved = Some(Typed::rvalue(Type::Int));
    *expr = scaled;
}
