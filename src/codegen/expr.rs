use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::symbol::SymbolId;
use crate::types::Type;

use super::error::CodegenError;
use super::Codegen;

impl Codegen {
    pub(super) fn emit_expr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match &expr.kind {
            ExprKind::IntLiteral(n) => self.buf.line(format!("movl ${n}, %eax")),
            ExprKind::StringLiteral(s) => {
                let label = self.buf.add_string(s);
                self.buf.line(format!("movl ${label}, %eax"));
            }
            ExprKind::Var { resolved_as, .. } => self.emit_var_load(resolved_as, expr.line)?,
            ExprKind::Unary { op, expr: inner } => self.emit_unary(*op, inner, expr.line)?,
            ExprKind::Binary { op, lhs, rhs } => self.emit_binary(*op, lhs, rhs)?,
            ExprKind::Call { args, resolved_as, .. } => self.emit_call(args, resolved_as, expr.line)?,
            ExprKind::Assign { target, value } => self.emit_assign(target, value, expr.line)?,
            ExprKind::SizeofType(ty) => self.buf.line(format!("movl ${}, %eax", ty.to_type().size())),
            ExprKind::SizeofExpr(inner) => {
                let size = inner
                    .resolved
                    .as_ref()
                    .ok_or_else(|| CodegenError::new("sizeof operand missing a resolved type", expr.line))?
                    .ty
                    .size();
                self.buf.line(format!("movl ${size}, %eax"));
            }
            ExprKind::Cast { expr: inner, .. } => self.emit_expr(inner)?,
        }
        Ok(())
    }

    fn emit_var_load(&mut self, resolved_as: &Option<SymbolId>, line: u32) -> Result<(), CodegenError> {
        let id = resolved_as.ok_or_else(|| CodegenError::new("variable reference missing its resolved symbol", line))?;
        let operand = self.operand_for(id);
        let ty = self.type_of(id);
        if matches!(ty, Type::Array(_, _)) {
            self.buf.line(format!("leal {operand}, %eax"));
        } else {
            self.buf.line(format!("movl {operand}, %eax"));
        }
        Ok(())
    }

    fn emit_unary(&mut self, op: UnaryOp, inner: &Expr, line: u32) -> Result<(), CodegenError> {
        match op {
            UnaryOp::AddrOf => match &inner.kind {
                // &*e cancels to e's own value (already an address).
                ExprKind::Unary { op: UnaryOp::Deref, expr: e } => self.emit_expr(e)?,
                ExprKind::Var { resolved_as, .. } => {
                    let id = resolved_as
                        .ok_or_else(|| CodegenError::new("variable reference missing its resolved symbol", line))?;
                    let operand = self.operand_for(id);
                    self.buf.line(format!("leal {operand}, %eax"));
                }
                _ => return Err(CodegenError::new("address-of of a non-addressable expression", line)),
            },
            UnaryOp::Deref => match &inner.kind {
                // *&e cancels to e's own value.
                ExprKind::Unary { op: UnaryOp::AddrOf, expr: e } => self.emit_expr(e)?,
                _ => {
                    self.emit_expr(inner)?;
                    self.buf.line("movl (%eax), %eax");
                }
            },
            UnaryOp::Neg => {
                self.emit_expr(inner)?;
                self.buf.line("neg %eax");
            }
            UnaryOp::BitNot => {
                self.emit_expr(inner)?;
                self.buf.line("xorl $0xFFFFFFFF, %eax");
            }
            UnaryOp::Not => {
                self.emit_expr(inner)?;
                let end = self.buf.make_label(".J");
                self.buf.line("cmpl $0, %eax");
                self.buf.line("movl $0, %eax");
                self.buf.line(format!("jne {end}"));
                self.buf.line("movl $1, %eax");
                self.buf.label_line(&end);
            }
        }
        Ok(())
    }

    fn emit_binary(&mut self, op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Result<(), CodegenError> {
        if op.is_logical() {
            return self.emit_short_circuit(op, lhs, rhs);
        }
        if op.is_comparison() {
            return self.emit_comparison(op, lhs, rhs);
        }

        self.emit_expr(lhs)?;
        self.buf.line("pushl %eax");
        self.emit_expr(rhs)?;
        self.buf.line("movl %eax, %ebx");
        self.buf.line("popl %eax");

        match op {
            BinaryOp::Add => self.buf.line("addl %ebx, %eax"),
            BinaryOp::Sub => self.buf.line("subl %ebx, %eax"),
            BinaryOp::Mul => self.buf.line("imull %ebx, %eax"),
            BinaryOp::Div => {
                self.buf.line("cdq");
                self.buf.line("idivl %ebx");
            }
            BinaryOp::Mod => {
                self.buf.line("cdq");
                self.buf.line("idivl %ebx");
                self.buf.line("movl %edx, %eax");
            }
            BinaryOp::BitAnd => self.buf.line("andl %ebx, %eax"),
            BinaryOp::BitOr => self.buf.line("orl %ebx, %eax"),
            BinaryOp::BitXor => self.buf.line("xorl %ebx, %eax"),
            BinaryOp::Shl => {
                self.buf.line("movl %ebx, %ecx");
                self.buf.line("sall %cl, %eax");
            }
            BinaryOp::Shr => {
                self.buf.line("movl %ebx, %ecx");
                self.buf.line("sarl %cl, %eax");
            }
            BinaryOp::And | BinaryOp::Or | BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Gt
            | BinaryOp::Le | BinaryOp::Ge => unreachable!("handled above"),
        }
        Ok(())
    }

    fn emit_comparison(&mut self, op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Result<(), CodegenError> {
        self.emit_expr(lhs)?;
        self.buf.line("pushl %eax");
        self.emit_expr(rhs)?;
        self.buf.line("movl %eax, %ebx");
        self.buf.line("popl %eax");
        self.buf.line("cmpl %ebx, %eax");

        let inverse = match op {
            BinaryOp::Lt => "jge",
            BinaryOp::Gt => "jle",
            BinaryOp::Le => "jg",
            BinaryOp::Ge => "jl",
            BinaryOp::Eq => "jne",
            BinaryOp::Ne => "je",
            _ => unreachable!("only comparisons reach here"),
        };
        let false_label = self.buf.make_label(".J");
        let end_label = self.buf.make_label(".J");
        self.buf.line(format!("{inverse} {false_label}"));
        self.buf.line("movl $1, %eax");
        self.buf.line(format!("jmp {end_label}"));
        self.buf.label_line(&false_label);
        self.buf.line("movl $0, %eax");
        self.buf.label_line(&end_label);
        Ok(())
    }

    fn emit_short_circuit(&mut self, op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Result<(), CodegenError> {
        // `0 && E` and `1 || E` are decided by the left operand alone; `rhs`
        // is never reached at runtime, so its code must never be emitted.
        if let ExprKind::IntLiteral(n) = &lhs.kind {
            let forces_shortcut = match op {
                BinaryOp::And => *n == 0,
                BinaryOp::Or => *n != 0,
                _ => unreachable!("only && and || reach emit_short_circuit"),
            };
            if forces_shortcut {
                let value = if op == BinaryOp::And { 0 } else { 1 };
                self.buf.line(format!("movl ${value}, %eax"));
                return Ok(());
            }
        }

        let short_circuit_label = self.buf.make_label(".J");
        let end_label = self.buf.make_label(".J");

        self.emit_expr(lhs)?;
        self.buf.line("cmpl $0, %eax");
        let skip_mnemonic = if op == BinaryOp::And { "je" } else { "jne" };
        self.buf.line(format!("{skip_mnemonic} {short_circuit_label}"));

        self.emit_expr(rhs)?;
        self.buf.line("cmpl $0, %eax");
        self.buf.line(format!("{skip_mnemonic} {short_circuit_label}"));

        let (fallthrough_value, shortcut_value) = if op == BinaryOp::And { (1, 0) } else { (0, 1) };
        self.buf.line(format!("movl ${fallthrough_value}, %eax"));
        self.buf.line(format!("jmp {end_label}"));
        self.buf.label_line(&short_circuit_label);
        self.buf.line(format!("movl ${shortcut_value}, %eax"));
        self.buf.label_line(&end_label);
        Ok(())
    }

    fn emit_call(&mut self, args: &[Expr], resolved_as: &Option<SymbolId>, line: u32) -> Result<(), CodegenError> {
        let id = resolved_as.ok_or_else(|| CodegenError::new("call missing its resolved callee", line))?;
        let name = self.operand_for(id);
        for arg in args.iter().rev() {
            self.emit_expr(arg)?;
            self.buf.line("pushl %eax");
        }
        self.buf.line(format!("call {name}"));
        if !args.is_empty() {
            self.buf.line(format!("addl ${}, %esp", args.len() * 4));
        }
        Ok(())
    }

    fn emit_assign(&mut self, target: &Expr, value: &Expr, line: u32) -> Result<(), CodegenError> {
        match &target.kind {
            ExprKind::Var { resolved_as, .. } => {
                self.emit_expr(value)?;
                let id = resolved_as
                    .ok_or_else(|| CodegenError::new("assignment target missing its resolved symbol", line))?;
                let operand = self.operand_for(id);
                self.buf.line(format!("movl %eax, {operand}"));
            }
            ExprKind::Unary { op: UnaryOp::Deref, expr: addr_expr } => {
                self.emit_expr(value)?;
                self.buf.line("pushl %eax");
                self.emit_expr(addr_expr)?;
                self.buf.line("popl %ebx");
                self.buf.line("movl %ebx, (%eax)");
            }
            _ => return Err(CodegenError::new("assignment target is not an lvalue expression", line)),
        }
        Ok(())
    }
}
