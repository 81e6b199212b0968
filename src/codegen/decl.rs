use crate::ast::{Declarator, ExprKind, Initializer, Program, TopLevel};
use crate::types::Type;

use super::error::CodegenError;
use super::Codegen;

impl Codegen {
    pub(super) fn emit_program(&mut self, program: &Program) -> Result<(), CodegenError> {
        for item in &program.items {
            match item {
                TopLevel::FunctionDecl(_) => {}
                TopLevel::FunctionDef(def) => self.emit_function(def)?,
                TopLevel::GlobalVarDecl(global) => {
                    for decl in &global.declarators {
                        self.emit_global_declarator(decl)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn emit_global_declarator(&mut self, decl: &Declarator) -> Result<(), CodegenError> {
        let id = decl
            .resolved_as
            .ok_or_else(|| CodegenError::new("global declarator missing its resolved symbol", decl.line))?;
        let ty = self.type_of(id);
        let name = self.operand_for(id);

        match &decl.init {
            None => self.buf.comm(&name, ty.size()),
            Some(init) => {
                self.buf.begin_data(&name);
                self.emit_global_initializer(init, &ty, decl.line)?;
            }
        }
        Ok(())
    }

    /// Global initializers must be compile-time constants; emits the
    /// appropriate `.byte`/`.long` directive per scalar, recursing through
    /// nested array literals in source order.
    fn emit_global_initializer(&mut self, init: &Initializer, ty: &Type, line: u32) -> Result<(), CodegenError> {
        match (init, ty) {
            (Initializer::Expr(expr), scalar) => {
                let value = self.const_eval(expr, line)?;
                let directive = if scalar.size() == 1 { ".byte" } else { ".long" };
                self.buf.data_directive(directive, value);
                Ok(())
            }
            (Initializer::Array(elems), Type::Array(inner, size)) => {
                for elem in elems {
                    self.emit_global_initializer(elem, inner, line)?;
                }
                let padding = *size as usize - elems.len();
                if padding > 0 {
                    let directive = if inner.size() == 1 { ".byte" } else { ".long" };
                    for _ in 0..padding {
                        self.buf.data_directive(directive, 0);
                    }
                }
                Ok(())
            }
            (Initializer::Array(_), _) => Err(CodegenError::new("array initializer for a non-array global", line)),
        }
    }

    fn const_eval(&self, expr: &crate::ast::Expr, line: u32) -> Result<i64, CodegenError> {
        match &expr.kind {
            ExprKind::IntLiteral(n) => Ok(*n),
            ExprKind::Unary { op: crate::ast::UnaryOp::Neg, expr: inner } => Ok(-self.const_eval(inner, line)?),
            _ => Err(CodegenError::new("global initializer is not a compile-time constant", line)),
        }
    }

    fn emit_function(&mut self, def: &crate::ast::FunctionDef) -> Result<(), CodegenError> {
        let name = &def.head.name;
        self.buf.line(format!(".globl {name}"));
        self.buf.line(format!(".type {name}, @function"));
        self.buf.label_line(name);
        self.buf.line("pushl %ebp");
        self.buf.line("movl %esp, %ebp");
        if def.max_stack_size > 0 {
            self.buf.line(format!("subl ${}, %esp", def.max_stack_size));
        }

        self.emit_block(&def.body)?;

        // Fallthrough return: a function whose body doesn't end in an
        // explicit `return` still needs a well-formed epilogue.
        if def.head.return_type.to_type().is_void() {
            self.emit_epilogue();
        } else {
            self.buf.line("movl $0, %eax");
            self.emit_epilogue();
        }
        Ok(())
    }
}
