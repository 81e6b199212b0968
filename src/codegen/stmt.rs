use crate::ast::{Block, Declarator, Initializer, Stmt};
use crate::symbol::SymbolId;

use super::error::CodegenError;
use super::Codegen;

impl Codegen {
    pub(super) fn emit_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match stmt {
            Stmt::Expr(e) => self.emit_expr(e),
            Stmt::VarDecl { declarators, .. } => {
                for decl in declarators {
                    self.emit_declarator_init(decl)?;
                }
                Ok(())
            }
            Stmt::Return { value, .. } => {
                if let Some(value) = value {
                    self.emit_expr(value)?;
                }
                self.emit_epilogue();
                Ok(())
            }
            Stmt::Block(block) => self.emit_block(block),
            Stmt::If { cond, then_branch, else_branch, .. } => self.emit_if(cond, then_branch, else_branch.as_deref()),
            Stmt::While { cond, body, .. } => self.emit_while(cond, body),
            Stmt::Break(line) => {
                let label = self
                    .break_labels
                    .last()
                    .cloned()
                    .ok_or_else(|| CodegenError::new("'break' outside of a loop", *line))?;
                self.buf.line(format!("jmp {label}"));
                Ok(())
            }
            Stmt::Continue(line) => {
                let label = self
                    .continue_labels
                    .last()
                    .cloned()
                    .ok_or_else(|| CodegenError::new("'continue' outside of a loop", *line))?;
                self.buf.line(format!("jmp {label}"));
                Ok(())
            }
        }
    }

    pub(super) fn emit_block(&mut self, block: &Block) -> Result<(), CodegenError> {
        for stmt in &block.stmts {
            self.emit_stmt(stmt)?;
        }
        Ok(())
    }

    fn emit_if(&mut self, cond: &crate::ast::Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> Result<(), CodegenError> {
        self.emit_expr(cond)?;
        self.buf.line("cmpl $0, %eax");
        let else_label = self.buf.make_label(".J");
        let end_label = self.buf.make_label(".J");
        self.buf.line(format!("je {else_label}"));
        self.emit_stmt(then_branch)?;
        self.buf.line(format!("jmp {end_label}"));
        self.buf.label_line(&else_label);
        if let Some(else_branch) = else_branch {
            self.emit_stmt(else_branch)?;
        }
        self.buf.label_line(&end_label);
        Ok(())
    }

    fn emit_while(&mut self, cond: &crate::ast::Expr, body: &Stmt) -> Result<(), CodegenError> {
        let start_label = self.buf.make_label(".S");
        let end_label = self.buf.make_label(".E");
        self.buf.label_line(&start_label);
        self.emit_expr(cond)?;
        self.buf.line("cmpl $0, %eax");
        self.buf.line(format!("je {end_label}"));

        self.break_labels.push(end_label.clone());
        self.continue_labels.push(start_label.clone());
        let result = self.emit_stmt(body);
        self.break_labels.pop();
        self.continue_labels.pop();
        result?;

        self.buf.line(format!("jmp {start_label}"));
        self.buf.label_line(&end_label);
        Ok(())
    }

    fn emit_declarator_init(&mut self, decl: &Declarator) -> Result<(), CodegenError> {
        let Some(init) = &decl.init else { return Ok(()) };
        let id = decl
            .resolved_as
            .ok_or_else(|| CodegenError::new("declarator missing its resolved symbol", decl.line))?;

        match init {
            Initializer::Array(elements) => {
                let ty = self.type_of(id);
                self.emit_array_init(id, elements, &ty, 0, decl.line)
            }
            Initializer::Expr(expr) => {
                self.emit_expr(expr)?;
                let operand = self.operand_for(id);
                self.buf.line(format!("movl %eax, {operand}"));
                Ok(())
            }
        }
    }

    /// Walks a (possibly nested) array initializer, storing each scalar
    /// element at its linearised byte offset from the array's base. `ty`
    /// is the array type at the current nesting level, so inner element
    /// sizes come from the type tree rather than being re-derived.
    fn emit_array_init(
        &mut self,
        id: SymbolId,
        elements: &[Initializer],
        ty: &crate::types::Type,
        base_offset: i32,
        line: u32,
    ) -> Result<(), CodegenError> {
        let inner = match ty {
            crate::types::Type::Array(inner, _) => inner.as_ref().clone(),
            _ => return Err(CodegenError::new("array initializer for a non-array variable", line)),
        };
        let element_size = inner.size() as i32;
        for (i, element) in elements.iter().enumerate() {
            let offset = base_offset + (i as i32) * element_size;
            match element {
                Initializer::Expr(expr) => {
                    self.emit_expr(expr)?;
                    let operand = self.element_operand(id, offset)?;
                    self.buf.line(format!("movl %eax, {operand}"));
                }
                Initializer::Array(nested) => {
                    self.emit_array_init(id, nested, &inner, offset, line)?;
                }
            }
        }
        Ok(())
    }

    fn element_operand(&self, id: SymbolId, byte_offset: i32) -> Result<String, CodegenError> {
        match self.symbol(id) {
            crate::symbol::Symbol::Local { offset, is_param, .. } => Ok(if *is_param {
                format!("{}(%ebp)", offset + byte_offset)
            } else {
                format!("-{}(%ebp)", offset - byte_offset)
            }),
            crate::symbol::Symbol::Global { name, .. } => Ok(format!("{name}+{byte_offset}")),
            _ => Err(CodegenError::without_line("array initializer target is not addressable")),
        }
    }
}
