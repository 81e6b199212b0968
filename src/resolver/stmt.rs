use crate::ast::{Block, Initializer, Stmt};
use crate::symbol::Symbol;
use crate::token::Line;
use crate::types::Type;

use super::error::{Bail, ResolveResult};
use super::Resolver;

impl Resolver {
    pub(super) fn resolve_stmt(&mut self, stmt: &mut Stmt) -> ResolveResult<()> {
        match stmt {
            Stmt::Expr(e) => {
                self.resolve_expr(e)?;
                Ok(())
            }
            Stmt::VarDecl { base, is_static, declarators, line } => {
                for decl in declarators {
                    self.resolve_local_declarator(*base, *is_static, decl, *line)?;
                }
                Ok(())
            }
            Stmt::Return { value, line } => self.resolve_return(value.as_mut(), *line),
            Stmt::Block(block) => self.resolve_block(block),
            Stmt::If { cond, then_branch, else_branch, .. } => {
                self.resolve_expr(cond)?;
                self.resolve_stmt(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch)?;
                }
                Ok(())
            }
            Stmt::While { cond, body, .. } => {
                self.resolve_expr(cond)?;
                self.nested_loops += 1;
                let result = self.resolve_stmt(body);
                self.nested_loops -= 1;
                result
            }
            Stmt::Break(line) => self.check_in_loop("break", *line),
            Stmt::Continue(line) => self.check_in_loop("continue", *line),
        }
    }

    pub(super) fn resolve_block(&mut self, block: &mut Block) -> ResolveResult<()> {
        self.scopes.open();
        for stmt in &mut block.stmts {
            self.resolve_stmt(stmt)?;
        }
        self.scopes.close();
        Ok(())
    }

    fn check_in_loop(&mut self, what: &str, line: Line) -> ResolveResult<()> {
        if self.nested_loops == 0 {
            self.error(format!("'{what}' used outside of a loop"), line);
            Err(Bail)
        } else {
            Ok(())
        }
    }

    fn resolve_return(&mut self, value: Option<&mut crate::ast::Expr>, line: Line) -> ResolveResult<()> {
        let expected = self
            .current_function
            .as_ref()
            .expect("return only appears inside a function body")
            .return_type
            .clone();

        match (expected.is_void(), value) {
            (true, Some(_)) => {
                self.error("cannot return a value from a function returning 'void'", line);
                Err(Bail)
            }
            (true, None) => Ok(()),
            (false, None) => {
                self.error(format!("missing return value of type '{expected}'"), line);
                Err(Bail)
            }
            (false, Some(expr)) => {
                let got = self.resolve_expr(expr)?;
                if got.ty.decay() != expected {
                    self.error(
                        format!("cannot return value of type '{}' from a function returning '{expected}'", got.ty),
                        line,
                    );
                    return Err(Bail);
                }
                Ok(())
            }
        }
    }

    fn resolve_local_declarator(
        &mut self,
        base: crate::ast::BaseType,
        is_static: bool,
        decl: &mut crate::ast::Declarator,
        _stmt_line: Line,
    ) -> ResolveResult<()> {
        let ty = decl.type_name(base).to_type();
        let line = decl.line;

        if ty.is_void() {
            self.error("variables cannot have type 'void'", line);
            return Err(Bail);
        }
        if self.scopes.is_declared_in_current_scope(&decl.name) {
            self.error(format!("'{}' is already declared in this scope", decl.name), line);
            return Err(Bail);
        }

        if let Some(init) = &mut decl.init {
            self.check_initializer(init, &ty, line)?;
        }

        if is_static {
            self.static_counter += 1;
            let func_name = self
                .current_function_name
                .clone()
                .unwrap_or_else(|| "<file>".to_string());
            let mangled = format!("{}.{}.{}", decl.name, func_name, self.static_counter);
            let id = self.intern(Symbol::Global { ty, name: mangled });
            self.scopes.bind_without_offset(&decl.name, id);
            decl.resolved_as = Some(id);
        } else {
            let size = ty.size();
            let id = self.intern(Symbol::Local { ty, offset: 0, is_param: false });
            let offset = self.scopes.declare(&decl.name, id, size);
            self.symbols[id.0 as usize] = match &self.symbols[id.0 as usize] {
                Symbol::Local { ty, .. } => Symbol::Local { ty: ty.clone(), offset: offset as i32, is_param: false },
                other => other.clone(),
            };
            decl.resolved_as = Some(id);
            if let Some(ctx) = self.current_function.as_mut() {
                ctx.max_stack_size = ctx.max_stack_size.max(self.scopes.current_top());
            }
        }
        Ok(())
    }

    pub(super) fn check_initializer(
        &mut self,
        init: &mut Initializer,
        expected: &Type,
        line: Line,
    ) -> ResolveResult<()> {
        match (init, expected) {
            (Initializer::Expr(expr), expected) => {
                let got = self.resolve_expr(expr)?;
                if got.ty.decay() != *expected {
                    self.error(
                        format!("cannot initialise variable of type '{expected}' with value of type '{}'", got.ty),
                        line,
                    );
                    return Err(Bail);
                }
                Ok(())
            }
            (Initializer::Array(elems), Type::Array(inner, size)) => {
                if elems.len() as u32 > *size {
                    self.error(
                        format!("too many initializers for array of size {size}"),
                        line,
                    );
                    return Err(Bail);
                }
                for elem in elems {
                    self.check_initializer(elem, inner, line)?;
                }
                Ok(())
            }
            (Initializer::Array(_), expected) => {
                self.error(format!("cannot initialise a value of type '{expected}' with an array literal"), line);
                Err(Bail)
            }
        }
    }
}
