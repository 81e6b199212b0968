use crate::ast::{FunctionDef, GlobalVarDecl, TopLevel};
use crate::symbol::Symbol;
use crate::types::Type;

use super::error::{Bail, ResolveResult};
use super::scope::ScopeStack;
use super::{FunctionCtx, Resolver};

impl Resolver {
    pub(super) fn resolve_top_level(&mut self, item: &mut TopLevel) -> ResolveResult<()> {
        // Every top-level item starts from a clean function-local state:
        // an aborted previous item must never leak locals or loop depth
        // into the next one.
        self.scopes = ScopeStack::new();
        self.current_function = None;
        self.current_function_name = None;
        self.nested_loops = 0;

        match item {
            TopLevel::FunctionDecl(decl) => self.resolve_function_decl(&decl.head),
            TopLevel::FunctionDef(def) => self.resolve_function_def(def),
            TopLevel::GlobalVarDecl(global) => self.resolve_global_var_decl(global),
        }
    }

    fn resolve_function_decl(&mut self, head: &crate::ast::FunctionHead) -> ResolveResult<()> {
        let sig = Type::function(
            head.params.iter().map(|p| p.type_name.to_type()).collect(),
            head.return_type.to_type(),
        );
        match self.globals.get(&head.name).map(|id| self.symbol(*id).clone()) {
            Some(Symbol::Function { ty, .. }) if ty == sig => Ok(()),
            Some(Symbol::Function { .. }) => {
                self.error(format!("conflicting declaration of '{}'", head.name), head.line);
                Err(Bail)
            }
            Some(_) => {
                self.error(format!("'{}' already declared as a different kind of symbol", head.name), head.line);
                Err(Bail)
            }
            None => {
                self.declare_global_symbol(
                    &head.name,
                    Symbol::Function { ty: sig, name: head.name.clone(), initialized: false },
                );
                Ok(())
            }
        }
    }

    fn resolve_function_def(&mut self, def: &mut FunctionDef) -> ResolveResult<()> {
        let head = &def.head;
        let sig = Type::function(
            head.params.iter().map(|p| p.type_name.to_type()).collect(),
            head.return_type.to_type(),
        );

        let id = match self.globals.get(&head.name).copied() {
            Some(id) => match self.symbol(id).clone() {
                Symbol::Function { ty, initialized: true, .. } if ty == sig => {
                    self.error(format!("'{}' is already defined", head.name), head.line);
                    return Err(Bail);
                }
                Symbol::Function { initialized: true, .. } => {
                    self.error(format!("'{}' is already defined", head.name), head.line);
                    return Err(Bail);
                }
                Symbol::Function { ty, .. } if ty != sig => {
                    self.error(
                        format!("definition of '{}' does not match its declaration", head.name),
                        head.line,
                    );
                    return Err(Bail);
                }
                Symbol::Function { .. } => {
                    self.symbols[id.0 as usize] = Symbol::Function {
                        ty: sig.clone(),
                        name: head.name.clone(),
                        initialized: true,
                    };
                    id
                }
                _ => {
                    self.error(
                        format!("'{}' already declared as a different kind of symbol", head.name),
                        head.line,
                    );
                    return Err(Bail);
                }
            },
            None => self.declare_global_symbol(
                &head.name,
                Symbol::Function { ty: sig, name: head.name.clone(), initialized: true },
            ),
        };
        let _ = id;

        self.current_function = Some(FunctionCtx {
            return_type: head.return_type.to_type(),
            max_stack_size: 0,
        });
        self.current_function_name = Some(head.name.clone());

        self.scopes.open();
        let mut offset: i32 = 8;
        for param in &head.params {
            let ty = param.type_name.to_type();
            if ty.is_void() {
                self.error("a parameter cannot have type 'void'", param.line);
                return Err(Bail);
            }
            let param_id = self.intern(Symbol::Local { ty, offset, is_param: true });
            self.scopes.bind_without_offset(&param.name, param_id);
            // `emit_call` always pushes a full 4-byte slot per argument
            // (`pushl` widens), so every parameter sits on a flat 4-byte
            // stride regardless of its own `sizeof()`.
            offset += 4;
        }

        let result = self.resolve_block(&mut def.body);
        def.max_stack_size = self
            .current_function
            .as_ref()
            .map(|ctx| ctx.max_stack_size)
            .unwrap_or(0);
        self.scopes.close();
        result
    }

    fn resolve_global_var_decl(&mut self, global: &mut GlobalVarDecl) -> ResolveResult<()> {
        for decl in &mut global.declarators {
            let ty = decl.type_name(global.base).to_type();
            if ty.is_void() {
                self.error("global variables cannot have type 'void'", decl.line);
                return Err(Bail);
            }
            if self.globals.contains_key(&decl.name) {
                self.error(format!("'{}' is already declared", decl.name), decl.line);
                return Err(Bail);
            }
            if let Some(init) = &mut decl.init {
                self.check_initializer(init, &ty, decl.line)?;
            }
            let id = self.declare_global_symbol(&decl.name, Symbol::Global { ty, name: decl.name.clone() });
            decl.resolved_as = Some(id);
        }
        Ok(())
    }
}
