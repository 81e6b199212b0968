mod decl;
mod error;
mod expr;
mod native;
mod scope;
mod stmt;
#[cfg(test)]
mod tests;

pub use error::ResolveError;

use std::collections::HashMap;

use crate::ast::Program;
use crate::symbol::{NativeKind, Symbol, SymbolId};
use crate::token::Line;
use crate::types::Type;

use error::{Bail, ResolveResult};
use scope::ScopeStack;

struct FunctionCtx {
    return_type: Type,
    max_stack_size: u32,
}

/// Walks an AST once, in source order, mutating it: linking variable and
/// call nodes to symbols, rewriting pointer arithmetic to fold in the
/// element-size multiplication, and annotating each function definition
/// with the stack size its locals require.
pub struct Resolver {
    symbols: Vec<Symbol>,
    globals: HashMap<String, SymbolId>,
    scopes: ScopeStack,
    current_function: Option<FunctionCtx>,
    current_function_name: Option<String>,
    nested_loops: u32,
    errors: Vec<ResolveError>,
    static_counter: u32,
}

impl Resolver {
    pub fn new() -> Self {
        let mut resolver = Self {
            symbols: Vec::new(),
            globals: HashMap::new(),
            scopes: ScopeStack::new(),
            current_function: None,
            current_function_name: None,
            nested_loops: 0,
            errors: Vec::new(),
            static_counter: 0,
        };
        resolver.install_externs();
        resolver
    }

    fn install_externs(&mut self) {
        self.declare_global_symbol("printf", Symbol::NativeFunction {
            name: "printf".to_string(),
            kind: NativeKind::Printf,
        });
        self.declare_global_symbol("scanf", Symbol::NativeFunction {
            name: "scanf".to_string(),
            kind: NativeKind::Scanf,
        });
        let voidp = Type::pointer(Type::Void);
        self.declare_global_symbol("malloc", Symbol::Function {
            ty: Type::function(vec![Type::Int], voidp.clone()),
            name: "malloc".to_string(),
            initialized: true,
        });
        self.declare_global_symbol("calloc", Symbol::Function {
            ty: Type::function(vec![Type::Int, Type::Int], voidp.clone()),
            name: "calloc".to_string(),
            initialized: true,
        });
        self.declare_global_symbol("realloc", Symbol::Function {
            ty: Type::function(vec![voidp.clone(), Type::Int], voidp.clone()),
            name: "realloc".to_string(),
            initialized: true,
        });
        self.declare_global_symbol("free", Symbol::Function {
            ty: Type::function(vec![voidp], Type::Void),
            name: "free".to_string(),
            initialized: true,
        });
    }

    fn declare_global_symbol(&mut self, name: &str, symbol: Symbol) -> SymbolId {
        let id = self.intern(symbol);
        self.globals.insert(name.to_string(), id);
        id
    }

    fn intern(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0 as usize]
    }

    fn error(&mut self, message: impl Into<String>, line: Line) {
        self.errors.push(ResolveError::new(message, line));
    }

    /// Resolves the whole program in place. On success, returns the flat
    /// symbol table the code generator will index into; on failure,
    /// returns every diagnostic collected (resolution keeps going after
    /// an error in one top-level item so sibling items still get
    /// checked).
    pub fn resolve(mut self, program: &mut Program) -> Result<Vec<Symbol>, Vec<ResolveError>> {
        for item in &mut program.items {
            // A `Bail` unwinds only the current top-level item; resolution
            // of the remaining items continues regardless.
            let _: ResolveResult<()> = self.resolve_top_level(item);
        }
        self.check_main_exists();

        if self.errors.is_empty() {
            Ok(self.symbols)
        } else {
            Err(self.errors)
        }
    }

    fn check_main_exists(&mut self) {
        match self.globals.get("main").map(|id| &self.symbols[id.0 as usize]) {
            Some(Symbol::Function { ty: Type::Function(sig), .. })
                if sig.params.is_empty() && sig.ret == Type::Int => {}
            Some(_) => self.error("'main' must take no parameters and return 'int'", 0),
            None => self.error("program has no 'main' function", 0),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
