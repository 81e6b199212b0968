mod decl;
mod error;
mod expr;
mod stmt;
mod target;
#[cfg(test)]
mod tests;

pub use error::CodegenError;

use crate::ast::Program;
use crate::symbol::{Symbol, SymbolId};
use crate::types::Type;

use target::AsmBuffers;

/// Walks a resolved AST and emits i386 AT&T assembly text. Every
/// expression leaves its value in `%eax`; `%ebx` is the scratch register
/// for a binary operator's right-hand operand, `%edx` receives the
/// remainder from `idivl`.
pub struct Codegen {
    symbols: Vec<Symbol>,
    buf: AsmBuffers,
    break_labels: Vec<String>,
    continue_labels: Vec<String>,
}

impl Codegen {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self {
            symbols,
            buf: AsmBuffers::new(),
            break_labels: Vec::new(),
            continue_labels: Vec::new(),
        }
    }

    pub fn compile(mut self, program: &Program) -> Result<String, CodegenError> {
        self.emit_program(program)?;
        Ok(self.buf.render())
    }

    fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0 as usize]
    }

    /// The AT&T operand referring to a local/global/static symbol:
    /// `k(%ebp)` for a parameter, `-k(%ebp)` for an ordinary local, the
    /// bare name for anything globally visible.
    fn operand_for(&self, id: SymbolId) -> String {
        match self.symbol(id) {
            Symbol::Local { offset, is_param, .. } => {
                if *is_param {
                    format!("{offset}(%ebp)")
                } else {
                    format!("-{offset}(%ebp)")
                }
            }
            Symbol::Global { name, .. } => name.clone(),
            Symbol::Function { name, .. } => name.clone(),
            Symbol::NativeFunction { name, .. } => name.clone(),
        }
    }

    fn type_of(&self, id: SymbolId) -> Type {
        self.symbol(id).ty_or_void()
    }

    /// The standard function epilogue: tear down the frame and return to
    /// the caller, whatever value `%eax` currently holds.
    pub(super) fn emit_epilogue(&mut self) {
        self.buf.line("movl %ebp, %esp");
        self.buf.line("popl %ebp");
        self.buf.line("ret");
    }
}
