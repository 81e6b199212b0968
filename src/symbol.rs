//! Symbol records. AST nodes never own a symbol directly — they hold a
//! [`SymbolId`] handle into the tables the resolver builds, which breaks
//! the cycle between AST nodes and the symbols they resolve to.

use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub u32);

#[derive(Debug, Clone)]
pub enum Symbol {
    /// Stack-resident. `offset` is the frame-pointer-relative byte offset:
    /// positive for inbound parameters (`k(%ebp)`), and the magnitude used
    /// to compute `-k(%ebp)` for ordinary locals.
    Local { ty: Type, offset: i32, is_param: bool },
    /// A linker-visible global, including mangled `static` locals.
    Global { ty: Type, name: String },
    /// An ordinary user or extern function.
    Function {
        ty: Type,
        name: String,
        initialized: bool,
    },
    /// A compile-time codegen hook for variadic-like builtins (`printf`,
    /// `scanf`) whose argument validation can't be expressed as a plain
    /// signature.
    NativeFunction { name: String, kind: NativeKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeKind {
    Printf,
    Scanf,
}

impl Symbol {
    pub fn ty(&self) -> Type {
        match self {
            Symbol::Local { ty, .. } => ty.clone(),
            Symbol::Global { ty, .. } => ty.clone(),
            Symbol::Function { ty, .. } => ty.clone(),
            Symbol::NativeFunction { .. } => {
                unreachable!("native functions are type-checked per call site, not via a fixed signature")
            }
        }
    }

    /// Like [`Symbol::ty`], but returns `Type::Void` for a native function
    /// instead of panicking — used by callers that only care about the
    /// type when addressing an ordinary value.
    pub fn ty_or_void(&self) -> Type {
        match self {
            Symbol::NativeFunction { .. } => Type::Void,
            other => other.ty(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Symbol::Local { .. } => "",
            Symbol::Global { name, .. } => name,
            Symbol::Function { name, .. } => name,
            Symbol::NativeFunction { name, .. } => name,
        }
    }

    pub fn is_function_like(&self) -> bool {
        matches!(self, Symbol::Function { .. } | Symbol::NativeFunction { .. })
    }
}
