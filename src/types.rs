//! The value type model: builtins, pointers, arrays, and function
//! signatures, plus the l-value/r-value attribute that the resolver
//! attaches to an expression's result (not to the type itself).

use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Void,
    Char,
    Int,
    Float,
    Pointer(Rc<Type>),
    Array(Rc<Type>, u32),
    Function(Rc<FunctionSignature>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSignature {
    pub params: Vec<Type>,
    pub ret: Type,
}

impl Type {
    pub fn pointer(inner: Type) -> Type {
        Type::Pointer(Rc::new(inner))
    }

    pub fn array(inner: Type, size: u32) -> Type {
        Type::Array(Rc::new(inner), size)
    }

    pub fn function(params: Vec<Type>, ret: Type) -> Type {
        Type::Function(Rc::new(FunctionSignature { params, ret }))
    }

    /// Storage size in bytes. Functions have no storage size; callers must
    /// not ask for the size of a `Type::Function`.
    pub fn size(&self) -> u32 {
        match self {
            Type::Void => 1,
            Type::Char => 1,
            Type::Int => 4,
            Type::Float => 4,
            Type::Pointer(_) => 4,
            Type::Array(inner, count) => inner.size() * count,
            Type::Function(_) => 0,
        }
    }

    /// The type this type decays to when used as a pointer-arithmetic
    /// operand: arrays decay to a pointer to their element type, other
    /// types are unchanged.
    pub fn decay(&self) -> Type {
        match self {
            Type::Array(inner, _) => Type::Pointer(inner.clone()),
            other => other.clone(),
        }
    }

    pub fn is_pointer_like(&self) -> bool {
        matches!(self, Type::Pointer(_) | Type::Array(_, _))
    }

    /// The type obtained by dereferencing a pointer or array; `None` for
    /// any other type.
    pub fn pointee(&self) -> Option<Type> {
        match self {
            Type::Pointer(inner) => Some((**inner).clone()),
            Type::Array(inner, _) => Some((**inner).clone()),
            _ => None,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Type::Int)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Char => write!(f, "char"),
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::Pointer(inner) => write!(f, "{inner}*"),
            Type::Array(inner, size) => write!(f, "{inner}[{size}]"),
            Type::Function(sig) => {
                write!(f, "(")?;
                for (i, p) in sig.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ") -> {}", sig.ret)
            }
        }
    }
}

/// Whether an expression's result is addressable (an l-value) or a plain
/// value (an r-value). This is a property of the *expression*, not of its
/// type: `Type`'s equality ignores it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCategory {
    LValue,
    RValue,
}

/// A type paired with the value category the resolver computed for the
/// expression that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typed {
    pub ty: Type,
    pub category: ValueCategory,
}

impl Typed {
    pub fn lvalue(ty: Type) -> Self {
        Self {
            ty,
            category: ValueCategory::LValue,
        }
    }

    pub fn rvalue(ty: Type) -> Self {
        Self {
            ty,
            category: ValueCategory::RValue,
        }
    }

    pub fn is_lvalue(&self) -> bool {
        matches!(self.category, ValueCategory::LValue)
    }

    pub fn as_rvalue(&self) -> Typed {
        Typed::rvalue(self.ty.clone())
    }

    pub fn as_lvalue(&self) -> Typed {
        Typed::lvalue(self.ty.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_size_multiplies_element_by_count() {
        let t = Type::array(Type::Int, 10);
        assert_eq!(t.size(), 40);
    }

    #[test]
    fn equality_ignores_value_category() {
        let a = Typed::lvalue(Type::Int);
        let b = Typed::rvalue(Type::Int);
        assert_eq!(a.ty, b.ty);
    }

    #[test]
    fn array_and_pointer_of_same_inner_are_distinct_types() {
        assert_ne!(Type::array(Type::Int, 4), Type::pointer(Type::Int));
    }

    #[test]
    fn array_decays_to_pointer_of_inner() {
        let arr = Type::array(Type::Char, 8);
        assert_eq!(arr.decay(), Type::pointer(Type::Char));
    }
}
