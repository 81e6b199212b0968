use crate::ast::{Expr, ExprKind};
use crate::symbol::NativeKind;
use crate::token::Line;
use crate::types::{Type, Typed};

use super::error::{Bail, ResolveResult};
use super::Resolver;

impl Resolver {
    /// `printf`/`scanf` aren't ordinary functions: their arity depends on
    /// the number of `%i` specifiers in their (must be literal) format
    /// string. This hook re-derives that arity and checks every argument
    /// against it, in place of a fixed signature lookup.
    pub(super) fn check_native_call(
        &mut self,
        kind: NativeKind,
        name: &str,
        args: &[Expr],
        arg_types: &[Typed],
        line: Line,
    ) -> ResolveResult<Type> {
        let Some(format) = args.first() else {
            self.error(format!("'{name}' requires a format string argument"), line);
            return Err(Bail);
        };
        let ExprKind::StringLiteral(text) = &format.kind else {
            self.error(format!("'{name}' requires a string literal format argument"), format.line);
            return Err(Bail);
        };

        let expected = count_format_specifiers(text);
        let provided = arg_types.len() - 1;
        if expected != provided {
            self.error(
                format!(
                    "'{name}' format string expects {expected} argument(s) but {provided} were given"
                ),
                line,
            );
            return Err(Bail);
        }

        let wanted = match kind {
            NativeKind::Printf => Type::Int,
            NativeKind::Scanf => Type::pointer(Type::Int),
        };
        for (i, arg) in arg_types.iter().skip(1).enumerate() {
            if arg.ty != wanted {
                self.error(
                    format!(
                        "argument {} to '{name}' has type '{}', expected '{wanted}'",
                        i + 1,
                        arg.ty
                    ),
                    line,
                );
                return Err(Bail);
            }
        }

        Ok(Type::Int)
    }
}

/// Counts non-overlapping `%i` specifiers in a raw (still-escaped) string
/// literal body.
fn count_format_specifiers(raw: &str) -> usize {
    raw.matches("%i").count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_multiple_specifiers() {
        assert_eq!(count_format_specifiers("a=%i b=%i\\n"), 2);
    }

    #[test]
    fn zero_specifiers_in_plain_string() {
        assert_eq!(count_format_specifiers("hello\\n"), 0);
    }
}
