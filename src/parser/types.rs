use crate::ast::{BaseType, TypeName};
use crate::token::TokenKind;

use super::error::ParseError;
use super::Parser;

impl<'t> Parser<'t> {
    /// `int | void | char | float`
    pub(super) fn parse_base_type(&mut self) -> Result<BaseType, ParseError> {
        let base = match self.peek_kind() {
            TokenKind::Int => BaseType::Int,
            TokenKind::Void => BaseType::Void,
            TokenKind::Char => BaseType::Char,
            TokenKind::Float => BaseType::Float,
            _ => return Err(self.unexpected("a type")),
        };
        self.advance();
        Ok(base)
    }

    /// Counts leading `*` tokens.
    pub(super) fn parse_pointer_stars(&mut self) -> u32 {
        let mut depth = 0;
        while self.match_token(&TokenKind::Star) {
            depth += 1;
        }
        depth
    }

    /// Parses `[NUM]` repeated zero or more times; each dimension must be
    /// a positive literal.
    pub(super) fn parse_array_suffixes(&mut self) -> Result<Vec<u32>, ParseError> {
        let mut dims = Vec::new();
        while self.match_token(&TokenKind::LeftBracket) {
            let line = self.current_line();
            let size = match self.peek_kind().clone() {
                TokenKind::IntLiteral(n) => {
                    self.advance();
                    n
                }
                _ => return Err(self.unexpected("an array dimension")),
            };
            if size <= 0 {
                return Err(ParseError::new("array dimension must be greater than zero", line));
            }
            self.expect(TokenKind::RightBracket, "an array dimension")?;
            dims.push(size as u32);
        }
        Ok(dims)
    }

    /// Used by `sizeof(type)` and casts: `base pointer-stars array-suffixes`.
    pub(super) fn parse_type_name(&mut self) -> Result<TypeName, ParseError> {
        let base = self.parse_base_type()?;
        let pointer_depth = self.parse_pointer_stars();
        let array_dims = self.parse_array_suffixes()?;
        Ok(TypeName {
            base,
            pointer_depth,
            array_dims,
        })
    }

    /// True if the upcoming tokens look like the start of a type name —
    /// used to disambiguate `(type)expr` casts from parenthesised
    /// expressions and `sizeof(type)` from `sizeof(expr)`.
    pub(super) fn peek_is_type_start(&self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::Int | TokenKind::Void | TokenKind::Char | TokenKind::Float
        )
    }
}
