use crate::ast::{Block, Declarator, Initializer, Stmt};
use crate::token::TokenKind;

use super::error::ParseError;
use super::Parser;

impl<'t> Parser<'t> {
    pub(super) fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.expect(TokenKind::LeftBrace, "a block")?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_eof() {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::RightBrace, "a block")?;
        Ok(Block { stmts })
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        match self.peek_kind() {
            TokenKind::LeftBrace => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::Return => {
                self.advance();
                let value = if self.check(&TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect(TokenKind::Semicolon, "a return statement")?;
                Ok(Stmt::Return { value, line })
            }
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Break => {
                self.advance();
                self.expect(TokenKind::Semicolon, "a break statement")?;
                Ok(Stmt::Break(line))
            }
            TokenKind::Continue => {
                self.advance();
                self.expect(TokenKind::Semicolon, "a continue statement")?;
                Ok(Stmt::Continue(line))
            }
            TokenKind::Static | TokenKind::Int | TokenKind::Void | TokenKind::Char | TokenKind::Float => {
                self.parse_local_var_decl()
            }
            _ => {
                let expr = self.parse_expr()?;
                self.expect(TokenKind::Semicolon, "an expression statement")?;
                Ok(Stmt::Expr(expr))
            }
        }
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        self.expect(TokenKind::LeftParen, "an if condition")?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RightParen, "an if condition")?;
        let then_branch = Box::new(self.parse_stmt()?);
        let else_branch = if self.match_token(&TokenKind::Else) {
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        Ok(Stmt::If {
            cond,
            then_branch,
            else_branch,
            line,
        })
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        self.expect(TokenKind::LeftParen, "a while condition")?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RightParen, "a while condition")?;
        let body = Box::new(self.parse_stmt()?);
        Ok(Stmt::While { cond, body, line })
    }

    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.advance();
        self.expect(TokenKind::LeftParen, "a for loop")?;

        let init = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_for_clause_stmt()?)
        };
        self.expect(TokenKind::Semicolon, "a for loop")?;

        let cond = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon, "a for loop")?;

        let step = if self.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::RightParen, "a for loop")?;

        let body = self.parse_stmt()?;
        Ok(Stmt::desugar_for(init, cond, step, body, line))
    }

    /// The `init` clause of a `for` is either a declaration or a bare
    /// expression, neither terminated by its own trailing `;` (the caller
    /// consumes the separating semicolons).
    fn parse_for_clause_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.peek_kind() {
            TokenKind::Static | TokenKind::Int | TokenKind::Void | TokenKind::Char | TokenKind::Float => {
                self.parse_var_decl_body(false)
            }
            _ => Ok(Stmt::Expr(self.parse_expr()?)),
        }
    }

    fn parse_local_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let stmt = self.parse_var_decl_body(true)?;
        self.expect(TokenKind::Semicolon, "a variable declaration")?;
        Ok(stmt)
    }

    /// Parses `static? type declarator (, declarator)*`, without consuming
    /// the trailing `;` (the `for`-clause caller doesn't want one).
    fn parse_var_decl_body(&mut self, _terminated: bool) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        let is_static = self.match_token(&TokenKind::Static);
        let base = self.parse_base_type()?;
        let mut declarators = Vec::new();
        loop {
            declarators.push(self.parse_declarator(base)?);
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        Ok(Stmt::VarDecl {
            base,
            is_static,
            declarators,
            line,
        })
    }

    fn parse_declarator(&mut self, base: crate::ast::BaseType) -> Result<Declarator, ParseError> {
        let pointer_depth = self.parse_pointer_stars();
        let line = self.current_line();
        let name = self.expect_identifier("a variable name")?;
        let array_dims = self.parse_array_suffixes()?;
        let init = if self.match_token(&TokenKind::Equal) {
            Some(self.parse_initializer_inner(&array_dims)?)
        } else {
            None
        };
        Ok(Declarator {
            name,
            pointer_depth,
            array_dims,
            init,
            line,
            resolved_as: None,
        })
    }

    /// Parses either a scalar expression or, when `array_dims` says this
    /// declarator is an array, a (possibly nested) brace-enclosed literal.
    pub(super) fn parse_initializer_inner(&mut self, array_dims: &[u32]) -> Result<Initializer, ParseError> {
        if self.check(&TokenKind::LeftBrace) && !array_dims.is_empty() {
            self.advance();
            let mut elements = Vec::new();
            if !self.check(&TokenKind::RightBrace) {
                loop {
                    elements.push(self.parse_initializer_inner(&array_dims[1..])?);
                    if !self.match_token(&TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RightBrace, "an array initializer")?;
            Ok(Initializer::Array(elements))
        } else {
            Ok(Initializer::Expr(self.parse_expr()?))
        }
    }
}
