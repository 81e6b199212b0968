use crate::ast::{Declarator, FunctionDecl, FunctionDef, FunctionHead, GlobalVarDecl, Param, Program, TopLevel};
use crate::token::TokenKind;

use super::error::ParseError;
use super::Parser;

impl<'t> Parser<'t> {
    pub(super) fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut items = Vec::new();
        while !self.is_eof() {
            items.push(self.parse_top_level()?);
        }
        Ok(Program { items })
    }

    fn parse_top_level(&mut self) -> Result<TopLevel, ParseError> {
        let line = self.current_line();
        let is_static = self.match_token(&TokenKind::Static);
        let base = self.parse_base_type()?;
        let pointer_depth = self.parse_pointer_stars();
        let name = self.expect_identifier("a top-level declaration")?;

        if self.check(&TokenKind::LeftParen) {
            let head = self.parse_function_head(base, pointer_depth, name, line)?;
            if self.match_token(&TokenKind::Semicolon) {
                return Ok(TopLevel::FunctionDecl(FunctionDecl { head }));
            }
            let body = self.parse_block()?;
            return Ok(TopLevel::FunctionDef(FunctionDef {
                head,
                body,
                max_stack_size: 0,
            }));
        }

        // global variable declaration; `name` already consumed as the
        // first declarator's identifier.
        let array_dims = self.parse_array_suffixes()?;
        let init = if self.match_token(&TokenKind::Equal) {
            Some(self.parse_initializer_inner(&array_dims)?)
        } else {
            None
        };
        let mut declarators = vec![Declarator {
            name,
            pointer_depth,
            array_dims,
            init,
            line,
            resolved_as: None,
        }];
        while self.match_token(&TokenKind::Comma) {
            declarators.push(self.parse_global_declarator(base)?);
        }
        self.expect(TokenKind::Semicolon, "a global variable declaration")?;
        if is_static {
            return Err(ParseError::new("'static' is not meaningful at file scope", line));
        }
        Ok(TopLevel::GlobalVarDecl(GlobalVarDecl {
            base,
            declarators,
            line,
        }))
    }

    fn parse_global_declarator(&mut self, base: crate::ast::BaseType) -> Result<Declarator, ParseError> {
        let pointer_depth = self.parse_pointer_stars();
        let line = self.current_line();
        let name = self.expect_identifier("a variable name")?;
        let array_dims = self.parse_array_suffixes()?;
        let init = if self.match_token(&TokenKind::Equal) {
            Some(self.parse_initializer_inner(&array_dims)?)
        } else {
            None
        };
        let _ = base;
        Ok(Declarator {
            name,
            pointer_depth,
            array_dims,
            init,
            line,
            resolved_as: None,
        })
    }

    fn parse_function_head(
        &mut self,
        base: crate::ast::BaseType,
        pointer_depth: u32,
        name: String,
        line: u32,
    ) -> Result<FunctionHead, ParseError> {
        self.expect(TokenKind::LeftParen, "a function's parameter list")?;
        let mut params = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                params.push(self.parse_param()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "a function's parameter list")?;
        let return_type = crate::ast::TypeName {
            base,
            pointer_depth,
            array_dims: Vec::new(),
        };
        Ok(FunctionHead {
            name,
            return_type,
            params,
            line,
        })
    }

    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let line = self.current_line();
        let base = self.parse_base_type()?;
        let pointer_depth = self.parse_pointer_stars();
        let name = self.expect_identifier("a parameter name")?;
        let array_dims = self.parse_array_suffixes()?;
        Ok(Param {
            name,
            type_name: crate::ast::TypeName {
                base,
                pointer_depth,
                array_dims,
            },
            line,
        })
    }
}
