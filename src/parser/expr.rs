use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::token::TokenKind;

use super::error::ParseError;
use super::Parser;

impl<'t> Parser<'t> {
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        let lhs = self.parse_or()?;

        let compound = match self.peek_kind() {
            TokenKind::Equal => None,
            TokenKind::PlusEqual => Some(BinaryOp::Add),
            TokenKind::MinusEqual => Some(BinaryOp::Sub),
            TokenKind::StarEqual => Some(BinaryOp::Mul),
            TokenKind::SlashEqual => Some(BinaryOp::Div),
            TokenKind::LessLessEqual => Some(BinaryOp::Shl),
            TokenKind::GreaterGreaterEqual => Some(BinaryOp::Shr),
            TokenKind::AmpEqual => Some(BinaryOp::BitAnd),
            TokenKind::PipeEqual => Some(BinaryOp::BitOr),
            TokenKind::CaretEqual => Some(BinaryOp::BitXor),
            _ => return Ok(lhs),
        };
        self.advance();
        let rhs = self.parse_assignment()?;

        let value = match compound {
            None => rhs,
            Some(op) => Expr::binary(op, lhs.clone(), rhs, line),
        };
        Ok(Expr::new(
            ExprKind::Assign {
                target: Box::new(lhs),
                value: Box::new(value),
            },
            line,
        ))
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(&[(TokenKind::PipePipe, BinaryOp::Or)], Self::parse_and)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(&[(TokenKind::AmpAmp, BinaryOp::And)], Self::parse_bit_or)
    }

    fn parse_bit_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(&[(TokenKind::Pipe, BinaryOp::BitOr)], Self::parse_bit_xor)
    }

    fn parse_bit_xor(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(&[(TokenKind::Caret, BinaryOp::BitXor)], Self::parse_bit_and)
    }

    fn parse_bit_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(&[(TokenKind::Amp, BinaryOp::BitAnd)], Self::parse_equality)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(
            &[(TokenKind::EqualEqual, BinaryOp::Eq), (TokenKind::BangEqual, BinaryOp::Ne)],
            Self::parse_relational,
        )
    }

    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(
            &[
                (TokenKind::Less, BinaryOp::Lt),
                (TokenKind::Greater, BinaryOp::Gt),
                (TokenKind::LessEqual, BinaryOp::Le),
                (TokenKind::GreaterEqual, BinaryOp::Ge),
            ],
            Self::parse_shift,
        )
    }

    fn parse_shift(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(
            &[(TokenKind::LessLess, BinaryOp::Shl), (TokenKind::GreaterGreater, BinaryOp::Shr)],
            Self::parse_additive,
        )
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(
            &[(TokenKind::Plus, BinaryOp::Add), (TokenKind::Minus, BinaryOp::Sub)],
            Self::parse_multiplicative,
        )
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc_binary(
            &[
                (TokenKind::Star, BinaryOp::Mul),
                (TokenKind::Slash, BinaryOp::Div),
                (TokenKind::Percent, BinaryOp::Mod),
            ],
            Self::parse_unary,
        )
    }

    fn parse_left_assoc_binary(
        &mut self,
        ops: &[(TokenKind, BinaryOp)],
        mut next: impl FnMut(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut lhs = next(self)?;
        loop {
            let matched = ops.iter().find(|(tok, _)| self.check(tok));
            let Some((_, op)) = matched else { break };
            let op = *op;
            let line = self.current_line();
            self.advance();
            let rhs = next(self)?;
            lhs = Expr::binary(op, lhs, rhs, line);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        let op = match self.peek_kind() {
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Star => Some(UnaryOp::Deref),
            TokenKind::Amp => Some(UnaryOp::AddrOf),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::unary(op, operand, line));
        }

        if self.check(&TokenKind::LeftParen) && self.peek_type_start_after_paren() {
            self.advance();
            let ty = self.parse_type_name()?;
            self.expect(TokenKind::RightParen, "a cast")?;
            let expr = self.parse_unary()?;
            return Ok(Expr::new(ExprKind::Cast { ty, expr: Box::new(expr) }, line));
        }

        self.parse_postfix()
    }

    /// Look past a `(` for a type keyword, without consuming tokens —
    /// distinguishes a cast `(int)x` from a parenthesised expr `(x)`.
    fn peek_type_start_after_paren(&self) -> bool {
        matches!(
            self.tokens.get(self.pos + 1).map(|t| &t.kind),
            Some(TokenKind::Int) | Some(TokenKind::Void) | Some(TokenKind::Char) | Some(TokenKind::Float)
        )
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_atom()?;
        loop {
            if self.match_token(&TokenKind::LeftBracket) {
                let line = self.current_line();
                let index = self.parse_expr()?;
                self.expect(TokenKind::RightBracket, "an array index")?;
                // a[i]  =>  *(a + i)
                let sum = Expr::binary(BinaryOp::Add, expr, index, line);
                expr = Expr::unary(UnaryOp::Deref, sum, line);
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        match self.peek_kind().clone() {
            TokenKind::IntLiteral(n) => {
                self.advance();
                Ok(Expr::new(ExprKind::IntLiteral(n), line))
            }
            TokenKind::StringLiteral(s) => {
                self.advance();
                Ok(Expr::new(ExprKind::StringLiteral(s), line))
            }
            TokenKind::Sizeof => {
                self.advance();
                self.expect(TokenKind::LeftParen, "sizeof")?;
                let expr = if self.peek_is_type_start() {
                    let ty = self.parse_type_name()?;
                    ExprKind::SizeofType(ty)
                } else {
                    let inner = self.parse_expr()?;
                    ExprKind::SizeofExpr(Box::new(inner))
                };
                self.expect(TokenKind::RightParen, "sizeof")?;
                Ok(Expr::new(expr, line))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RightParen, "a parenthesised expression")?;
                Ok(inner)
            }
            TokenKind::Identifier(name) => {
                self.advance();
                if self.match_token(&TokenKind::LeftParen) {
                    let args = self.parse_call_args()?;
                    Ok(Expr::call(name, args, line))
                } else {
                    Ok(Expr::var(name, line))
                }
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if !self.check(&TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "a call's argument list")?;
        Ok(args)
    }
}
