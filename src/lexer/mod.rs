mod cursor;
mod error;
mod skip;
#[cfg(test)]
mod tests;

use cursor::Cursor;
pub use error::LexError;
use skip::skip_whitespace_and_comments;

use crate::token::{Span, Token, TokenKind};

/// Converts source text into a token stream.
///
/// The lexer is a single forward pass: no backtracking, no lookahead
/// beyond the handful of bytes needed to disambiguate multi-character
/// operators (`==`, `<<=`, ...).
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            skip_whitespace_and_comments(&mut self.cursor);
            let line = self.cursor.line();
            if self.cursor.is_eof() {
                tokens.push(Token::new(TokenKind::Eof, Span::new(self.cursor.pos(), self.cursor.pos(), line)));
                break;
            }
            tokens.push(self.next_token()?);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        let line = self.cursor.line();
        let ch = self.cursor.current().expect("checked not eof");

        let kind = match ch {
            b'0'..=b'9' => self.lex_number()?,
            b'"' => self.lex_string()?,
            c if is_ident_start(c) => self.lex_identifier(),
            _ => self.lex_operator()?,
        };

        let end = self.cursor.pos();
        Ok(Token::new(kind, Span::new(start, end, line)))
    }

    fn lex_number(&mut self) -> Result<TokenKind, LexError> {
        let start = self.cursor.pos();
        let line = self.cursor.line();

        if self.cursor.current() == Some(b'0')
            && matches!(self.cursor.peek_at(1), Some(b'x') | Some(b'X'))
        {
            self.cursor.advance();
            self.cursor.advance();
            let digits_start = self.cursor.pos();
            while matches!(self.cursor.current(), Some(c) if c.is_ascii_hexdigit()) {
                self.cursor.advance();
            }
            let text = self.cursor.slice(digits_start, self.cursor.pos());
            if text.is_empty() {
                return Err(LexError::new(
                    "invalid hexadecimal literal",
                    Span::new(start, self.cursor.pos(), line),
                ));
            }
            let value = i64::from_str_radix(text, 16).map_err(|_| {
                LexError::new("hexadecimal literal out of range", Span::new(start, self.cursor.pos(), line))
            })?;
            return Ok(TokenKind::IntLiteral(value));
        }

        if self.cursor.current() == Some(b'0')
            && matches!(self.cursor.peek_at(1), Some(b'b') | Some(b'B'))
        {
            self.cursor.advance();
            self.cursor.advance();
            let digits_start = self.cursor.pos();
            while matches!(self.cursor.current(), Some(b'0') | Some(b'1')) {
                self.cursor.advance();
            }
            let text = self.cursor.slice(digits_start, self.cursor.pos());
            if text.is_empty() {
                return Err(LexError::new(
                    "invalid binary literal",
                    Span::new(start, self.cursor.pos(), line),
                ));
            }
            let value = i64::from_str_radix(text, 2).map_err(|_| {
                LexError::new("binary literal out of range", Span::new(start, self.cursor.pos(), line))
            })?;
            return Ok(TokenKind::IntLiteral(value));
        }

        while matches!(self.cursor.current(), Some(c) if c.is_ascii_digit()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice(start, self.cursor.pos());
        let value = text
            .parse::<i64>()
            .map_err(|_| LexError::new("integer literal out of range", Span::new(start, self.cursor.pos(), line)))?;
        Ok(TokenKind::IntLiteral(value))
    }

    fn lex_string(&mut self) -> Result<TokenKind, LexError> {
        let start = self.cursor.pos();
        let line = self.cursor.line();
        self.cursor.advance(); // opening quote
        let body_start = self.cursor.pos();
        loop {
            match self.cursor.current() {
                None => {
                    return Err(LexError::new(
                        "unterminated string literal",
                        Span::new(start, self.cursor.pos(), line),
                    ));
                }
                Some(b'"') => break,
                Some(b'\\') => {
                    self.cursor.advance();
                    if self.cursor.current().is_some() {
                        self.cursor.advance();
                    }
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
        let body = self.cursor.slice(body_start, self.cursor.pos()).to_string();
        self.cursor.advance(); // closing quote
        Ok(TokenKind::StringLiteral(body))
    }

    fn lex_identifier(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        while matches!(self.cursor.current(), Some(c) if is_ident_continue(c)) {
            self.cursor.advance();
        }
        let text = self.cursor.slice(start, self.cursor.pos());
        TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Identifier(text.to_string()))
    }

    fn lex_operator(&mut self) -> Result<TokenKind, LexError> {
        let start = self.cursor.pos();
        let line = self.cursor.line();
        let ch = self.cursor.advance().expect("checked not eof");

        macro_rules! two {
            ($second:expr, $two_kind:expr, $one_kind:expr) => {{
                if self.cursor.current() == Some($second) {
                    self.cursor.advance();
                    $two_kind
                } else {
                    $one_kind
                }
            }};
        }

        let kind = match ch {
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b'[' => TokenKind::LeftBracket,
            b']' => TokenKind::RightBracket,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'~' => TokenKind::Tilde,
            b'+' => two!(b'=', TokenKind::PlusEqual, TokenKind::Plus),
            b'-' => two!(b'=', TokenKind::MinusEqual, TokenKind::Minus),
            b'*' => two!(b'=', TokenKind::StarEqual, TokenKind::Star),
            b'/' => two!(b'=', TokenKind::SlashEqual, TokenKind::Slash),
            b'%' => TokenKind::Percent,
            b'^' => two!(b'=', TokenKind::CaretEqual, TokenKind::Caret),
            b'=' => two!(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'!' => two!(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'&' => {
                if self.cursor.current() == Some(b'&') {
                    self.cursor.advance();
                    TokenKind::AmpAmp
                } else {
                    two!(b'=', TokenKind::AmpEqual, TokenKind::Amp)
                }
            }
            b'|' => {
                if self.cursor.current() == Some(b'|') {
                    self.cursor.advance();
                    TokenKind::PipePipe
                } else {
                    two!(b'=', TokenKind::PipeEqual, TokenKind::Pipe)
                }
            }
            b'<' => {
                if self.cursor.current() == Some(b'<') {
                    self.cursor.advance();
                    two!(b'=', TokenKind::LessLessEqual, TokenKind::LessLess)
                } else {
                    two!(b'=', TokenKind::LessEqual, TokenKind::Less)
                }
            }
            b'>' => {
                if self.cursor.current() == Some(b'>') {
                    self.cursor.advance();
                    two!(b'=', TokenKind::GreaterGreaterEqual, TokenKind::GreaterGreater)
                } else {
                    two!(b'=', TokenKind::GreaterEqual, TokenKind::Greater)
                }
            }
            other => {
                return Err(LexError::new(
                    format!("unrecognised character '{}'", other as char),
                    Span::new(start, self.cursor.pos(), line),
                ));
            }
        };
        Ok(kind)
    }
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}
