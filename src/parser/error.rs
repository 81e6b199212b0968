use crate::token::Line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: Line,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: Line) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error:{}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}
