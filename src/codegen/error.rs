use crate::token::Line;

/// Raised only when the code generator encounters a node shape the
/// resolver should have already ruled out. Not expected to fire on
/// resolver-approved input; reaching one is an internal-invariant defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenError {
    pub message: String,
    pub line: Option<Line>,
}

impl CodegenError {
    pub fn new(message: impl Into<String>, line: Line) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn without_line(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
        }
    }
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "error:{line}: internal compiler error: {}", self.message),
            None => write!(f, "error: internal compiler error: {}", self.message),
        }
    }
}

impl std::error::Error for CodegenError {}
