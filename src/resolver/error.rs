use crate::token::Line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    pub message: String,
    pub line: Line,
}

impl ResolveError {
    pub fn new(message: impl Into<String>, line: Line) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error:{}: {}", self.line, self.message)
    }
}

impl std::error::Error for ResolveError {}

/// Internal control-flow signal used to unwind a single top-level
/// declaration's resolution without aborting the whole program: caught at
/// the boundary between top-level items so sibling declarations still get
/// a chance to report their own diagnostics.
pub(super) struct Bail;

pub(super) type ResolveResult<T> = Result<T, Bail>;
