/// A single source line number, 1-indexed.
///
/// The grammar in this dialect never needs column information or byte
/// ranges: every diagnostic the resolver and parser raise is anchored to a
/// line, matching the `error:<line>: <message>` wire format.
pub type Line = u32;

/// Byte-offset span paired with the 1-indexed line it starts on.
///
/// Kept distinct from `Line` so the diagnostics layer can still render a
/// source excerpt (via `ariadne`) even though the required error format
/// only prints the line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: Line,
}

impl Span {
    pub fn new(start: usize, end: usize, line: Line) -> Self {
        Self { start, end, line }
    }

    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
            line: self.line,
        }
    }
}
