//! Error rendering. Every diagnostic is rendered through `ariadne` for a
//! human-facing report, but the report always carries the literal
//! `error:<line>: <message>` text the compiler's own tests and any
//! script scraping stderr can rely on.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::driver::CompileError;

/// Byte offset of the start of 1-indexed `line` within `source`.
fn line_start_offset(source: &str, line: u32) -> usize {
    if line <= 1 {
        return 0;
    }
    source
        .match_indices('\n')
        .nth(line as usize - 2)
        .map(|(idx, _)| idx + 1)
        .unwrap_or(source.len())
}

fn line_span(source: &str, line: u32) -> std::ops::Range<usize> {
    let start = line_start_offset(source, line);
    let end = source[start..]
        .find('\n')
        .map(|rel| start + rel)
        .unwrap_or(source.len());
    start..end.max(start + 1).min(source.len().max(start + 1))
}

fn print_report(filename: &str, source: &str, line: u32, message: &str) {
    let span = line_span(source, line);
    let result = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message(format!("error:{line}: {message}"))
        .with_label(
            Label::new((filename, span))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)));

    if result.is_err() {
        eprintln!("error:{line}: {message}");
    }
}

/// Renders a compile error to stderr. Always emits the plain
/// `error:<line>: <message>` line even when the `line` is unknown (line 0)
/// or when `ariadne` itself fails to print.
pub fn report_error(filename: &str, source: &str, error: &CompileError) {
    match error {
        CompileError::Lex(e) => print_report(filename, source, e.line(), &e.message),
        CompileError::Parse(e) => print_report(filename, source, e.line, &e.message),
        CompileError::Resolve(errors) => {
            for e in errors {
                print_report(filename, source, e.line, &e.message);
            }
        }
        CompileError::Codegen(e) => {
            let line = e.line.unwrap_or(0);
            print_report(filename, source, line, &e.message);
        }
        CompileError::Io(e) => {
            eprintln!("error: could not read '{filename}': {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_start_offset_of_first_line_is_zero() {
        assert_eq!(line_start_offset("int main() {}", 1), 0);
    }

    #[test]
    fn line_start_offset_finds_second_line() {
        let src = "int x;\nint main() {}\n";
        assert_eq!(line_start_offset(src, 2), 7);
    }
}
