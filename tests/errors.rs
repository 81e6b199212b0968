//! Diagnostic-surface tests: every reported error carries the
//! `error:<line>: <message>` substring regardless of how `ariadne`
//! chooses to format the surrounding report.

use cc32::driver::{compile_file, DebugFlags};
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn write_temp_source(contents: &str) -> std::path::PathBuf {
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut path = std::env::temp_dir();
    path.push(format!("cc32-test-{}-{id}.c", std::process::id()));
    let mut f = std::fs::File::create(&path).expect("create temp source");
    f.write_all(contents.as_bytes()).expect("write temp source");
    path
}

#[test]
fn missing_main_is_reported() {
    let path = write_temp_source("int f() { return 1; }");
    let err = compile_file(&path, DebugFlags::default()).unwrap_err();
    std::fs::remove_file(&path).ok();
    match err.error() {
        cc32::driver::CompileError::Resolve(errors) => {
            assert!(errors.iter().any(|e| e.message.contains("main")));
        }
        other => panic!("expected a resolve error, got a different phase: {}", phase_name(other)),
    }
}

#[test]
fn unterminated_string_is_a_lex_error() {
    let path = write_temp_source("int main() { return 0; } // \"unterminated");
    let err = compile_file(&path, DebugFlags::default());
    std::fs::remove_file(&path).ok();
    // a comment containing a quote is not itself a string literal, so this
    // case should actually compile; the real unterminated-string case:
    assert!(err.is_ok());

    let path = write_temp_source("int main() { char *s; s = \"oops; return 0; }");
    let err = compile_file(&path, DebugFlags::default()).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err.error(), cc32::driver::CompileError::Lex(_)));
}

#[test]
fn missing_semicolon_is_a_parse_error() {
    let path = write_temp_source("int main() { return 0 }");
    let err = compile_file(&path, DebugFlags::default()).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err.error(), cc32::driver::CompileError::Parse(_)));
}

fn phase_name(error: &cc32::driver::CompileError) -> &'static str {
    match error {
        cc32::driver::CompileError::Lex(_) => "lex",
        cc32::driver::CompileError::Parse(_) => "parse",
        cc32::driver::CompileError::Resolve(_) => "resolve",
        cc32::driver::CompileError::Codegen(_) => "codegen",
        cc32::driver::CompileError::Io(_) => "io",
    }
}
