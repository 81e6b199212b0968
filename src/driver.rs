//! Orchestrates the pipeline: read source -> lex -> parse -> resolve ->
//! generate code. The code generator never runs over a program that
//! failed resolution.

use std::fs;
use std::path::Path;

use crate::codegen::{Codegen, CodegenError};
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};
use crate::resolver::{ResolveError, Resolver};

/// A compile error from any phase of the pipeline.
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Resolve(Vec<ResolveError>),
    Codegen(CodegenError),
    Io(std::io::Error),
}

/// The outcome of a failed [`compile_file`] call, bundled with the
/// filename and source text a diagnostic renderer needs.
pub struct CompileErrorWithContext {
    filename: String,
    source: String,
    error: CompileError,
}

impl CompileErrorWithContext {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn error(&self) -> &CompileError {
        &self.error
    }
}

/// Debug hooks for inspecting intermediate pipeline stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugFlags {
    pub emit_tokens: bool,
    pub emit_ast: bool,
}

/// Compiles a single source file to assembly text.
///
/// `debug` controls whether the token stream and/or parsed AST are
/// printed to stderr as they become available, independent of whether
/// compilation ultimately succeeds.
pub fn compile_file(path: &Path, debug: DebugFlags) -> Result<String, CompileErrorWithContext> {
    let filename = path.display().to_string();
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            return Err(CompileErrorWithContext {
                filename,
                source: String::new(),
                error: CompileError::Io(e),
            });
        }
    };

    let with = |error: CompileError| CompileErrorWithContext {
        filename: filename.clone(),
        source: source.clone(),
        error,
    };

    let tokens = Lexer::new(&source).tokenize().map_err(|e| with(CompileError::Lex(e)))?;
    if debug.emit_tokens {
        eprintln!("{tokens:#?}");
    }

    let mut program = Parser::new(&tokens).parse().map_err(|e| with(CompileError::Parse(e)))?;
    if debug.emit_ast {
        eprintln!("{program:#?}");
    }

    let symbols = Resolver::new()
        .resolve(&mut program)
        .map_err(|errors| with(CompileError::Resolve(errors)))?;

    Codegen::new(symbols)
        .compile(&program)
        .map_err(|e| with(CompileError::Codegen(e)))
}
