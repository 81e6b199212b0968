//! `cc32` — compiles a restricted C-family source file to i386 AT&T
//! assembly on stdout.

use std::path::PathBuf;

use clap::Parser;

use cc32::diagnostics;
use cc32::driver::{self, DebugFlags};

/// Command-line interface for the compiler.
#[derive(Parser)]
#[command(name = "cc32")]
#[command(about = "A single-pass compiler targeting i386 AT&T assembly", long_about = None)]
struct Cli {
    /// The source file to compile.
    file: PathBuf,

    /// Print the lexer's token stream to stderr before compiling.
    #[arg(long)]
    emit_tokens: bool,

    /// Print the parsed AST to stderr before compiling.
    #[arg(long)]
    emit_ast: bool,
}

fn main() {
    let cli = Cli::parse();
    let debug = DebugFlags {
        emit_tokens: cli.emit_tokens,
        emit_ast: cli.emit_ast,
    };

    match driver::compile_file(&cli.file, debug) {
        Ok(asm) => print!("{asm}"),
        Err(error) => {
            diagnostics::report_error(error.filename(), error.source(), error.error());
            std::process::exit(1);
        }
    }
}
