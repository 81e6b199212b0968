//! A single-pass compiler for a restricted C-family subset, emitting i386
//! AT&T-syntax assembly under the System V calling convention.
//!
//! # Modules
//!
//! - [`token`] - Token types and source line tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract syntax tree definitions
//! - [`parser`] - Recursive-descent parser
//! - [`types`] - The value type model (`Type`, `Typed`, `ValueCategory`)
//! - [`symbol`] - Flat symbol table and symbol handles
//! - [`resolver`] - Name resolution, type checking, AST annotation
//! - [`codegen`] - Assembly code generation
//! - [`diagnostics`] - Error rendering
//! - [`driver`] - End-to-end pipeline orchestration
//!
//! # Example
//!
//! ```no_run
//! use cc32::lexer::Lexer;
//! use cc32::parser::Parser;
//! use cc32::resolver::Resolver;
//! use cc32::codegen::Codegen;
//!
//! let source = "int main() { return 0; }";
//!
//! let tokens = Lexer::new(source).tokenize().expect("lex error");
//! let mut program = Parser::new(&tokens).parse().expect("parse error");
//! let symbols = Resolver::new().resolve(&mut program).expect("resolve error");
//! let asm = Codegen::new(symbols).compile(&program).expect("codegen error");
//! ```

pub mod ast;
pub mod codegen;
pub mod diagnostics;
pub mod driver;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod symbol;
pub mod token;
pub mod types;
