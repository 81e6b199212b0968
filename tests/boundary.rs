//! Edge-case coverage: constructs the spec calls out explicitly as
//! invalid, or as valid-but-unusual.

use cc32::codegen::Codegen;
use cc32::lexer::Lexer;
use cc32::parser::Parser;
use cc32::resolver::Resolver;

fn resolve_errors(src: &str) -> Vec<String> {
    let tokens = Lexer::new(src).tokenize().expect("lex error");
    let mut program = Parser::new(&tokens).parse().expect("parse error");
    match Resolver::new().resolve(&mut program) {
        Ok(_) => Vec::new(),
        Err(errors) => errors.into_iter().map(|e| e.message).collect(),
    }
}

#[test]
fn zero_sized_array_dimension_is_rejected_at_parse_time() {
    let tokens = Lexer::new("int main() { int a[0]; return 0; }").tokenize().unwrap();
    let err = Parser::new(&tokens).parse().unwrap_err();
    assert!(err.message.contains("array"));
}

#[test]
fn void_typed_local_is_rejected() {
    let errors = resolve_errors("int main() { void x; return 0; }");
    assert!(errors.iter().any(|m| m.contains("void")));
}

#[test]
fn zero_argument_call_type_checks_and_compiles() {
    let tokens = Lexer::new("int f() { return 1; } int main() { return f(); }").tokenize().unwrap();
    let mut program = Parser::new(&tokens).parse().unwrap();
    let symbols = Resolver::new().resolve(&mut program).unwrap();
    let asm = Codegen::new(symbols).compile(&program).unwrap();
    assert!(asm.contains("call f"));
    assert!(!asm.contains("addl $0, %esp"));
}

#[test]
fn missing_main_function_is_rejected() {
    let errors = resolve_errors("int f() { return 1; }");
    assert!(errors.iter().any(|m| m.contains("main")));
}

#[test]
fn main_with_wrong_return_type_is_rejected() {
    let errors = resolve_errors("void main() { }");
    assert!(errors.iter().any(|m| m.contains("main")));
}

#[test]
fn break_outside_a_loop_is_rejected() {
    let errors = resolve_errors("int main() { break; return 0; }");
    assert!(errors.iter().any(|m| m.contains("loop")));
}

#[test]
fn duplicate_local_in_the_same_scope_is_rejected() {
    let errors = resolve_errors("int main() { int x; int x; return 0; }");
    assert!(errors.iter().any(|m| m.contains("already declared")));
}

#[test]
fn array_assigns_its_address_to_a_compatible_pointer() {
    let tokens = Lexer::new("int main() { int a[4]; int *p; p = a; return 0; }").tokenize().unwrap();
    let mut program = Parser::new(&tokens).parse().unwrap();
    let result = Resolver::new().resolve(&mut program);
    assert!(result.is_ok());
}
