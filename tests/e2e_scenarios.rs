//! Black-box, end-to-end pipeline tests: source text in, assembly text
//! out, exercised entirely through the public library API (no subprocess
//! or linker involved — this compiler only ever emits assembly text).

use cc32::codegen::Codegen;
use cc32::lexer::Lexer;
use cc32::parser::Parser;
use cc32::resolver::Resolver;

fn compile_ok(src: &str) -> String {
    let tokens = Lexer::new(src).tokenize().expect("lex error");
    let mut program = Parser::new(&tokens).parse().expect("parse error");
    let symbols = Resolver::new().resolve(&mut program).expect("resolve error");
    Codegen::new(symbols).compile(&program).expect("codegen error")
}

#[test]
fn arithmetic_and_return() {
    let asm = compile_ok("int main() { return 2 + 3 * 4 - 1; }");
    assert!(asm.contains(".globl main"));
    assert!(asm.contains("ret"));
}

#[test]
fn pointer_arithmetic_scales_by_element_size() {
    let asm = compile_ok(
        "int main() { int a[4]; int *p; p = a; return *(p + 2); }",
    );
    assert!(asm.contains("imull"));
}

#[test]
fn short_circuit_evaluation_of_logical_operators() {
    // `1 || f()` is decided by the literal left operand alone: no code
    // for `f()` is ever emitted, and there's nothing left to guard with
    // a runtime jump.
    let asm = compile_ok("int f(); int main() { return 1 || f(); }");
    assert!(!asm.contains("call f"));
}

#[test]
fn control_flow_with_break_and_continue() {
    let asm = compile_ok(
        "int main() { int i; int sum; i = 0; sum = 0; \
         while (i < 10) { if (i == 5) { break; } sum = sum + i; i = i + 1; } \
         return sum; }",
    );
    assert!(asm.contains(".S"));
    assert!(asm.contains(".E"));
}

#[test]
fn static_local_variable_persists_across_calls() {
    let asm = compile_ok(
        "int counter() { static int n = 0; n = n + 1; return n; } \
         int main() { counter(); return counter(); }",
    );
    assert!(asm.contains("n.counter.1"));
}

#[test]
fn for_loop_desugars_and_compiles_like_a_while() {
    let asm = compile_ok(
        "int main() { int i; int sum; sum = 0; \
         for (i = 0; i < 5; i = i + 1) { sum = sum + i; } return sum; }",
    );
    assert!(asm.contains(".S"));
    assert!(asm.contains(".E"));
}

#[test]
fn undeclared_variable_is_reported_with_its_source_line() {
    let tokens = Lexer::new("int main() {\n  return y;\n}").tokenize().unwrap();
    let mut program = Parser::new(&tokens).parse().unwrap();
    let errors = Resolver::new().resolve(&mut program).unwrap_err();
    assert_eq!(errors[0].line, 2);
}
