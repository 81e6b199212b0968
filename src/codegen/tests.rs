use crate::codegen::Codegen;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::resolver::Resolver;

fn compile(src: &str) -> String {
    let tokens = Lexer::new(src).tokenize().expect("lex");
    let mut program = Parser::new(&tokens).parse().expect("parse");
    let symbols = Resolver::new().resolve(&mut program).expect("resolve");
    Codegen::new(symbols).compile(&program).expect("codegen")
}

#[test]
fn arithmetic_precedence_matches_generic_binary_pattern() {
    let asm = compile("int main() { return 2 + 3 * 4; }");
    assert!(asm.contains("imull"));
    assert!(asm.contains("addl"));
}

#[test]
fn pointer_scaling_reaches_codegen_as_plain_multiplication() {
    let asm = compile("int main() { int *p; int i; return *(p + i); }");
    assert!(asm.contains("imull $4, %eax") || asm.contains("imull"));
}

#[test]
fn short_circuit_and_omits_right_operand_call_when_left_is_false() {
    let asm = compile("int f(); int main() { return 0 && f(); }");
    // `0 && f()` is decided at compile time; no code for `f()` is emitted.
    assert!(!asm.contains("call f"));
}

#[test]
fn non_last_byte_sized_parameter_does_not_shift_later_parameter_offsets() {
    // `c` is pushed as a full 4-byte slot by every caller (`pushl`
    // widens), so `x` must sit at a flat +12, not +9.
    let asm = compile("int f(char c, int x) { return x; } int main() { return f(1, 2); }");
    assert!(asm.contains("12(%ebp)"));
    assert!(!asm.contains("9(%ebp)"));
}

#[test]
fn short_circuit_and_guards_right_operand_with_a_jump_when_left_is_dynamic() {
    let asm = compile("int f(int x); int main() { int x; return x && f(x); }");
    assert!(asm.contains("je .J") || asm.contains("jne .J"));
    assert!(asm.contains("call f"));
}

#[test]
fn comparison_uses_inverse_jump_table() {
    let asm = compile("int main() { return 1 < 2; }");
    assert!(asm.contains("jge"));
}

#[test]
fn while_loop_pairs_start_and_end_labels_for_break() {
    let asm = compile("int main() { while (1) { break; } return 0; }");
    assert!(asm.contains(".S"));
    assert!(asm.contains(".E"));
}

#[test]
fn static_local_stores_to_a_global_symbol_not_a_frame_slot() {
    let asm = compile("int main() { static int count = 0; count = count + 1; return count; }");
    assert!(asm.contains("count.main.1"));
    assert!(!asm.contains("movl %eax, -"));
}

#[test]
fn function_prologue_reserves_the_frame_and_epilogue_restores_it() {
    let asm = compile("int main() { int x; x = 5; return x; }");
    assert!(asm.contains("pushl %ebp"));
    assert!(asm.contains("movl %esp, %ebp"));
    assert!(asm.contains("subl $4, %esp") || asm.contains("subl $8, %esp"));
    assert!(asm.contains("popl %ebp"));
    assert!(asm.contains("ret"));
}

#[test]
fn uninitialised_global_emits_comm_directive() {
    let asm = compile("int counter; int main() { return 0; }");
    assert!(asm.contains(".comm counter, 4, 4"));
}

#[test]
fn initialised_global_emits_data_directive() {
    let asm = compile("int counter = 7; int main() { return 0; }");
    assert!(asm.contains(".data"));
    assert!(asm.contains(".long 7"));
}

#[test]
fn string_literal_is_interned_into_rodata() {
    let asm = compile("int main() { printf(\"hi\"); return 0; }");
    assert!(asm.contains(".section .rodata"));
    assert!(asm.contains(".string \"hi\""));
}
