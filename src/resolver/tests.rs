use super::Resolver;
use crate::ast::Program;
use crate::lexer::Lexer;
use crate::parser::Parser;

fn parse(src: &str) -> Program {
    let tokens = Lexer::new(src).tokenize().unwrap();
    Parser::new(&tokens).parse().unwrap()
}

#[test]
fn resolves_simple_main() {
    let mut program = parse("int main() { return 0; }");
    let result = Resolver::new().resolve(&mut program);
    assert!(result.is_ok());
}

#[test]
fn missing_main_is_an_error() {
    let mut program = parse("int f() { return 1; }");
    let errors = Resolver::new().resolve(&mut program).unwrap_err();
    assert!(errors.iter().any(|e| e.message.contains("main")));
}

#[test]
fn undeclared_variable_is_an_error() {
    let mut program = parse("int main() { return x; }");
    let errors = Resolver::new().resolve(&mut program).unwrap_err();
    assert_eq!(errors[0].line, 1);
    assert!(errors[0].message.contains("not declared"));
}

#[test]
fn pointer_plus_int_is_scaled_by_pointee_size() {
    let mut program = parse("int main() { int *p; return *(p + 1); }");
    Resolver::new().resolve(&mut program).unwrap();
    let crate::ast::TopLevel::FunctionDef(def) = &program.items[0] else { panic!() };
    let crate::ast::Stmt::Return { value: Some(expr), .. } = &def.body.stmts[1] else { panic!() };
    let crate::ast::ExprKind::Unary { expr: inner, .. } = &expr.kind else { panic!() };
    let crate::ast::ExprKind::Binary { rhs, .. } = &inner.kind else { panic!() };
    match &rhs.kind {
        crate::ast::ExprKind::Binary { op: crate::ast::BinaryOp::Mul, rhs: size, .. } => {
            assert!(matches!(size.kind, crate::ast::ExprKind::IntLiteral(4)));
        }
        other => panic!("expected scaled offset, got {other:?}"),
    }
}

#[test]
fn break_outside_loop_is_an_error() {
    let mut program = parse("int main() { break; return 0; }");
    let errors = Resolver::new().resolve(&mut program).unwrap_err();
    assert!(errors[0].message.contains("break"));
}

#[test]
fn duplicate_local_in_same_scope_is_an_error() {
    let mut program = parse("int main() { int x; int x; return 0; }");
    let errors = Resolver::new().resolve(&mut program).unwrap_err();
    assert!(errors[0].message.contains("already declared"));
}

#[test]
fn assigning_mismatched_types_is_an_error() {
    let mut program = parse("int main() { int *p; p = 1; return 0; }");
    let errors = Resolver::new().resolve(&mut program).unwrap_err();
    assert!(errors[0].message.contains("cannot assign"));
}

#[test]
fn printf_arity_must_match_format_specifiers() {
    let mut program = parse(r#"int main() { printf("%i %i", 1); return 0; }"#);
    let errors = Resolver::new().resolve(&mut program).unwrap_err();
    assert!(errors[0].message.contains("printf"));
}

#[test]
fn static_local_becomes_a_mangled_global_symbol() {
    let mut program = parse("int f() { static int c; c = c + 1; return c; } int main() { return f(); }");
    let symbols = Resolver::new().resolve(&mut program).unwrap();
    assert!(symbols.iter().any(|s| matches!(s, crate::symbol::Symbol::Global { name, .. } if name.starts_with("c.f."))));
}

#[test]
fn function_redefinition_is_an_error() {
    let mut program = parse("int f() { return 1; } int f() { return 2; } int main() { return f(); }");
    let errors = Resolver::new().resolve(&mut program).unwrap_err();
    assert!(errors[0].message.contains("already defined"));
}

#[test]
fn zero_argument_call_type_checks() {
    let mut program = parse("int f() { return 1; } int main() { return f(); }");
    assert!(Resolver::new().resolve(&mut program).is_ok());
}
