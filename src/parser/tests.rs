use super::Parser;
use crate::ast::{BinaryOp, ExprKind, Stmt, TopLevel};
use crate::lexer::Lexer;
use crate::ast::Program;

fn parse(src: &str) -> Program {
    let tokens = Lexer::new(src).tokenize().expect("lex ok");
    Parser::new(&tokens).parse().expect("parse ok")
}

#[test]
fn parses_function_definition_with_return() {
    let program = parse("int main() { return 1 + 2 * 3; }");
    assert_eq!(program.items.len(), 1);
    match &program.items[0] {
        TopLevel::FunctionDef(def) => {
            assert_eq!(def.head.name, "main");
            assert_eq!(def.body.stmts.len(), 1);
        }
        _ => panic!("expected a function definition"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let program = parse("int main() { return 1 + 2 * 3; }");
    let TopLevel::FunctionDef(def) = &program.items[0] else { panic!() };
    let Stmt::Return { value: Some(expr), .. } = &def.body.stmts[0] else { panic!() };
    match &expr.kind {
        ExprKind::Binary { op: BinaryOp::Add, rhs, .. } => {
            assert!(matches!(rhs.kind, ExprKind::Binary { op: BinaryOp::Mul, .. }));
        }
        other => panic!("expected top-level add, got {other:?}"),
    }
}

#[test]
fn array_index_lowers_to_deref_of_pointer_arithmetic() {
    let program = parse("int main() { int *p; return p[1]; }");
    let TopLevel::FunctionDef(def) = &program.items[0] else { panic!() };
    let Stmt::Return { value: Some(expr), .. } = &def.body.stmts[1] else { panic!() };
    match &expr.kind {
        ExprKind::Unary { op: crate::ast::UnaryOp::Deref, expr: inner } => {
            assert!(matches!(inner.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
        }
        other => panic!("expected *(p + 1), got {other:?}"),
    }
}

#[test]
fn compound_assignment_desugars_to_assign_of_binary() {
    let program = parse("int main() { int x; x += 1; return x; }");
    let TopLevel::FunctionDef(def) = &program.items[0] else { panic!() };
    let Stmt::Expr(expr) = &def.body.stmts[1] else { panic!() };
    match &expr.kind {
        ExprKind::Assign { value, .. } => {
            assert!(matches!(value.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
        }
        other => panic!("expected desugared assignment, got {other:?}"),
    }
}

#[test]
fn for_loop_desugars_to_block_with_while() {
    let program = parse("int main() { for (int i = 0; i < 10; i = i + 1) { } return 0; }");
    let TopLevel::FunctionDef(def) = &program.items[0] else { panic!() };
    assert!(matches!(def.body.stmts[0], Stmt::Block(_)));
}

#[test]
fn zero_array_dimension_is_a_parse_error() {
    let tokens = Lexer::new("int main() { int x[0]; return 0; }").tokenize().unwrap();
    let err = Parser::new(&tokens).parse().unwrap_err();
    assert!(err.to_string().contains("error:1:"));
}

#[test]
fn function_declaration_without_body_is_a_prototype() {
    let program = parse("int f(int x); int main() { return f(1); }");
    assert!(matches!(program.items[0], TopLevel::FunctionDecl(_)));
}

#[test]
fn sizeof_type_and_sizeof_expr_both_parse() {
    let program = parse("int main() { int x; return sizeof(int) + sizeof(x); }");
    let TopLevel::FunctionDef(def) = &program.items[0] else { panic!() };
    let Stmt::Return { value: Some(expr), .. } = &def.body.stmts[1] else { panic!() };
    match &expr.kind {
        ExprKind::Binary { lhs, rhs, .. } => {
            assert!(matches!(lhs.kind, ExprKind::SizeofType(_)));
            assert!(matches!(rhs.kind, ExprKind::SizeofExpr(_)));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn cast_parses_as_unary_level() {
    let program = parse("int main() { return (int)1; }");
    let TopLevel::FunctionDef(def) = &program.items[0] else { panic!() };
    let Stmt::Return { value: Some(expr), .. } = &def.body.stmts[0] else { panic!() };
    assert!(matches!(expr.kind, ExprKind::Cast { .. }));
}

#[test]
fn global_variable_declaration_parses() {
    let program = parse("int counter = 0;\nint main() { return counter; }");
    assert!(matches!(program.items[0], TopLevel::GlobalVarDecl(_)));
}
