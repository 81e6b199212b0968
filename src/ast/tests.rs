use super::*;
use crate::types::Type;

#[test]
fn type_name_applies_pointer_then_array_layers() {
    let tn = TypeName {
        base: BaseType::Int,
        pointer_depth: 1,
        array_dims: vec![4],
    };
    assert_eq!(tn.to_type(), Type::array(Type::pointer(Type::Int), 4));
}

#[test]
fn desugar_for_wraps_init_cond_step_into_while() {
    let stmt = Stmt::desugar_for(
        Some(Stmt::Expr(Expr::new(ExprKind::IntLiteral(0), 1))),
        Some(Expr::new(ExprKind::IntLiteral(1), 1)),
        Some(Expr::new(ExprKind::IntLiteral(2), 1)),
        Stmt::Break(1),
        1,
    );
    match stmt {
        Stmt::Block(block) => {
            assert_eq!(block.stmts.len(), 2);
            assert!(matches!(block.stmts[1], Stmt::While { .. }));
        }
        _ => panic!("expected block wrapping init + while"),
    }
}

#[test]
fn desugar_for_defaults_missing_cond_to_true() {
    let stmt = Stmt::desugar_for(None, None, None, Stmt::Break(1), 1);
    match stmt {
        Stmt::While { cond, .. } => assert!(matches!(cond.kind, ExprKind::IntLiteral(1))),
        _ => panic!("expected bare while when init is absent"),
    }
}
