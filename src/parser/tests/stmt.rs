//! Statement parsing tests.

use super::*;
use crate::ast::Ident;

fn let_parts(stmt_kind: &StmtKind) -> (&Ident, &Expr) {
    match stmt_kind {
        StmtKind::Let { name, value } => (name, value),
        other => panic!("expected let statement, got {:?}", other),
    }
}

#[test]
fn test_let_statements() {
    let input = "
    let x = 5;
    let y = 10;
    let foobar = 838383;
";
    let program = parse(input);
    assert_eq!(program.statements.len(), 3);

    let expected = ["x", "y", "foobar"];
    let values = [5, 10, 838383];
    for ((stmt, name), value) in program.statements.iter().zip(expected).zip(values) {
        let (ident, init) = let_parts(&stmt.kind);
        assert_eq!(ident.name, name);
        assert!(matches!(init.kind, ExprKind::IntegerLiteral(v) if v == value));
    }
}

#[test]
fn test_let_binds_expression() {
    let program = parse("let x = 1 + 2;");
    let (ident, value) = let_parts(&program.statements[0].kind);
    assert_eq!(ident.name, "x");
    assert!(matches!(value.kind, ExprKind::Infix { ref op, .. } if op == "+"));
}

#[test]
fn test_let_without_semicolon() {
    let program = parse("let x = 5");
    assert_eq!(program.statements.len(), 1);
    let (ident, _) = let_parts(&program.statements[0].kind);
    assert_eq!(ident.name, "x");
}

#[test]
fn test_return_statements() {
    let input = "
    return 5;
    return 10;
    return 12313;
";
    let program = parse(input);
    assert_eq!(program.statements.len(), 3);

    for stmt in &program.statements {
        assert!(
            matches!(stmt.kind, StmtKind::Return(_)),
            "expected return statement, got {:?}",
            stmt.kind
        );
    }
}

#[test]
fn test_return_binds_expression() {
    let program = parse("return add(1, 2);");
    match &program.statements[0].kind {
        StmtKind::Return(value) => {
            assert!(matches!(value.kind, ExprKind::Call { .. }));
        }
        other => panic!("expected return statement, got {:?}", other),
    }
}

#[test]
fn test_expression_statement() {
    let program = parse("footer;");
    assert_eq!(program.statements.len(), 1);
    match &program.statements[0].kind {
        StmtKind::Expr(expr) => {
            assert!(matches!(expr.kind, ExprKind::Identifier(ref s) if s == "footer"));
        }
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_expression_statement_semicolon_is_optional() {
    let program = parse("foobar");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_multiple_expression_statements() {
    let program = parse("3 + 4; -5 * 5");
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_empty_program() {
    let program = parse("");
    assert!(program.statements.is_empty());
}

#[test]
fn test_block_statements_inside_if() {
    let expr = parse_first_expr("if (x) { let a = 1; a; }");
    match expr.kind {
        ExprKind::If { consequence, .. } => {
            assert_eq!(consequence.statements.len(), 2);
            assert!(matches!(consequence.statements[0].kind, StmtKind::Let { .. }));
            assert!(matches!(consequence.statements[1].kind, StmtKind::Expr(_)));
        }
        other => panic!("expected if expression, got {:?}", other),
    }
}

#[test]
fn test_statement_spans_cover_source() {
    let program = parse("let x = 5;");
    let span = program.statements[0].span;
    assert_eq!(span.start, 0);
    assert_eq!(span.end, 10);
    assert_eq!(span.line, 1);
}
