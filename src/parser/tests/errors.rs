//! Error recording and recovery tests.
//!
//! The parser never aborts: every error is recorded, the failing
//! statement is dropped, and parsing resumes. These tests pin both the
//! message text and the recovery behavior.

use super::*;

#[test]
fn test_let_missing_identifier() {
    let (_, errors) = parse_with_errors("let = 5;");
    assert!(
        errors
            .iter()
            .any(|m| m.contains("expected next token to be IDENT, got ASSIGN instead")),
        "missing expectation error in {:?}",
        errors
    );
}

#[test]
fn test_let_missing_identifier_reports_position() {
    let (_, errors) = parse_with_errors("let = 5;");
    assert_eq!(
        errors[0],
        "expected next token to be IDENT, got ASSIGN instead, line 1, col 5"
    );
}

#[test]
fn test_let_missing_assign() {
    let (_, errors) = parse_with_errors("let x 5;");
    assert_eq!(
        errors[0],
        "expected next token to be ASSIGN, got INT instead, line 1, col 7"
    );
}

#[test]
fn test_recovery_continues_after_failed_let() {
    // The broken statement is dropped; the trailing `5` still parses as
    // an expression statement once the loop reaches it.
    let (program, errors) = parse_with_errors("let = 5;");
    assert_eq!(errors.len(), 2);
    assert!(errors[1].contains("no prefix parse function for ASSIGN found"));
    assert_eq!(program.statements.len(), 1);
    assert!(matches!(
        program.statements[0].kind,
        StmtKind::Expr(ref e) if matches!(e.kind, ExprKind::IntegerLiteral(5))
    ));
}

#[test]
fn test_later_statements_survive_an_early_error() {
    let (program, errors) = parse_with_errors("let = 1; let y = 10;");
    assert!(!errors.is_empty());
    assert!(
        program
            .statements
            .iter()
            .any(|s| matches!(s.kind, StmtKind::Let { ref name, .. } if name.name == "y")),
        "expected the second let to parse"
    );
}

#[test]
fn test_no_prefix_parse_fn() {
    let (program, errors) = parse_with_errors("+ 5;");
    assert_eq!(errors[0], "no prefix parse function for PLUS found");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_stray_semicolon_has_no_prefix_fn() {
    let (program, errors) = parse_with_errors("5;;7;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("no prefix parse function for SEMICOLON found"));
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_integer_out_of_range() {
    let (program, errors) = parse_with_errors("99999999999999999999;");
    assert_eq!(
        errors[0],
        "could not parse \"99999999999999999999\" as integer"
    );
    assert!(program.statements.is_empty());
}

#[test]
fn test_negated_min_magnitude_is_out_of_range() {
    // The literal's magnitude overflows i64 before the prefix minus is
    // applied, matching the reference front-end.
    let (_, errors) = parse_with_errors("-9223372036854775808;");
    assert_eq!(
        errors[0],
        "could not parse \"9223372036854775808\" as integer"
    );
}

#[test]
fn test_illegal_character() {
    let (program, errors) = parse_with_errors("@;");
    assert_eq!(errors[0], "unexpected character '@'");
    assert!(program.statements.is_empty());
}

#[test]
fn test_unterminated_group() {
    let (_, errors) = parse_with_errors("(1 + 2;");
    // The semicolon stops the Pratt loop, so the expectation fails there.
    assert_eq!(
        errors[0],
        "expected next token to be RPAREN, got SEMICOLON instead, line 1, col 7"
    );
}

#[test]
fn test_if_missing_condition_paren() {
    let (_, errors) = parse_with_errors("if x { y }");
    assert_eq!(
        errors[0],
        "expected next token to be LPAREN, got IDENT instead, line 1, col 4"
    );
}

#[test]
fn test_function_params_missing_comma() {
    let (_, errors) = parse_with_errors("fn(x y) { x }");
    assert_eq!(
        errors[0],
        "expected next token to be RPAREN, got IDENT instead, line 1, col 6"
    );
}

#[test]
fn test_function_params_must_be_identifiers() {
    let (_, errors) = parse_with_errors("fn(1) { 1 }");
    assert_eq!(
        errors[0],
        "expected next token to be IDENT, got INT instead, line 1, col 4"
    );
}

#[test]
fn test_errors_accumulate_in_order() {
    let (_, errors) = parse_with_errors("let = 1; @;");
    assert!(errors[0].contains("expected next token to be IDENT"));
    let illegal_index = errors
        .iter()
        .position(|m| m.contains("unexpected character '@'"))
        .expect("expected an illegal-character error");
    assert!(illegal_index > 0, "errors out of detection order: {:?}", errors);
}

#[test]
fn test_error_kinds_are_structured() {
    let mut parser = Parser::new(Lexer::new("let = 5;"));
    parser.parse();
    assert_eq!(parser.errors()[0].kind(), ParseErrorKind::UnexpectedToken);
    assert_eq!(parser.errors()[1].kind(), ParseErrorKind::NoPrefixParseFn);
}
