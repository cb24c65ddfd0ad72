// Integration tests for the ari parser

use ari::parser::{Expr, LiteralKind, Stmt};
use ari::{parse, parse_with, Parser, ParserConfig};
use rstest::rstest;

fn render(source: &str) -> Vec<String> {
    let result = parse(source);
    assert!(
        result.is_valid(),
        "unexpected errors: {:?}",
        result.diagnostics
    );
    result.statements.iter().map(|s| s.to_string()).collect()
}

fn errors(source: &str) -> Vec<String> {
    parse(source)
        .diagnostics
        .iter()
        .map(|e| e.to_string())
        .collect()
}

#[rstest]
#[case("1 + 2 * 3;", "(expr (+ 1 (* 2 3)))")]
#[case("1 * 2 + 3;", "(expr (+ (* 1 2) 3))")]
#[case("1 - 2 - 3;", "(expr (- (- 1 2) 3))")]
#[case("8 / 4 / 2;", "(expr (/ (/ 8 4) 2))")]
#[case("(1 + 2) * 3;", "(expr (* (group (+ 1 2)) 3))")]
#[case("1 < 2 == 3 > 4;", "(expr (== (< 1 2) (> 3 4)))")]
#[case("a != b == c;", "(expr (== (!= a b) c))")]
#[case("a == b < c + d * -e;", "(expr (== a (< b (+ c (* d (- e))))))")]
#[case("!!a;", "(expr (! (! a)))")]
#[case("-a * b;", "(expr (* (- a) b))")]
fn test_precedence_and_associativity(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(render(source), vec![expected]);
}

#[rstest]
#[case("a = 1;", "(expr (= a 1))")]
#[case("a = b = c;", "(expr (= a (= b c)))")]
#[case("a = b == c;", "(expr (= a (== b c)))")]
fn test_assignment(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(render(source), vec![expected]);
}

#[rstest]
#[case("true;", LiteralKind::Bool, "1")]
#[case("false;", LiteralKind::Bool, "0")]
#[case("null;", LiteralKind::Null, "NULL")]
#[case("42;", LiteralKind::Number, "42")]
#[case("3.25;", LiteralKind::Number, "3.25")]
#[case("\"hi there\";", LiteralKind::String, "\"hi there\"")]
fn test_literal_text(#[case] source: &str, #[case] kind: LiteralKind, #[case] text: &str) {
    let result = parse(source);
    assert!(result.is_valid());

    match &result.statements[0] {
        Stmt::Expr {
            expr: Some(Expr::Literal { kind: k, text: t }),
        } => {
            assert_eq!(*k, kind);
            assert_eq!(t, text);
        }
        other => panic!("Expected literal statement, got {:?}", other),
    }
}

#[rstest]
#[case("1 + 2", "[line 1] Error at end: Expect ';' after expression.")]
#[case("(1 + 2;", "[line 1] Error at ';': Expect ')' after expression.")]
#[case("{ a;", "[line 1] Error at end: Expect '}' after block.")]
#[case("if a) b;", "[line 1] Error at 'a': Expect '(' after 'if'.")]
#[case("while (a b;", "[line 1] Error at 'b': Expect ')' after while condition.")]
#[case("1 = 2;", "[line 1] Error at '=': Invalid assignment target.")]
#[case("\n\n* 2;", "[line 3] Error at '*': Expect expression.")]
#[case("\"abc", "[line 1] Error: Unterminated string.")]
fn test_single_diagnostic(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(errors(source), vec![expected]);
}

#[test]
fn test_recovers_and_reports_independent_errors() {
    let result = parse("1 + ; var ; var x = 1;");

    assert!(result.had_error);
    assert_eq!(
        result
            .diagnostics
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>(),
        vec![
            "[line 1] Error at ';': Expect expression.",
            "[line 1] Error at ';': Expect variable name.",
        ]
    );

    let rendered: Vec<String> = result.statements.iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered, vec!["(expr <missing>)", "(var <missing>)", "(var x 1)"]);
}

#[test]
fn test_errors_on_separate_lines() {
    let result = parse("var a = ;\nvar b = 2;\nvar = 3;");

    let lines: Vec<usize> = result.diagnostics.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![1, 3]);
    assert_eq!(result.statements.len(), 3);
    assert_eq!(result.statements[1].to_string(), "(var b 2)");
}

#[test]
fn test_stray_keyword_does_not_hang() {
    let result = parse("return 1; class; var y = 2;");
    assert!(result.had_error);
    assert_eq!(
        result.statements.last().map(|s| s.to_string()),
        Some("(var y 2)".to_string())
    );
}

#[test]
fn test_empty_block_has_no_storage() {
    let result = parse("{}");
    assert!(result.is_valid());

    match &result.statements[0] {
        Stmt::Block { statements } => {
            assert!(statements.is_empty());
            assert_eq!(statements.capacity(), 0);
        }
        other => panic!("Expected block, got {:?}", other),
    }
}

#[test]
fn test_block_storage_grows_past_first_allocation() {
    let source = "{ a; b; c; d; e; f; g; h; i; }";
    let result = parse(source);
    assert!(result.is_valid());

    match &result.statements[0] {
        Stmt::Block { statements } => {
            assert_eq!(statements.len(), 9);
            assert!(statements.capacity() >= 16);
        }
        other => panic!("Expected block, got {:?}", other),
    }
}

#[test]
fn test_for_clauses_are_statements() {
    assert_eq!(
        render("for (var i = 0; i < 10; i = i + 1;) {}"),
        vec!["(for (var i 0) (expr (< i 10)) (expr (= i (+ i 1))) (block))"]
    );
}

#[test]
fn test_for_increment_without_terminator() {
    let result = parse("for (var i = 0; i < 10; i = i + 1) {}");

    assert_eq!(
        result.statements[0].to_string(),
        "(for (var i 0) (expr (< i 10)) (expr (= i (+ i 1))) (block))"
    );
    assert_eq!(
        result
            .diagnostics
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>(),
        vec!["[line 1] Error at ')': Expect ';' after expression."]
    );
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    assert_eq!(
        render("if (a) if (b) c; else d;"),
        vec!["(if a (if b (expr c) (expr d)))"]
    );
}

#[test]
fn test_session_reset_restores_initial_state() {
    let mut parser = Parser::default();
    assert!(parser.parse("1 +;"));
    assert!(parser.had_error());

    parser.reset();
    assert_eq!(parser.statement_count(), 0);
    assert_eq!(parser.cursor(), 0);
    assert!(!parser.had_error());
    assert!(parser.diagnostics().is_empty());

    assert!(!parser.parse("a;"));
    assert_eq!(parser.statement_count(), 1);
}

#[test]
fn test_parse_discards_previous_session() {
    let mut parser = Parser::default();
    parser.parse("a; b; c;");
    parser.parse("d;");

    let result = parser.take_result();
    assert_eq!(result.statements.len(), 1);
    assert_eq!(result.statements[0].to_string(), "(expr d)");
    assert_eq!(parser.statement_count(), 0);
}

#[test]
fn test_depth_limit_reports_instead_of_overflowing() {
    let source = format!("{}1{};", "(".repeat(64), ")".repeat(64));

    let shallow = parse_with(&source, ParserConfig::default().with_max_depth(16));
    assert!(shallow.had_error);
    assert!(shallow
        .diagnostics
        .iter()
        .any(|e| e.message == "Too much nesting."));

    let deep = parse_with(&source, ParserConfig::default());
    assert!(deep.is_valid());
}

#[test]
fn test_node_count_covers_whole_tree() {
    let result = parse("var a = 1 + 2; { a = -a; }");
    assert!(result.is_valid());
    // var + expr stmt + (+ 1 2), then block + expr stmt + (= a (- a))
    assert_eq!(result.node_count(), 10);
}

#[test]
fn test_malformed_declaration_does_not_swallow_next() {
    let result = parse("var ; var x = 1;");

    assert!(result.had_error);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.statements.len(), 2);
    assert_eq!(result.statements[1].to_string(), "(var x 1)");
}

#[test]
fn test_very_long_operator_chain_is_bounded() {
    let source = format!("{}1;", "1+".repeat(200_000));

    let result = parse(&source);
    assert!(result.had_error);
    assert_eq!(
        result
            .diagnostics
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>(),
        vec!["Too much nesting."]
    );
    assert_eq!(result.statements.len(), 1);
    assert_eq!(result.statements[0].to_string(), "(expr <missing>)");
    drop(result);

    let chain = format!("{}1;", "1+".repeat(200));
    let result = parse(&chain);
    assert!(result.is_valid());
    assert_eq!(result.node_count(), 2 + 2 * 200);
}

#[test]
fn test_error_inside_block_is_reported_once() {
    let result = parse("{ a b; }");
    assert_eq!(
        result
            .diagnostics
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>(),
        vec!["[line 1] Error at 'b': Expect ';' after expression."]
    );
    assert_eq!(result.statements[0].to_string(), "(block (expr a))");
}
