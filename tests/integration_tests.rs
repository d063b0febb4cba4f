//! Integration tests for the full front end.
//!
//! These tests verify that the complete pipeline works end to end: source
//! text through tokenization and parsing to a rendered syntax tree, with
//! diagnostics surfaced rather than thrown.

use frontend::{
    ast::ast::{Expr, Node, Stmt},
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::Parser,
    render_error,
};

#[test]
fn test_pipeline_simple_program() {
    let source = "let five = 5;\n\
                  let ten = 10;\n\
                  let add = fn(x, y) { x + y; };\n\
                  let result = add(five, ten);";

    let mut parser = Parser::new(Lexer::new(source.to_string()));
    let program = parser.parse();

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 4);
    assert_eq!(program.token_literal(), "let");

    assert_eq!(
        program.to_string(),
        "let five = 5; let ten = 10; let add = fn(x, y) { (x + y); }; let result = add(five, ten);"
    );
}

#[test]
fn test_pipeline_conditionals_and_comparisons() {
    let source = "if (5 < 10) { return true; } else { return false; } 10 == 10; 9 != 10;";

    let mut parser = Parser::new(Lexer::new(source.to_string()));
    let program = parser.parse();

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 3);

    let Stmt::Expression(first) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    assert!(matches!(first.expression, Expr::If(_)));

    assert_eq!(program.statements[1].to_string(), "(10 == 10);");
    assert_eq!(program.statements[2].to_string(), "(9 != 10);");
}

#[test]
fn test_pipeline_collects_diagnostics_and_continues() {
    let source = "let x 5; let y = 10; @; let z = y;";

    let mut parser = Parser::new(Lexer::new(source.to_string()));
    let program = parser.parse();

    // The two well-formed let statements survive the two malformed spots
    assert_eq!(program.statements.len(), 2);
    assert_eq!(parser.errors().len(), 2);
    assert_eq!(
        parser.errors()[0].to_string(),
        "expected next token to be Assignment, got Number instead"
    );
    assert_eq!(
        parser.errors()[1].to_string(),
        "no prefix parse function for \"@\" found"
    );
}

#[test]
fn test_pipeline_error_rendering() {
    let source = "let x;";

    let mut parser = Parser::new(Lexer::new(source.to_string()));
    let _ = parser.parse();

    assert_eq!(parser.errors().len(), 1);
    let rendered = render_error(&parser.errors()[0], source);
    assert!(rendered.contains("ExpectedToken"));
    assert!(rendered.contains("let x;"));
}

#[test]
fn test_pipeline_round_trip() {
    let source = "let result = add(2, 3 * 4); if (result > 10) { result } else { 0 }";

    let mut parser = Parser::new(Lexer::new(source.to_string()));
    let rendered = parser.parse().to_string();
    assert!(parser.errors().is_empty());

    let mut reparser = Parser::new(Lexer::new(rendered.clone()));
    let rendered_again = reparser.parse().to_string();
    assert!(reparser.errors().is_empty());

    assert_eq!(rendered, rendered_again);
}

#[test]
fn test_pipeline_spans_cover_statements() {
    let source = "let x = 5; return x;";

    let mut parser = Parser::new(Lexer::new(source.to_string()));
    let program = parser.parse();
    assert!(parser.errors().is_empty());

    let first = program.statements[0].get_span();
    assert_eq!(first.start, 0);
    assert_eq!(first.end, 10);

    let second = program.statements[1].get_span();
    assert_eq!(second.start, 11);
    assert_eq!(second.end, 20);
}

#[test]
fn test_lexer_is_independent_of_parser() {
    // The tokenizer alone never fails; unknown characters come back as
    // Illegal tokens
    let mut lexer = Lexer::new("let # = 5".to_string());

    assert_eq!(lexer.next_token().kind, TokenKind::Let);
    let illegal = lexer.next_token();
    assert_eq!(illegal.kind, TokenKind::Illegal);
    assert_eq!(illegal.value, "#");
    assert_eq!(lexer.next_token().kind, TokenKind::Assignment);
    assert_eq!(lexer.next_token().kind, TokenKind::Number);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}
