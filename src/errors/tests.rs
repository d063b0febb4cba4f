//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::{render_error, Span};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NoPrefixRule {
            token: "@".to_string(),
        },
        Span::new(10, 11),
    );

    assert_eq!(error.get_error_name(), "NoPrefixRule");
}

#[test]
fn test_error_span() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Number,
        },
        Span::new(42, 44),
    );

    assert_eq!(error.get_span().start, 42);
    assert_eq!(error.get_span().end, 44);
}

#[test]
fn test_expected_token_message() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Semicolon,
        },
        Span::new(0, 1),
    );

    assert_eq!(
        error.to_string(),
        "expected next token to be Assignment, got Semicolon instead"
    );
}

#[test]
fn test_no_prefix_rule_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixRule {
            token: "+".to_string(),
        },
        Span::new(0, 1),
    );

    assert_eq!(error.to_string(), "no prefix parse function for \"+\" found");
}

#[test]
fn test_number_parse_error_message() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            literal: "92233720368547758089".to_string(),
        },
        Span::new(0, 20),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"92233720368547758089\" as integer"
    );
}

#[test]
fn test_error_tip() {
    let error = Error::new(
        ErrorImpl::NoPrefixRule {
            token: "+".to_string(),
        },
        Span::new(0, 1),
    );

    let ErrorTip::Suggestion(suggestion) = error.get_tip() else {
        panic!("expected a suggestion tip");
    };
    assert_eq!(suggestion, "`+` cannot begin an expression");
}

#[test]
fn test_render_error_points_at_offending_token() {
    let source = "let x;";
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Semicolon,
        },
        Span::new(5, 6),
    );

    let rendered = render_error(&error, source);

    assert!(rendered.contains("ExpectedToken"));
    assert!(rendered.contains("let x;"));
    assert!(rendered.contains('^'));
}
