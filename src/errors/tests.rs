//! Unit tests for error messages.

use crate::{errors::errors::ParseError, lexer::tokens::TokenKind};

#[test]
fn test_unexpected_token_message() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::Ident,
        got: TokenKind::Int,
    };

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected token to be 'IDENTIFIER', got 'INT' instead"
    );
}

#[test]
fn test_unexpected_punctuation_message() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::RParen,
        got: TokenKind::Eof,
    };

    assert_eq!(error.to_string(), "expected token to be ')', got 'EOF' instead");
}

#[test]
fn test_invalid_integer_message() {
    let error = ParseError::InvalidInteger {
        literal: "99999999999999999999".to_string(),
    };

    assert_eq!(error.get_error_name(), "InvalidInteger");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_illegal_character_message() {
    let error = ParseError::IllegalCharacter {
        literal: "%".to_string(),
    };

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.to_string(), "illegal character \"%\"");
}

#[test]
fn test_missing_expression_message() {
    let error = ParseError::MissingExpression {
        got: TokenKind::Semicolon,
    };

    assert_eq!(error.get_error_name(), "MissingExpression");
    assert_eq!(
        error.to_string(),
        "expected expression after '=', got ';' instead"
    );
}

#[test]
fn test_nesting_too_deep_message() {
    let error = ParseError::NestingTooDeep { limit: 8 };

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nesting exceeds the limit of 8");
}
