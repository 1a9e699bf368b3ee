use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A diagnostic recorded by the parser.
///
/// Parse functions never unwind on these; they push one onto the parser's
/// error list and return no node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected token to be '{expected}', got '{got}' instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String },
    #[error("illegal character {literal:?}")]
    IllegalCharacter { literal: String },
    #[error("expected expression after '=', got '{got}' instead")]
    MissingExpression { got: TokenKind },
    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
}

impl ParseError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::InvalidInteger { .. } => "InvalidInteger",
            ParseError::IllegalCharacter { .. } => "IllegalCharacter",
            ParseError::MissingExpression { .. } => "MissingExpression",
            ParseError::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }
}
