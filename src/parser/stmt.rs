use crate::{
    ast::{
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, Statement},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

/// Parses one statement and leaves the parser on the token after it.
///
/// A statement that fails with a recorded error is skipped up to its
/// terminating `;` so the next statement starts clean. One that fails
/// silently only gives up its first token.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    let errors_before = parser.errors().len();
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    let stmt = match handler {
        Some(stmt_fn) => stmt_fn(parser),
        None => parse_expression_stmt(parser),
    };

    if stmt.is_none() && parser.errors().len() > errors_before {
        skip_to_semicolon(parser);
    }

    parser.advance();
    stmt
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let start_token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name = Identifier {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    parser.advance();

    let errors_before = parser.errors().len();
    let Some(value) = parse_expr(parser, Precedence::Lowest) else {
        // Only report here if the expression itself stayed silent
        if parser.errors().len() == errors_before {
            let got = parser.current_token_kind();
            parser.push_error(ParseError::MissingExpression { got });
        }
        return None;
    };

    skip_let_tail(parser);

    Some(Statement::Let(LetStmt {
        token: start_token,
        name,
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let start_token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;

    Some(Statement::Expression(ExpressionStmt {
        token: start_token,
        expression,
    }))
}

fn skip_to_semicolon(parser: &mut Parser) {
    while !matches!(
        parser.current_token_kind(),
        TokenKind::Semicolon | TokenKind::Eof
    ) {
        parser.advance();
    }
}

/// Skips whatever follows a `let` value up to its `;`, flagging illegal
/// characters on the way.
fn skip_let_tail(parser: &mut Parser) {
    while !matches!(
        parser.current_token_kind(),
        TokenKind::Semicolon | TokenKind::Eof
    ) {
        if parser.current_token_kind() == TokenKind::Illegal {
            let literal = parser.current_token().literal.clone();
            parser.push_error(ParseError::IllegalCharacter { literal });
        }
        parser.advance();
    }
}
