use crate::{
    ast::expressions::{Expression, InfixExpr, IntegerLiteral, PrefixExpr},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

/// Parses an expression whose operators all bind tighter than `precedence`.
///
/// Returns `None` when no expression starts at the current token, or when a
/// sub-expression failed; any diagnostic has already been recorded.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    if parser.depth() >= parser.max_depth() {
        let limit = parser.max_depth();
        parser.push_error(ParseError::NestingTooDeep { limit });
        return None;
    }

    parser.enter_nesting();
    let expr = parse_expr_unbounded(parser, precedence);
    parser.leave_nesting();

    expr
}

fn parse_expr_unbounded(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    // First parse prefix
    let token_kind = parser.current_token_kind();
    let Some(prefix) = parser.get_prefix_lookup().get(&token_kind).copied() else {
        if token_kind == TokenKind::Illegal {
            let literal = parser.current_token().literal.clone();
            parser.push_error(ParseError::IllegalCharacter { literal });
        }
        return None;
    };

    let mut left = prefix(parser)?;

    // While the next operator binds tighter than we do, let it take `left` as its operand
    while parser.peek_token_kind() != TokenKind::Semicolon
        && parser.peek_precedence() > precedence
    {
        let Some(infix) = parser
            .get_infix_lookup()
            .get(&parser.peek_token_kind())
            .copied()
        else {
            return Some(left);
        };

        parser.advance();
        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            parser.push_error(ParseError::InvalidInteger {
                literal: token.literal,
            });
            None
        }
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let rhs = parse_expr(parser, Precedence::Prefix)?;

    Some(Expression::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.advance();

    // Same precedence on the right keeps equal operators left-associative
    let right = parse_expr(parser, precedence)?;

    Some(Expression::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(expr)
}
