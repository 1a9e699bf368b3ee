use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{expressions::Expression, statements::Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type PrefixHandler = fn(&mut Parser) -> Option<Expression>;
pub type InfixHandler = fn(&mut Parser, Expression) -> Option<Expression>;

lazy_static! {
    /// Binding strength of every infix operator. Kinds missing here bind at `Lowest`.
    pub static ref PRECEDENCE_LOOKUP: HashMap<TokenKind, Precedence> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, Precedence::Sum);
        map.insert(TokenKind::Minus, Precedence::Sum);
        map.insert(TokenKind::Asterisk, Precedence::Product);
        map.insert(TokenKind::Slash, Precedence::Product);
        map
    };
}

pub fn precedence_of(kind: TokenKind) -> Precedence {
    PRECEDENCE_LOOKUP
        .get(&kind)
        .copied()
        .unwrap_or(Precedence::Lowest)
}

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.infix(TokenKind::Plus, parse_infix_expr);
    parser.infix(TokenKind::Minus, parse_infix_expr);
    parser.infix(TokenKind::Asterisk, parse_infix_expr);
    parser.infix(TokenKind::Slash, parse_infix_expr);

    // Literals, unary minus and grouping
    parser.prefix(TokenKind::Int, parse_integer_literal);
    parser.prefix(TokenKind::Minus, parse_prefix_expr);
    parser.prefix(TokenKind::LParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
