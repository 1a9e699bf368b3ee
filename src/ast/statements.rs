use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::expressions::{Expression, Identifier};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStmt),
    Expression(ExpressionStmt),
}

impl Statement {
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => &stmt.token.literal,
            Statement::Expression(stmt) => &stmt.token.literal,
        }
    }

    pub fn dump(&self) -> String {
        match self {
            Statement::Let(stmt) => format!("Let({}, {})", stmt.name.value, stmt.value.dump()),
            Statement::Expression(stmt) => format!("Expression({})", stmt.expression.dump()),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "let {} = {};", stmt.name, stmt.value),
            Statement::Expression(stmt) => write!(f, "{}", stmt.expression),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

/// A bare expression used as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    /// First token of the statement
    pub token: Token,
    pub expression: Expression,
}
