use std::fmt::Display;

use crate::lexer::tokens::Token;

/// Every expression form the parser can build.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    Integer(IntegerLiteral),
    Identifier(Identifier),
}

impl Expression {
    /// The literal text of the token this expression was built from.
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Prefix(expr) => &expr.token.literal,
            Expression::Infix(expr) => &expr.token.literal,
            Expression::Integer(expr) => &expr.token.literal,
            Expression::Identifier(expr) => &expr.token.literal,
        }
    }

    /// Renders the tree shape without any token text, e.g.
    /// `Infix(+, Integer(1), Integer(2))`.
    pub fn dump(&self) -> String {
        match self {
            Expression::Prefix(expr) => {
                format!("Prefix({}, {})", expr.operator, expr.right.dump())
            }
            Expression::Infix(expr) => format!(
                "Infix({}, {}, {})",
                expr.operator,
                expr.left.dump(),
                expr.right.dump()
            ),
            Expression::Integer(expr) => format!("Integer({})", expr.value),
            Expression::Identifier(expr) => format!("Identifier({})", expr.value),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Prefix(expr) => write!(f, "{}{}", expr.operator, expr.right),
            Expression::Infix(expr) => {
                write!(f, "({} {} {})", expr.left, expr.operator, expr.right)
            }
            Expression::Integer(expr) => write!(f, "{}", expr.value),
            Expression::Identifier(expr) => write!(f, "{}", expr.value),
        }
    }
}

// LITERALS

/// Integer Literal
/// Represents a decimal integer in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

/// Identifier
/// Represents a name in the AST. Only `let` targets produce these for now.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// OPERATORS

/// Prefix Expression
/// A unary operator applied to the operand on its right, e.g. `-5`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

/// Infix Expression
/// A binary operator with both operands, e.g. `1 + 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}
