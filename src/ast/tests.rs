//! Unit tests for AST rendering.

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    ast::Program,
    expressions::{Expression, Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, Statement},
};

fn int(value: i64) -> Expression {
    Expression::Integer(IntegerLiteral {
        token: Token::new(TokenKind::Int, value.to_string()),
        value,
    })
}

fn ident(name: &str) -> Identifier {
    Identifier {
        token: Token::new(TokenKind::Ident, name),
        value: name.to_string(),
    }
}

fn infix(left: Expression, operator: &str, kind: TokenKind, right: Expression) -> Expression {
    Expression::Infix(InfixExpr {
        token: Token::new(kind, operator),
        left: Box::new(left),
        operator: operator.to_string(),
        right: Box::new(right),
    })
}

fn negate(right: Expression) -> Expression {
    Expression::Prefix(PrefixExpr {
        token: Token::new(TokenKind::Minus, "-"),
        operator: "-".to_string(),
        right: Box::new(right),
    })
}

#[test]
fn test_render_let_statement() {
    let program = Program {
        statements: vec![Statement::Let(LetStmt {
            token: Token::new(TokenKind::Let, "let"),
            name: ident("answer"),
            value: int(42),
        })],
    };

    assert_eq!(program.to_string(), "let answer = 42;\n");
    assert_eq!(program.statements[0].token_literal(), "let");
}

#[test]
fn test_render_nested_expression() {
    // -5 + 10 * 15
    let expression = infix(
        negate(int(5)),
        "+",
        TokenKind::Plus,
        infix(int(10), "*", TokenKind::Asterisk, int(15)),
    );

    assert_eq!(expression.to_string(), "(-5 + (10 * 15))");
    assert_eq!(expression.token_literal(), "+");
}

#[test]
fn test_render_prefix_of_group() {
    let expression = negate(infix(int(1), "-", TokenKind::Minus, int(2)));

    assert_eq!(expression.to_string(), "-(1 - 2)");
}

#[test]
fn test_dump_ignores_tokens() {
    let expression = infix(int(3), "/", TokenKind::Slash, negate(int(4)));

    assert_eq!(
        expression.dump(),
        "Infix(/, Integer(3), Prefix(-, Integer(4)))"
    );
}

#[test]
fn test_program_dump_and_render() {
    let program = Program {
        statements: vec![
            Statement::Expression(ExpressionStmt {
                token: Token::new(TokenKind::Int, "1"),
                expression: int(1),
            }),
            Statement::Let(LetStmt {
                token: Token::new(TokenKind::Let, "let"),
                name: ident("x"),
                value: negate(int(0)),
            }),
        ],
    };

    assert_eq!(program.len(), 2);
    assert!(!program.is_empty());
    assert_eq!(program.to_string(), "1\nlet x = -0;\n");
    assert_eq!(program.dump(), "Expression(Integer(1))\nLet(x, Prefix(-, Integer(0)))\n");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
    assert_eq!(program.dump(), "");
}
