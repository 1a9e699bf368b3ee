//! Integration tests for the end-to-end pipeline.
//!
//! These tests drive the public API the way a consumer would: source text
//! goes through the lexer and parser, and the resulting program and error list
//! are inspected from outside the crate.

use minilang::{
    ast::{expressions::Expression, statements::Statement},
    config::config::{LexerConfig, ParserConfig},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser},
};

#[test]
fn test_lex_let_statement() {
    let kinds: Vec<TokenKind> = tokenize(LexerConfig::new("let x = 5;"))
        .into_iter()
        .map(|token| token.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_parse_program_from_lexer() {
    let lexer = Lexer::new(LexerConfig::new("let a = 10;\nlet b = 20;\n-5 + 10 * 15;"));
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.len(), 3);
    assert_eq!(
        program.to_string(),
        "let a = 10;\nlet b = 20;\n(-5 + (10 * 15))\n"
    );
}

#[test]
fn test_parse_reports_and_continues() {
    let (parser, program) = parse("let 5 = 10;\n(1 + 2) * 3;\nlet y = (4;\n6 / 2;");

    assert_eq!(
        parser.error_messages(),
        vec![
            "expected token to be 'IDENTIFIER', got 'INT' instead".to_string(),
            "expected token to be ')', got ';' instead".to_string(),
        ]
    );
    assert_eq!(program.to_string(), "((1 + 2) * 3)\n(6 / 2)\n");
}

#[test]
fn test_parse_values_survive_in_tree() {
    let (_, program) = parse("let n = 0; 9223372036854775807;");

    let Statement::Let(stmt) = &program.statements[0] else {
        panic!("expected a let statement");
    };
    let Expression::Integer(literal) = &stmt.value else {
        panic!("expected an integer literal");
    };
    assert_eq!(literal.value, 0);

    let Statement::Expression(stmt) = &program.statements[1] else {
        panic!("expected an expression statement");
    };
    let Expression::Integer(literal) = &stmt.expression else {
        panic!("expected an integer literal");
    };
    assert_eq!(literal.value, i64::MAX);
    assert_eq!(stmt.expression.token_literal(), "9223372036854775807");
}

#[test]
fn test_custom_nesting_limit() {
    let lexer = Lexer::new(LexerConfig::new("-(-(-(1)))"));
    let mut parser = Parser::with_config(lexer, ParserConfig { max_depth: 4 });
    let program = parser.parse_program();

    assert!(program.is_empty());
    assert_eq!(
        parser.error_messages(),
        vec!["expression nesting exceeds the limit of 4".to_string()]
    );
}

#[test]
fn test_rendering_round_trip() {
    let source = "let v = 1 * (2 + 3) - -4 / 5;\n7 - 8 - 9;";
    let (first_parser, first) = parse(source);
    let (second_parser, second) = parse(first.to_string());

    assert!(first_parser.errors().is_empty());
    assert!(second_parser.errors().is_empty());
    assert_eq!(first.dump(), second.dump());
    assert_eq!(
        second.dump(),
        "Let(v, Infix(-, Infix(*, Integer(1), Infix(+, Integer(2), Integer(3))), Infix(/, Prefix(-, Integer(4)), Integer(5))))\n\
         Expression(Infix(-, Infix(-, Integer(7), Integer(8)), Integer(9)))\n"
    );
}
