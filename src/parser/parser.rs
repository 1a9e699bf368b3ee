//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from the lexer on demand and keeps exactly two of
//! them in view: the current token and the peek token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Prefix handlers, for tokens that start an expression
//! - Infix handlers, for operators that follow a left operand
//!
//! Operator precedence comes from the shared table in `lookups`.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    config::config::{LexerConfig, ParserConfig},
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, precedence_of, InfixHandler, InfixLookup, Precedence,
        PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Parse functions in `expr` and `stmt` receive it by `&mut` and move through
/// the input only via [`Parser::advance`].
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// Token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics collected so far
    errors: Vec<ParseError>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
    /// Number of expressions currently being parsed inside one another
    depth: usize,
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the default configuration.
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_config(lexer, ParserConfig::default())
    }

    /// Creates a parser, registers its handlers and primes the current and
    /// peek tokens.
    pub fn with_config(lexer: Lexer, config: ParserConfig) -> Self {
        let mut parser = Parser {
            lexer,
            current: MK_TOKEN!(TokenKind::Eof, String::new()),
            peek: MK_TOKEN!(TokenKind::Eof, String::new()),
            errors: vec![],
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            depth: 0,
            config,
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the peek token without advancing.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the peek token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the peek token into current and pulls a new peek token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances if the peek token is of the expected kind.
    ///
    /// Otherwise an `UnexpectedToken` error is recorded and the parser stays
    /// where it is.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek.is(expected) {
            self.advance();
            true
        } else {
            self.push_error(ParseError::UnexpectedToken {
                expected,
                got: self.peek.kind,
            });
            false
        }
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the prefix lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers an infix handler for an operator token.
    pub fn infix(&mut self, kind: TokenKind, infix_fn: InfixHandler) {
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token that can start an expression.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Records a diagnostic.
    pub fn push_error(&mut self, error: ParseError) {
        debug!(%error, "parse error");
        self.errors.push(error);
    }

    /// Every diagnostic recorded so far, oldest first.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// The recorded diagnostics rendered as messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    pub(crate) fn enter_nesting(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail are left out of the returned program; the reason
    /// is available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::Eof {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }
}

/// Parses source text into a program.
///
/// This is the main entry point. It builds a lexer and parser for the input
/// and parses it to the end.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with its recorded errors)
/// - The parsed Program
pub fn parse(config: impl Into<LexerConfig>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(config.into()));
    let program = parser.parse_program();

    (parser, program)
}
