//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that turns the lexer's tokens into an
//! Abstract Syntax Tree. It uses a Pratt parser for expressions with operator
//! precedence and handles:
//!
//! - Statement parsing (`let` bindings and expression statements)
//! - Expression parsing (unary minus, binary arithmetic, grouping, literals)
//! - Error collection and recovery at statement boundaries
//!
//! Prefix handlers start an expression from its first token; infix handlers
//! extend an already parsed left operand, governed by each operator's
//! precedence.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
