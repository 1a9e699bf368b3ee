//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns source text into
//! tokens for the parser, one token per call. It handles:
//!
//! - Whitespace skipping
//! - Recognition of the `let` keyword, identifiers and integer literals
//! - Single-character operators and punctuation
//! - Flagging characters outside the language as `Illegal`

pub mod lexer;
pub mod tokens;
