//! Configuration for the lexer and parser.
//!
//! This module holds the inputs a parse session is built from:
//!
//! - `LexerConfig` - the source text handed to the lexer
//! - `ParserConfig` - limits applied while parsing
//! - Default values for those limits

pub mod config;
