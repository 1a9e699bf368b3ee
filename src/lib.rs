#![allow(clippy::module_inception)]

//! Lexer and Pratt parser for a small arithmetic language with `let`
//! bindings.
//!
//! ```
//! use minilang::parser::parser::parse;
//!
//! let (parser, program) = parse("let x = -5 + 10 * 15;");
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (-5 + (10 * 15));\n");
//! ```

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;
