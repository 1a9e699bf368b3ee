//! Error types for the parser.
//!
//! Errors are informational: the parser collects them while it keeps going,
//! and the caller reads them back once `parse_program` returns.

pub mod errors;

#[cfg(test)]
mod tests;
