/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Program` root
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
///
/// Each layer renders two ways: `Display` gives the canonical, fully
/// parenthesized source form and `dump()` gives a token-free outline of the
/// tree for structural comparison.
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
