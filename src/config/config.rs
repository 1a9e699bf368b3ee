//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The default maximum number of nested expressions the parser descends into.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The input a lexer is constructed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// The full source text.
    pub input: String,
}

/// Limits applied by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Nesting depth past which an expression is rejected instead of parsed.
    pub max_depth: usize,
}

//--------------------------------------------------------------------------------------------------
// Implementations
//--------------------------------------------------------------------------------------------------

impl LexerConfig {
    pub fn new(input: impl Into<String>) -> Self {
        LexerConfig {
            input: input.into(),
        }
    }
}

impl From<&str> for LexerConfig {
    fn from(input: &str) -> Self {
        LexerConfig::new(input)
    }
}

impl From<String> for LexerConfig {
    fn from(input: String) -> Self {
        LexerConfig { input }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
