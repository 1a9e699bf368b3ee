use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{config::config::LexerConfig, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Produces a token from the matched text, or `None` if the text is skipped.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \\t\\n\\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
    ];
}

/// A pull-based cursor over the source text.
///
/// Every call to [`Lexer::next_token`] produces exactly one token. Once the
/// input is exhausted the lexer keeps producing `Eof`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Lexer {
        Lexer {
            source: config.input,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Produces the next token and advances past it.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!(kind = %token.kind, literal = %token.literal, "lexed token");
        token
    }

    fn scan(&mut self) -> Token {
        'scan: loop {
            let Some(ch) = self.at() else {
                return MK_TOKEN!(TokenKind::Eof, String::new());
            };

            if is_letter(ch) {
                return symbol_handler(self);
            }

            for pattern in PATTERNS.iter() {
                let Some(matched) = pattern
                    .regex
                    .find(self.remainder())
                    .map(|m| m.as_str().to_owned())
                else {
                    continue;
                };

                match (pattern.handler)(self, &matched) {
                    Some(token) => return token,
                    None => continue 'scan,
                }
            }

            self.advance_n(ch.len_utf8());
            return MK_TOKEN!(TokenKind::Illegal, ch.to_string());
        }
    }
}

/// A letter is any character whose upper and lower case forms differ, or `_`.
pub fn is_letter(ch: char) -> bool {
    ch == '_' || !ch.to_uppercase().eq(ch.to_lowercase())
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(TokenKind::Int, matched.to_string()))
}

fn symbol_handler(lexer: &mut Lexer) -> Token {
    let remaining = lexer.remainder();
    let end = remaining
        .char_indices()
        .find(|(_, ch)| !is_letter(*ch))
        .map(|(index, _)| index)
        .unwrap_or(remaining.len());
    let value = remaining[..end].to_string();

    lexer.advance_n(end);
    MK_TOKEN!(lookup_ident(&value), value)
}

/// Drains a lexer built from `config`, returning every token up to and including `Eof`.
pub fn tokenize(config: LexerConfig) -> Vec<Token> {
    let mut lex = Lexer::new(config);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
