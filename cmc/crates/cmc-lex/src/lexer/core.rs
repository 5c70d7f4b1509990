//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use std::io::{self, BufRead};
use std::num::NonZeroUsize;

use tracing::debug;

use crate::chars::{byte_to_char, is_digit, is_ident_start};
use crate::error::LexError;
use crate::source::Source;
use crate::token::{Token, TokenKind};

/// Longest identifier or number kept in a lexeme by default.
pub const DEFAULT_MAX_LEXEME_LEN: NonZeroUsize = match NonZeroUsize::new(255) {
    Some(len) => len,
    None => unreachable!(),
};

/// Lexeme of the end-of-input token.
const EOF_LEXEME: &str = "EOF";

/// What to do with an identifier or number longer than the maximum.
///
/// Either way the whole run is consumed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlongPolicy {
    /// Keep the first `max_lexeme_len` characters and drop the rest.
    #[default]
    Truncate,
    /// Emit an `ERROR` token carrying the truncated text.
    Reject,
}

/// Tunables for the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Maximum number of characters kept in an identifier or number lexeme.
    ///
    /// Never zero, so every identifier or number keeps its first character.
    pub max_lexeme_len: NonZeroUsize,
    /// Handling of runs longer than `max_lexeme_len`.
    pub overlong: OverlongPolicy,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
            overlong: OverlongPolicy::Truncate,
        }
    }
}

/// Lexer for C-minus source.
///
/// Produces one token per call to [`Lexer::next_token`]. Between calls the
/// only state is the lookahead and line number held by the [`Source`].
/// Once the input is exhausted every call returns an `ENDFILE` token.
///
/// # Example
///
/// ```
/// use cmc_lex::{Lexer, Token, TokenKind};
///
/// let mut lexer = Lexer::from_bytes(b"a <= 10");
///
/// assert_eq!(lexer.next_token(), Token::new(TokenKind::Id, "a", 1));
/// assert_eq!(lexer.next_token(), Token::new(TokenKind::Le, "<=", 1));
/// assert_eq!(lexer.next_token(), Token::new(TokenKind::Num, "10", 1));
/// assert_eq!(lexer.next_token(), Token::new(TokenKind::EndFile, "EOF", 1));
/// ```
pub struct Lexer<R> {
    /// Byte source for input traversal.
    pub(crate) source: Source<R>,

    /// Lexeme length policy.
    pub(crate) config: LexerConfig,

    /// Line number where the current token starts (1-based).
    pub(crate) token_line: u32,

    /// Malformed tokens reported so far.
    errors: Vec<LexError>,
}

impl<R: BufRead> Lexer<R> {
    /// Creates a lexer with the default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, LexerConfig::default())
    }

    /// Creates a lexer with the given configuration.
    pub fn with_config(reader: R, config: LexerConfig) -> Self {
        Self {
            source: Source::new(reader),
            config,
            token_line: 1,
            errors: Vec::new(),
        }
    }

    /// Returns the next token from the input.
    ///
    /// Skips whitespace and block comments, then dispatches on the first
    /// character of the token.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.skip_whitespace_and_comments() {
            return token;
        }

        self.token_line = self.source.line();

        let Some(c) = self.source.current() else {
            return self.token(TokenKind::EndFile, EOF_LEXEME);
        };

        match c {
            b'+' => self.lex_single(TokenKind::Plus),
            b'-' => self.lex_single(TokenKind::Minus),
            b'*' => self.lex_single(TokenKind::Times),
            b'/' => self.lex_single(TokenKind::Over),
            b';' => self.lex_single(TokenKind::Semi),
            b',' => self.lex_single(TokenKind::Comma),
            b'(' => self.lex_single(TokenKind::LParen),
            b')' => self.lex_single(TokenKind::RParen),
            b'[' => self.lex_single(TokenKind::LBracket),
            b']' => self.lex_single(TokenKind::RBracket),
            b'{' => self.lex_single(TokenKind::LBrace),
            b'}' => self.lex_single(TokenKind::RBrace),
            b'<' => self.lex_less(),
            b'>' => self.lex_greater(),
            b'=' => self.lex_equals(),
            b'!' => self.lex_bang(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if is_digit(c) => self.lex_number(),
            c => {
                let ch = byte_to_char(c);
                self.source.advance();
                self.report(LexError::UnexpectedChar {
                    ch,
                    line: self.token_line,
                });
                self.token(TokenKind::Error, ch.to_string())
            },
        }
    }

    /// Consumes the lookahead if it equals `expected`.
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if self.source.current() == Some(expected) {
            self.source.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a maximal run of bytes matching `pred`.
    ///
    /// Returns the kept text and whether bytes past the length cap were
    /// dropped.
    pub(crate) fn take_run(&mut self, pred: fn(u8) -> bool) -> (String, bool) {
        let mut text = String::new();
        let mut overlong = false;
        while let Some(b) = self.source.current().filter(|&b| pred(b)) {
            if text.len() < self.config.max_lexeme_len.get() {
                text.push(byte_to_char(b));
            } else {
                overlong = true;
            }
            self.source.advance();
        }
        (text, overlong)
    }

    /// Builds the token for a consumed run, applying the overlong policy.
    pub(crate) fn finish_run(&mut self, kind: TokenKind, text: String, overlong: bool) -> Token {
        if overlong && self.config.overlong == OverlongPolicy::Reject {
            self.report(LexError::LexemeTooLong {
                line: self.token_line,
                max: self.config.max_lexeme_len.get(),
            });
            return self.token(TokenKind::Error, text);
        }
        self.token(kind, text)
    }

    /// Reads the input to the end, returning every token including the
    /// final `ENDFILE`.
    pub fn collect_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Takes the read error that cut the input short, if any.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.source.take_error()
    }
}

impl<'a> Lexer<&'a [u8]> {
    /// Creates a lexer over an in-memory buffer.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<R> Lexer<R> {
    /// Builds a token starting on the current token line.
    pub(crate) fn token(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.token_line)
    }

    /// Records a malformed token.
    pub(crate) fn report(&mut self, error: LexError) {
        debug!(%error, "malformed token");
        self.errors.push(error);
    }

    /// Returns the current line number (1-based).
    ///
    /// This is the line of the lookahead character, i.e. where the next
    /// token would start if no whitespace precedes it.
    pub fn line(&self) -> u32 {
        self.source.line()
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Returns every malformed token reported so far, in input order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenizes a whole string with the default configuration.
///
/// The returned stream always ends with the `ENDFILE` token.
///
/// # Example
///
/// ```
/// use cmc_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("if x").into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![TokenKind::If, TokenKind::Id, TokenKind::EndFile]);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::from_bytes(source.as_bytes()).collect_all()
}
