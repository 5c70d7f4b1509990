//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators and punctuation. Two-character
//! forms are resolved with one byte of lookahead.

use std::io::BufRead;

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<R: BufRead> Lexer<R> {
    /// Lexes a token made of the single lookahead byte.
    ///
    /// Handles: `+ - * / ; , ( ) [ ] { }`
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> Token {
        let lexeme = self.source.current().map(char::from).unwrap_or_default();
        self.source.advance();
        self.token(kind, lexeme.to_string())
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.source.advance();
        if self.eat(b'=') {
            self.token(TokenKind::Le, "<=")
        } else {
            self.token(TokenKind::Lt, "<")
        }
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.source.advance();
        if self.eat(b'=') {
            self.token(TokenKind::Ge, ">=")
        } else {
            self.token(TokenKind::Gt, ">")
        }
    }

    /// Lexes assignment or equality.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.source.advance();
        if self.eat(b'=') {
            self.token(TokenKind::Eq, "==")
        } else {
            self.token(TokenKind::Assign, "=")
        }
    }

    /// Lexes not-equals.
    ///
    /// Handles: `!=`. A lone `!` is malformed since the language has no
    /// logical not.
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.source.advance();
        if self.eat(b'=') {
            self.token(TokenKind::Neq, "!=")
        } else {
            self.report(LexError::IncompleteOperator {
                line: self.token_line,
            });
            self.token(TokenKind::Error, "!")
        }
    }
}
