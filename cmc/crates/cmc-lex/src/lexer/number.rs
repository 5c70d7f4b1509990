//! Number literal lexing.

use std::io::BufRead;

use crate::chars::is_digit;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<R: BufRead> Lexer<R> {
    /// Lexes an integer literal.
    ///
    /// Only unsigned decimal digits: no sign, no fraction, no exponent.
    /// The value is never parsed, so magnitude is not checked here.
    pub(crate) fn lex_number(&mut self) -> Token {
        let (text, overlong) = self.take_run(is_digit);
        self.finish_run(TokenKind::Num, text, overlong)
    }
}
