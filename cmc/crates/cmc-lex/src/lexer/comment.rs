//! Comment lexing.
//!
//! This module handles skipping whitespace and block comments.

use std::io::BufRead;

use crate::chars::is_space;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Lexeme of the token reported for an unterminated block comment.
const UNTERMINATED_COMMENT_LEXEME: &str = "EOF in comment";

impl<R: BufRead> Lexer<R> {
    /// Skips whitespace and block comments.
    ///
    /// Loops until the lookahead starts a real token. A `/` not followed by
    /// `*` is pushed back so it stays the lookahead. Returns the `ERROR`
    /// token when a comment runs into end of input; the comment has then
    /// consumed everything, so the next call yields `ENDFILE`.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Option<Token> {
        loop {
            while self.source.current().is_some_and(is_space) {
                self.source.advance();
            }

            if self.source.current() != Some(b'/') {
                return None;
            }
            self.source.advance();
            if self.source.current() != Some(b'*') {
                self.source.pushback(b'/');
                return None;
            }
            self.source.advance();

            if !self.skip_block_comment() {
                self.token_line = self.source.line();
                self.report(LexError::UnterminatedComment {
                    line: self.token_line,
                });
                return Some(self.token(TokenKind::Error, UNTERMINATED_COMMENT_LEXEME));
            }
        }
    }

    /// Skips the body of a block comment whose `/*` is already consumed.
    ///
    /// Comments do not nest: the first `*/` closes. Returns false if end of
    /// input came first.
    fn skip_block_comment(&mut self) -> bool {
        loop {
            match self.source.current() {
                None => return false,
                Some(b'*') => {
                    self.source.advance();
                    if self.eat(b'/') {
                        return true;
                    }
                },
                Some(_) => self.source.advance(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::{tokenize, LexError, Lexer};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_skip_whitespace() {
        let mut lexer = Lexer::from_bytes(b" \t\r\x0B\x0C\nhello");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Id, "hello", 2));
    }

    #[test]
    fn test_comment_transparency() {
        let tokens = tokenize("int/* comment\nspans lines */x");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Int, "int", 1),
                Token::new(TokenKind::Id, "x", 2),
                Token::new(TokenKind::EndFile, "EOF", 2),
            ]
        );
    }

    #[test]
    fn test_consecutive_comments() {
        let tokens = tokenize("/* a */ /* b */\n/* c\n*/ y");
        assert_eq!(tokens[0], Token::new(TokenKind::Id, "y", 3));
    }

    #[test]
    fn test_many_comments_do_not_recurse() {
        let source = "/**/".repeat(100_000) + "z";
        let tokens = tokenize(&source);
        assert_eq!(tokens[0], Token::new(TokenKind::Id, "z", 1));
    }

    #[test]
    fn test_comments_do_not_nest() {
        assert_eq!(
            kinds("/* outer /* inner */ x */"),
            vec![TokenKind::Id, TokenKind::Times, TokenKind::Over, TokenKind::EndFile]
        );
    }

    #[test]
    fn test_star_runs_before_close() {
        assert_eq!(kinds("/*** stars ***/ a"), vec![TokenKind::Id, TokenKind::EndFile]);
        assert_eq!(kinds("/**/a"), vec![TokenKind::Id, TokenKind::EndFile]);
    }

    #[test]
    fn test_unterminated_comment() {
        let mut lexer = Lexer::from_bytes(b"/* never closes");
        assert_eq!(
            lexer.next_token(),
            Token::new(TokenKind::Error, "EOF in comment", 1)
        );
        assert_eq!(lexer.next_token(), Token::new(TokenKind::EndFile, "EOF", 1));
        assert_eq!(lexer.errors(), &[LexError::UnterminatedComment { line: 1 }]);
    }

    #[test]
    fn test_unterminated_comment_reports_truncation_line() {
        let tokens = tokenize("x /* open\n\n\n*");
        assert_eq!(tokens[1], Token::new(TokenKind::Error, "EOF in comment", 4));
        assert_eq!(tokens[2], Token::new(TokenKind::EndFile, "EOF", 4));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_slash_is_division() {
        assert_eq!(
            kinds("a / b"),
            vec![TokenKind::Id, TokenKind::Over, TokenKind::Id, TokenKind::EndFile]
        );
    }

    #[test]
    fn test_slash_before_newline_keeps_line() {
        let tokens = tokenize("a /\nb");
        assert_eq!(tokens[1], Token::new(TokenKind::Over, "/", 1));
        assert_eq!(tokens[2], Token::new(TokenKind::Id, "b", 2));
    }

    #[test]
    fn test_slash_at_end_of_input() {
        assert_eq!(kinds("/"), vec![TokenKind::Over, TokenKind::EndFile]);
    }

    #[test]
    fn test_division_after_comment() {
        assert_eq!(
            kinds("/* c */ / /"),
            vec![TokenKind::Over, TokenKind::Over, TokenKind::EndFile]
        );
    }
}
