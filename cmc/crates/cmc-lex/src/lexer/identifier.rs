//! Identifier and reserved word lexing.

use std::io::BufRead;

use crate::chars::is_ident_continue;
use crate::token::{reserved_word, Token, TokenKind};
use crate::Lexer;

impl<R: BufRead> Lexer<R> {
    /// Lexes an identifier or reserved word.
    ///
    /// Consumes the longest run of ASCII letters and digits, so `ifx` is a
    /// single identifier. The kept text is then checked against the
    /// reserved words.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let (text, overlong) = self.take_run(is_ident_continue);
        let kind = reserved_word(&text).unwrap_or(TokenKind::Id);
        self.finish_run(kind, text, overlong)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use crate::token::{Token, TokenKind};
    use crate::{tokenize, LexError, Lexer, LexerConfig, OverlongPolicy};

    fn lex_ident(source: &str) -> Token {
        Lexer::from_bytes(source.as_bytes()).next_token()
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("foo"), Token::new(TokenKind::Id, "foo", 1));
        assert_eq!(lex_ident("x1y2"), Token::new(TokenKind::Id, "x1y2", 1));
    }

    #[test]
    fn test_reserved_words() {
        assert_eq!(lex_ident("else").kind, TokenKind::Else);
        assert_eq!(lex_ident("if").kind, TokenKind::If);
        assert_eq!(lex_ident("int").kind, TokenKind::Int);
        assert_eq!(lex_ident("return").kind, TokenKind::Return);
        assert_eq!(lex_ident("void").kind, TokenKind::Void);
        assert_eq!(lex_ident("while").kind, TokenKind::While);
    }

    #[test]
    fn test_reserved_word_keeps_lexeme() {
        assert_eq!(lex_ident("return"), Token::new(TokenKind::Return, "return", 1));
    }

    #[test]
    fn test_maximal_munch() {
        let tokens = tokenize("ifx");
        assert_eq!(tokens[0], Token::new(TokenKind::Id, "ifx", 1));
        assert_eq!(tokens[1].kind, TokenKind::EndFile);

        let tokens = tokenize("if x");
        assert_eq!(tokens[0], Token::new(TokenKind::If, "if", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Id, "x", 1));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(lex_ident("IF"), Token::new(TokenKind::Id, "IF", 1));
        assert_eq!(lex_ident("While").kind, TokenKind::Id);
    }

    #[test]
    fn test_underscore_splits_identifier() {
        let kinds: Vec<_> = tokenize("foo_bar").into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Id, TokenKind::Error, TokenKind::Id, TokenKind::EndFile]
        );
    }

    #[test]
    fn test_identifier_then_digits_then_operator() {
        let tokens = tokenize("abc123+");
        assert_eq!(tokens[0], Token::new(TokenKind::Id, "abc123", 1));
        assert_eq!(tokens[1].kind, TokenKind::Plus);
    }

    #[test]
    fn test_long_identifier_truncated() {
        let name = "a".repeat(300);
        let tokens = tokenize(&format!("{} b", name));
        assert_eq!(tokens[0].kind, TokenKind::Id);
        assert_eq!(tokens[0].lexeme, "a".repeat(255));
        assert_eq!(tokens[1], Token::new(TokenKind::Id, "b", 1));
    }

    #[test]
    fn test_maximum_length_identifier_kept() {
        let name = "z".repeat(255);
        assert_eq!(lex_ident(&name).lexeme, name);
    }

    #[test]
    fn test_truncation_can_form_reserved_word() {
        let config = LexerConfig {
            max_lexeme_len: NonZeroUsize::new(2).unwrap(),
            overlong: OverlongPolicy::Truncate,
        };
        let mut lexer = Lexer::with_config(&b"ifdef"[..], config);
        assert_eq!(lexer.next_token(), Token::new(TokenKind::If, "if", 1));
        assert_eq!(lexer.next_token().kind, TokenKind::EndFile);
    }

    #[test]
    fn test_long_identifier_rejected() {
        let config = LexerConfig {
            max_lexeme_len: NonZeroUsize::new(4).unwrap(),
            overlong: OverlongPolicy::Reject,
        };
        let mut lexer = Lexer::with_config(&b"abcdefg x"[..], config);
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Error, "abcd", 1));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Id, "x", 1));
        assert_eq!(
            lexer.errors(),
            &[LexError::LexemeTooLong { line: 1, max: 4 }]
        );
    }

    #[test]
    fn test_reject_allows_exact_length() {
        let config = LexerConfig {
            max_lexeme_len: NonZeroUsize::new(4).unwrap(),
            overlong: OverlongPolicy::Reject,
        };
        let mut lexer = Lexer::with_config(&b"void"[..], config);
        assert_eq!(lexer.next_token().kind, TokenKind::Void);
        assert!(lexer.errors().is_empty());
    }
}
