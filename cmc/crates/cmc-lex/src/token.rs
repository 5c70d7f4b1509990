//! Token definitions for the C-minus scanner.

use std::fmt;

/// The closed set of token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Reserved words
    /// `else`
    Else,
    /// `if`
    If,
    /// `int`
    Int,
    /// `return`
    Return,
    /// `void`
    Void,
    /// `while`
    While,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Over,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `=`
    Assign,

    // Punctuation
    /// `;`
    Semi,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    /// Identifier that is not a reserved word.
    Id,
    /// Run of decimal digits.
    Num,
    /// Malformed input.
    Error,
    /// End of input.
    EndFile,
}

impl TokenKind {
    /// Returns the display name used in token listings.
    ///
    /// # Example
    ///
    /// ```
    /// use cmc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Le.name(), "LE");
    /// assert_eq!(TokenKind::EndFile.name(), "ENDFILE");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Else => "ELSE",
            TokenKind::If => "IF",
            TokenKind::Int => "INT",
            TokenKind::Return => "RETURN",
            TokenKind::Void => "VOID",
            TokenKind::While => "WHILE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Over => "OVER",
            TokenKind::Lt => "LT",
            TokenKind::Le => "LE",
            TokenKind::Gt => "GT",
            TokenKind::Ge => "GE",
            TokenKind::Eq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Semi => "SEMI",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Id => "ID",
            TokenKind::Num => "NUM",
            TokenKind::Error => "ERROR",
            TokenKind::EndFile => "ENDFILE",
        }
    }

    /// Returns true for the six reserved words.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Else
                | TokenKind::If
                | TokenKind::Int
                | TokenKind::Return
                | TokenKind::Void
                | TokenKind::While
        )
    }

    /// Returns true for malformed-input tokens.
    pub fn is_error(self) -> bool {
        self == TokenKind::Error
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(self) -> bool {
        self == TokenKind::EndFile
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Maps an identifier to its reserved word, if it is one.
///
/// Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use cmc_lex::{reserved_word, TokenKind};
///
/// assert_eq!(reserved_word("while"), Some(TokenKind::While));
/// assert_eq!(reserved_word("While"), None);
/// ```
pub fn reserved_word(text: &str) -> Option<TokenKind> {
    match text {
        "else" => Some(TokenKind::Else),
        "if" => Some(TokenKind::If),
        "int" => Some(TokenKind::Int),
        "return" => Some(TokenKind::Return),
        "void" => Some(TokenKind::Void),
        "while" => Some(TokenKind::While),
        _ => None,
    }
}

/// A classified, line-tagged unit of source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Source text matched, or a fixed description for special tokens.
    pub lexeme: String,
    /// Line of the token's first character (1-based).
    pub line: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) at line {}", self.kind, self.lexeme, self.line)
    }
}
