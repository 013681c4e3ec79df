use std::fmt;

use derive_getters::Getters;


#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Period,
    Quote,
    Backquote,
    Comma,
    CommaAt,
    /// String literal with escapes already decoded.
    String(String),
    /// Raw atom text, not yet classified.
    Atom(String),
    EndOfInput,
}

/// A token and the position its first character was read at.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Token {
    kind: TokenKind,
    line: usize,
    column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Source-like text of the token, as used in diagnostics.
    pub fn text(&self) -> &str {
        match &self.kind {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Period => ".",
            TokenKind::Quote => "'",
            TokenKind::Backquote => "`",
            TokenKind::Comma => ",",
            TokenKind::CommaAt => ",@",
            TokenKind::String(s) | TokenKind::Atom(s) => s.as_str(),
            TokenKind::EndOfInput => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::String(s) => write!(f, "{:?} @ ({}, {})", s, self.line, self.column),
            TokenKind::EndOfInput => write!(f, "EOF @ ({}, {})", self.line, self.column),
            _ => write!(f, "{} @ ({}, {})", self.text(), self.line, self.column),
        }
    }
}
