use std::io::BufRead;

use super::char_source::{CharSource, Position};
use super::scanner::Scanner;
use super::token::{Token, TokenKind};
use crate::error::Error;


/// Token source with one token of lookahead for the parser.
pub struct TokenStream<R> {
    scanner: Scanner<R>,
    saved: Option<Token>,
}

impl<R: BufRead> TokenStream<R> {
    pub fn new(input: R) -> Self {
        Self {
            scanner: Scanner::new(CharSource::new(input)),
            saved: None,
        }
    }

    /// Pushed-back token if there is one, else the next scanned token.
    ///
    /// Once the scanner has stopped, keeps answering EndOfInput at the last
    /// position.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Some(token) = self.saved.take() {
            return Ok(token);
        }
        match self.scanner.next() {
            Some(result) => result,
            None => {
                let pos = self.position();
                Ok(Token::new(TokenKind::EndOfInput, pos.line, pos.column))
            }
        }
    }

    /// Only one token may be pushed back between calls to next_token.
    pub fn push_back(&mut self, token: Token) {
        debug_assert!(self.saved.is_none(), "token push-back slot already full");
        self.saved = Some(token);
    }

    pub fn position(&self) -> Position {
        self.scanner.source().position()
    }
}
