//! Module for breaking Lisp text into tokens.

use std::io::BufRead;

use log::trace;

use super::char_source::CharSource;
use super::token::{Token, TokenKind};
use crate::error::Error;


/// Pull-driven tokenizer over a CharSource.
///
/// Yields tokens until a single EndOfInput token, or until the first error;
/// after either it yields nothing.
pub struct Scanner<R> {
    source: CharSource<R>,
    finished: bool,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(source: CharSource<R>) -> Self {
        Self {
            source,
            finished: false,
        }
    }

    pub fn source(&self) -> &CharSource<R> {
        &self.source
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn scan_token(&mut self) -> Result<Token, Error> {
        loop {
            let c = match self.source.read_char()? {
                Some(c) => c,
                None => return Ok(self.token_here(TokenKind::EndOfInput)),
            };
            if c.is_whitespace() {
                continue;
            }

            let kind = match c {
                ';' => {
                    self.skip_comment()?;
                    continue;
                }
                '(' => TokenKind::LeftParen,
                ')' => TokenKind::RightParen,
                '.' => TokenKind::Period,
                '`' => TokenKind::Backquote,
                '\'' => TokenKind::Quote,
                ',' => {
                    let token = self.token_here(TokenKind::Comma);
                    return self.scan_post_comma(token);
                }
                '"' => return self.scan_string(),
                _ => return self.scan_atom(c),
            };
            return Ok(self.token_here(kind));
        }
    }

    fn token_here(&self, kind: TokenKind) -> Token {
        let pos = self.source.position();
        Token::new(kind, pos.line, pos.column)
    }

    // Stops before the newline; it is whitespace to the next scan.
    fn skip_comment(&mut self) -> Result<(), Error> {
        while let Some(c) = self.source.read_char()? {
            if c == '\n' {
                self.source.unread_char(c);
                break;
            }
        }
        Ok(())
    }

    fn scan_post_comma(&mut self, comma: Token) -> Result<Token, Error> {
        match self.source.read_char()? {
            Some('@') => Ok(Token::new(TokenKind::CommaAt, *comma.line(), *comma.column())),
            Some(c) => {
                self.source.unread_char(c);
                Ok(comma)
            }
            None => Ok(comma),
        }
    }

    fn scan_string(&mut self) -> Result<Token, Error> {
        let start = self.source.position();
        let unterminated = || Error::UnterminatedString {
            line: start.line,
            column: start.column,
        };

        let mut s = String::new();
        loop {
            match self.source.read_char()? {
                None => return Err(unterminated()),
                Some('"') => break,
                Some('\\') => match self.source.read_char()? {
                    None => return Err(unterminated()),
                    Some(c) => s.push(unescape_char(c)),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(Token::new(TokenKind::String(s), start.line, start.column))
    }

    fn scan_atom(&mut self, first: char) -> Result<Token, Error> {
        let start = self.source.position();
        let mut text = first.to_string();
        while let Some(c) = self.source.read_char()? {
            if is_atom_delimiter(c) {
                self.source.unread_char(c);
                break;
            }
            text.push(c);
        }
        Ok(Token::new(TokenKind::Atom(text), start.line, start.column))
    }
}


impl<R: BufRead> Iterator for Scanner<R> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.scan_token();
        match &result {
            Ok(token) => {
                trace!("Scanned token: {}", token);
                if *token.kind() == TokenKind::EndOfInput {
                    self.finished = true;
                }
            }
            Err(_) => self.finished = true,
        }
        Some(result)
    }
}


/// Char denoted by `c` following a backslash in a string literal. Chars
/// without a special meaning stand for themselves.
fn unescape_char(c: char) -> char {
    match c {
        'a' => '\u{7}',
        'b' => '\u{8}',
        't' => '\t',
        'n' => '\n',
        'v' => '\u{b}',
        'f' => '\u{c}',
        'r' => '\r',
        _ => c,
    }
}

fn is_atom_delimiter(c: char) -> bool {
    matches!(c, ';' | '(' | ')' | ',' | '`' | '\'' | '"') || c.is_whitespace()
}


#[cfg(test)]
#[path = "./scanner_test.rs"]
mod scanner_test;
