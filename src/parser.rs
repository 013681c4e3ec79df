//! Module for parsing Lisp tokens into Value trees.

use std::io::{BufReader, Read};

use derivative::Derivative;
use log::debug;

use crate::atom;
use crate::error::Error;
use crate::token::{Position, Token, TokenKind, TokenStream};
use crate::value::{ConsList, Value};

const MAX_DEPTH: usize = 256;


/// Tunables for a Reader.
#[derive(Clone, Debug, Derivative)]
#[derivative(Default)]
pub struct ReaderOptions {
    /// Deepest nesting of lists and quote markers a single form may have.
    #[derivative(Default(value = "MAX_DEPTH"))]
    pub max_depth: usize,
}

/// Reads successive top-level forms from a byte input.
pub struct Reader<R: Read> {
    tokens: TokenStream<BufReader<R>>,
    options: ReaderOptions,
    failed: bool,
}

impl<R: Read> Reader<R> {
    pub fn new(input: R) -> Self {
        Self::with_options(input, ReaderOptions::default())
    }

    pub fn with_options(input: R, options: ReaderOptions) -> Self {
        Self {
            tokens: TokenStream::new(BufReader::new(input)),
            options,
            failed: false,
        }
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Current position in the input.
    pub fn input_position(&self) -> Position {
        self.tokens.position()
    }

    /// Next top-level form, or None at end of input.
    pub fn read(&mut self) -> Result<Option<Value>, Error> {
        let token = self.tokens.next_token()?;
        if *token.kind() == TokenKind::EndOfInput {
            debug!("End of input at {}", self.input_position());
            return Ok(None);
        }

        self.tokens.push_back(token);
        let value = self.read_expression(0)?;
        debug!("Read form: {}", value);
        Ok(Some(value))
    }

    fn read_expression(&mut self, depth: usize) -> Result<Value, Error> {
        let token = self.tokens.next_token()?;
        if depth > self.options.max_depth {
            return Err(Error::DepthOverflow {
                limit: self.options.max_depth,
                line: *token.line(),
                column: *token.column(),
            });
        }

        match token.kind() {
            TokenKind::LeftParen => self.read_list(depth),
            TokenKind::Quote => self.read_quoted("QUOTE", depth),
            TokenKind::Backquote => self.read_quoted("QUASIQUOTE", depth),
            TokenKind::Comma => self.read_quoted("UNQUOTE", depth),
            TokenKind::CommaAt => self.read_quoted("UNQUOTESPLICING", depth),
            TokenKind::String(s) => Ok(Value::String(s.clone())),
            TokenKind::Atom(text) => {
                atom::classify(text).map_err(|error| Error::NumericRange {
                    error,
                    line: *token.line(),
                    column: *token.column(),
                })
            }
            TokenKind::RightParen | TokenKind::Period => Err(unexpected(&token)),
            TokenKind::EndOfInput => Err(unexpected_eof(&token)),
        }
    }

    fn read_quoted(&mut self, name: &str, depth: usize) -> Result<Value, Error> {
        let quoted = self.read_expression(depth + 1)?;
        Ok(list!(Value::symbol(name), quoted))
    }

    // Elements are gathered in a loop so that list length costs no stack.
    fn read_list(&mut self, depth: usize) -> Result<Value, Error> {
        let mut list = ConsList::new();
        loop {
            let token = self.tokens.next_token()?;
            match token.kind() {
                TokenKind::RightParen => return Ok(list.release()),
                TokenKind::Period if !list.is_empty() => {
                    let tail = self.read_expression(depth + 1)?;
                    let close = self.tokens.next_token()?;
                    return match close.kind() {
                        TokenKind::RightParen => Ok(list.release_with_tail(tail)),
                        TokenKind::EndOfInput => Err(unexpected_eof(&close)),
                        _ => Err(unexpected(&close)),
                    };
                }
                _ => {
                    self.tokens.push_back(token);
                    let element = self.read_expression(depth + 1)?;
                    list.append(element);
                }
            }
        }
    }
}


impl<R: Read> Iterator for Reader<R> {
    type Item = Result<Value, Error>;

    /// Ends after end of input or after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read() {
            Ok(value) => value.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}


fn unexpected(token: &Token) -> Error {
    Error::UnexpectedToken {
        token: token.text().to_string(),
        line: *token.line(),
        column: *token.column(),
    }
}

fn unexpected_eof(token: &Token) -> Error {
    Error::UnexpectedEof {
        line: *token.line(),
        column: *token.column(),
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
