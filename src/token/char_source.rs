//! Character supplier over a byte input, with position bookkeeping.

use std::fmt;
use std::io::{self, BufRead};

use log::warn;


/// Line (1-based) and column (characters read on the line so far).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Decodes UTF-8 from `input` one char at a time, with a single-char
/// push-back slot.
pub struct CharSource<R> {
    input: R,
    saved: Option<char>,

    line: usize,
    column: usize,
    // Column the previous line ended at, so unreading a newline can
    // restore it.
    last_line_column: usize,
}

impl<R: BufRead> CharSource<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            saved: None,
            line: 1,
            column: 0,
            last_line_column: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Next char, or None at end of input.
    pub fn read_char(&mut self) -> io::Result<Option<char>> {
        let c = match self.saved.take() {
            Some(c) => c,
            None => match self.decode()? {
                Some(c) => c,
                None => return Ok(None),
            },
        };

        if c == '\n' {
            self.last_line_column = self.column;
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Ok(Some(c))
    }

    /// Push back the char last read. Only one char may be pushed back between
    /// reads.
    pub fn unread_char(&mut self, c: char) {
        debug_assert!(self.saved.is_none(), "char push-back slot already full");
        self.saved = Some(c);
        if c == '\n' {
            self.line -= 1;
            self.column = self.last_line_column;
        } else {
            self.column = self.column.saturating_sub(1);
        }
    }

    fn decode(&mut self) -> io::Result<Option<char>> {
        let lead = match self.next_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let width = match lead {
            0x00..=0x7F => return Ok(Some(lead as char)),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Ok(Some(self.replacement(&[lead]))),
        };

        let mut bytes = [lead, 0, 0, 0];
        for i in 1..width {
            match self.peek_byte()? {
                Some(b) if b & 0xC0 == 0x80 => {
                    self.input.consume(1);
                    bytes[i] = b;
                }
                // Leave the offending byte to start the next char.
                _ => return Ok(Some(self.replacement(&bytes[..i]))),
            }
        }

        match std::str::from_utf8(&bytes[..width]) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Ok(Some(self.replacement(&bytes[..width]))),
        }
    }

    fn replacement(&self, bytes: &[u8]) -> char {
        warn!(
            "{}: invalid UTF-8 sequence {:x?}; substituting U+FFFD",
            self.position(),
            bytes
        );
        char::REPLACEMENT_CHARACTER
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.input.consume(1);
        }
        Ok(byte)
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.input.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}


impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}


#[cfg(test)]
#[path = "./char_source_test.rs"]
mod char_source_test;
