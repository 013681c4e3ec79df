//! Errors produced while reading.
//!
//! Every error is fatal to the read that produced it. A Reader that returned
//! an error should not be read from again.

use std::fmt;

use crate::value::Value;


#[derive(Debug)]
pub enum Error {
    /// Token appears where the grammar forbids it: a stray `)` or `.`, or
    /// anything but `)` after a dotted cdr.
    UnexpectedToken {
        token: String,
        line: usize,
        column: usize,
    },
    /// Input ended inside a list or after a quote marker.
    UnexpectedEof { line: usize, column: usize },
    /// String literal not closed before end of input; position of the
    /// opening quote.
    UnterminatedString { line: usize, column: usize },
    /// Numerically shaped atom outside the representable range.
    NumericRange {
        error: RangeError,
        line: usize,
        column: usize,
    },
    /// Lists or quotes nested deeper than the reader allows.
    DepthOverflow {
        limit: usize,
        line: usize,
        column: usize,
    },
    Io(std::io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericTarget {
    Integer,
    Float,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RangeError {
    pub text: String,
    pub target: NumericTarget,
}


impl Error {
    /// Name an evaluator can use to identify the kind of read error.
    pub fn name(&self) -> &'static str {
        match self {
            Error::UnexpectedToken { .. } => "UNEXPECTED-TOKEN",
            Error::UnexpectedEof { .. } => "UNEXPECTED-EOF",
            Error::UnterminatedString { .. } => "UNTERMINATED-STRING",
            Error::NumericRange { .. } => "NUMERIC-RANGE",
            Error::DepthOverflow { .. } => "DEPTH-OVERFLOW",
            Error::Io(_) => "IO-ERROR",
        }
    }

    /// (line, column) the error was detected at, if it came from the input
    /// text rather than the input source.
    pub fn position(&self) -> Option<(usize, usize)> {
        match *self {
            Error::UnexpectedToken { line, column, .. }
            | Error::UnexpectedEof { line, column }
            | Error::UnterminatedString { line, column }
            | Error::NumericRange { line, column, .. }
            | Error::DepthOverflow { line, column, .. } => Some((line, column)),
            Error::Io(_) => None,
        }
    }

    /// Represent the error as data: `(NAME "message")`.
    pub fn reify(&self) -> Value {
        list!(Value::symbol(self.name()), self.to_string())
    }
}


impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnexpectedToken {
                token,
                line,
                column,
            } => write!(f, "{}:{}: unexpected token {:?}", line, column, token),
            Error::UnexpectedEof { line, column } => {
                write!(f, "{}:{}: unexpected end of input", line, column)
            }
            Error::UnterminatedString { line, column } => {
                write!(f, "{}:{}: unterminated string literal", line, column)
            }
            Error::NumericRange {
                error,
                line,
                column,
            } => write!(f, "{}:{}: {}", line, column, error),
            Error::DepthOverflow {
                limit,
                line,
                column,
            } => write!(f, "{}:{}: nesting deeper than {}", line, column, limit),
            Error::Io(err) => write!(f, "read failed: {}", err),
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match self.target {
            NumericTarget::Integer => "64-bit integer",
            NumericTarget::Float => "double-precision float",
        };
        write!(f, "{:?} out of range for {}", self.text, target)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::NumericRange { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl std::error::Error for RangeError {}

/// Allow for io::Errors to be used seamlessly with reader Errors.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
