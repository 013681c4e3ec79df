//! Streaming reader from Lisp source text to S-exp Value trees.
//!
//! Reading is a pull pipeline: a CharSource decodes chars from the input, a
//! Scanner turns them into tokens on demand, and the Reader parses tokens
//! into one Value per top-level form.
//!
//! Note that this crate does *not* set up logging; clients should take care
//! of that. See: https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod value;

pub mod atom;
pub mod error;
pub mod parser;
pub mod token;

pub mod prelude {
    pub use crate::error::{Error, RangeError};
    pub use crate::parser::{Reader, ReaderOptions};
    pub use crate::value::{Cons, ConsList, HeapValue, Symbol, Value};
    // Macros.
    pub use crate::list;
}

pub use error::Error;
pub use parser::{Reader, ReaderOptions};
pub use value::Value;
