//! Module for constructing lists as Values in reading order without
//! recursing per element.
//!
//! Elements are buffered and folded into cons cells on release.

use super::value::Value;

#[derive(Debug, Default)]
pub struct ConsList {
    elements: Vec<Value>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn append<T: Into<Value>>(&mut self, val: T) {
        self.elements.push(val.into());
    }

    /// Proper list of the appended elements; Nil if nothing was appended.
    pub fn release(self) -> Value {
        self.release_with_tail(Value::Nil)
    }

    /// List of the appended elements ending in `tail` rather than Nil.
    pub fn release_with_tail(self, tail: Value) -> Value {
        self.elements
            .into_iter()
            .rev()
            .fold(tail, |cdr, car| Value::cons(car, cdr))
    }
}
