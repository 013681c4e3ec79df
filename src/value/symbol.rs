use std::convert::TryFrom;
use std::fmt;

use super::value::{HeapValue, Value};


/// Named atom carrying the value and function slots an evaluator binds.
///
/// The reader builds a fresh Symbol for every occurrence it reads; symbols
/// with equal names compare equal but are never shared.
#[derive(Clone, Debug, PartialEq)]
pub struct Symbol {
    name: String,
    value: Option<HeapValue>,
    function: Option<HeapValue>,
}

impl Symbol {
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self {
            name: name.as_ref().to_string(),
            value: None,
            function: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_deref()
    }

    pub fn function(&self) -> Option<&Value> {
        self.function.as_deref()
    }

    pub fn set_value(&mut self, new: Option<Value>) -> Option<Value> {
        std::mem::replace(&mut self.value, new.map(Box::new)).map(|old| *old)
    }

    pub fn set_function(&mut self, new: Option<Value>) -> Option<Value> {
        std::mem::replace(&mut self.function, new.map(Box::new)).map(|old| *old)
    }
}


impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl TryFrom<Value> for Symbol {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Symbol(symbol) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a Symbol {
    type Error = &'a Value;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        if let Value::Symbol(symbol) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}
