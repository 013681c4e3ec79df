//! Module for representing read S-exps.

use std::fmt;
use std::str::FromStr;

use super::cons::Cons;
use super::cons_list::ConsList;
use super::symbol::Symbol;
use crate::error::Error;
use crate::parser::Reader;


/// Value on the heap. Cons cells own their car and cdr through this.
pub type HeapValue = Box<Value>;

#[derive(Clone, PartialEq)]
pub enum Value {
    Nil,
    Cell(Cons),
    Symbol(Symbol),
    String(String),
    Integer(i64),
    Float(f64),
}

pub struct ValueIter<'a> {
    current: Option<&'a Value>,
}

impl Value {
    pub fn cons<A: Into<Value>, D: Into<Value>>(car: A, cdr: D) -> Value {
        Value::Cell(Cons::new(car, cdr))
    }

    pub fn symbol<S: AsRef<str>>(name: S) -> Value {
        Value::Symbol(Symbol::new(name))
    }

    pub fn string<S: AsRef<str>>(s: S) -> Value {
        Value::String(s.as_ref().to_string())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_cons(&self) -> Option<&Cons> {
        match self {
            Value::Cell(cons) => Some(cons),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Whether this is Nil or a chain of cells ending in Nil.
    pub fn is_proper_list(&self) -> bool {
        let mut current = self;
        while let Value::Cell(cons) = current {
            current = cons.cdr();
        }
        current.is_nil()
    }

    pub fn iter(&self) -> ValueIter<'_> {
        ValueIter {
            current: Some(self),
        }
    }

    fn write_list(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pos: usize = 0;
        for (val, from_cons) in self.iter() {
            if pos == 0 {
                if !from_cons {
                    return val.write_atom(f);
                }
                write!(f, "(")?;
            } else if from_cons {
                write!(f, " ")?;
            } else {
                write!(f, " . ")?;
            }
            val.write_list(f)?;
            pos += 1;
        }

        if pos == 0 {
            write!(f, "()")
        } else {
            write!(f, ")")
        }
    }

    fn write_atom(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "()"),
            Value::Cell(_) => self.write_list(f),
            Value::Symbol(symbol) => write!(f, "{}", symbol),
            Value::String(s) => {
                write!(f, "\"")?;
                for c in s.chars() {
                    match c {
                        '\u{7}' => write!(f, "\\a")?,
                        '\u{8}' => write!(f, "\\b")?,
                        '\t' => write!(f, "\\t")?,
                        '\n' => write!(f, "\\n")?,
                        '\u{b}' => write!(f, "\\v")?,
                        '\u{c}' => write!(f, "\\f")?,
                        '\r' => write!(f, "\\r")?,
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        _ => write!(f, "{}", c)?,
                    }
                }
                write!(f, "\"")
            }
            Value::Integer(i) => write!(f, "{}", i),
            // Debug keeps a decimal point on integral floats, so they read
            // back as floats.
            Value::Float(x) => write!(f, "{:?}", x),
        }
    }
}


impl<'a> Iterator for ValueIter<'a> {
    // (Value, from_cons).
    //
    // If from_cons is false, the Value is not the car of a Cons: either a
    // top-level atom or the non-Nil tail of an improper list. Either way it
    // is necessarily the last element.
    type Item = (&'a Value, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current.take()?;
        match value {
            Value::Nil => None,
            Value::Cell(cons) => {
                self.current = Some(cons.cdr());
                Some((cons.car(), true))
            }
            _ => Some((value, false)),
        }
    }
}

impl<'a> IntoIterator for &'a Value {
    // (Value, from_cons). See impl Iterator above for more info.
    type Item = (&'a Value, bool);
    type IntoIter = ValueIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Nil
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_list(f)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}


impl FromStr for Value {
    type Err = Error;

    /// Reads the first form in `s`. Input with no forms reads as Nil.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = Reader::new(s.as_bytes());
        Ok(reader.read()?.unwrap_or_default())
    }
}

impl From<Vec<Value>> for Value {
    fn from(vec: Vec<Value>) -> Self {
        let mut list = ConsList::new();
        for value in vec {
            list.append(value);
        }
        list.release()
    }
}

impl From<Cons> for Value {
    fn from(cons: Cons) -> Self {
        Value::Cell(cons)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<HeapValue> for Value {
    fn from(value: HeapValue) -> Self {
        *value
    }
}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
