use std::convert::TryFrom;
use std::fmt;
use std::mem;

use super::value::{HeapValue, Value};


/// Two-slot node used to build lists and dotted pairs.
///
/// Both slots are always populated; the empty list is Value::Nil, never a
/// Cons.
pub struct Cons {
    car: HeapValue,
    cdr: HeapValue,
}

impl Cons {
    pub fn new<A: Into<Value>, D: Into<Value>>(car: A, cdr: D) -> Cons {
        Cons {
            car: Box::new(car.into()),
            cdr: Box::new(cdr.into()),
        }
    }

    pub fn car(&self) -> &Value {
        &self.car
    }

    pub fn cdr(&self) -> &Value {
        &self.cdr
    }

    pub fn car_mut(&mut self) -> &mut Value {
        &mut self.car
    }

    pub fn cdr_mut(&mut self) -> &mut Value {
        &mut self.cdr
    }

    pub fn set_car<T: Into<Value>>(&mut self, new: T) -> Value {
        mem::replace(&mut *self.car, new.into())
    }

    pub fn set_cdr<T: Into<Value>>(&mut self, new: T) -> Value {
        mem::replace(&mut *self.cdr, new.into())
    }

    pub fn into_parts(mut self) -> (Value, Value) {
        let car = mem::take(&mut *self.car);
        let cdr = mem::take(&mut *self.cdr);
        (car, cdr)
    }
}


impl fmt::Debug for Cons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}", self.car())?;
        for (val, from_cons) in self.cdr() {
            if from_cons {
                write!(f, " {:?}", val)?;
            } else {
                write!(f, " . {:?}", val)?;
            }
        }
        write!(f, ")")
    }
}


// Unlink the cdr chain one cell at a time; the default recursive drop would
// need stack proportional to list length.
impl Drop for Cons {
    fn drop(&mut self) {
        let mut next = mem::take(&mut *self.cdr);
        while let Value::Cell(mut cons) = next {
            next = mem::take(&mut *cons.cdr);
        }
    }
}

impl Clone for Cons {
    fn clone(&self) -> Self {
        let mut rest = Vec::new();
        let mut tail = self.cdr();
        while let Value::Cell(cons) = tail {
            rest.push(cons.car().clone());
            tail = cons.cdr();
        }

        let cdr = rest
            .into_iter()
            .rev()
            .fold(tail.clone(), |cdr, car| Value::cons(car, cdr));
        Cons::new(self.car().clone(), cdr)
    }
}

impl PartialEq for Cons {
    fn eq(&self, other: &Self) -> bool {
        let (mut this, mut that) = (self, other);
        loop {
            if this.car() != that.car() {
                return false;
            }
            match (this.cdr(), that.cdr()) {
                (Value::Cell(a), Value::Cell(b)) => {
                    this = a;
                    that = b;
                }
                (a, b) => return a == b,
            }
        }
    }
}


impl TryFrom<Value> for Cons {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Cell(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a Cons {
    type Error = &'a Value;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        if let Value::Cell(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
