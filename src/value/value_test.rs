use super::*;

use std::convert::TryFrom;


#[test]
fn vec_into_value() {
    let expected = Value::cons(
        Value::symbol("TEST"),
        Value::cons(Value::symbol("ING"), Value::Nil),
    );
    let v = vec![Value::symbol("TEST"), Value::symbol("ING")];
    assert_eq!(Value::from(v), expected);
    assert_eq!(list!(Symbol::new("TEST"), Symbol::new("ING")), expected);
    assert_eq!(list!(), Value::Nil);
}

#[test]
fn non_cons() {
    let v = Value::cons(
        1i64,
        Value::cons(2i64, Value::cons(3i64, 4i64)),
    );
    let mut iter = v.iter();
    assert_eq!(iter.next().unwrap(), (&Value::Integer(1), true));
    assert_eq!(iter.next().unwrap(), (&Value::Integer(2), true));
    assert_eq!(iter.next().unwrap(), (&Value::Integer(3), true));
    assert_eq!(iter.next().unwrap(), (&Value::Integer(4), false));
    assert!(iter.next().is_none());
    assert!(!v.is_proper_list());
}

#[test]
fn iter_atoms_and_nil() {
    assert!(Value::Nil.iter().next().is_none());
    assert!(Value::Nil.is_proper_list());

    let atom = Value::string("x");
    let items: Vec<_> = atom.iter().collect();
    assert_eq!(items, vec![(&atom, false)]);
}

#[test]
fn display() {
    assert_eq!(Value::Nil.to_string(), "()");
    assert_eq!(
        list!(Value::symbol("+"), 1i64, 2i64).to_string(),
        "(+ 1 2)"
    );
    assert_eq!(Value::cons(1i64, 2i64).to_string(), "(1 . 2)");
    assert_eq!(
        list!(Value::Nil, list!(1.5, 2.0), "s").to_string(),
        "(() (1.5 2.0) \"s\")"
    );
    assert_eq!(
        Value::string("a\"b\\c\n\u{7}").to_string(),
        r#""a\"b\\c\n\a""#
    );
    assert_eq!(format!("{:?}", Value::symbol("X")), "X");
}

#[test]
fn cons_debug() {
    let pair = Cons::new(1i64, 2i64);
    assert_eq!(format!("{:?}", pair), "(1 . 2)");

    let list = Cons::try_from(list!(Value::symbol("A"), list!("b"), 3i64)).unwrap();
    assert_eq!(format!("{:?}", list), "(A (\"b\") 3)");

    let single = Cons::new(Value::symbol("A"), Value::Nil);
    assert_eq!(format!("{:?}", single), "(A)");
}

#[test]
fn from_str() {
    let v: Value = "(a . (b c))".parse().unwrap();
    assert_eq!(v, list!(Value::symbol("A"), Value::symbol("B"), Value::symbol("C")));
    let v: Value = "".parse().unwrap();
    assert_eq!(v, Value::Nil);
    assert!("(".parse::<Value>().is_err());
}

#[test]
fn accessors() {
    let mut v = Value::cons(Value::symbol("CAR"), Value::string("cdr"));
    {
        let cons = v.as_cons().unwrap();
        assert_eq!(cons.car().as_symbol().unwrap().name(), "CAR");
        assert_eq!(cons.cdr().as_str(), Some("cdr"));
    }
    if let Value::Cell(cons) = &mut v {
        let old = cons.set_cdr(7i64);
        assert_eq!(old, Value::string("cdr"));
    }
    assert_eq!(v.as_cons().unwrap().cdr().as_integer(), Some(7));
    assert_eq!(Value::Float(0.5).as_float(), Some(0.5));
    assert!(Value::Integer(1).as_float().is_none());

    let cons = Cons::try_from(v).unwrap();
    let (car, cdr) = cons.into_parts();
    assert_eq!(car, Value::symbol("CAR"));
    assert_eq!(cdr, Value::Integer(7));
}

#[test]
fn symbol_slots() {
    let mut symbol = Symbol::new("F");
    assert!(symbol.value().is_none());
    assert!(symbol.function().is_none());
    assert_eq!(symbol.set_value(Some(Value::Integer(1))), None);
    assert_eq!(symbol.value(), Some(&Value::Integer(1)));
    assert_eq!(
        symbol.set_value(None),
        Some(Value::Integer(1))
    );
    symbol.set_function(Some(list!(Value::symbol("LAMBDA"))));
    assert_ne!(symbol, Symbol::new("F"));
}

#[test]
fn long_list() {
    const LEN: i64 = 200_000;
    let mut list = ConsList::new();
    for i in 0..LEN {
        list.append(i);
    }
    let v = list.release();
    assert_eq!(v.iter().count(), LEN as usize);

    let copy = v.clone();
    assert_eq!(v, copy);
    assert!(v.to_string().ends_with("199999)"));
    drop(v);
    drop(copy);
}

#[test]
fn release_with_tail() {
    let mut list = ConsList::new();
    assert_eq!(ConsList::new().release_with_tail(Value::Integer(1)), Value::Integer(1));
    list.append(1i64);
    list.append(2i64);
    assert_eq!(list.len(), 2);
    assert_eq!(
        list.release_with_tail(Value::Integer(3)),
        Value::cons(1i64, Value::cons(2i64, 3i64))
    );
}
