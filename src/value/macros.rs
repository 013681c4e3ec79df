/// Builds a proper list Value from anything convertible into a Value.
///
/// `list!()` is Nil.
#[macro_export]
macro_rules! list {
    ($($elem:expr),* $(,)?) => {{
        let elems: ::std::vec::Vec<$crate::value::Value> =
            vec![$($crate::value::Value::from($elem)),*];
        $crate::value::Value::from(elems)
    }};
}
