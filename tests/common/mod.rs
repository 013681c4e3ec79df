use std::io::Read;

use lisp_reader::{Error, Reader, Value};


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::builder().is_test(true).try_init() {}
}

pub fn read_all<R: Read>(input: R) -> Result<Vec<Value>, Error> {
    setup();
    Reader::new(input).collect()
}

pub fn results<S: AsRef<str>>(s: S) -> Vec<Value> {
    read_all(s.as_ref().as_bytes()).unwrap()
}
