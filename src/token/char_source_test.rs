use super::*;

use std::io::{self, Read};


fn source(s: &str) -> CharSource<&[u8]> {
    CharSource::new(s.as_bytes())
}

fn read_all<R: BufRead>(source: &mut CharSource<R>) -> String {
    let mut out = String::new();
    while let Some(c) = source.read_char().unwrap() {
        out.push(c);
    }
    out
}

#[test]
fn positions() {
    let mut src = source("ab\nc");
    assert_eq!(src.position(), Position { line: 1, column: 0 });

    assert_eq!(src.read_char().unwrap(), Some('a'));
    assert_eq!(src.position(), Position { line: 1, column: 1 });
    assert_eq!(src.read_char().unwrap(), Some('b'));
    assert_eq!(src.read_char().unwrap(), Some('\n'));
    assert_eq!(src.position(), Position { line: 2, column: 0 });
    assert_eq!(src.read_char().unwrap(), Some('c'));
    assert_eq!(src.position(), Position { line: 2, column: 1 });

    assert_eq!(src.read_char().unwrap(), None);
    assert_eq!(src.position(), Position { line: 2, column: 1 });
}

#[test]
fn unread_restores_position() {
    let mut src = source("xy");
    src.read_char().unwrap();
    let c = src.read_char().unwrap().unwrap();
    src.unread_char(c);
    assert_eq!(src.position(), Position { line: 1, column: 1 });
    assert_eq!(src.read_char().unwrap(), Some('y'));
    assert_eq!(src.position(), Position { line: 1, column: 2 });
}

#[test]
fn unread_across_newline() {
    let mut src = source("abc\nd");
    for _ in 0..3 {
        src.read_char().unwrap();
    }
    let newline = src.read_char().unwrap().unwrap();
    assert_eq!(src.position(), Position { line: 2, column: 0 });

    src.unread_char(newline);
    assert_eq!(src.position(), Position { line: 1, column: 3 });
    assert_eq!(src.read_char().unwrap(), Some('\n'));
    assert_eq!(src.position(), Position { line: 2, column: 0 });
    assert_eq!(src.read_char().unwrap(), Some('d'));
}

#[test]
fn multibyte() {
    let mut src = source("λ→😀x");
    assert_eq!(read_all(&mut src), "λ→😀x");
    assert_eq!(src.position(), Position { line: 1, column: 4 });
}

#[test]
fn invalid_utf8_replaced() {
    // Stray continuation byte, then a truncated 3-byte sequence before 'a'.
    let bytes: &[u8] = &[b'(', 0x80, 0xE2, 0x86, b'a', b')'];
    let mut src = CharSource::new(bytes);
    assert_eq!(read_all(&mut src), "(\u{FFFD}\u{FFFD}a)");
}

#[test]
fn split_across_buffer_refills() {
    // A one-byte buffer forces every multibyte char across refills.
    let input = "é😀".as_bytes();
    let mut src = CharSource::new(io::BufReader::with_capacity(1, input));
    assert_eq!(read_all(&mut src), "é😀");
}

struct FailingRead;

impl Read for FailingRead {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "boom"))
    }
}

#[test]
fn io_error_propagates() {
    let mut src = CharSource::new(io::BufReader::new(FailingRead));
    let err = src.read_char().unwrap_err();
    assert_eq!(err.to_string(), "boom");
}
