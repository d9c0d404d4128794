use pretty_assertions::assert_eq;

use super::*;

#[test]
fn walks_bytes_then_reports_eof() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), b'a');
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn never_moves_past_eof() {
    let mut cursor = Cursor::new("");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn nul_ends_input() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert!(cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
}
