use pretty_assertions::assert_eq;

use super::*;

#[test]
fn counting_sink_counts() {
    let mut sink = Sink::counting();
    assert!(sink.is_empty());
    sink.push(b'%');
    sink.extend(b"llu");
    assert_eq!(sink.len(), 4);
}

#[test]
fn writing_sink_stores() {
    let mut buf = [0u8; 4];
    let mut sink = Sink::writing(&mut buf);
    sink.extend(b"%lx");
    assert_eq!(sink.len(), 3);
    assert_eq!(&buf, b"%lx\0");
}

#[test]
fn writing_sink_drops_overflow_but_counts_it() {
    let mut buf = [0u8; 2];
    let mut sink = Sink::writing(&mut buf);
    sink.extend(b"abcd");
    assert_eq!(sink.len(), 4);
    assert_eq!(&buf, b"ab");
}

const fn counted(bytes: &[u8]) -> usize {
    let mut sink = Sink::counting();
    sink.extend(bytes);
    sink.len()
}

const _: () = assert!(counted(b"%hhd") == 4);
