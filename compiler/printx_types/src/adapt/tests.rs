use std::ffi::{c_int, CStr};

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn chars_forward_length_then_data() {
    let bytes = b"abc";
    let (len, (data, ())) = chars(bytes);
    assert_eq!(len, 3);
    assert_eq!(data, bytes.as_ptr().cast::<c_char>());
}

#[test]
fn oversized_lengths_saturate() {
    let max = usize::try_from(c_int::MAX).unwrap_or(usize::MAX);
    assert_eq!(precision(max), c_int::MAX);
    assert_eq!(precision(max + 1), c_int::MAX);
    assert_eq!(precision(usize::MAX), c_int::MAX);
    assert_eq!(precision(0), 0);
}

#[test]
fn text_forwards_pointer() {
    let text_value: &CStr = c"hi";
    assert_eq!(super::text(text_value), (text_value.as_ptr(), ()));
}
