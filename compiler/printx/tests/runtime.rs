//! Formatting through the C library.

#![allow(unsafe_code, reason = "exercises the raw-buffer and stream macros")]
#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::ffi::{c_char, c_int};

use pretty_assertions::{assert_eq, assert_ne};
use printx::{sprintf, Char};

const BUFFER_SIZE: usize = 1024;

fn text(buf: &[u8], written: c_int) -> &str {
    let len = usize::try_from(written).unwrap();
    std::str::from_utf8(&buf[..len]).unwrap()
}

macro_rules! check_cmp {
    ($($value:expr, $fmt:literal => $output:literal;)*) => {$(
        let mut buf = [0u8; BUFFER_SIZE];
        let written = sprintf!(&mut buf, $fmt, $value);
        assert_eq!(text(&buf, written), $output, "{} with {}", $fmt, stringify!($value));
    )*};
}

macro_rules! check_neq {
    ($($value:expr, $fmt:literal => $output:literal;)*) => {$(
        let mut buf = [0u8; BUFFER_SIZE];
        let written = sprintf!(&mut buf, $fmt, $value);
        assert_ne!(text(&buf, written), $output, "{} with {}", $fmt, stringify!($value));
    )*};
}

#[test]
fn position_matches_size() {
    let mut buf = vec![0u8; BUFFER_SIZE];
    let mut pos = 0;
    let size = sprintf!(&mut buf, "Size and pos should be equal.%n", &mut pos);
    assert_eq!(size, pos);
    assert_eq!(buf[usize::try_from(size).unwrap()], 0);
}

#[test]
fn small_integers_are_promoted() {
    let mut buf = [0u8; BUFFER_SIZE];
    let written = sprintf!(&mut buf, "%d %? %d %?", 3u8, -2000i16, 3i32, true);
    assert_eq!(text(&buf, written), "3 -2000 3 1");
}

#[test]
fn strings() {
    check_cmp! {
        "Just a string", "%?" => "Just a string";
        String::from("Just a string"), "%?" => "Just a string";
        c"Just a string", "%?" => "Just a string";
        "Just a string", "%s" => "Just a string";
        String::from("Just a string"), "%s" => "Just a string";
        c"Just a string", "%s" => "Just a string";
        b"bytes".as_slice(), "%?" => "bytes";
        &b"array"[..3], "%s" => "arr";
    }
}

#[test]
fn int_conversions() {
    check_cmp! {
        1_234_567, "%?" => "1234567";
        1_234_567, "%d" => "1234567";
        1_234_567, "%i" => "1234567";
        1_234_567, "%u" => "1234567";
        -1_234_567, "%?" => "-1234567";
        -1_234_567, "%d" => "-1234567";
        -1_234_567, "%i" => "-1234567";
    }
    check_neq! {
        -1_234_567, "%u" => "-1234567";
    }
}

#[test]
fn sixty_four_bit_extremes() {
    check_cmp! {
        i64::MAX, "%?" => "9223372036854775807";
        i64::MAX, "%d" => "9223372036854775807";
        i64::MAX, "%i" => "9223372036854775807";
        i64::MAX, "%u" => "9223372036854775807";
        i64::MAX, "%o" => "777777777777777777777";
        i64::MAX, "%x" => "7fffffffffffffff";
        i64::MAX, "%X" => "7FFFFFFFFFFFFFFF";
        i64::MIN, "%?" => "-9223372036854775808";
        i64::MIN, "%d" => "-9223372036854775808";
        i64::MIN, "%i" => "-9223372036854775808";
        u64::MAX, "%?" => "18446744073709551615";
        u64::MAX, "%u" => "18446744073709551615";
        u64::MAX, "%o" => "1777777777777777777777";
        u64::MAX, "%x" => "ffffffffffffffff";
        u64::MAX, "%X" => "FFFFFFFFFFFFFFFF";
    }
    check_neq! {
        i64::MIN, "%u" => "-9223372036854775808";
        u64::MAX, "%d" => "18446744073709551615";
        u64::MAX, "%i" => "18446744073709551615";
    }
}

#[test]
fn characters() {
    check_cmp! {
        Char::from(b'a'), "%c" => "a";
        Char::from(b'a'), "%?" => "a";
        b'a', "%c" => "a";
    }
}

#[test]
fn width_and_precision() {
    check_cmp! {
        c"right", "%10?" => "     right";
        c"left", "%-10?" => "left      ";
        c"right", "%10.2?" => "        ri";
        c"left", "%-10.2?" => "le        ";
        c"right", "%10s" => "     right";
        c"left", "%-10s" => "left      ";
        c"right", "%10.2s" => "        ri";
        c"left", "%-10.2s" => "le        ";
        "right", "%10?" => "     right";
        "left", "%-10s" => "left      ";
        42, "%05?" => "00042";
        1.5, "%.3f" => "1.500";
        1.5, "%.3?" => "1.5";
    }
}

#[test]
fn star_width_consumes_an_argument() {
    let mut buf = [0u8; BUFFER_SIZE];
    let written = sprintf!(&mut buf, "[%*?]", 6, "ab");
    assert_eq!(text(&buf, written), "[    ab]");
    let written = sprintf!(&mut buf, "[%-*.*?]", 6, 2, 1.23456);
    assert_eq!(text(&buf, written), "[1.2   ]");
}

#[test]
fn mixed_template() {
    let mut buf = [0u8; BUFFER_SIZE];
    let written = sprintf!(&mut buf, "a %? b %x c %% d %? e\n", 1.5, 255u64, c"text");
    assert_eq!(text(&buf, written), "a 1.5 b ff c % d text e\n");
}

#[test]
fn output_is_truncated_to_the_buffer() {
    let mut buf = [0xffu8; 6];
    let written = sprintf!(&mut buf, "%? items", 12_345u32);
    assert_eq!(written, 11);
    assert_eq!(&buf, b"12345\0");

    let written = sprintf!(&mut [0u8; 0], "%?", 7);
    assert_eq!(written, 1);
}

#[test]
fn repeated_calls_reuse_the_format() {
    let mut buf = [0u8; BUFFER_SIZE];
    for i in 0..3_u16 {
        let written = sprintf!(&mut buf, "#%?", i);
        assert_eq!(text(&buf, written), format!("#{i}"));
    }
}

#[test]
fn raw_buffer() {
    let mut buf = [0u8; 16];
    // SAFETY: `buf` is valid for 16 bytes.
    let written = unsafe {
        printx::snprintf!(buf.as_mut_ptr().cast::<c_char>(), buf.len(), "%?-%?", 1u8, 2u64)
    };
    assert_eq!(text(&buf, written), "1-2");
}

#[test]
fn stream_output() {
    // SAFETY: the stream comes from `tmpfile` and is closed at the end.
    unsafe {
        let file = libc::tmpfile();
        assert!(!file.is_null());
        let written = printx::fprintf!(file, "%? and %?", 12u16, "text");
        assert_eq!(written, 11);
        libc::rewind(file);
        let mut buf = [0u8; 32];
        let read = libc::fread(buf.as_mut_ptr().cast(), 1, buf.len(), file);
        libc::fclose(file);
        assert_eq!(&buf[..read], b"12 and text");
    }
}

#[test]
fn standard_output() {
    let written = printx::printf!("%s %?\n", c"printx", 1u8);
    assert_eq!(written, 9);
}

#[test]
fn max_args_of_text_slices() {
    let mut buf = [0u8; BUFFER_SIZE];
    let words = ["ab"; 32];
    let written = sprintf!(
        &mut buf,
        "%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?%?",
        words[0], words[1], words[2], words[3], words[4], words[5], words[6], words[7],
        words[8], words[9], words[10], words[11], words[12], words[13], words[14], words[15],
        words[16], words[17], words[18], words[19], words[20], words[21], words[22], words[23],
        words[24], words[25], words[26], words[27], words[28], words[29], words[30], words[31],
    );
    assert_eq!(text(&buf, written), "ab".repeat(32));
}
