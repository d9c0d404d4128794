//! Compile-time format rewriting through `format_string!`.

use std::ffi::{c_void, CStr, CString};

use pretty_assertions::assert_eq;
use printx::{format_string, Char};

macro_rules! check {
    ($($fmt:literal, $ty:ty => $expected:literal;)*) => {$(
        assert_eq!(
            format_string!($fmt, $ty).to_str(),
            Ok($expected),
            "{} with {}",
            $fmt,
            stringify!($ty),
        );
    )*};
}

#[test]
fn placeholder_deduces_the_specifier() {
    check! {
        "%?", bool => "%d";
        "%?", Char => "%c";
        "%?", i8 => "%hhd";
        "%?", u8 => "%hhu";
        "%?", i16 => "%hd";
        "%?", u16 => "%hu";
        "%?", i32 => "%d";
        "%?", u32 => "%u";
        "%?", i64 => "%lld";
        "%?", u64 => "%llu";
        "%?", isize => "%td";
        "%?", usize => "%zu";
        "%?", f32 => "%g";
        "%?", f64 => "%g";
        "%?", *const c_void => "%p";
        "%?", *mut i32 => "%p";
        "%?", &mut i32 => "%p";
        "%?", &CStr => "%s";
        "%?", CString => "%s";
        "%?", &str => "%.*s";
        "%?", String => "%.*s";
        "%?", &[u8] => "%.*s";
        "%?", Vec<u8> => "%.*s";
    }
}

#[test]
fn explicit_letters_keep_their_conversion() {
    check! {
        "%d", bool => "%d";
        "%c", Char => "%c";
        "%hhd", i8 => "%hhd";
        "%hhu", u8 => "%hhu";
        "%d", i32 => "%d";
        "%u", u32 => "%u";
        "%e", f32 => "%e";
        "%a", f64 => "%a";
        "%p", *const c_void => "%p";
        "%s", &CStr => "%s";
        "%s", &str => "%.*s";
        "%n", &mut i32 => "%n";
    }
}

#[test]
fn length_comes_from_the_argument_type() {
    check! {
        "%c", i8 => "%c";
        "%c", i16 => "%c";
        "%c", u32 => "%c";
        "%d", i8 => "%hhd";
        "%d", i16 => "%hd";
        "%d", i64 => "%lld";
        "%o", i8 => "%hho";
        "%o", u64 => "%llo";
        "%u", i16 => "%hu";
        "%u", i64 => "%llu";
        "%x", u8 => "%hhx";
        "%x", usize => "%zx";
        "%X", i64 => "%llX";
        "%X", u16 => "%hX";
        "%d", u64 => "%lld";
        "%i", isize => "%ti";
        "%ld", i32 => "%d";
        "%hhu", u64 => "%llu";
    }
}

#[test]
fn floating_point_letters() {
    check! {
        "%f", f32 => "%f";
        "%f", f64 => "%f";
        "%F", f64 => "%F";
        "%E", f32 => "%E";
        "%G", f64 => "%G";
        "%A", f32 => "%A";
        "%Lf", f64 => "%f";
    }
}

#[test]
fn c_strings_print_as_pointers() {
    check! {
        "%p", &CStr => "%p";
        "%p", CString => "%p";
        "%p", &mut i32 => "%p";
    }
}

#[test]
fn flags_width_and_precision_are_kept() {
    check! {
        "%03?", i32 => "%03d";
        "%.4?", i32 => "%.4d";
        "%-20?", u64 => "%-20llu";
        "%-20.4?", u64 => "%-20.4llu";
        "%+ #x", u32 => "%+ #x";
        "%10s", &str => "%10.*s";
    }
}

#[test]
fn templates_without_arguments() {
    assert_eq!(format_string!("no args"), c"no args");
    assert_eq!(format_string!("%% %%"), c"%% %%");
    assert_eq!(format_string!(""), c"");
}

#[test]
fn star_width_and_precision_take_int_like_arguments() {
    assert_eq!(format_string!("%*?", i32, &CStr), c"%*s");
    assert_eq!(format_string!("%.*?", i32, &CStr), c"%.*s");
    assert_eq!(format_string!("%*.*?", i32, i32, &CStr), c"%*.*s");
    assert_eq!(format_string!("%*.*?", bool, bool, &CStr), c"%*.*s");
    assert_eq!(format_string!("%*.*?", Char, Char, &CStr), c"%*.*s");
    assert_eq!(format_string!("%*.*?", i8, i8, &CStr), c"%*.*s");
    assert_eq!(format_string!("%*.*?", u8, u8, &CStr), c"%*.*s");
    assert_eq!(format_string!("%*.*?", i16, i16, &CStr), c"%*.*s");
    assert_eq!(format_string!("%*.*?", u16, u16, &CStr), c"%*.*s");
    assert_eq!(format_string!("%*.*?", u32, u32, &CStr), c"%*.*s");
}

#[test]
fn width_still_works_with_text_slices() {
    assert_eq!(format_string!("%*?", i32, &str), c"%*.*s");
}

#[test]
fn mixed_template() {
    assert_eq!(
        format_string!("a %? b %x c %% d %? e\n", f64, u64, &CStr),
        c"a %g b %llx c %% d %s e\n"
    );
}

#[test]
fn references_classify_like_values() {
    check! {
        "%?", &u8 => "%hhu";
        "%x", &i64 => "%llx";
        "%?", &f32 => "%g";
    }
}

const MIXED: &CStr = format_string!("%s=%5.2?\n", &CStr, f64);

const fn same_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(same_bytes(MIXED.to_bytes(), b"%s=%5.2g\n"));
const _: () = assert!(MIXED.count_bytes() == 9);
