//! Argument adapters.
//!
//! Helpers that turn a Rust value into the C values forwarded to printf.
//! Used by the built-in [`PrintfArg`](crate::PrintfArg) impls and by
//! `#[derive(PrintfArg)]`.

use std::ffi::{c_char, c_int, CStr};

/// Forwarded values of a `%s` argument.
pub type Text = (*const c_char, ());

/// Forwarded values of a `%.*s` argument: length, then data.
pub type Chars = (c_int, (*const c_char, ()));

/// Forward a NUL-terminated string.
#[inline]
pub fn text(text: &CStr) -> Text {
    (text.as_ptr(), ())
}

/// Forward a byte slice as length plus data.
///
/// printf takes the length as an `int`; longer slices are cut to
/// `c_int::MAX` bytes.
#[inline]
pub fn chars(bytes: &[u8]) -> Chars {
    (precision(bytes.len()), (bytes.as_ptr().cast::<c_char>(), ()))
}

/// `len` as a `.*` precision, saturating at `c_int::MAX`.
fn precision(len: usize) -> c_int {
    c_int::try_from(len).unwrap_or(c_int::MAX)
}

/// Borrowed character data printable with `%.*s`.
pub trait CharSequence {
    /// Forward as length plus data.
    fn forward_chars(self) -> Chars;
}

impl CharSequence for &str {
    fn forward_chars(self) -> Chars {
        chars(self.as_bytes())
    }
}

impl CharSequence for &[u8] {
    fn forward_chars(self) -> Chars {
        chars(self)
    }
}

impl CharSequence for &String {
    fn forward_chars(self) -> Chars {
        chars(self.as_bytes())
    }
}

impl CharSequence for &Vec<u8> {
    fn forward_chars(self) -> Chars {
        chars(self)
    }
}

#[cfg(test)]
mod tests;
