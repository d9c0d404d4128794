//! Type classification of Rust argument types.
//!
//! | Rust type | specifier | flags |
//! |---|---|---|
//! | `bool`, `i32` | `d` | promotes-to-int |
//! | [`Char`] | `c` | promotes-to-int |
//! | `i8` / `u8` | `hhd` / `hhu` | promotes-to-int |
//! | `i16` / `u16` | `hd` / `hu` | promotes-to-int |
//! | `u32` | `u` | promotes-to-int |
//! | `i64` / `u64` | `lld` / `llu` | |
//! | `isize` / `usize` | `td` / `zu` | |
//! | `f32`, `f64` | `g` | |
//! | raw pointers, `NonNull` | `p` | prints-as-pointer |
//! | `&mut i32` | `p` | prints-as-pointer, records-position |
//! | `&CStr`, `CString` | `s` | prints-as-pointer |
//! | `&str`, `String`, `&[u8]`, `Vec<u8>` | `.*s` | forbids-precision |
//!
//! Shared references to the scalar types classify like the value.
//! Text forwarded as `.*s` is cut to `c_int::MAX` bytes, the largest
//! precision printf accepts.

#![allow(
    unsafe_code,
    reason = "PrintfArg is an unsafe contract between descriptor and forwarded values"
)]

use std::ffi::{c_char, c_int, c_uint, c_void, CStr, CString};
use std::ptr::{self, NonNull};

use printx_ir::{SpecFlags, TypeDescriptor};

use crate::adapt::{self, Chars, Text};

/// A type that can be passed to a printx format call.
///
/// # Safety
///
/// `Forwarded` must be exactly the sequence of C values a printf
/// implementation reads for a conversion built from `DESCRIPTOR`: one value
/// of the promoted C type, or for `.*s` an `int` length followed by a
/// `char` pointer valid for that many bytes. Pointers in `Forwarded` must
/// stay valid for as long as `self` is alive and not moved.
#[diagnostic::on_unimplemented(
    message = "printx: `{Self}` has no printf conversion",
    label = "cannot be formatted",
    note = "`%n` needs `&mut i32`; user types register with `#[derive(PrintfArg)]`"
)]
pub unsafe trait PrintfArg {
    /// Canonical specifier and flags of the type.
    const DESCRIPTOR: TypeDescriptor;

    /// Cons list of forwarded C values, e.g. `(c_int, ())`.
    type Forwarded;

    /// Produce the forwarded values.
    fn forward(&mut self) -> Self::Forwarded;
}

/// A C `char`, printed with `%c`.
///
/// Rust's `char` is a Unicode scalar value and has no printf conversion.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Char(pub c_char);

impl From<u8> for Char {
    fn from(byte: u8) -> Self {
        Char(c_char::from_ne_bytes([byte]))
    }
}

unsafe impl PrintfArg for Char {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new("c", SpecFlags::PROMOTES_TO_INT);
    type Forwarded = (c_int, ());

    fn forward(&mut self) -> Self::Forwarded {
        (c_int::from(self.0), ())
    }
}

/// Types passed through C default argument promotion as `int`.
macro_rules! impl_promoted {
    ($($ty:ty => $spec:literal),* $(,)?) => {$(
        unsafe impl PrintfArg for $ty {
            const DESCRIPTOR: TypeDescriptor =
                TypeDescriptor::new($spec, SpecFlags::PROMOTES_TO_INT);
            type Forwarded = (c_int, ());

            fn forward(&mut self) -> Self::Forwarded {
                (c_int::from(*self), ())
            }
        }
    )*};
}

impl_promoted! {
    bool => "d",
    i8 => "hhd",
    u8 => "hhu",
    i16 => "hd",
    u16 => "hu",
    i32 => "d",
}

unsafe impl PrintfArg for u32 {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new("u", SpecFlags::PROMOTES_TO_INT);
    type Forwarded = (c_uint, ());

    fn forward(&mut self) -> Self::Forwarded {
        (*self, ())
    }
}

/// Types forwarded unchanged.
macro_rules! impl_passthrough {
    ($($ty:ty => $spec:literal),* $(,)?) => {$(
        unsafe impl PrintfArg for $ty {
            const DESCRIPTOR: TypeDescriptor = TypeDescriptor::plain($spec);
            type Forwarded = ($ty, ());

            fn forward(&mut self) -> Self::Forwarded {
                (*self, ())
            }
        }
    )*};
}

// `long long` is 64 bits on every platform; `long` is not
impl_passthrough! {
    i64 => "lld",
    u64 => "llu",
    isize => "td",
    usize => "zu",
    f64 => "g",
}

unsafe impl PrintfArg for f32 {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::plain("g");
    type Forwarded = (f64, ());

    fn forward(&mut self) -> Self::Forwarded {
        (f64::from(*self), ())
    }
}

// Pointers

unsafe impl<T: ?Sized> PrintfArg for *const T {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::POINTER;
    type Forwarded = (*const c_void, ());

    fn forward(&mut self) -> Self::Forwarded {
        (self.cast::<c_void>(), ())
    }
}

unsafe impl<T: ?Sized> PrintfArg for *mut T {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::POINTER;
    type Forwarded = (*mut c_void, ());

    fn forward(&mut self) -> Self::Forwarded {
        (self.cast::<c_void>(), ())
    }
}

unsafe impl<T: ?Sized> PrintfArg for NonNull<T> {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::POINTER;
    type Forwarded = (*mut c_void, ());

    fn forward(&mut self) -> Self::Forwarded {
        (self.as_ptr().cast::<c_void>(), ())
    }
}

/// The `%n` target: printf stores the number of bytes written so far.
unsafe impl PrintfArg for &mut i32 {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::POSITION;
    type Forwarded = (*mut c_int, ());

    fn forward(&mut self) -> Self::Forwarded {
        (ptr::from_mut(&mut **self), ())
    }
}

// NUL-terminated text

unsafe impl PrintfArg for &CStr {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::C_STRING;
    type Forwarded = Text;

    fn forward(&mut self) -> Self::Forwarded {
        adapt::text(self)
    }
}

unsafe impl PrintfArg for CString {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::C_STRING;
    type Forwarded = Text;

    fn forward(&mut self) -> Self::Forwarded {
        adapt::text(self)
    }
}

unsafe impl PrintfArg for &CString {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::C_STRING;
    type Forwarded = Text;

    fn forward(&mut self) -> Self::Forwarded {
        adapt::text(self)
    }
}

// Length-delimited text

macro_rules! impl_chars {
    ($($ty:ty => $bytes:expr),* $(,)?) => {$(
        unsafe impl PrintfArg for $ty {
            const DESCRIPTOR: TypeDescriptor = TypeDescriptor::CHAR_SEQUENCE;
            type Forwarded = Chars;

            fn forward(&mut self) -> Self::Forwarded {
                adapt::chars($bytes(self))
            }
        }
    )*};
}

impl_chars! {
    &str => str::as_bytes,
    String => String::as_bytes,
    &String => String::as_bytes,
    &[u8] => std::convert::identity::<&[u8]>,
    Vec<u8> => Vec::as_slice,
    &Vec<u8> => Vec::as_slice,
}

unsafe impl<const N: usize> PrintfArg for &[u8; N] {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::CHAR_SEQUENCE;
    type Forwarded = Chars;

    fn forward(&mut self) -> Self::Forwarded {
        adapt::chars(self.as_slice())
    }
}

/// Shared references to plain values classify like the value.
macro_rules! impl_by_ref {
    ($($ty:ty),* $(,)?) => {$(
        unsafe impl PrintfArg for &$ty {
            const DESCRIPTOR: TypeDescriptor = <$ty as PrintfArg>::DESCRIPTOR;
            type Forwarded = <$ty as PrintfArg>::Forwarded;

            fn forward(&mut self) -> Self::Forwarded {
                let mut value = **self;
                value.forward()
            }
        }
    )*};
}

impl_by_ref!(bool, Char, i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64);
