//! Calls into the C variadic functions.
//!
//! [`ArgList::forward`](crate::ArgList::forward) flattens a call's
//! arguments into a cons list of C values; [`Invoke`] spreads that list
//! into the variadic arguments of `printf`, `fprintf` or `snprintf`.

#![allow(unsafe_code, reason = "calls C variadic functions")]

use std::ffi::{c_char, c_int};

use printx_ir::MAX_ARGS;

/// Maximum number of C values one call can forward.
///
/// A text slice argument forwards two values (length and data); nothing
/// forwards more, so every argument list with at most [`MAX_ARGS`]
/// entries can be invoked.
pub const MAX_FORWARDED: usize = 2 * MAX_ARGS;

mod sealed {
    pub trait Sealed {}
}

/// A C value that can be passed through `...` without promotion.
pub trait VaArg: sealed::Sealed + Copy {}

macro_rules! va_arg {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}
        impl VaArg for $ty {}
    )*};
}

va_arg!(i32, u32, i64, u64, isize, usize, f64);

impl<T> sealed::Sealed for *const T {}
impl<T> VaArg for *const T {}
impl<T> sealed::Sealed for *mut T {}
impl<T> VaArg for *mut T {}

/// A cons list of C values that can be spread into a variadic call.
///
/// # Safety
///
/// Every method forwards `self` unchecked: the caller must pass a format
/// whose conversions consume exactly these values, in order.
#[diagnostic::on_unimplemented(
    message = "printx: `{Self}` cannot be passed to a C variadic function",
    note = "a call forwards at most 64 C values, each an int, a double or a pointer"
)]
pub trait Invoke {
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn printf(self, format: *const c_char) -> c_int;

    /// # Safety
    ///
    /// See the trait documentation. `stream` must be an open C stream.
    unsafe fn fprintf(self, stream: *mut libc::FILE, format: *const c_char) -> c_int;

    /// # Safety
    ///
    /// See the trait documentation. `buf` must be valid for writes of `len`
    /// bytes.
    unsafe fn snprintf(self, buf: *mut c_char, len: usize, format: *const c_char) -> c_int;
}

macro_rules! hlist_ty {
    () => { () };
    ($head:ident $($tail:ident)*) => { ($head, hlist_ty!($($tail)*)) };
}

macro_rules! hlist_pat {
    () => { () };
    ($head:ident $($tail:ident)*) => { ($head, hlist_pat!($($tail)*)) };
}

macro_rules! impl_invoke {
    ($($ty:ident $value:ident)*) => {
        impl<$($ty: VaArg),*> Invoke for hlist_ty!($($ty)*) {
            unsafe fn printf(self, format: *const c_char) -> c_int {
                let hlist_pat!($($value)*) = self;
                unsafe { libc::printf(format $(, $value)*) }
            }

            unsafe fn fprintf(self, stream: *mut libc::FILE, format: *const c_char) -> c_int {
                let hlist_pat!($($value)*) = self;
                unsafe { libc::fprintf(stream, format $(, $value)*) }
            }

            unsafe fn snprintf(self, buf: *mut c_char, len: usize, format: *const c_char) -> c_int {
                let hlist_pat!($($value)*) = self;
                unsafe { libc::snprintf(buf, len, format $(, $value)*) }
            }
        }
    };
}

/// Implements [`Invoke`] for the given list and every suffix of it.
macro_rules! impl_invoke_all {
    () => {
        impl_invoke!();
    };
    ($ty:ident $value:ident $($rest:ident)*) => {
        impl_invoke!($ty $value $($rest)*);
        impl_invoke_all!($($rest)*);
    };
}

impl_invoke_all!(
    A0 a0 A1 a1 A2 a2 A3 a3 A4 a4 A5 a5 A6 a6 A7 a7
    A8 a8 A9 a9 A10 a10 A11 a11 A12 a12 A13 a13 A14 a14 A15 a15
    A16 a16 A17 a17 A18 a18 A19 a19 A20 a20 A21 a21 A22 a22 A23 a23
    A24 a24 A25 a25 A26 a26 A27 a27 A28 a28 A29 a29 A30 a30 A31 a31
    A32 a32 A33 a33 A34 a34 A35 a35 A36 a36 A37 a37 A38 a38 A39 a39
    A40 a40 A41 a41 A42 a42 A43 a43 A44 a44 A45 a45 A46 a46 A47 a47
    A48 a48 A49 a49 A50 a50 A51 a51 A52 a52 A53 a53 A54 a54 A55 a55
    A56 a56 A57 a57 A58 a58 A59 a59 A60 a60 A61 a61 A62 a62 A63 a63
);

const _: () = assert!(MAX_FORWARDED == 64);
