//! printx - type-checked printf.
//!
//! Write `%?` and let the argument type pick the conversion, or write an
//! explicit conversion and let printx fix its length sub-specifier:
//!
//! ```text
//! printx::printf!("a %? b %x c %% d %? e\n", 1.5, 10u64, c"text");
//! // calls printf("a %g b %llx c %% d %s e\n", ...)
//! ```
//!
//! Every call site is checked against its argument types during
//! compilation; a mismatch is a compile error naming the problem (for
//! example "printx: format %c expects argument of type char"). The
//! rewritten format is computed once per process and reused.
//!
//! # Macros
//!
//! | macro | C function | safety |
//! |---|---|---|
//! | [`printf!`] | `printf` | safe |
//! | [`sprintf!`] | `snprintf` into a `&mut [u8]` | safe |
//! | [`snprintf!`] | `snprintf` into a raw buffer | `unsafe` |
//! | [`fprintf!`] | `fprintf` to a `*mut FILE` | `unsafe` |
//! | [`format_string!`] | none, yields the rewritten `&'static CStr` | safe |
//!
//! # Arguments
//!
//! Any [`PrintfArg`] type. User types register through
//! `#[derive(PrintfArg)]`.

mod invoke;
mod macros;

use std::sync::Once;

pub use invoke::{Invoke, VaArg, MAX_FORWARDED};
pub use printx_diagnostic::{Diagnosis, Diagnostic};
pub use printx_ir::{SpecFlags, SpecifierList, TypeDescriptor, MAX_ARGS};
pub use printx_macros::PrintfArg;
pub use printx_rewrite::{transform, Failure};
pub use printx_types::{adapt, arg_list, arg_types, Append, ArgList, Char, PrintfArg};

/// A format template carried at the type level.
///
/// The formatting macros implement it for a call-site-local type so the
/// template can be checked in a `const` block.
pub trait Template {
    const TEXT: &'static str;
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=printx_rewrite=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Implementation details of the formatting macros.
#[doc(hidden)]
pub mod __private {
    #![allow(
        unsafe_code,
        reason = "forwards checked arguments to C variadic functions"
    )]

    use std::ffi::{c_char, c_int};

    pub use printx_rewrite::{count_or_panic, materialize};
    pub use std::ffi::CStr;

    use crate::{ArgList, Invoke, Template};

    /// The checked and interned format for `F` and `A`.
    fn format<F: Template, A: ArgList>() -> &'static CStr {
        const { printx_rewrite::validate(F::TEXT, &A::RECORDS) };
        match printx_rewrite::intern(F::TEXT, &A::RECORDS) {
            Ok(format) => format,
            Err(failure) => unreachable!("printx: accepted template later rejected: {failure}"),
        }
    }

    pub fn printf<F: Template, A: ArgList>(mut args: A) -> c_int
    where
        A::Forwarded: Invoke,
    {
        let format = format::<F, A>();
        let forwarded = args.forward();
        // SAFETY: `format` was validated against the records of `A`, and
        // `forwarded` holds the values those records promise. Pointers in
        // `forwarded` borrow from `args`, which outlives the call.
        unsafe { forwarded.printf(format.as_ptr()) }
    }

    pub fn sprintf<F: Template, A: ArgList>(buf: &mut [u8], mut args: A) -> c_int
    where
        A::Forwarded: Invoke,
    {
        let format = format::<F, A>();
        let forwarded = args.forward();
        // SAFETY: as in `printf`; snprintf writes at most `buf.len()` bytes.
        unsafe {
            forwarded.snprintf(
                buf.as_mut_ptr().cast::<c_char>(),
                buf.len(),
                format.as_ptr(),
            )
        }
    }

    /// # Safety
    ///
    /// `buf` must be valid for writes of `len` bytes.
    pub unsafe fn snprintf<F: Template, A: ArgList>(
        buf: *mut c_char,
        len: usize,
        mut args: A,
    ) -> c_int
    where
        A::Forwarded: Invoke,
    {
        let format = format::<F, A>();
        let forwarded = args.forward();
        // SAFETY: the caller guarantees `buf`; see `printf` for the rest.
        unsafe { forwarded.snprintf(buf, len, format.as_ptr()) }
    }

    /// # Safety
    ///
    /// `stream` must be an open C stream.
    pub unsafe fn fprintf<F: Template, A: ArgList>(
        stream: *mut libc::FILE,
        mut args: A,
    ) -> c_int
    where
        A::Forwarded: Invoke,
    {
        let format = format::<F, A>();
        let forwarded = args.forward();
        // SAFETY: the caller guarantees `stream`; see `printf` for the rest.
        unsafe { forwarded.fprintf(stream, format.as_ptr()) }
    }
}
