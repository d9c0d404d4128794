//! Formatting macros.
//!
//! Each macro declares a call-site-local [`Template`](crate::Template)
//! type, so the template can be checked against the argument types in a
//! `const` block during monomorphization.

/// Print to C `stdout`. Returns what `printf` returns.
///
/// ```text
/// printx::printf!("%s has %? items\n", c"cart", 3u8);
/// ```
#[macro_export]
macro_rules! printf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        struct __PrintxTemplate;
        impl $crate::Template for __PrintxTemplate {
            const TEXT: &'static str = $fmt;
        }
        $crate::__private::printf::<__PrintxTemplate, _>($crate::arg_list!($($arg),*))
    }};
}

/// Print into a byte buffer with `snprintf`.
///
/// The output is truncated to fit and always NUL-terminated when the
/// buffer is not empty. Returns the length the full output would have.
///
/// ```text
/// let mut buf = [0u8; 32];
/// let len = printx::sprintf!(&mut buf, "%?", 42u64);
/// ```
#[macro_export]
macro_rules! sprintf {
    ($buf:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        struct __PrintxTemplate;
        impl $crate::Template for __PrintxTemplate {
            const TEXT: &'static str = $fmt;
        }
        $crate::__private::sprintf::<__PrintxTemplate, _>(
            ::core::convert::AsMut::<[u8]>::as_mut($buf),
            $crate::arg_list!($($arg),*),
        )
    }};
}

/// Print into a raw buffer with `snprintf`.
///
/// # Safety
///
/// Must be used inside `unsafe`: `$buf` must be valid for writes of `$len`
/// bytes.
#[macro_export]
macro_rules! snprintf {
    ($buf:expr, $len:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        struct __PrintxTemplate;
        impl $crate::Template for __PrintxTemplate {
            const TEXT: &'static str = $fmt;
        }
        $crate::__private::snprintf::<__PrintxTemplate, _>($buf, $len, $crate::arg_list!($($arg),*))
    }};
}

/// Print to a C stream with `fprintf`.
///
/// # Safety
///
/// Must be used inside `unsafe`: `$stream` must be an open `*mut FILE`.
#[macro_export]
macro_rules! fprintf {
    ($stream:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        struct __PrintxTemplate;
        impl $crate::Template for __PrintxTemplate {
            const TEXT: &'static str = $fmt;
        }
        $crate::__private::fprintf::<__PrintxTemplate, _>($stream, $crate::arg_list!($($arg),*))
    }};
}

/// The rewritten format for a template and argument types, as a
/// `&'static CStr` built entirely at compile time.
///
/// ```text
/// const FMT: &CStr = printx::format_string!("%-20.4?", u64);
/// assert_eq!(FMT, c"%-20.4llu");
/// ```
///
/// The argument types must not depend on generic parameters.
#[macro_export]
macro_rules! format_string {
    ($fmt:literal $(, $ty:ty)* $(,)?) => {{
        const RECORDS: $crate::SpecifierList =
            <$crate::arg_types!($($ty),*) as $crate::ArgList>::RECORDS;
        const LEN: usize = $crate::__private::count_or_panic($fmt, &RECORDS);
        const BYTES: [u8; LEN + 1] = $crate::__private::materialize::<{ LEN + 1 }>($fmt, &RECORDS);
        const FORMAT: &$crate::__private::CStr =
            match $crate::__private::CStr::from_bytes_with_nul(&BYTES) {
                Ok(format) => format,
                Err(_) => panic!("printx: rewritten format contains a NUL byte"),
            };
        FORMAT
    }};
}
