//! Procedural macros for printx.
//!
//! # `PrintfArg` Derive
//!
//! Registers a user type as a printx argument. The generated impl refers to
//! the `printx` facade crate.
//!
//! ```text
//! #[derive(PrintfArg)]
//! #[printx(text = as_c_str)]
//! struct Name(CString);
//!
//! #[derive(PrintfArg)]
//! #[printx(chars = as_str)]
//! struct Label(String);
//!
//! #[derive(PrintfArg)]
//! #[repr(u8)]
//! enum Level { Low, High }
//! ```

mod printf_arg;
mod utils;

use proc_macro::TokenStream;

/// Derive `printx::PrintfArg`.
///
/// # Attributes
///
/// - `#[printx(text = method)]` - print `method(&self) -> &CStr` with `%s`.
/// - `#[printx(chars = method)]` - print `method(&self) -> &str` (or
///   `&[u8]`) with `%.*s`.
/// - `#[printx(spec = "...")]` - override the specifier text.
///
/// Without an accessor the type must be a fieldless enum; it prints as its
/// `#[repr]` integer type (`isize` if none is given).
#[proc_macro_derive(PrintfArg, attributes(printx))]
pub fn derive_printf_arg(input: TokenStream) -> TokenStream {
    printf_arg::derive_printf_arg(input)
}
