//! Argument types for printx.
//!
//! Two views of the same arguments:
//! - **Classification**: every argument type has a [`TypeDescriptor`],
//!   available as an associated `const` of [`PrintfArg`], so a whole call
//!   site's [`SpecifierList`] is known at compile time ([`ArgList::RECORDS`]).
//! - **Forwarding**: every argument value becomes the C values printf reads
//!   for that descriptor, as a cons list (`(a, (b, ()))`). A text slice
//!   becomes two values, its length and its data pointer.
//!
//! The [`ctype`] module classifies C type spellings (`unsigned long`,
//! `std::string_view`) for the `printxc` checker.
//!
//! [`TypeDescriptor`]: printx_ir::TypeDescriptor
//! [`SpecifierList`]: printx_ir::SpecifierList

pub mod adapt;
mod arg;
pub mod ctype;
mod hlist;

pub use arg::{Char, PrintfArg};
pub use hlist::{Append, ArgList};
