//! printx IR - data model shared by every printx phase.
//!
//! This crate contains the plain data the format rewriter works on:
//! - [`SpecFlags`]: capability flags attached to an argument type
//! - [`Category`]: the class of a printf conversion letter
//! - [`TypeDescriptor`]: canonical specifier text plus flags for one type
//! - [`SpecifierList`]: the ordered Specifier Records of one call site
//!
//! Everything here is `Copy` and constructible in `const` context, so the
//! rewriter can run during constant evaluation.
//!
//! # Design Philosophy
//!
//! - **Const Everything**: every constructor and query is a `const fn`
//! - **No Allocation**: records live in a fixed-capacity array
//! - **Hashable**: descriptors and record lists key the memoization cache

mod descriptor;
mod flags;
mod records;

pub use descriptor::{Category, TypeDescriptor};
pub use flags::SpecFlags;
pub use records::{SpecifierList, MAX_ARGS};
