//! Format rewriting for printx.
//!
//! Walks a printf template against the [`SpecifierList`] of a call site,
//! validating every conversion and replacing each `?` placeholder and each
//! length sub-specifier with the text the argument type needs.
//!
//! # Pipeline
//!
//! ```text
//! template + records ──► count ──► n
//!                   └──► materialize::<n + 1> ──► "a %g b %lx\0"
//! ```
//!
//! The rewriter runs twice over the same input: once with a counting
//! [`Sink`] to size the output and once with a writing [`Sink`]. Both runs
//! are `const fn`, so [`materialize`] and [`validate`] can be evaluated at
//! compile time. [`transform`] and [`intern`] are the runtime entry points.
//!
//! [`SpecifierList`]: printx_ir::SpecifierList

mod build;
mod cache;
mod compat;
mod cursor;
mod failure;
mod rewriter;
mod sink;

pub use build::{count, count_or_panic, materialize, materialize_into, transform, validate};
pub use cache::intern;
pub use compat::{check, Emission, PLACEHOLDER};
pub use cursor::Cursor;
pub use failure::Failure;
pub use rewriter::{rewrite, SCAN_WINDOW};
pub use sink::Sink;
