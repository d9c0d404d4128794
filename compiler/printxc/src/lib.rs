//! printxc - check printx templates from the command line.
//!
//! Takes a template and C/C++ argument type spellings, runs the same
//! rewriter the `printx` macros run at compile time, and prints either the
//! rewritten format or a rendered diagnostic.

pub mod commands;
