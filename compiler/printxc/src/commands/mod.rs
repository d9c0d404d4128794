//! Command handlers for the printxc CLI.
//!
//! Each handler writes to the streams it is given and returns the process
//! exit code, so `main` only wires up stdout and stderr.

mod check;
mod explain;
mod types;

pub use check::{
    parse_check_options, resolve_records, run_check, CheckError, CheckOptions, Define,
    OutputFormat,
};
pub use explain::explain_diagnosis;
pub use types::list_types;

/// The template was accepted.
pub const EXIT_OK: i32 = 0;

/// The template was rejected with a diagnostic.
pub const EXIT_REJECTED: i32 = 1;

/// Bad command line or unusable argument types.
pub const EXIT_USAGE: i32 = 2;
