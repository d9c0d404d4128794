//! Diagnostics for printf format templates.
//!
//! Every malformation the rewriter can detect maps to exactly one
//! [`Diagnosis`]. A [`Diagnostic`] positions a diagnosis inside the template
//! it was found in, and the [`emitter`] module renders diagnostics for a
//! terminal or as JSON.
//!
//! ```text
//! error[P0008]: format expects argument of different type
//!   --> format:1:7
//!    |
//!  1 | a %? %d
//!    |       ^ conversion does not match argument type
//! ```

mod diagnosis;
mod diagnostic;
pub mod emitter;

pub use diagnosis::{Diagnosis, UnknownDiagnosis};
pub use diagnostic::Diagnostic;
