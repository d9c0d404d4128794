//! Rewrite failure.

use printx_diagnostic::{Diagnosis, Diagnostic};
use thiserror::Error;

/// Why and where a template was rejected.
///
/// `argument` is the index of the Specifier Record that was pending when
/// the rewriter stopped (for [`Diagnosis::TooManyArguments`], the first
/// record left over).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{diagnosis} (byte {offset})")]
pub struct Failure {
    pub diagnosis: Diagnosis,
    pub offset: usize,
    pub argument: usize,
}

impl Failure {
    pub const fn new(diagnosis: Diagnosis, offset: usize, argument: usize) -> Self {
        Failure {
            diagnosis,
            offset,
            argument,
        }
    }

    /// Position the failure inside `template` for rendering.
    pub fn to_diagnostic(&self, template: &str) -> Diagnostic {
        Diagnostic::new(self.diagnosis, self.offset, template)
    }
}
