//! The `explain` command: print the documentation for a diagnosis.

use std::io::Write;

use printx_diagnostic::Diagnosis;

use super::{EXIT_OK, EXIT_USAGE};

/// Print the long-form documentation for a code (`P0008`) or slug
/// (`invalid-type-for-specifier`).
pub fn explain_diagnosis(query: &str, stdout: &mut impl Write, stderr: &mut impl Write) -> i32 {
    let Ok(diagnosis) = query.parse::<Diagnosis>() else {
        let _ = writeln!(stderr, "Unknown diagnosis: {query}");
        let _ = writeln!(stderr);
        let _ = writeln!(stderr, "Known diagnoses:");
        for diagnosis in Diagnosis::ALL {
            let _ = writeln!(stderr, "  {}  {}", diagnosis.code(), diagnosis.as_str());
        }
        return EXIT_USAGE;
    };
    let _ = writeln!(stdout, "{}", diagnosis.explain().trim_end());
    EXIT_OK
}
