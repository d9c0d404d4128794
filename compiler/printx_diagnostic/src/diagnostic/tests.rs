use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_single_line_position() {
    let diag = Diagnostic::new(Diagnosis::InvalidTypeForSpecifier, 6, "a %? %d");
    assert_eq!(diag.line_col(), (1, 7));
    assert_eq!(diag.line_text(), "a %? %d");
}

#[test]
fn test_position_on_second_line() {
    let diag = Diagnostic::new(Diagnosis::ExpectsChar, 9, "first\nab %c\n");
    assert_eq!(diag.line_col(), (2, 4));
    assert_eq!(diag.line_text(), "ab %c");
}

#[test]
fn test_position_at_end() {
    let diag = Diagnostic::new(Diagnosis::TooManyArguments, 4, "text");
    assert_eq!(diag.line_col(), (1, 5));
    assert_eq!(diag.line_text(), "text");
}

#[test]
fn test_position_after_trailing_newline() {
    let diag = Diagnostic::new(Diagnosis::TooManyArguments, 3, "ab\n");
    assert_eq!(diag.line_col(), (2, 1));
    assert_eq!(diag.line_text(), "");
}

#[test]
fn test_offset_is_clamped() {
    let diag = Diagnostic::new(Diagnosis::TooManyArguments, 99, "ab");
    assert_eq!(diag.offset(), 2);
}

#[test]
fn test_column_counts_chars() {
    // "é" is two bytes
    let diag = Diagnostic::new(Diagnosis::InvalidTypeForSpecifier, 4, "é %d");
    assert_eq!(diag.line_col(), (1, 4));
}

#[test]
fn test_notes_and_display() {
    let diag = Diagnostic::new(Diagnosis::NotEnoughArguments, 0, "%d")
        .with_note("the call passes no arguments");
    assert_eq!(diag.notes(), ["the call passes no arguments".to_string()]);
    assert_eq!(
        diag.to_string(),
        "error[P0009]: not enough arguments for format at 1:1"
    );
}
