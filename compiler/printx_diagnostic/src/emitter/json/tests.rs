#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::{Diagnosis, Diagnostic};

fn render(diagnostics: &[Diagnostic]) -> String {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.begin();
    emitter.emit_all(diagnostics);
    emitter.end();
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_empty_array() {
    assert_eq!(render(&[]), "[]\n");
}

#[test]
fn test_single_diagnostic() {
    let diag = Diagnostic::new(Diagnosis::SpuriousTrailingPercent, 3, "10 %")
        .with_note("write `%%` for a percent sign");
    let expected = r#"[
  {
    "code": "P0010",
    "name": "spurious-trailing-percent",
    "message": "spurious trailing '%' in format",
    "template": "10 %",
    "offset": 3,
    "line": 1,
    "column": 4,
    "label": "'%' at end of format",
    "notes": [
      "write `%%` for a percent sign"
    ]
  }
]
"#;
    assert_eq!(render(&[diag]), expected);
}

#[test]
fn test_multiple_diagnostics_are_comma_separated() {
    let text = render(&[
        Diagnostic::new(Diagnosis::ExpectsChar, 0, "%c"),
        Diagnostic::new(Diagnosis::ExpectsPointer, 0, "%p\n"),
    ]);
    assert!(text.contains("  },\n  {"));
    assert!(text.contains("\"template\": \"%p\\n\""));
}
