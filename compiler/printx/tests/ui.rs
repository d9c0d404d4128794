//! Compile-time rejection of bad call sites and bad derives.
//!
//! Rustc's rendering of const-evaluation errors differs between releases,
//! so the `.stderr` files are regenerated on every run and checked for the
//! printx message instead of byte for byte.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::fs;
use std::path::Path;

/// Each failing case and a message its compiler output must contain.
const FAIL_CASES: &[(&str, &str)] = &[
    (
        "bad_type_for_specifier",
        "printx: format expects argument of different type",
    ),
    (
        "position_needs_int_pointer",
        "printx: format %n expects argument of type int*",
    ),
    ("position_needs_mutable_int", "PrintfArg"),
    (
        "precision_on_text_slice",
        "printx: field precision specifier not allowed for type",
    ),
    ("too_many_arguments", "printx: too many arguments for format"),
    (
        "derive_struct_without_accessor",
        "PrintfArg derive needs a fieldless enum",
    ),
    (
        "derive_enum_with_fields",
        "PrintfArg derive needs a fieldless enum",
    ),
    (
        "derive_duplicate_accessor",
        "only one of `text` and `chars` may be given",
    ),
    (
        "derive_spec_changes_category",
        "`spec` override must keep the conversion category",
    ),
    (
        "derive_spec_changes_length",
        "`spec` override must keep the length sub-specifier",
    ),
];

#[test]
fn ui() {
    std::env::set_var("TRYBUILD", "overwrite");
    {
        let cases = trybuild::TestCases::new();
        cases.pass("tests/ui/pass/*.rs");
        cases.compile_fail("tests/ui/fail/*.rs");
        // Cases run when `cases` is dropped.
    }

    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/ui/fail");
    for (name, message) in FAIL_CASES {
        let stderr = fs::read_to_string(dir.join(format!("{name}.stderr"))).unwrap();
        assert!(
            stderr.contains(message),
            "{name}: expected `{message}` in:\n{stderr}"
        );
    }
}

#[test]
fn every_fail_case_is_listed() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/ui/fail");
    let mut files: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .map(|path| path.file_stem().unwrap().to_string_lossy().into_owned())
        .collect();
    files.sort();
    let mut listed: Vec<String> = FAIL_CASES.iter().map(|(name, _)| (*name).to_string()).collect();
    listed.sort();
    assert_eq!(files, listed);
}
