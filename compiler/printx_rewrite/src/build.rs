//! Buffer sizing and materialization.
//!
//! Every entry point runs the rewriter in counting mode first; the writing
//! run then targets a buffer of exactly `n + 1` bytes.

use std::ffi::CString;

use printx_diagnostic::Diagnosis;
use printx_ir::SpecifierList;

use crate::{rewrite, Failure, Sink};

/// Length of the rewritten template, without the terminator.
pub const fn count(template: &str, records: &SpecifierList) -> Result<usize, Failure> {
    let mut sink = Sink::counting();
    match rewrite(template, records, &mut sink) {
        Ok(()) => Ok(sink.len()),
        Err(failure) => Err(failure),
    }
}

/// Rewrite into `out` and append a NUL terminator.
///
/// Returns the rewritten length `n`. Like C `snprintf`, output that does
/// not fit is dropped: the result is complete only if `n < out.len()`.
pub const fn materialize_into(
    template: &str,
    records: &SpecifierList,
    out: &mut [u8],
) -> Result<usize, Failure> {
    let mut sink = Sink::writing(out);
    match rewrite(template, records, &mut sink) {
        Ok(()) => {
            let len = sink.len();
            sink.push(0);
            Ok(len)
        }
        Err(failure) => Err(failure),
    }
}

/// Rewrite into a NUL-terminated array of exactly `N` bytes.
///
/// # Panics
///
/// Panics if the template is rejected or if `N` is not the rewritten length
/// plus one. In a `const` item both are compile errors.
pub const fn materialize<const N: usize>(template: &str, records: &SpecifierList) -> [u8; N] {
    let mut out = [0u8; N];
    match materialize_into(template, records, &mut out) {
        Ok(len) => assert!(
            len + 1 == N,
            "printx: format buffer does not match the rewritten length"
        ),
        Err(failure) => reject(failure.diagnosis),
    }
    out
}

/// Length of the rewritten template.
///
/// # Panics
///
/// Panics with the diagnosis message if the template is rejected.
pub const fn count_or_panic(template: &str, records: &SpecifierList) -> usize {
    match count(template, records) {
        Ok(len) => len,
        Err(failure) => reject(failure.diagnosis),
    }
}

/// Reject the template unless it matches `records`.
///
/// Meant for `const` blocks, where the panic becomes a compile error that
/// names the diagnosis.
pub const fn validate(template: &str, records: &SpecifierList) {
    count_or_panic(template, records);
}

/// Const panics cannot format, so every diagnosis gets its own literal.
const fn reject(diagnosis: Diagnosis) -> ! {
    match diagnosis {
        Diagnosis::ConversionLacksType => {
            panic!("printx: conversion lacks type at end of format")
        }
        Diagnosis::FieldPrecisionNeedsInt => {
            panic!("printx: field precision specifier '.*' expects int")
        }
        Diagnosis::FieldPrecisionNotAllowed => {
            panic!("printx: field precision specifier not allowed for type")
        }
        Diagnosis::FieldWidthNeedsInt => panic!("printx: field width specifier '*' expects int"),
        Diagnosis::ExpectsChar => panic!("printx: format %c expects argument of type char"),
        Diagnosis::ExpectsIntPointer => panic!("printx: format %n expects argument of type int*"),
        Diagnosis::ExpectsPointer => panic!("printx: format %p expects argument of pointer type"),
        Diagnosis::InvalidTypeForSpecifier => {
            panic!("printx: format expects argument of different type")
        }
        Diagnosis::NotEnoughArguments => panic!("printx: not enough arguments for format"),
        Diagnosis::SpuriousTrailingPercent => panic!("printx: spurious trailing '%' in format"),
        Diagnosis::TooManyArguments => panic!("printx: too many arguments for format"),
    }
}

/// Rewrite `template` at run time into an owned C string.
#[tracing::instrument(level = "debug", skip(records), fields(args = records.len()))]
pub fn transform(template: &str, records: &SpecifierList) -> Result<CString, Failure> {
    let len = count(template, records)?;
    let mut buf = vec![0u8; len + 1];
    let written = materialize_into(template, records, &mut buf)?;
    debug_assert_eq!(written, len, "counting and writing runs disagree");
    tracing::trace!(len, "format rewritten");
    // Templates end at their first NUL and descriptors cannot hold one, so
    // the only NUL in `buf` is the terminator.
    match CString::from_vec_with_nul(buf) {
        Ok(format) => Ok(format),
        Err(err) => unreachable!("rewritten format is not a C string: {err}"),
    }
}
