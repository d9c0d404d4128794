//! Format scanner and rewriter.
//!
//! A two-state machine over the template:
//!
//! - **Literal-Copy** copies bytes until a `%`. `%%` is copied as is and
//!   consumes nothing; any other `%` enters Specifier-Parse.
//! - **Specifier-Parse** copies flags, width and precision, consuming an
//!   extra record for each `*`, then scans at most [`SCAN_WINDOW`] bytes for
//!   the placeholder or a conversion letter. Skipped bytes (length
//!   sub-specifiers such as `l`, `hh`, `z`) are dropped; the replacement
//!   comes from the pending record.
//!
//! The walk ends in Literal-Copy at end of input, and succeeds only if every
//! record was consumed.

use printx_diagnostic::Diagnosis;
use printx_ir::{Category, SpecifierList, TypeDescriptor};

use crate::{compat, Cursor, Failure, Sink};

/// Bytes examined for a placeholder or conversion letter after the
/// precision.
pub const SCAN_WINDOW: usize = 4;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    LiteralCopy,
    SpecifierParse,
}

/// Rewrite `template` into `sink`, consuming `records` in order.
pub const fn rewrite(
    template: &str,
    records: &SpecifierList,
    sink: &mut Sink<'_>,
) -> Result<(), Failure> {
    let mut cursor = Cursor::new(template);
    let mut next = 0;
    let mut state = State::LiteralCopy;

    loop {
        match state {
            State::LiteralCopy => {
                let byte = cursor.current();
                if byte == 0 {
                    if records.get(next).is_some() {
                        return Err(Failure::new(
                            Diagnosis::TooManyArguments,
                            cursor.pos(),
                            next,
                        ));
                    }
                    return Ok(());
                }
                sink.push(byte);
                cursor.advance();
                if byte == b'%' {
                    match cursor.current() {
                        0 => {
                            return Err(Failure::new(
                                Diagnosis::SpuriousTrailingPercent,
                                cursor.pos() - 1,
                                next,
                            ));
                        }
                        b'%' => {
                            sink.push(b'%');
                            cursor.advance();
                        }
                        _ => state = State::SpecifierParse,
                    }
                }
            }
            State::SpecifierParse => match parse_conversion(&mut cursor, sink, records, next) {
                Ok(after) => {
                    next = after;
                    state = State::LiteralCopy;
                }
                Err(failure) => return Err(failure),
            },
        }
    }
}

const fn is_flag(byte: u8) -> bool {
    matches!(byte, b'-' | b'+' | b' ' | b'#' | b'0')
}

const fn copy_digits(cursor: &mut Cursor<'_>, sink: &mut Sink<'_>) {
    while cursor.current().is_ascii_digit() {
        sink.push(cursor.current());
        cursor.advance();
    }
}

const fn pending(
    records: &SpecifierList,
    index: usize,
    start: usize,
) -> Result<TypeDescriptor, Failure> {
    match records.get(index) {
        Some(descriptor) => Ok(descriptor),
        None => Err(Failure::new(Diagnosis::NotEnoughArguments, start, index)),
    }
}

/// Parse one conversion; the cursor sits just after its `%`.
///
/// Returns the index of the first record not consumed.
const fn parse_conversion(
    cursor: &mut Cursor<'_>,
    sink: &mut Sink<'_>,
    records: &SpecifierList,
    mut index: usize,
) -> Result<usize, Failure> {
    let start = cursor.pos() - 1;
    let mut current = match pending(records, index, start) {
        Ok(descriptor) => descriptor,
        Err(failure) => return Err(failure),
    };

    while is_flag(cursor.current()) {
        sink.push(cursor.current());
        cursor.advance();
    }

    // Field width
    if cursor.current() == b'*' {
        if !current.flags().promotes_to_int() {
            return Err(Failure::new(
                Diagnosis::FieldWidthNeedsInt,
                cursor.pos(),
                index,
            ));
        }
        sink.push(b'*');
        cursor.advance();
        index += 1;
        current = match pending(records, index, start) {
            Ok(descriptor) => descriptor,
            Err(failure) => return Err(failure),
        };
    } else {
        copy_digits(cursor, sink);
    }

    // Field precision
    if cursor.current() == b'.' {
        let dot = cursor.pos();
        if current.flags().forbids_precision() {
            return Err(Failure::new(
                Diagnosis::FieldPrecisionNotAllowed,
                dot,
                index,
            ));
        }
        sink.push(b'.');
        cursor.advance();
        if cursor.current() == b'*' {
            if !current.flags().promotes_to_int() {
                return Err(Failure::new(
                    Diagnosis::FieldPrecisionNeedsInt,
                    cursor.pos(),
                    index,
                ));
            }
            sink.push(b'*');
            cursor.advance();
            index += 1;
            current = match pending(records, index, start) {
                Ok(descriptor) => descriptor,
                Err(failure) => return Err(failure),
            };
            // The measured argument, not the precision argument
            if current.flags().forbids_precision() {
                return Err(Failure::new(
                    Diagnosis::FieldPrecisionNotAllowed,
                    dot,
                    index,
                ));
            }
        } else {
            copy_digits(cursor, sink);
        }
    }

    // Length sub-specifier and conversion letter
    let mut scanned = 0;
    while scanned < SCAN_WINDOW {
        let byte = cursor.current();
        if byte == 0 {
            break;
        }
        if byte == compat::PLACEHOLDER || Category::of(byte).is_some() {
            return match compat::check(byte, current) {
                Ok(emission) => {
                    sink.extend(emission.length);
                    sink.push(emission.conversion);
                    cursor.advance();
                    Ok(index + 1)
                }
                Err(diagnosis) => Err(Failure::new(diagnosis, cursor.pos(), index)),
            };
        }
        cursor.advance();
        scanned += 1;
    }
    Err(Failure::new(
        Diagnosis::ConversionLacksType,
        cursor.pos(),
        index,
    ))
}
