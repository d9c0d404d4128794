use pretty_assertions::assert_eq;

use super::*;
use printx_ir::SpecFlags;

const INT: TypeDescriptor = TypeDescriptor::new("d", SpecFlags::PROMOTES_TO_INT);
const ULONG: TypeDescriptor = TypeDescriptor::plain("lu");
const DOUBLE: TypeDescriptor = TypeDescriptor::plain("g");
const LONG_DOUBLE: TypeDescriptor = TypeDescriptor::plain("Lg");

fn emitted(letter: u8, descriptor: TypeDescriptor) -> Result<String, Diagnosis> {
    check(letter, descriptor).map(|e| {
        let mut text = String::from_utf8_lossy(e.length).into_owned();
        text.push(char::from(e.conversion));
        text
    })
}

#[test]
fn placeholder_emits_whole_descriptor() {
    assert_eq!(emitted(b'?', ULONG), Ok("lu".to_string()));
    assert_eq!(
        emitted(b'?', TypeDescriptor::CHAR_SEQUENCE),
        Ok(".*s".to_string())
    );
}

#[test]
fn explicit_letter_keeps_type_length() {
    assert_eq!(emitted(b'x', ULONG), Ok("lx".to_string()));
    assert_eq!(emitted(b'X', INT), Ok("X".to_string()));
    assert_eq!(emitted(b'e', LONG_DOUBLE), Ok("Le".to_string()));
}

#[test]
fn char_requires_promotion() {
    assert_eq!(emitted(b'c', INT), Ok("c".to_string()));
    assert_eq!(emitted(b'c', ULONG), Err(Diagnosis::ExpectsChar));
}

#[test]
fn position_requires_records_position() {
    assert_eq!(emitted(b'n', TypeDescriptor::POSITION), Ok("n".to_string()));
    assert_eq!(
        emitted(b'n', TypeDescriptor::POINTER),
        Err(Diagnosis::ExpectsIntPointer)
    );
}

#[test]
fn pointer_requires_prints_as_pointer() {
    assert_eq!(emitted(b'p', TypeDescriptor::POINTER), Ok("p".to_string()));
    assert_eq!(emitted(b'p', TypeDescriptor::C_STRING), Ok("p".to_string()));
    assert_eq!(emitted(b'p', INT), Err(Diagnosis::ExpectsPointer));
}

#[test]
fn category_mismatch() {
    assert_eq!(emitted(b'd', DOUBLE), Err(Diagnosis::InvalidTypeForSpecifier));
    assert_eq!(emitted(b'f', INT), Err(Diagnosis::InvalidTypeForSpecifier));
    assert_eq!(
        emitted(b'd', TypeDescriptor::CHAR_SEQUENCE),
        Err(Diagnosis::InvalidTypeForSpecifier)
    );
    assert_eq!(
        emitted(b's', TypeDescriptor::POINTER),
        Err(Diagnosis::InvalidTypeForSpecifier)
    );
}

#[test]
fn every_integer_letter_accepts_every_integer_type() {
    for descriptor in [INT, ULONG, TypeDescriptor::plain("hhu")] {
        for letter in *b"diuoxX" {
            let emission = check(letter, descriptor);
            assert_eq!(
                emission.map(|e| (e.length, e.conversion)),
                Ok((descriptor.length(), letter))
            );
        }
    }
}

#[test]
fn non_letters_lack_type() {
    assert_eq!(emitted(b'l', INT), Err(Diagnosis::ConversionLacksType));
}
