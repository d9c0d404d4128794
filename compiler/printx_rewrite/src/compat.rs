//! Specifier-compatibility rules.
//!
//! Decides whether the conversion letter written in a template may print
//! the pending argument, and which text replaces it. The length
//! sub-specifier always comes from the argument type; the conversion
//! letter comes from the template unless it is the [`PLACEHOLDER`].

use printx_diagnostic::Diagnosis;
use printx_ir::{Category, TypeDescriptor};

/// The deduction placeholder: print the argument with its own specifier.
pub const PLACEHOLDER: u8 = b'?';

/// Text emitted for one resolved conversion: `length` then `conversion`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Emission {
    pub length: &'static [u8],
    pub conversion: u8,
}

impl Emission {
    const fn letter(conversion: u8) -> Self {
        Emission {
            length: b"",
            conversion,
        }
    }
}

/// Check `letter` against `descriptor`.
///
/// `letter` must be [`PLACEHOLDER`] or a byte [`Category::of`] recognises;
/// anything else is reported as [`Diagnosis::ConversionLacksType`].
pub const fn check(letter: u8, descriptor: TypeDescriptor) -> Result<Emission, Diagnosis> {
    let flags = descriptor.flags();
    match letter {
        PLACEHOLDER => Ok(Emission {
            length: descriptor.length(),
            conversion: descriptor.conversion(),
        }),
        b'c' => {
            if flags.promotes_to_int() {
                Ok(Emission::letter(b'c'))
            } else {
                Err(Diagnosis::ExpectsChar)
            }
        }
        b'n' => {
            if flags.records_position() {
                Ok(Emission::letter(b'n'))
            } else {
                Err(Diagnosis::ExpectsIntPointer)
            }
        }
        b'p' => {
            if flags.prints_as_pointer() {
                Ok(Emission::letter(b'p'))
            } else {
                Err(Diagnosis::ExpectsPointer)
            }
        }
        _ => match Category::of(letter) {
            Some(category) if category.same_as(descriptor.category()) => Ok(Emission {
                length: descriptor.length(),
                conversion: letter,
            }),
            Some(_) => Err(Diagnosis::InvalidTypeForSpecifier),
            None => Err(Diagnosis::ConversionLacksType),
        },
    }
}

#[cfg(test)]
mod tests;
