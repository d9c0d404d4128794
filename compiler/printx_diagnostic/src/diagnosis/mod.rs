//! The closed set of format diagnoses.
//!
//! Each diagnosis has a stable code (`P0001`..), a kebab-case slug used on
//! the command line and in JSON output, a one-line message and long-form
//! documentation for `printxc explain`.

use std::fmt;

/// One detectable malformation of a format template.
///
/// The rewriter stops at the first diagnosis; there is no partial outcome.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Diagnosis {
    /// Input ended, or the scan window ran out, before a conversion letter.
    ConversionLacksType,
    /// `.*` consumed an argument that does not promote to `int`.
    FieldPrecisionNeedsInt,
    /// A precision was written for a type that already uses the slot.
    FieldPrecisionNotAllowed,
    /// `*` consumed an argument that does not promote to `int`.
    FieldWidthNeedsInt,
    /// `%c` used with a type that does not promote to `int`.
    ExpectsChar,
    /// `%n` used with anything but a mutable `int` pointer.
    ExpectsIntPointer,
    /// `%p` used with a type that cannot be printed as an address.
    ExpectsPointer,
    /// Conversion letter category differs from the argument's.
    InvalidTypeForSpecifier,
    /// A conversion (or `*`) found no argument left.
    NotEnoughArguments,
    /// The template ends in a single `%`.
    SpuriousTrailingPercent,
    /// The template ended with arguments left over.
    TooManyArguments,
}

impl Diagnosis {
    /// Every diagnosis, in code order.
    pub const ALL: &'static [Diagnosis] = &[
        Diagnosis::ConversionLacksType,
        Diagnosis::FieldPrecisionNeedsInt,
        Diagnosis::FieldPrecisionNotAllowed,
        Diagnosis::FieldWidthNeedsInt,
        Diagnosis::ExpectsChar,
        Diagnosis::ExpectsIntPointer,
        Diagnosis::ExpectsPointer,
        Diagnosis::InvalidTypeForSpecifier,
        Diagnosis::NotEnoughArguments,
        Diagnosis::SpuriousTrailingPercent,
        Diagnosis::TooManyArguments,
    ];

    /// Stable code, e.g. `"P0008"`.
    pub const fn code(self) -> &'static str {
        match self {
            Diagnosis::ConversionLacksType => "P0001",
            Diagnosis::FieldPrecisionNeedsInt => "P0002",
            Diagnosis::FieldPrecisionNotAllowed => "P0003",
            Diagnosis::FieldWidthNeedsInt => "P0004",
            Diagnosis::ExpectsChar => "P0005",
            Diagnosis::ExpectsIntPointer => "P0006",
            Diagnosis::ExpectsPointer => "P0007",
            Diagnosis::InvalidTypeForSpecifier => "P0008",
            Diagnosis::NotEnoughArguments => "P0009",
            Diagnosis::SpuriousTrailingPercent => "P0010",
            Diagnosis::TooManyArguments => "P0011",
        }
    }

    /// Kebab-case name, e.g. `"invalid-type-for-specifier"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Diagnosis::ConversionLacksType => "conversion-lacks-type",
            Diagnosis::FieldPrecisionNeedsInt => "field-precision-needs-int",
            Diagnosis::FieldPrecisionNotAllowed => "field-precision-not-allowed",
            Diagnosis::FieldWidthNeedsInt => "field-width-needs-int",
            Diagnosis::ExpectsChar => "expects-char",
            Diagnosis::ExpectsIntPointer => "expects-int-pointer",
            Diagnosis::ExpectsPointer => "expects-pointer",
            Diagnosis::InvalidTypeForSpecifier => "invalid-type-for-specifier",
            Diagnosis::NotEnoughArguments => "not-enough-arguments",
            Diagnosis::SpuriousTrailingPercent => "spurious-trailing-percent",
            Diagnosis::TooManyArguments => "too-many-arguments",
        }
    }

    /// One-line message shown to the author of the template.
    pub const fn message(self) -> &'static str {
        match self {
            Diagnosis::ConversionLacksType => "conversion lacks type at end of format",
            Diagnosis::FieldPrecisionNeedsInt => "field precision specifier '.*' expects int",
            Diagnosis::FieldPrecisionNotAllowed => "field precision specifier not allowed for type",
            Diagnosis::FieldWidthNeedsInt => "field width specifier '*' expects int",
            Diagnosis::ExpectsChar => "format %c expects argument of type char",
            Diagnosis::ExpectsIntPointer => "format %n expects argument of type int*",
            Diagnosis::ExpectsPointer => "format %p expects argument of pointer type",
            Diagnosis::InvalidTypeForSpecifier => "format expects argument of different type",
            Diagnosis::NotEnoughArguments => "not enough arguments for format",
            Diagnosis::SpuriousTrailingPercent => "spurious trailing '%' in format",
            Diagnosis::TooManyArguments => "too many arguments for format",
        }
    }

    /// Short text placed under the offending character.
    pub const fn label(self) -> &'static str {
        match self {
            Diagnosis::ConversionLacksType => "no conversion letter found",
            Diagnosis::FieldPrecisionNeedsInt => "precision argument is not an int",
            Diagnosis::FieldPrecisionNotAllowed => "argument does not take a precision",
            Diagnosis::FieldWidthNeedsInt => "width argument is not an int",
            Diagnosis::ExpectsChar => "argument does not promote to int",
            Diagnosis::ExpectsIntPointer => "argument is not a mutable int pointer",
            Diagnosis::ExpectsPointer => "argument cannot be printed as an address",
            Diagnosis::InvalidTypeForSpecifier => "conversion does not match argument type",
            Diagnosis::NotEnoughArguments => "no argument left for this conversion",
            Diagnosis::SpuriousTrailingPercent => "'%' at end of format",
            Diagnosis::TooManyArguments => "arguments left over",
        }
    }

    /// Long-form markdown documentation.
    pub fn explain(self) -> &'static str {
        match self {
            Diagnosis::ConversionLacksType => include_str!("../docs/P0001.md"),
            Diagnosis::FieldPrecisionNeedsInt => include_str!("../docs/P0002.md"),
            Diagnosis::FieldPrecisionNotAllowed => include_str!("../docs/P0003.md"),
            Diagnosis::FieldWidthNeedsInt => include_str!("../docs/P0004.md"),
            Diagnosis::ExpectsChar => include_str!("../docs/P0005.md"),
            Diagnosis::ExpectsIntPointer => include_str!("../docs/P0006.md"),
            Diagnosis::ExpectsPointer => include_str!("../docs/P0007.md"),
            Diagnosis::InvalidTypeForSpecifier => include_str!("../docs/P0008.md"),
            Diagnosis::NotEnoughArguments => include_str!("../docs/P0009.md"),
            Diagnosis::SpuriousTrailingPercent => include_str!("../docs/P0010.md"),
            Diagnosis::TooManyArguments => include_str!("../docs/P0011.md"),
        }
    }

    /// Check if the diagnosis is about the argument count rather than a type.
    pub const fn is_arity(self) -> bool {
        matches!(
            self,
            Diagnosis::NotEnoughArguments | Diagnosis::TooManyArguments
        )
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Returned when a string names no diagnosis.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct UnknownDiagnosis(pub String);

impl fmt::Display for UnknownDiagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown diagnosis `{}`", self.0)
    }
}

impl std::error::Error for UnknownDiagnosis {}

/// Parse a code like `"P0008"` (case-insensitive) or a slug like
/// `"expects-char"`.
impl std::str::FromStr for Diagnosis {
    type Err = UnknownDiagnosis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|d| d.code().eq_ignore_ascii_case(s) || d.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownDiagnosis(s.to_string()))
    }
}
