//! Type descriptors and conversion categories.
//!
//! A [`TypeDescriptor`] is the per-type record the rewriter consults: the
//! canonical specifier text (length sub-specifier plus conversion letter,
//! e.g. `"ld"`, `"hhu"`, `".*s"`) and the type's [`SpecFlags`].

use std::fmt;

use crate::SpecFlags;

/// The class of a printf conversion letter.
///
/// Two conversions are compatible when they belong to the same category;
/// the rewriter uses this to reject e.g. `%d` for a floating-point argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    /// `s`
    Text,
    /// `c d i u o x X`
    Integer,
    /// `f F e E g G a A`
    FloatingPoint,
    /// `p n`
    Pointer,
}

impl Category {
    /// Classify a conversion letter.
    ///
    /// Returns `None` for bytes that are not conversion letters. The
    /// rewriter treats those as ignorable length sub-specifier characters.
    pub const fn of(letter: u8) -> Option<Category> {
        match letter {
            b's' => Some(Category::Text),
            b'c' | b'd' | b'i' | b'u' | b'o' | b'x' | b'X' => Some(Category::Integer),
            b'f' | b'F' | b'e' | b'E' | b'g' | b'G' | b'a' | b'A' => {
                Some(Category::FloatingPoint)
            }
            b'p' | b'n' => Some(Category::Pointer),
            _ => None,
        }
    }

    /// `const` equality (derived `PartialEq` is not callable in const fn).
    #[inline]
    pub const fn same_as(self, other: Category) -> bool {
        self as u8 == other as u8
    }

    /// Human-readable name for error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Text => "text",
            Category::Integer => "integer",
            Category::FloatingPoint => "floating-point",
            Category::Pointer => "pointer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical specifier text and capability flags of one argument type.
///
/// # Invariant
///
/// `spec` is non-empty and ends in a conversion letter recognised by
/// [`Category::of`]. [`TypeDescriptor::new`] asserts this, so a malformed
/// descriptor used in a `const` is a compile error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDescriptor {
    spec: &'static str,
    flags: SpecFlags,
}

impl TypeDescriptor {
    /// Any pointer or non-character array: printed as an address.
    pub const POINTER: Self = Self::new("p", SpecFlags::PRINTS_AS_POINTER);

    /// Pointer to a mutable `int`: printed as an address, usable with `%n`.
    pub const POSITION: Self = Self::new(
        "p",
        SpecFlags::PRINTS_AS_POINTER.union(SpecFlags::RECORDS_POSITION),
    );

    /// Null-terminated character data.
    pub const C_STRING: Self = Self::new("s", SpecFlags::PRINTS_AS_POINTER);

    /// Text produced by an accessor method, printed with `%s` only.
    pub const TEXT: Self = Self::new("s", SpecFlags::NONE);

    /// Character data with an explicit length, forwarded as (length, data).
    pub const CHAR_SEQUENCE: Self = Self::new(".*s", SpecFlags::FORBIDS_PRECISION);

    /// Create a descriptor.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `spec` is empty,
    /// holds a NUL byte or does not end in a conversion letter.
    pub const fn new(spec: &'static str, flags: SpecFlags) -> Self {
        let bytes = spec.as_bytes();
        assert!(!bytes.is_empty(), "type descriptor needs specifier text");
        assert!(!has_nul(bytes), "type descriptor must not contain a NUL byte");
        assert!(
            Category::of(bytes[bytes.len() - 1]).is_some(),
            "type descriptor must end in a conversion letter"
        );
        TypeDescriptor { spec, flags }
    }

    /// Create a descriptor from runtime text, or `None` if `spec` is empty,
    /// holds a NUL byte or does not end in a conversion letter.
    pub const fn checked(spec: &'static str, flags: SpecFlags) -> Option<Self> {
        let bytes = spec.as_bytes();
        if bytes.is_empty() || has_nul(bytes) || Category::of(bytes[bytes.len() - 1]).is_none() {
            return None;
        }
        Some(TypeDescriptor { spec, flags })
    }

    /// Create a descriptor without flags.
    pub const fn plain(spec: &'static str) -> Self {
        Self::new(spec, SpecFlags::NONE)
    }

    /// Replace the specifier text, keeping the flags.
    ///
    /// The forwarded values stay those of `self`, so the new text must read
    /// them the same way: same length sub-specifier, same category, and
    /// `%c`/`%n` can only be kept, never introduced.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `spec` is not a
    /// valid descriptor or does not keep the above.
    #[must_use]
    pub const fn with_spec(self, spec: &'static str) -> Self {
        let other = Self::new(spec, self.flags);
        assert!(
            bytes_eq(other.length(), self.length()),
            "printx: `spec` override must keep the length sub-specifier"
        );
        assert!(
            other.category().same_as(self.category()),
            "printx: `spec` override must keep the conversion category"
        );
        let (from, to) = (self.conversion(), other.conversion());
        assert!(
            from == to || !matches!(to, b'c' | b'n'),
            "printx: `spec` override cannot introduce `%c` or `%n`"
        );
        other
    }

    /// The full canonical specifier text, e.g. `"llu"`.
    #[inline]
    pub const fn spec(&self) -> &'static str {
        self.spec
    }

    /// The capability flags.
    #[inline]
    pub const fn flags(&self) -> SpecFlags {
        self.flags
    }

    /// The trailing conversion letter of the specifier text.
    #[inline]
    pub const fn conversion(&self) -> u8 {
        let bytes = self.spec.as_bytes();
        bytes[bytes.len() - 1]
    }

    /// The length sub-specifier: every byte before the conversion letter.
    pub const fn length(&self) -> &'static [u8] {
        let bytes = self.spec.as_bytes();
        bytes.split_at(bytes.len() - 1).0
    }

    /// The category of the conversion letter.
    pub const fn category(&self) -> Category {
        match Category::of(self.conversion()) {
            Some(category) => category,
            None => panic!("type descriptor must end in a conversion letter"),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.spec)?;
        let names = [
            (SpecFlags::PROMOTES_TO_INT, "promotes-to-int"),
            (SpecFlags::PRINTS_AS_POINTER, "prints-as-pointer"),
            (SpecFlags::FORBIDS_PRECISION, "forbids-precision"),
            (SpecFlags::RECORDS_POSITION, "records-position"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.flags.contains(flag) {
                f.write_str(if first { " [" } else { ", " })?;
                f.write_str(name)?;
                first = false;
            }
        }
        if !first {
            f.write_str("]")?;
        }
        Ok(())
    }
}

const fn has_nul(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0 {
            return true;
        }
        i += 1;
    }
    false
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
