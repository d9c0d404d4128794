//! Capability flags carried by a type descriptor.
//!
//! The flags answer the questions the rewriter asks about a pending
//! argument while it walks a conversion sequence: may it stand in for `*`,
//! may it be printed with `%p` or `%n`, and may the caller write a
//! precision for it.

use bitflags::bitflags;

bitflags! {
    /// Capability flags of an argument type.
    ///
    /// Computed once per type, in `const` context, and never recomputed.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct SpecFlags: u8 {
        /// Passed through the variadic calling convention as `int`.
        ///
        /// Required for `%c` and for `*` field width / precision arguments.
        const PROMOTES_TO_INT = 1 << 0;
        /// Can be printed as an address via `%p`.
        const PRINTS_AS_POINTER = 1 << 1;
        /// The canonical specifier already uses the precision slot, so the
        /// caller may not write one.
        const FORBIDS_PRECISION = 1 << 2;
        /// Pointer to a mutable `int`, usable with `%n`.
        const RECORDS_POSITION = 1 << 3;
    }
}

impl SpecFlags {
    /// No capabilities.
    pub const NONE: Self = Self::empty();

    /// Check if the type promotes to `int` in a variadic call.
    #[inline]
    pub const fn promotes_to_int(self) -> bool {
        self.contains(Self::PROMOTES_TO_INT)
    }

    /// Check if the type may be printed via `%p`.
    #[inline]
    pub const fn prints_as_pointer(self) -> bool {
        self.contains(Self::PRINTS_AS_POINTER)
    }

    /// Check if an explicit precision is rejected for the type.
    #[inline]
    pub const fn forbids_precision(self) -> bool {
        self.contains(Self::FORBIDS_PRECISION)
    }

    /// Check if the type may be the target of `%n`.
    #[inline]
    pub const fn records_position(self) -> bool {
        self.contains(Self::RECORDS_POSITION)
    }
}
