//! Specifier Records: the ordered descriptors of one call site.
//!
//! A [`SpecifierList`] holds one [`TypeDescriptor`] per argument, in
//! argument order, followed by an implicit sentinel. [`SpecifierList::get`]
//! returns `None` for the sentinel (and anything past it): consuming the
//! sentinel is the "not enough arguments" condition, leaving a real record
//! unconsumed is the "too many arguments" condition.
//!
//! The list is a fixed-capacity array so that it can be built, copied and
//! compared in `const` context.

use crate::TypeDescriptor;

/// Maximum number of arguments one format call can take.
pub const MAX_ARGS: usize = 32;

/// Ordered Specifier Records plus the sentinel slot.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SpecifierList {
    records: [Option<TypeDescriptor>; MAX_ARGS + 1],
    len: usize,
}

impl SpecifierList {
    /// A list holding only the sentinel.
    pub const EMPTY: Self = SpecifierList {
        records: [None; MAX_ARGS + 1],
        len: 0,
    };

    /// Build a list from descriptors in argument order.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_ARGS`] descriptors are given.
    pub const fn from_slice(descriptors: &[TypeDescriptor]) -> Self {
        assert!(
            descriptors.len() <= MAX_ARGS,
            "too many arguments for one format call"
        );
        let mut list = Self::EMPTY;
        let mut i = 0;
        while i < descriptors.len() {
            list.records[i] = Some(descriptors[i]);
            i += 1;
        }
        list.len = descriptors.len();
        list
    }

    /// Return a new list with `descriptor` in front of the existing records.
    ///
    /// Used to fold a type-level argument list from the back.
    ///
    /// # Panics
    ///
    /// Panics if the list is already full.
    #[must_use]
    pub const fn prepend(self, descriptor: TypeDescriptor) -> Self {
        assert!(
            self.len < MAX_ARGS,
            "too many arguments for one format call"
        );
        let mut list = Self::EMPTY;
        list.records[0] = Some(descriptor);
        let mut i = 0;
        while i < self.len {
            list.records[i + 1] = self.records[i];
            i += 1;
        }
        list.len = self.len + 1;
        list
    }

    /// The record at `index`, or `None` for the sentinel.
    #[inline]
    pub const fn get(&self, index: usize) -> Option<TypeDescriptor> {
        if index < self.len {
            self.records[index]
        } else {
            None
        }
    }

    /// Number of real records (the sentinel is not counted).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the list holds only the sentinel.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the real records in argument order.
    pub fn iter(&self) -> impl Iterator<Item = TypeDescriptor> + '_ {
        self.records[..self.len].iter().flatten().copied()
    }
}

impl Default for SpecifierList {
    fn default() -> Self {
        Self::EMPTY
    }
}
