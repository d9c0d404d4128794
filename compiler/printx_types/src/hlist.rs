//! Heterogeneous argument lists.
//!
//! A call site's arguments are folded into a cons list `(a, (b, (c, ())))`
//! so that the descriptors of every argument, and the flattened C values
//! they forward, are computed by the trait system.

use printx_ir::SpecifierList;

use crate::PrintfArg;

/// Concatenate two cons lists.
pub trait Append<Rhs> {
    type Output;

    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Append<Rhs> for () {
    type Output = Rhs;

    #[inline]
    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T: Append<Rhs>, Rhs> Append<Rhs> for (H, T) {
    type Output = (H, T::Output);

    #[inline]
    fn append(self, rhs: Rhs) -> Self::Output {
        (self.0, self.1.append(rhs))
    }
}

/// The arguments of one format call.
pub trait ArgList {
    /// Specifier Records of every argument, in order.
    const RECORDS: SpecifierList;

    /// Every forwarded C value, flattened into one cons list.
    type Forwarded;

    fn forward(&mut self) -> Self::Forwarded;
}

impl ArgList for () {
    const RECORDS: SpecifierList = SpecifierList::EMPTY;
    type Forwarded = ();

    #[inline]
    fn forward(&mut self) {}
}

impl<H, T> ArgList for (H, T)
where
    H: PrintfArg,
    T: ArgList,
    H::Forwarded: Append<T::Forwarded>,
{
    const RECORDS: SpecifierList = T::RECORDS.prepend(H::DESCRIPTOR);
    type Forwarded = <H::Forwarded as Append<T::Forwarded>>::Output;

    #[inline]
    fn forward(&mut self) -> Self::Forwarded {
        self.0.forward().append(self.1.forward())
    }
}

/// Build an [`ArgList`] value from argument expressions.
///
/// `arg_list!(a, b)` is `(a, (b, ()))`.
#[macro_export]
macro_rules! arg_list {
    () => { () };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        ($head, $crate::arg_list!($($tail),*))
    };
}

/// Build an [`ArgList`] type from argument types.
///
/// `arg_types!(u8, &str)` is `(u8, (&str, ()))`.
#[macro_export]
macro_rules! arg_types {
    () => { () };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        ($head, $crate::arg_types!($($tail),*))
    };
}
