//! Output sink of the rewriter.
//!
//! The same rewrite runs against two sinks: [`Sink::Counting`] only counts
//! the bytes it is given, [`Sink::Writing`] also stores them. Both report
//! the same [`Sink::len`] for the same input, which is what lets the first
//! run size the buffer for the second.

/// Counting or writing destination for rewritten bytes.
#[derive(Debug)]
pub enum Sink<'a> {
    /// Count bytes without storing them.
    Counting { len: usize },
    /// Store bytes into `out`.
    ///
    /// Bytes past the end of `out` are counted but dropped, so `len` can
    /// exceed `out.len()`; callers compare the two.
    Writing { out: &'a mut [u8], len: usize },
}

impl<'a> Sink<'a> {
    pub const fn counting() -> Self {
        Sink::Counting { len: 0 }
    }

    pub const fn writing(out: &'a mut [u8]) -> Self {
        Sink::Writing { out, len: 0 }
    }

    /// Append one byte.
    #[inline]
    pub const fn push(&mut self, byte: u8) {
        match self {
            Sink::Counting { len } => *len += 1,
            Sink::Writing { out, len } => {
                if *len < out.len() {
                    out[*len] = byte;
                }
                *len += 1;
            }
        }
    }

    /// Append every byte of `bytes`.
    pub const fn extend(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.push(bytes[i]);
            i += 1;
        }
    }

    /// Number of bytes appended so far.
    #[inline]
    pub const fn len(&self) -> usize {
        match self {
            Sink::Counting { len } | Sink::Writing { len, .. } => *len,
        }
    }

    /// Check if nothing was appended yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests;
