//! Read cursor over a format template.
//!
//! The template is read with C string semantics: the first NUL byte, or
//! the end of the slice, is end of input. [`Cursor::current`] returns `0`
//! there, so callers test a single byte instead of bounds-checking.

/// Read position within a template. Only moves forward.
#[derive(Copy, Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub const fn new(template: &'a str) -> Self {
        Cursor {
            buf: template.as_bytes(),
            pos: 0,
        }
    }

    /// Byte under the cursor, or `0` at end of input.
    #[inline]
    pub const fn current(&self) -> u8 {
        if self.pos < self.buf.len() {
            self.buf[self.pos]
        } else {
            0
        }
    }

    /// Check if the cursor has reached end of input.
    #[inline]
    pub const fn is_eof(&self) -> bool {
        self.current() == 0
    }

    /// Move past the current byte. Does nothing at end of input.
    #[inline]
    pub const fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Byte offset of the cursor.
    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests;
