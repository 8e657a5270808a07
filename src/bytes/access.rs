// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{bytes::ByteString, error::Error, vec::GrowVec};

impl ByteString {
    /// Returns the byte at `i`, or `None` if `i >= len`.
    #[inline]
    pub fn byte_at(&self, i: usize) -> Option<u8> {
        self.buf.get(i).copied()
    }

    /// Fallible variant of [`byte_at`](ByteString::byte_at).
    #[inline]
    pub fn try_byte_at(&self, i: usize) -> Result<u8, Error> {
        self.buf.try_get(i).copied()
    }

    /// Overwrites the byte at `i`. Any value may be written, including zero.
    ///
    /// Returns [`Error::OutOfBounds`] if `i >= len`.
    pub fn set_byte(&mut self, i: usize, b: u8) -> Result<(), Error> {
        let len = self.len();
        match self.buf.get_mut(i) {
            Some(slot) => {
                *slot = b;
                Ok(())
            }
            None => Err(Error::out_of_bounds("set_byte", i, len)),
        }
    }

    /// Returns a new vector holding the content followed by one zero byte,
    /// for handing to code that expects zero-terminated bytes.
    ///
    /// The copy has `capacity == len + 1`. Content bytes are copied as-is,
    /// so a zero written with [`set_byte`](ByteString::set_byte) shows up
    /// before the terminator.
    pub fn to_terminated(&self) -> Result<GrowVec<u8>, Error> {
        let len = self.len();
        let slots = len
            .checked_add(1)
            .ok_or_else(|| Error::overflow("to_terminated", len, 1))?;
        let mut out = GrowVec::with_capacity(slots)?;
        out.extend_from_slice(self.as_bytes())?;
        out.push(0)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{ByteString, Error};

    #[test]
    fn test_byte_at_bounds() {
        let s = ByteString::from_bytes(b"hi").unwrap();
        assert_eq!(s.byte_at(0), Some(b'h'));
        assert_eq!(s.byte_at(1), Some(b'i'));
        assert_eq!(s.byte_at(2), None);
        assert_eq!(s.try_byte_at(5), Err(Error::OutOfBounds { index: 5, len: 2 }));
    }

    #[test]
    fn test_set_byte_stays_in_content() {
        let mut s = ByteString::from_bytes(b"cat").unwrap();
        s.set_byte(0, b'b').unwrap();
        assert_eq!(s, "bat");
        assert_eq!(s.set_byte(3, b's'), Err(Error::OutOfBounds { index: 3, len: 3 }));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_terminated_shows_embedded_zero() {
        let mut s = ByteString::from_bytes(b"abc").unwrap();
        s.set_byte(1, 0).unwrap();
        let t = s.to_terminated().unwrap();
        assert_eq!(t.as_slice(), b"a\0c\0");
        assert_eq!(t.capacity(), 4);
        assert_eq!(s.len(), 3);
    }
}
