// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{bytes::ByteString, error::Error};

impl ByteString {
    /// Removes and returns the byte at `i`.
    ///
    /// Returns [`Error::OutOfBounds`] if `i >= len`; the string is unchanged.
    pub fn remove_byte(&mut self, i: usize) -> Result<u8, Error> {
        let len = self.len();
        self.buf
            .remove(i)
            .ok_or_else(|| Error::out_of_bounds("remove_byte", i, len))
    }

    /// Empties the string and releases its storage.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{ByteString, Error};

    #[test]
    fn test_remove_byte() {
        let mut s = ByteString::from_bytes(b"abc").unwrap();
        assert_eq!(s.remove_byte(1), Ok(b'b'));
        assert_eq!(s, "ac");
        assert_eq!(s.remove_byte(2), Err(Error::OutOfBounds { index: 2, len: 2 }));
        assert_eq!(s, "ac");
        assert_eq!(s.remove_byte(1), Ok(b'c'));
        assert_eq!(s.remove_byte(0), Ok(b'a'));
        assert!(s.is_empty());
        assert!(s.remove_byte(0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut s = ByteString::from_bytes(b"abc").unwrap();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.capacity(), 0);
        assert_eq!(s.to_terminated().unwrap().as_slice(), b"\0");
        s.append_bytes(b"z").unwrap();
        assert_eq!(s, "z");
    }
}
