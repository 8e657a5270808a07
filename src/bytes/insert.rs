// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{bytes::ByteString, error::Error};

// Positions at or past the end append; there is no out-of-bounds insert.

impl ByteString {
    /// Inserts `b` before position `i`, or appends if `i >= len`.
    pub fn insert_byte(&mut self, i: usize, b: u8) -> Result<(), Error> {
        if i >= self.len() {
            return self.append_byte(b);
        }
        self.buf.insert(i, b)
    }

    /// Inserts `bytes` before position `i`, or appends if `i >= len`.
    pub fn insert_bytes(&mut self, i: usize, bytes: &[u8]) -> Result<(), Error> {
        if i >= self.len() {
            return self.append_bytes(bytes);
        }
        self.buf.insert_from_slice(i, bytes)
    }

    /// Inserts the content of `other` before position `i`, or appends if
    /// `i >= len`.
    #[inline]
    pub fn insert_string(&mut self, i: usize, other: &ByteString) -> Result<(), Error> {
        self.insert_bytes(i, other.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::ByteString;

    #[test]
    fn test_insert_byte_positions() {
        let mut s = ByteString::from_bytes(b"bd").unwrap();
        s.insert_byte(0, b'a').unwrap();
        s.insert_byte(2, b'c').unwrap();
        s.insert_byte(4, b'e').unwrap(); // == len
        s.insert_byte(99, b'f').unwrap(); // past the end
        assert_eq!(s, "abcdef");
    }

    #[test]
    fn test_insert_bytes_and_string() {
        let mut s = ByteString::from_bytes(b"hd").unwrap();
        s.insert_bytes(1, b"ello worl").unwrap();
        assert_eq!(s, "hello world");
        let bang = ByteString::from_bytes(b"!").unwrap();
        s.insert_string(s.len(), &bang).unwrap();
        assert_eq!(s, "hello world!");
        s.insert_bytes(0, b"").unwrap();
        assert_eq!(s.len(), 12);
    }

    #[test]
    fn test_insert_into_empty_appends() {
        let mut s = ByteString::new();
        s.insert_bytes(0, b"xy").unwrap();
        s.insert_byte(0, b'w').unwrap();
        assert_eq!(s, "wxy");
        assert_eq!(s.to_terminated().unwrap().as_slice(), b"wxy\0");
    }
}
