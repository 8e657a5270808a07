// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::bytes::ByteString;

impl ByteString {
    /// Index of the first occurrence of `b`, if any.
    #[inline]
    pub fn find_byte(&self, b: u8) -> Option<usize> {
        self.as_bytes().iter().position(|&x| x == b)
    }

    /// Index of the first occurrence of `needle`, if any. An empty needle
    /// is never found.
    pub fn find_bytes(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.len() {
            return None;
        }
        self.as_bytes()
            .windows(needle.len())
            .position(|window| window == needle)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::ByteString;

    #[test]
    fn test_find_byte() {
        let s = ByteString::from_bytes(b"banana").unwrap();
        assert_eq!(s.find_byte(b'a'), Some(1));
        assert_eq!(s.find_byte(b'b'), Some(0));
        assert_eq!(s.find_byte(b'z'), None);
        // no terminator to find
        assert_eq!(s.find_byte(0), None);
    }

    #[test]
    fn test_find_bytes() {
        let s = ByteString::from_bytes(b"banana").unwrap();
        assert_eq!(s.find_bytes(b"ana"), Some(1));
        assert_eq!(s.find_bytes(b"nan"), Some(2));
        assert_eq!(s.find_bytes(b"banana"), Some(0));
        assert_eq!(s.find_bytes(b"bananas"), None);
        assert_eq!(s.find_bytes(b""), None);
        assert_eq!(ByteString::new().find_bytes(b"a"), None);
    }
}
