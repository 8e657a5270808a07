// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{bytes::ByteString, error::Error};

impl ByteString {
    /// Appends `bytes`. Appending an empty slice is a no-op.
    ///
    /// On allocation failure the string is unchanged.
    #[inline]
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.buf.extend_from_slice(bytes)
    }

    /// Appends the content of `other`.
    ///
    /// Appending a string to itself goes through a copy:
    /// `s.append_string(&s.clone())`.
    #[inline]
    pub fn append_string(&mut self, other: &ByteString) -> Result<(), Error> {
        self.append_bytes(other.as_bytes())
    }

    /// Appends one byte, growing by the vector's push policy.
    #[inline]
    pub fn append_byte(&mut self, b: u8) -> Result<(), Error> {
        self.buf.push(b)
    }
}
