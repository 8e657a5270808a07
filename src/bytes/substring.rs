// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{bytes::ByteString, error::Error};

impl ByteString {
    /// Returns a new string holding bytes `[start, min(start + len, self.len()))`.
    ///
    /// - `len` reaching past the end is clamped, never an error.
    /// - Returns [`Error::OutOfBounds`] if `start >= self.len()`.
    pub fn substring(&self, start: usize, len: usize) -> Result<ByteString, Error> {
        let total = self.len();
        if start >= total {
            return Err(Error::out_of_bounds("substring", start, total));
        }
        let end = start + len.min(total - start);
        ByteString::from_bytes(&self.as_bytes()[start..end])
    }
}
