// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{bytes::ByteString, error::Error, vec::GrowVec};

impl ByteString {
    /// Constructs an empty string. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: GrowVec::new(),
        }
    }

    /// Constructs a string holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut s = Self::new();
        s.append_bytes(bytes)?;
        Ok(s)
    }

    /// Copies `self` into a string with its own storage.
    #[inline]
    pub fn try_clone(&self) -> Result<Self, Error> {
        Self::from_bytes(self.as_bytes())
    }

    /// Reserves room for `n` content bytes plus a terminator, without
    /// changing the content.
    pub fn reserve(&mut self, n: usize) -> Result<(), Error> {
        let slots = n
            .checked_add(1)
            .ok_or_else(|| Error::overflow("reserve", n, 1))?;
        self.buf.reserve(slots)
    }
}

impl Clone for ByteString {
    /// # Panics
    ///
    /// Panics if the allocation fails, like `Vec::clone`.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(s) => s,
            Err(err) => panic!("ByteString::clone: {err}"),
        }
    }
}

impl TryFrom<&[u8]> for ByteString {
    type Error = Error;
    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&str> for ByteString {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Error> {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<GrowVec<u8>> for ByteString {
    fn from(buf: GrowVec<u8>) -> Self {
        Self { buf }
    }
}

impl From<ByteString> for GrowVec<u8> {
    fn from(s: ByteString) -> Self {
        s.buf
    }
}

/// Appends every byte.
///
/// # Panics
///
/// Panics if an allocation fails, like `Vec::extend`; nothing is appended in
/// that case. Use [`append_bytes`](ByteString::append_bytes) to handle the
/// failure instead.
impl Extend<u8> for ByteString {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

/// # Panics
///
/// Panics if an allocation fails; see the `Extend<u8>` impl.
impl<'a> Extend<&'a u8> for ByteString {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

/// # Panics
///
/// Panics if an allocation fails, like `Vec::from_iter`.
impl FromIterator<u8> for ByteString {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            buf: GrowVec::from_iter(iter),
        }
    }
}
