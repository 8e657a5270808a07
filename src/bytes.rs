// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `ByteString` type: a variable-length byte buffer on top of
//! [`GrowVec<u8>`](crate::GrowVec).
//!
//! A `ByteString` stores exactly its logical content; there is no trailing
//! zero byte inside. A zero-terminated copy is produced on demand by
//! [`ByteString::to_terminated`] for code that needs one.
//!
//! Bytes are not interpreted: no UTF-8 validation, no case folding.
//! Comparison and search are byte-wise.

mod access;
mod append;
mod fmt;
mod insert;
mod new;
mod remove;
mod search;
mod substring;

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{
    borrow::Borrow,
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::Deref,
};

/// A growable byte string with an explicit length.
///
/// All edits go through the owned [`GrowVec<u8>`], so capacity follows the
/// vector's growth and shrink policy. Insertion at or past the end appends.
///
/// # Examples
///
/// ```rust
/// use grow_vec::ByteString;
///
/// let mut s = ByteString::from_bytes(b"ac").unwrap();
/// s.insert_byte(1, b'b').unwrap();
/// assert_eq!(s, "abc");
/// s.remove_byte(0).unwrap();
/// assert_eq!(s.as_bytes(), b"bc");
/// assert_eq!(s.to_terminated().unwrap().as_slice(), b"bc\0");
/// ```
#[derive(Default)]
pub struct ByteString {
    pub(crate) buf: GrowVec<u8>,
}

impl ByteString {
    /// Returns the logical length in bytes. Never allocates.
    #[inline]
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the string holds no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the capacity of the owned vector.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Borrowed view of the content. The borrow ends before any mutation.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Read-only access to the owned vector.
    #[inline]
    pub fn as_vec(&self) -> &GrowVec<u8> {
        &self.buf
    }

    /// Lexicographic byte-wise comparison of the contents.
    #[inline]
    pub fn compare(&self, other: &ByteString) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }

    /// Returns `true` if the content equals `bytes`.
    #[inline]
    pub fn equals_bytes(&self, bytes: &[u8]) -> bool {
        self.as_bytes() == bytes
    }
}

impl Deref for ByteString {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
impl Eq for ByteString {}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.equals_bytes(other)
    }
}
impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.equals_bytes(other)
    }
}
impl<const N: usize> PartialEq<[u8; N]> for ByteString {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.equals_bytes(other)
    }
}
impl<const N: usize> PartialEq<&[u8; N]> for ByteString {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.equals_bytes(*other)
    }
}
impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        self.equals_bytes(other.as_bytes())
    }
}
impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.equals_bytes(other.as_bytes())
    }
}

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}
