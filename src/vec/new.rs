// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawBuf, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Constructs an empty vector with exactly `capacity` slots.
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocFailed`] if the
    /// allocation cannot be made; nothing is leaked in that case.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::with_capacity(capacity)?,
            len: 0,
        })
    }

    /// Constructs a vector holding `n` clones of `value`, with
    /// `len == capacity == n`.
    ///
    /// Returns [`Error::InvalidArgument`] if `n == 0`.
    pub fn from_elem(n: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        if n == 0 {
            return Err(Error::invalid("from_elem", "element count must be non-zero"));
        }
        let mut v = Self::with_capacity(n)?;
        for _ in 1..n {
            // SAFETY: capacity is exactly `n` and `len < n - 1` here.
            unsafe { v.buf.ptr().add(v.len).write(value.clone()) };
            v.len += 1;
        }
        // SAFETY: `len == n - 1 < n == capacity`.
        unsafe { v.buf.ptr().add(v.len).write(value) };
        v.len += 1;
        Ok(v)
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}
