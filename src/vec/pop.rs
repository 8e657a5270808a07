// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Removes and returns the last element, then applies the shrink policy.
    ///
    /// Dropping the returned value runs its cleanup. Returns `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            log::debug!("pop: vector is empty");
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was initialized and is now
        // outside `[0, len)`, so it is read exactly once.
        let out = unsafe { self.buf.ptr().add(self.len).read() };
        self.shrink_after_removal();
        Some(out)
    }

    /// Fallible variant of [`pop`](GrowVec::pop), returning [`Error::Empty`].
    #[inline]
    pub fn try_pop(&mut self) -> Result<T, Error> {
        self.pop().ok_or_else(|| Error::empty("pop"))
    }
}
