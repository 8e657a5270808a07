// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Removes and returns the element at `index`, shifting the tail left,
    /// then applies the shrink policy.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            log::debug!("remove: index {index} out of bounds (len {})", self.len);
            return None;
        }
        let len = self.len;
        let base = self.buf.ptr();

        // SAFETY: `index < len`, so the slot is initialized. Its bytes are
        // overwritten by the shift right after, so it is read exactly once.
        let out = unsafe { base.add(index).read() };

        // Shift left: [index+1..len) -> [index..len-1)
        // SAFETY: both ranges lie in `[0, len)`; `ptr::copy` handles overlap.
        unsafe { ptr::copy(base.add(index + 1), base.add(index), len - index - 1) };

        self.len = len - 1;
        self.shrink_after_removal();
        Some(out)
    }

    /// Fallible variant of [`remove`](GrowVec::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        self.remove(index)
            .ok_or_else(|| Error::out_of_bounds("remove", index, len))
    }
}
