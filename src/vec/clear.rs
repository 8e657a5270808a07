// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Drops every element in ascending order and releases the allocation.
    ///
    /// Afterwards `len == 0` and `capacity == 0`.
    pub fn clear(&mut self) {
        self.truncate(0);
        self.buf.release();
    }

    /// Drops the elements `[new_len..len)` if `new_len < len`; otherwise a
    /// no-op. The capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // Shorten first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: `[new_len..new_len+tail_len)` was initialized and is now
        // outside `[0, len)`.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(new_len), tail_len);
            ptr::drop_in_place(tail);
        }
    }
}
