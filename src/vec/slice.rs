// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: by invariant `buf[..len]` is initialized and `len <= cap`.
        // For `len == 0` the dangling pointer is still aligned and non-null.
        unsafe { core::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` gives exclusive access.
        unsafe { core::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. The pointer is
    /// invalidated by any operation that changes the capacity.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Same caveats as [`as_ptr`](GrowVec::as_ptr). Writes beyond `len` do
    /// not change `len`.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }
}
