// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowVec`](crate::GrowVec).
//!
//! - `IntoIter<T>` yields by value, supports `DoubleEndedIterator`,
//!   `ExactSizeIterator` and `FusedIterator`, and drops whatever it did not
//!   yield.
//! - `&GrowVec` and `&mut GrowVec` iterate as slices.

// Crate imports
use crate::{raw::RawBuf, vec::GrowVec};

// Core imports
use core::{fmt, iter::FusedIterator, mem, ptr};

/// Owned iterator returned by `GrowVec::into_iter()`.
///
/// Invariant: slots `[front, back)` of `buf` are initialized and not yet
/// yielded; every other slot is logically uninitialized.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is initialized by invariant.
        unsafe { core::slice::from_raw_parts(self.buf.ptr().add(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside `[front, back)` and is now outside it.
            Some(unsafe { self.buf.ptr().add(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old `back - 1` was inside `[front, back)`.
            Some(unsafe { self.buf.ptr().add(self.back).read() })
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rem = self.back - self.front;
        let front = self.front;
        self.front = self.back;
        // SAFETY: `[front, front+rem)` held the unyielded, initialized values.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(front), rem);
            ptr::drop_in_place(tail);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // The elements now belong to the iterator.
        self.len = 0;
        let buf = mem::replace(&mut self.buf, RawBuf::new());
        IntoIter { buf, front: 0, back }
    }
}
