// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Owned, uninitialized backing storage for [`GrowVec`](crate::GrowVec).
//!
//! `RawBuf<T>` owns an allocation of exactly `cap` slots of `T` and knows
//! nothing about which slots hold live values. It never drops elements;
//! the owning vector does that before the buffer goes away.
//!
//! Invariants:
//! - `cap == 0` or `T` is zero-sized ⇒ no allocation; `ptr` is dangling.
//! - otherwise `ptr` came from the global allocator with
//!   `Layout::array::<T>(cap)`.

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::alloc::{alloc, dealloc, realloc, Layout};

// Core imports
use core::{marker::PhantomData, mem, ptr::NonNull};

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuf<T>` uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access to `RawBuf<T>` only hands out shared access to `T`.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// An empty buffer. Does not allocate.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// A buffer of exactly `cap` slots.
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, Error> {
        let mut buf = Self::new();
        buf.resize(cap)?;
        Ok(buf)
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Moves the buffer to an allocation of exactly `new_cap` slots.
    ///
    /// The first `min(cap, new_cap)` slots keep their bytes. The caller must
    /// not hold live values in slots `>= new_cap`. On error nothing changes.
    pub(crate) fn resize(&mut self, new_cap: usize) -> Result<(), Error> {
        if new_cap == self.cap {
            return Ok(());
        }
        if Self::IS_ZST {
            self.cap = new_cap;
            return Ok(());
        }
        if new_cap == 0 {
            self.release();
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| {
            log::warn!("raw buffer: capacity {new_cap} overflows the address space");
            Error::CapacityOverflow
        })?;

        let new_ptr = if self.cap == 0 {
            // SAFETY: `new_layout` has non-zero size (`new_cap > 0`, `T` not a ZST).
            unsafe { alloc(new_layout) }
        } else {
            let old_layout = self.layout();
            // SAFETY: `self.ptr` was allocated by the global allocator with
            // `old_layout`; `new_layout.size()` is non-zero and was validated
            // by `Layout::array` to not overflow `isize` when rounded to the
            // same alignment.
            unsafe { realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size()) }
        };

        let Some(new_ptr) = NonNull::new(new_ptr.cast::<T>()) else {
            log::warn!(
                "raw buffer: allocation of {} bytes failed",
                new_layout.size()
            );
            return Err(Error::AllocFailed {
                bytes: new_layout.size(),
            });
        };

        log::trace!("raw buffer: capacity {} -> {}", self.cap, new_cap);
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the allocation (if any) and resets to an empty buffer.
    pub(crate) fn release(&mut self) {
        if !Self::IS_ZST && self.cap > 0 {
            let layout = self.layout();
            // SAFETY: `self.ptr` was allocated by the global allocator with
            // `layout`, and is replaced by a dangling pointer right after.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    fn layout(&self) -> Layout {
        // The current capacity was validated by `Layout::array` when it was
        // allocated, so recomputing cannot fail.
        match Layout::array::<T>(self.cap) {
            Ok(layout) => layout,
            Err(_) => unreachable!("allocated capacity has a valid layout"),
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::RawBuf;
    use crate::Error;

    #[test]
    fn test_new_does_not_allocate() {
        let buf: RawBuf<u64> = RawBuf::new();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn test_resize_grow_keeps_prefix() {
        let mut buf: RawBuf<u32> = RawBuf::with_capacity(2).unwrap();
        unsafe {
            buf.ptr().write(7);
            buf.ptr().add(1).write(9);
        }
        buf.resize(10).unwrap();
        assert_eq!(buf.capacity(), 10);
        unsafe {
            assert_eq!(buf.ptr().read(), 7);
            assert_eq!(buf.ptr().add(1).read(), 9);
        }
        buf.resize(1).unwrap();
        assert_eq!(buf.capacity(), 1);
        unsafe {
            assert_eq!(buf.ptr().read(), 7);
        }
    }

    #[test]
    fn test_resize_to_zero_releases() {
        let mut buf: RawBuf<u8> = RawBuf::with_capacity(16).unwrap();
        buf.resize(0).unwrap();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn test_overflowing_capacity_is_rejected_and_noop() {
        let mut buf: RawBuf<u64> = RawBuf::with_capacity(3).unwrap();
        assert_eq!(buf.resize(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(buf.capacity(), 3);
        assert!(RawBuf::<u64>::with_capacity(usize::MAX / 4).is_err());
    }

    #[test]
    fn test_zst_tracks_capacity_without_allocating() {
        let mut buf: RawBuf<()> = RawBuf::new();
        buf.resize(usize::MAX).unwrap();
        assert_eq!(buf.capacity(), usize::MAX);
        buf.resize(0).unwrap();
        assert_eq!(buf.capacity(), 0);
    }
}
