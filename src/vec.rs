// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowVec` type and its inherent API.
//!
//! `GrowVec<T>` is a heap-allocated, growable vector whose capacity follows the
//! policy in [`crate::policy`] exactly, so `capacity()` is a predictable
//! function of the operations performed. Methods mirror slice/`Vec` semantics
//! where they make sense; operations that can fail return
//! [`Error`](crate::Error) and leave the vector unchanged.

mod clear;
mod clone;
mod dump;
mod extend;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod replace;
mod reserve;
mod slice;

pub use dump::DisplayWith;

// Crate imports
use crate::{error::Error, raw::RawBuf};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, heap-allocated vector with a fixed capacity policy.
///
/// `GrowVec<T>` owns a contiguous allocation of `capacity()` slots and keeps
/// the first `len()` of them initialized.
///
/// # Layout and invariants
///
/// - `0 <= len <= capacity` after every public operation.
/// - Elements `[0, len)` are initialized, contiguous and densely packed.
/// - No allocation exists while the capacity is zero or `T` is zero-sized.
///
/// # Capacity policy
///
/// - [`push`](GrowVec::push) and [`insert`](GrowVec::insert) on a full vector
///   grow the capacity by one while it is below 4, and to
///   `floor(capacity * 1.5)` from then on.
/// - [`insert_from_slice`](GrowVec::insert_from_slice) and
///   [`reserve`](GrowVec::reserve) allocate exactly what they are asked for.
/// - After [`pop`](GrowVec::pop) or [`remove`](GrowVec::remove) leaves
///   `len <= floor(capacity / 4)`, the capacity halves (never below `len`,
///   never to zero). A failed shrink is reported and otherwise ignored.
///
/// # Element cleanup
///
/// Elements are dropped exactly once: when removed without being returned,
/// on [`clear`](GrowVec::clear) / [`truncate`](GrowVec::truncate), or when the
/// vector itself is dropped, in which case they are dropped in ascending
/// index order.
///
/// # Views and reallocation
///
/// Growing or shrinking may move the allocation. Every view into the vector
/// (`&[T]`, `&T`, iterators) borrows it, so holding a view across a mutating
/// call is rejected at compile time.
///
/// # Examples
///
/// ```rust
/// use grow_vec::GrowVec;
///
/// let mut v: GrowVec<u8> = GrowVec::new();
/// v.push(1).unwrap();
/// v.extend_from_slice(&[2, 3]).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.capacity(), 3);
/// ```
pub struct GrowVec<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> GrowVec<T> {
    /// Returns the number of slots the vector holds without reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Fallible variant of [`get`](GrowVec::get), returning
    /// [`Error::OutOfBounds`] when `i >= len`.
    #[inline]
    pub fn try_get(&self, i: usize) -> Result<&T, Error> {
        let len = self.len;
        self.get(i).ok_or_else(|| Error::out_of_bounds("get", i, len))
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element, or [`Error::Empty`].
    #[inline]
    pub fn try_first(&self) -> Result<&T, Error> {
        self.first().ok_or_else(|| Error::empty("front"))
    }

    /// Returns the last element, or [`Error::Empty`].
    #[inline]
    pub fn try_last(&self) -> Result<&T, Error> {
        self.last().ok_or_else(|| Error::empty("back"))
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x`.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is initialized; slice drop glue drops in
        // ascending order. `RawBuf` frees the allocation afterwards.
        unsafe { core::ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq> PartialEq<[T]> for GrowVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq> PartialEq<&[T]> for GrowVec<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: Eq> Eq for GrowVec<T> {}
impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for GrowVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for GrowVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
