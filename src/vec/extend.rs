// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Tries to extend `self` from an iterator.
    ///
    /// Semantics:
    /// - All-or-nothing: if any push fails, the elements appended so far are
    ///   dropped, `len` is restored and the error is returned.
    /// - Capacity grows by the push policy; capacity gained before a failure
    ///   is kept.
    /// - The source iterator may be partially consumed on error.
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let start = self.len;
        for item in iter {
            if let Err(err) = self.push(item) {
                self.truncate(start);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Builds a vector from an iterator, failing instead of aborting when an
    /// allocation cannot be made.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        v.try_extend_from_iter(iter)?;
        Ok(v)
    }

    /// Appends clones of `src`; equivalent to
    /// [`insert_from_slice`](GrowVec::insert_from_slice) at `len`.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.insert_from_slice(self.len, src)
    }
}

/// Appends every item.
///
/// # Panics
///
/// Panics if an allocation fails, like `Vec::extend`. Nothing is appended in
/// that case. Use [`try_extend_from_iter`](GrowVec::try_extend_from_iter) to
/// handle the failure instead.
impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(err) = self.try_extend_from_iter(iter) {
            panic!("GrowVec::extend: {err}");
        }
    }
}

/// # Panics
///
/// Panics if an allocation fails; see the `Extend<T>` impl.
impl<'a, T: Copy + 'a> Extend<&'a T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// Collects every item.
///
/// # Panics
///
/// Panics if an allocation fails, like `Vec::from_iter`. Use
/// [`try_from_iter`](GrowVec::try_from_iter) to handle the failure instead.
impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        match Self::try_from_iter(iter) {
            Ok(v) => v,
            Err(err) => panic!("GrowVec::from_iter: {err}"),
        }
    }
}

/// Clones `src` into a vector with `capacity == src.len()`.
impl<T: Clone> TryFrom<&[T]> for GrowVec<T> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::with_capacity(src.len())?;
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T; N]> for GrowVec<T> {
    type Error = Error;
    fn try_from(src: &[T; N]) -> Result<Self, Error> {
        Self::try_from(&src[..])
    }
}
