// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowVec`](crate::GrowVec).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - panics on out-of-bounds or inverted ranges;
//! - supports every `SliceIndex` form, including inclusive ranges;
//! - views are restricted to the initialized prefix `[0..len)`.
//!
//! Use [`GrowVec::get`](crate::GrowVec::get) or
//! [`GrowVec::try_get`](crate::GrowVec::try_get) for checked access.

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for GrowVec<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowVec<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowVec;

    #[test]
    fn test_indexing_and_ranges() {
        let mut v: GrowVec<i32> = GrowVec::try_from(&[0, 1, 2, 3, 4][..]).unwrap();

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        v[4] = 40;
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 40]);
    }

    #[test]
    fn test_empty_ranges_work() {
        let v: GrowVec<i32> = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(&v[3..3], &[] as &[i32]);
        assert_eq!(&v[..0], &[] as &[i32]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_len_panics_even_with_spare_capacity() {
        let mut v: GrowVec<i32> = GrowVec::with_capacity(8).unwrap();
        v.push(1).unwrap();
        let _ = v[1];
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let v: GrowVec<i32> = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
        let _ = &v[2..1];
    }
}
