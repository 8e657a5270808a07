// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

// Core imports
use core::ptr;

impl<T> GrowVec<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot right.
    ///
    /// - `index == len` appends.
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Grows by the capacity policy when full; on allocation failure the
    ///   vector is unchanged.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::out_of_bounds("insert", index, self.len));
        }
        self.grow_for_one()?;
        let len = self.len;
        let base = self.buf.ptr();

        // SAFETY: `len < capacity` after `grow_for_one`, so `[index+1..len+1)`
        // is in bounds. `ptr::copy` handles the overlap, and the slot at
        // `index` is overwritten without being dropped.
        unsafe {
            ptr::copy(base.add(index), base.add(index + 1), len - index);
            base.add(index).write(value);
        }

        self.len = len + 1;
        Ok(())
    }

    /// Inserts clones of `src` at `index`, shifting `[index..len)` right by
    /// `src.len()` slots.
    ///
    /// - `index == len` appends; an empty `src` is a no-op.
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - When the spare capacity is short, reserves exactly
    ///   `len + src.len()` slots; on allocation failure the vector is
    ///   unchanged.
    pub fn insert_from_slice(&mut self, index: usize, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if index > self.len {
            return Err(Error::out_of_bounds("insert_from_slice", index, self.len));
        }
        if src.is_empty() {
            return Ok(());
        }
        self.reserve_additional(src.len())?;
        let len = self.len;
        let count = src.len();
        let base = self.buf.ptr();

        // Shift right: [index..len) -> [index+count..len+count)
        // SAFETY: `len + count <= capacity` after the reserve.
        unsafe { ptr::copy(base.add(index), base.add(index + count), len - index) };

        // A panicking clone leaks the shifted tail rather than dropping it twice.
        self.len = index;
        for (k, item) in src.iter().enumerate() {
            // SAFETY: `index + k < index + count <= capacity`; the slot's old
            // bytes were moved by the shift above.
            unsafe { base.add(index + k).write(item.clone()) };
        }

        self.len = len + count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, GrowVec};
    use alloc::string::{String, ToString};

    #[test]
    fn test_insert_at_bounds_and_shift_correctly() {
        let mut v: GrowVec<i32> = GrowVec::new();
        v.insert(0, 1).unwrap(); // front into empty
        v.insert(1, 3).unwrap(); // tail
        v.insert(1, 2).unwrap(); // middle, shifts right
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.insert(3, 4).unwrap(); // exactly at len
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
        v.insert(0, 0).unwrap(); // full: grows 4 -> 6
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn test_insert_err_is_noop() {
        let mut v: GrowVec<i32> = GrowVec::try_from(&[10, 20][..]).unwrap();
        assert_eq!(
            v.insert(3, 99),
            Err(Error::OutOfBounds { index: 3, len: 2 })
        );
        assert_eq!(v.as_slice(), &[10, 20]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_insert_from_slice_middle_and_ends() {
        let mut v: GrowVec<u8> = GrowVec::try_from(&b"ad"[..]).unwrap();
        v.insert_from_slice(1, b"bc").unwrap();
        assert_eq!(v.as_slice(), b"abcd");
        assert_eq!(v.capacity(), 4);
        v.insert_from_slice(0, b">").unwrap();
        v.insert_from_slice(v.len(), b"<").unwrap();
        assert_eq!(v.as_slice(), b">abcd<");
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn test_insert_from_slice_uses_spare_capacity() {
        let mut v: GrowVec<u8> = GrowVec::with_capacity(10).unwrap();
        v.extend_from_slice(b"xy").unwrap();
        v.insert_from_slice(1, b"123").unwrap();
        assert_eq!(v.as_slice(), b"x123y");
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn test_insert_from_slice_empty_and_oob() {
        let mut v: GrowVec<u8> = GrowVec::try_from(&b"ab"[..]).unwrap();
        v.insert_from_slice(1, &[]).unwrap();
        assert_eq!(v.as_slice(), b"ab");
        assert_eq!(
            v.insert_from_slice(5, b"zz"),
            Err(Error::OutOfBounds { index: 5, len: 2 })
        );
        assert_eq!(v.as_slice(), b"ab");
    }

    #[test]
    fn test_insert_from_slice_clones_owned_values() {
        let mut v: GrowVec<String> = GrowVec::new();
        v.push("a".to_string()).unwrap();
        v.push("d".to_string()).unwrap();
        let src = ["b".to_string(), "c".to_string()];
        v.insert_from_slice(1, &src).unwrap();
        assert_eq!(v.as_slice(), &["a", "b", "c", "d"]);
        assert_eq!(src[0], "b");
    }
}
