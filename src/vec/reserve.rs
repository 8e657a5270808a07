// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Grows the capacity to exactly `new_capacity` if it is larger than the
    /// current one. Never shrinks and never changes `len`.
    ///
    /// On error the vector is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.buf.resize(new_capacity)
    }

    /// Reserves room for `additional` more elements, allocating exactly
    /// `len + additional` slots if the spare capacity is short.
    pub fn reserve_additional(&mut self, additional: usize) -> Result<(), Error> {
        let len = self.len;
        let needed = len
            .checked_add(additional)
            .ok_or_else(|| Error::overflow("reserve", len, additional))?;
        self.reserve(needed)
    }

    /// Makes room for one more element, growing by the capacity policy.
    pub(crate) fn grow_for_one(&mut self) -> Result<(), Error> {
        if self.len < self.capacity() {
            return Ok(());
        }
        let new_cap = policy::grown_capacity(self.capacity()).ok_or_else(|| {
            log::warn!("grow: capacity {} cannot grow further", self.capacity());
            Error::CapacityOverflow
        })?;
        self.buf.resize(new_cap)
    }

    /// Applies the shrink policy after a removal. Failure keeps the capacity.
    pub(crate) fn shrink_after_removal(&mut self) {
        let Some(target) = policy::shrunk_capacity(self.len, self.capacity()) else {
            return;
        };
        if let Err(err) = self.buf.resize(target) {
            log::debug!("shrink: keeping capacity {} ({err})", self.capacity());
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, GrowVec};

    #[test]
    fn test_reserve_grows_exactly_and_never_shrinks() {
        let mut v: GrowVec<u8> = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
        v.reserve(10).unwrap();
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.reserve(4).unwrap();
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn test_reserve_additional() {
        let mut v: GrowVec<u8> = GrowVec::try_from(&[1, 2][..]).unwrap();
        v.reserve_additional(5).unwrap();
        assert_eq!(v.capacity(), 7);
        assert_eq!(
            v.reserve_additional(usize::MAX),
            Err(Error::CapacityOverflow)
        );
        assert_eq!(v.capacity(), 7);
    }

    #[test]
    fn test_failed_reserve_is_noop() {
        let mut v: GrowVec<u64> = GrowVec::try_from(&[5, 6][..]).unwrap();
        assert!(v.reserve(usize::MAX).is_err());
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_slice(), &[5, 6]);
    }
}
