// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Overwrites the element at `index` with `value` and returns the old
    /// element. Dropping the returned value runs its cleanup.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`; `value` is dropped.
    #[inline]
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, Error> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(Error::out_of_bounds("replace", index, len)),
        }
    }
}
