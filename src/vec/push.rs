// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

impl<T> GrowVec<T> {
    /// Appends `value`, growing by the capacity policy when full.
    ///
    /// If growth fails the vector is unchanged, `value` is dropped and the
    /// allocation error is returned.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.grow_for_one()?;

        // SAFETY: `grow_for_one` guarantees `len < capacity`.
        unsafe { self.buf.ptr().add(self.len).write(value) };

        self.len += 1;
        Ok(())
    }
}
