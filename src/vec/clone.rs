// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowVec};

impl<T: Clone> GrowVec<T> {
    /// Clones into a new vector with its own storage and
    /// `capacity == self.len()`.
    ///
    /// Returns an allocation error instead of aborting.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut out = Self::with_capacity(self.len)?;
        out.insert_from_slice(0, self.as_slice())?;
        Ok(out)
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// # Panics
    ///
    /// Panics if the allocation fails, like `Vec::clone`.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(v) => v,
            Err(err) => panic!("GrowVec::clone: {err}"),
        }
    }
}
