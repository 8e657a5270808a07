// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`GrowVec`](crate::GrowVec) and [`ByteString`](crate::ByteString).
//!
//! Every fallible operation leaves its container exactly as it was when it
//! returns one of these. They are `Copy` and implement `core::error::Error`.

// External imports
use thiserror::Error as ThisError;

/// Errors returned by operations on [`GrowVec`](crate::GrowVec) and
/// [`ByteString`](crate::ByteString).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// A required argument had a value the operation cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// An index or position was outside the current logical bounds.
    #[error("index {index} out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
    /// The operation needs at least one element.
    #[error("container is empty")]
    Empty,
    /// The requested capacity does not fit in the address space.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The allocator could not satisfy a request.
    #[error("allocation of {bytes} bytes failed")]
    AllocFailed { bytes: usize },
}

impl Error {
    /// Returns `true` for [`Error::CapacityOverflow`] and [`Error::AllocFailed`].
    #[inline]
    pub const fn is_alloc(&self) -> bool {
        matches!(self, Self::CapacityOverflow | Self::AllocFailed { .. })
    }

    // Constructors below report on the diagnostic channel before the error
    // reaches the caller.

    #[cold]
    pub(crate) fn out_of_bounds(op: &'static str, index: usize, len: usize) -> Self {
        log::warn!("{op}: index {index} out of bounds (len {len})");
        Self::OutOfBounds { index, len }
    }

    #[cold]
    pub(crate) fn empty(op: &'static str) -> Self {
        log::warn!("{op}: container is empty");
        Self::Empty
    }

    #[cold]
    pub(crate) fn overflow(op: &'static str, base: usize, extra: usize) -> Self {
        log::warn!("{op}: {base} + {extra} overflows");
        Self::CapacityOverflow
    }

    #[cold]
    pub(crate) fn invalid(op: &'static str, what: &'static str) -> Self {
        log::warn!("{op}: {what}");
        Self::InvalidArgument(what)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds { index: 4, len: 2 });
        assert_eq!(s, "index 4 out of bounds (len 2)");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::Empty.to_string(), "container is empty");
        assert_eq!(Error::CapacityOverflow.to_string(), "capacity overflow");
        assert_eq!(
            Error::AllocFailed { bytes: 64 }.to_string(),
            "allocation of 64 bytes failed"
        );
        assert_eq!(
            Error::InvalidArgument("count must be non-zero").to_string(),
            "invalid argument: count must be non-zero"
        );
    }

    #[test]
    fn test_overflow_constructor() {
        let err = Error::overflow("to_terminated", usize::MAX, 1);
        assert_eq!(err, Error::CapacityOverflow);
        assert!(err.is_alloc());
    }

    #[test]
    fn test_is_alloc() {
        assert!(Error::CapacityOverflow.is_alloc());
        assert!(Error::AllocFailed { bytes: 1 }.is_alloc());
        assert!(!Error::Empty.is_alloc());
        assert!(!Error::OutOfBounds { index: 0, len: 0 }.is_alloc());
    }
}
