// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity policy for [`GrowVec`](crate::GrowVec).
//!
//! - Growth: below [`GROW_LINEAR_BELOW`] slots capacity grows by one;
//!   from there on it grows to `floor(capacity * 3 / 2)`.
//! - Shrink: after a removal leaves `len <= floor(capacity / 4)`, capacity
//!   halves, unless the halved capacity would be zero or smaller than `len`.
//!
//! All arithmetic is integer arithmetic; the results equal the
//! `floor(capacity * 1.5)`, `floor(capacity * 0.25)` and `floor(capacity * 0.5)`
//! forms for every capacity.

/// Capacities below this grow one slot at a time.
pub const GROW_LINEAR_BELOW: usize = 4;

/// Returns the capacity a full vector of `capacity` slots grows to,
/// or `None` if it would overflow `usize`.
#[inline]
pub const fn grown_capacity(capacity: usize) -> Option<usize> {
    if capacity < GROW_LINEAR_BELOW {
        capacity.checked_add(1)
    } else {
        capacity.checked_add(capacity / 2)
    }
}

/// Returns `true` if a vector holding `len` of `capacity` slots is sparse
/// enough to be shrunk.
#[inline]
pub const fn should_shrink(len: usize, capacity: usize) -> bool {
    len <= capacity / 4
}

/// Returns the capacity to shrink to after a removal, or `None` if the
/// vector should keep its current capacity.
#[inline]
pub const fn shrunk_capacity(len: usize, capacity: usize) -> Option<usize> {
    if !should_shrink(len, capacity) {
        return None;
    }
    let target = capacity / 2;
    if target == 0 || target < len {
        None
    } else {
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_linear_growth_below_four() {
        assert_eq!(grown_capacity(0), Some(1));
        assert_eq!(grown_capacity(1), Some(2));
        assert_eq!(grown_capacity(2), Some(3));
        assert_eq!(grown_capacity(3), Some(4));
    }

    #[test]
    fn test_geometric_growth_from_four() {
        assert_eq!(grown_capacity(4), Some(6));
        assert_eq!(grown_capacity(5), Some(7));
        assert_eq!(grown_capacity(6), Some(9));
        assert_eq!(grown_capacity(9), Some(13));
        assert_eq!(grown_capacity(100), Some(150));
    }

    #[test]
    fn test_growth_overflow_is_none() {
        assert_eq!(grown_capacity(usize::MAX), None);
        assert_eq!(grown_capacity(usize::MAX - 1), None);
    }

    #[test]
    fn test_shrink_thresholds() {
        // 2 <= 8/4, halve to 4
        assert_eq!(shrunk_capacity(2, 8), Some(4));
        // 3 > 8/4
        assert_eq!(shrunk_capacity(3, 8), None);
        // target would be zero
        assert_eq!(shrunk_capacity(0, 1), None);
        assert_eq!(shrunk_capacity(0, 2), Some(1));
        assert_eq!(shrunk_capacity(0, 0), None);
    }

    proptest! {
        #[test]
        fn growth_is_strictly_increasing(cap in 0usize..1_000_000) {
            let next = grown_capacity(cap).unwrap();
            prop_assert!(next > cap);
        }

        #[test]
        fn shrink_never_goes_below_len(len in 0usize..10_000, cap in 0usize..40_000) {
            prop_assume!(len <= cap);
            if let Some(target) = shrunk_capacity(len, cap) {
                prop_assert!(target >= len);
                prop_assert!(target > 0);
                prop_assert!(target < cap);
            }
        }
    }
}
