// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

// Core imports
use core::fmt;

/// Debug dump of a [`GrowVec`] with a caller-supplied element formatter,
/// returned by [`GrowVec::display_with`].
///
/// Renders as:
///
/// ```text
/// [ e0 e1 ... ]
/// Size: <len>
/// Capacity: <capacity>
/// ```
///
/// This is an illustration aid, not a stable serialization format.
pub struct DisplayWith<'a, T, F> {
    vec: &'a GrowVec<T>,
    fmt_elem: F,
}

impl<T> GrowVec<T> {
    /// Returns a [`Display`](fmt::Display) adapter that dumps the elements,
    /// formatting each one with `fmt_elem`.
    ///
    /// ```rust
    /// use grow_vec::GrowVec;
    ///
    /// let v = GrowVec::try_from(&[1, 2][..]).unwrap();
    /// let dump = v.display_with(|x, f| write!(f, "{x}")).to_string();
    /// assert_eq!(dump, "[ 1 2 ]\nSize: 2\nCapacity: 2");
    /// ```
    pub fn display_with<F>(&self, fmt_elem: F) -> DisplayWith<'_, T, F>
    where
        F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        DisplayWith {
            vec: self,
            fmt_elem,
        }
    }
}

impl<T, F> fmt::Display for DisplayWith<'_, T, F>
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for item in self.vec.iter() {
            (self.fmt_elem)(item, f)?;
            f.write_str(" ")?;
        }
        f.write_str("]\n")?;
        writeln!(f, "Size: {}", self.vec.len())?;
        write!(f, "Capacity: {}", self.vec.capacity())
    }
}

impl<T: fmt::Debug, F> fmt::Debug for DisplayWith<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayWith")
            .field("vec", self.vec)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowVec;
    use alloc::string::ToString;

    #[test]
    fn test_dump_empty() {
        let v: GrowVec<u8> = GrowVec::new();
        let s = v.display_with(|x, f| write!(f, "{x}")).to_string();
        assert_eq!(s, "[ ]\nSize: 0\nCapacity: 0");
    }

    #[test]
    fn test_dump_uses_formatter() {
        let mut v: GrowVec<u8> = GrowVec::with_capacity(4).unwrap();
        v.extend_from_slice(&[10, 255]).unwrap();
        let s = v.display_with(|x, f| write!(f, "{x:#04x}")).to_string();
        assert_eq!(s, "[ 0x0a 0xff ]\nSize: 2\nCapacity: 4");
    }
}
