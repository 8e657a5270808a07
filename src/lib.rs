// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `grow-vec`
//!
//! A `no_std` + `alloc` growable vector with an explicit, predictable
//! capacity policy, and a byte string built on top of it.
//!
//! - [`GrowVec<T>`] owns a contiguous heap buffer of exactly
//!   [`capacity`](GrowVec::capacity) slots, of which the first
//!   [`len`](GrowVec::len) hold live values.
//! - [`ByteString`] is a `GrowVec<u8>` with byte-string operations and an
//!   explicit length. A zero-terminated copy is available on demand.
//!
//! ## Capacity policy
//!
//! Capacity changes only at well-defined points, see [`policy`]:
//!
//! - [`GrowVec::push`] and [`GrowVec::insert`] grow a full vector by one slot
//!   while capacity is below 4, and by half of the capacity after that.
//! - [`GrowVec::pop`] and [`GrowVec::remove`] halve the capacity once the
//!   vector is at most a quarter full.
//! - [`GrowVec::reserve`] grows to an exact capacity and never shrinks.
//! - [`GrowVec::clear`] drops every element and frees the buffer.
//! - Cloning produces a copy with `capacity == len`.
//!
//! ## Errors
//!
//! Operations that can fail return [`Error`] and leave the container
//! unchanged. That includes allocation: an allocator refusal is
//! [`Error::AllocFailed`], not an abort.
//!
//! Panics are limited to trait impls whose signatures cannot carry an
//! error, and they leave the container unchanged:
//! - `Index`/`IndexMut` (`v[i]`, `v[a..b]`) on out-of-range input, like slices;
//! - `Clone`, `Extend` and `FromIterator` on allocation failure, like `Vec`.
//!   Their fallible forms are [`GrowVec::try_clone`],
//!   [`GrowVec::try_extend_from_iter`] and [`GrowVec::try_from_iter`].
//!
//! Contract violations and allocation failures are also reported through
//! the [`log`] facade at `warn` level; capacity changes are traced at
//! `trace` level.
//!
//! ## Element ownership
//!
//! The vector owns its elements. Dropping it, [`clear`](GrowVec::clear) and
//! [`truncate`](GrowVec::truncate) drop them in index order. Removal methods
//! hand the removed value back to the caller.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for `GrowVec<T>` (as a sequence)
//!   and `ByteString` (as bytes).
//!
//! ## Example
//!
//! ```rust
//! use grow_vec::{ByteString, GrowVec};
//!
//! let mut v = GrowVec::new();
//! for i in 0..5 {
//!     v.push(i).unwrap();
//! }
//! assert_eq!(v.capacity(), 6);
//! assert_eq!(v.remove(0), Some(0));
//! assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
//!
//! let mut s = ByteString::from_bytes(b"hello").unwrap();
//! s.append_bytes(b", world").unwrap();
//! assert_eq!(s.find_bytes(b"world"), Some(7));
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod bytes;
mod error;
mod index;
mod iter;
pub mod policy;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use bytes::ByteString;
pub use error::Error;
pub use iter::IntoIter;
pub use vec::{DisplayWith, GrowVec};
