// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowVec`](crate::GrowVec) and
//! [`ByteString`](crate::ByteString).
//!
//! - `GrowVec<T>` serializes as a sequence of `len` elements and
//!   deserializes from any sequence. Elements are pushed one by one, so the
//!   resulting capacity follows the push policy.
//! - `ByteString` serializes as a byte array and deserializes from bytes,
//!   a string, or a sequence of integers.
//!
//! An allocation failure while deserializing becomes a custom error of the
//! deserializer.

// Crate imports
use crate::{bytes::ByteString, vec::GrowVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for GrowVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for VecVisitor<T> {
    type Value = GrowVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        // The length hint is not trusted; capacity grows by the push policy.
        let mut out = GrowVec::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for GrowVec<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor(PhantomData))
    }
}

impl Serialize for ByteString {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bytes(self.as_bytes())
    }
}

struct ByteStringVisitor;

impl<'de> de::Visitor<'de> for ByteStringVisitor {
    type Value = ByteString;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a byte string")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        ByteString::from_bytes(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        ByteString::from_bytes(v.as_bytes()).map_err(E::custom)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = ByteString::new();
        while let Some(b) = a.next_element::<u8>()? {
            out.append_byte(b).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for ByteString {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_byte_buf(ByteStringVisitor)
    }
}
