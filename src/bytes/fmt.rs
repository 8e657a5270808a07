// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting for [`ByteString`].
//!
//! - `Debug` renders the content in double quotes, escaping non-printable
//!   bytes (`"a\x00b"`). This is the debug dump of the string.
//! - `Display` renders the content as text, with invalid UTF-8 shown as
//!   U+FFFD.
//! - `fmt::Write` appends formatted text.

// Crate imports
use crate::bytes::ByteString;

// Core imports
use core::fmt::{self, Write};

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl Write for ByteString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_bytes(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
