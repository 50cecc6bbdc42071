// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length-prefixed property value codec.

use std::fmt;
use std::fmt::Write as _;

use crate::error::ValueError;

/// An encoded property value: a length byte (PDC) followed by that many data
/// bytes (EDT).
///
/// The length is derived from the payload and bounded at 255 bytes, so the
/// `length == data.len()` invariant holds by construction and the length
/// byte never lies. Construction from untyped integers is a
/// copy operation; the stored value is independent of the caller's buffer.
///
/// # Examples
///
/// ```
/// use echor_lib::PropertyValue;
///
/// let value = PropertyValue::from_bytes(&[0x30]);
/// assert_eq!(value.len(), 1);
/// assert_eq!(value.encode(), vec![0x01, 0x30]);
/// assert_eq!(value.to_hex_string(), "0130");
///
/// let decoded = PropertyValue::decode(&value.encode()).unwrap();
/// assert_eq!(decoded, value);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PropertyValue {
    data: Vec<u8>,
}

impl PropertyValue {
    /// Longest representable payload: the length byte caps the data at 255
    /// bytes.
    pub const MAX_LEN: usize = 255;

    /// Creates an empty value (length 0, no data).
    #[must_use]
    pub const fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a value by copying the given bytes.
    ///
    /// # Panics
    ///
    /// Panics when `data` is longer than [`MAX_LEN`](Self::MAX_LEN) bytes;
    /// such a payload has no wire representation. Untrusted lengths go
    /// through [`from_ints`](Self::from_ints) or [`decode`](Self::decode),
    /// which reject instead.
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        assert!(
            data.len() <= Self::MAX_LEN,
            "property payload exceeds the 255-byte wire limit"
        );
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates a value from untyped integers, validating the payload fits
    /// the length byte and every element is in the 0-255 byte range.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::PayloadTooLong`] for more than
    /// [`MAX_LEN`](Self::MAX_LEN) elements, and
    /// [`ValueError::ByteOutOfRange`] naming the first offending element.
    pub fn from_ints(values: &[i64]) -> Result<Self, ValueError> {
        if values.len() > Self::MAX_LEN {
            return Err(ValueError::PayloadTooLong {
                length: values.len(),
            });
        }
        let mut data = Vec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            let byte =
                u8::try_from(value).map_err(|_| ValueError::ByteOutOfRange { index, value })?;
            data.push(byte);
        }
        Ok(Self { data })
    }

    /// Decodes a length-prefixed frame: one PDC byte followed by exactly that
    /// many data bytes. Trailing bytes beyond the declared length are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::EmptyFrame`] when not even the length byte is
    /// present, and [`ValueError::TruncatedFrame`] when the declared length
    /// exceeds the available bytes.
    pub fn decode(frame: &[u8]) -> Result<Self, ValueError> {
        let (&pdc, rest) = frame.split_first().ok_or(ValueError::EmptyFrame)?;
        let declared = usize::from(pdc);
        if rest.len() < declared {
            return Err(ValueError::TruncatedFrame {
                declared,
                available: rest.len(),
            });
        }
        Ok(Self {
            data: rest[..declared].to_vec(),
        })
    }

    /// Encodes the value as a length byte followed by the data bytes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(self.data.len() + 1);
        frame.push(self.pdc());
        frame.extend_from_slice(&self.data);
        frame
    }

    /// Replaces the payload, recomputing the length.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ByteOutOfRange`] on any out-of-range element.
    pub fn set_data(&mut self, values: &[i64]) -> Result<(), ValueError> {
        self.data = Self::from_ints(values)?.data;
        Ok(())
    }

    /// Returns the payload bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the first payload byte, `None` when the value is empty.
    ///
    /// Single-byte properties (power, mode, fan level) are read through this.
    #[must_use]
    pub fn first(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// Returns the payload length (the PDC value).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when the value carries no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length byte as transmitted on the wire.
    ///
    /// Payloads are bounded at [`MAX_LEN`](Self::MAX_LEN) at construction,
    /// so the cast is lossless.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pdc(&self) -> u8 {
        self.data.len() as u8
    }

    /// Formats the value as lower-case hex with no separators, length byte
    /// first. Byte-for-byte reproducible; used for wire-compatible logging.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut out = String::with_capacity(2 + self.data.len() * 2);
        let _ = write!(out, "{:02x}", self.pdc());
        for byte in &self.data {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl From<&[u8]> for PropertyValue {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}
