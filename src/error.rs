// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `EchoR` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! property value validation, frame decoding, and property store lookups.

use thiserror::Error;

use crate::types::Epc;

/// The main error type for this library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error occurred during value validation or frame decoding.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A property was read before it was ever set.
    #[error("property {epc} not found")]
    PropertyNotFound {
        /// The property code that was requested.
        epc: Epc,
    },
}

/// Errors related to property value validation and wire decoding.
///
/// These errors occur when constructing a [`PropertyValue`](crate::PropertyValue)
/// from untrusted data, or when a SET payload violates the profile's rule for
/// the property code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A payload element is outside the 0-255 byte range.
    #[error("byte at index {index} is out of range: {value}")]
    ByteOutOfRange {
        /// Index of the offending element.
        index: usize,
        /// The value that was provided.
        value: i64,
    },

    /// A declared payload length exceeds the available bytes.
    #[error("truncated frame: declared {declared} bytes, {available} available")]
    TruncatedFrame {
        /// Length declared by the PDC byte.
        declared: usize,
        /// Bytes actually present after the PDC byte.
        available: usize,
    },

    /// The frame is empty (not even a length byte).
    #[error("empty frame")]
    EmptyFrame,

    /// The payload exceeds the 255-byte limit of the length byte.
    #[error("payload length {length} exceeds the 255-byte wire limit")]
    PayloadTooLong {
        /// Length of the payload that was provided.
        length: usize,
    },

    /// The payload length does not match the rule for this property.
    #[error("payload length {actual} does not match expected {expected}")]
    LengthMismatch {
        /// Length required by the validation rule.
        expected: usize,
        /// Length of the payload that was provided.
        actual: usize,
    },

    /// A single-byte value is outside the allowed numeric range.
    #[error("value 0x{value:02x} is out of range [0x{min:02x}, 0x{max:02x}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The value that was provided.
        value: u8,
    },

    /// A code is not in the fixed set of legal codes for this property.
    #[error("code 0x{0:02x} is not an accepted value")]
    InvalidCode(u8),

    /// An operating-mode code is not in the profile's mode table.
    #[error("unknown mode code 0x{0:02x}")]
    UnknownMode(u8),

    /// The payload is empty but the rule requires at least one byte.
    #[error("payload is empty")]
    EmptyPayload,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
