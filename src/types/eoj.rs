// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ECHONET Lite object identifiers.

use std::fmt;

/// A 3-byte object identifier (EOJ).
///
/// An EOJ names one device instance as (class group, class, instance).
/// Commands carry a source and a destination EOJ; a controller only reacts
/// to commands addressed to its own object.
///
/// # Examples
///
/// ```
/// use echor_lib::types::Eoj;
///
/// let aircon = Eoj::HOME_AIR_CONDITIONER;
/// assert_eq!(aircon.bytes(), [0x01, 0x30, 0x01]);
/// assert_eq!(aircon.to_string(), "013001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Eoj([u8; 3]);

impl Eoj {
    /// Home air conditioner, instance 1.
    pub const HOME_AIR_CONDITIONER: Self = Self([0x01, 0x30, 0x01]);
    /// Electric lock, instance 1.
    pub const ELECTRIC_LOCK: Self = Self([0x02, 0x6F, 0x01]);
    /// General lighting, instance 1.
    pub const GENERAL_LIGHTING: Self = Self([0x02, 0x90, 0x01]);
    /// Controller, instance 1. Typical source object of inbound commands.
    pub const CONTROLLER: Self = Self([0x05, 0xFF, 0x01]);

    /// Creates an object identifier from its three bytes.
    #[must_use]
    pub const fn new(class_group: u8, class: u8, instance: u8) -> Self {
        Self([class_group, class, instance])
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 3] {
        self.0
    }

    /// Returns the class group code.
    #[must_use]
    pub const fn class_group(&self) -> u8 {
        self.0[0]
    }

    /// Returns the class code.
    #[must_use]
    pub const fn class(&self) -> u8 {
        self.0[1]
    }

    /// Returns the instance number.
    #[must_use]
    pub const fn instance(&self) -> u8 {
        self.0[2]
    }
}

impl fmt::Display for Eoj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl From<[u8; 3]> for Eoj {
    fn from(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }
}
