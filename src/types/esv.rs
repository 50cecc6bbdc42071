// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ECHONET Lite service codes.

use std::fmt;

/// A command-kind code (ESV).
///
/// The wire protocol defines more service codes than listed here (responses,
/// error replies); this library collapses the inbound side to the four kinds
/// an appliance controller reacts to.
///
/// # Examples
///
/// ```
/// use echor_lib::types::Esv;
///
/// assert!(Esv::SetC.is_set());
/// assert!(!Esv::Get.is_set());
/// assert_eq!(Esv::from_code(0x61), Some(Esv::SetC));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Esv {
    /// Property value write, no response required (`SetI`).
    SetI,
    /// Property value write, response required (`SetC`).
    SetC,
    /// Property value read.
    Get,
    /// Status-change notification.
    Inf,
}

impl Esv {
    /// Returns the wire code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::SetI => 0x60,
            Self::SetC => 0x61,
            Self::Get => 0x62,
            Self::Inf => 0x73,
        }
    }

    /// Parses a wire code, returning `None` for codes this library does not
    /// dispatch on.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x60 => Some(Self::SetI),
            0x61 => Some(Self::SetC),
            0x62 => Some(Self::Get),
            0x73 => Some(Self::Inf),
            _ => None,
        }
    }

    /// Returns `true` for the two SET kinds that may mutate device state.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::SetI | Self::SetC)
    }
}

impl fmt::Display for Esv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SetI => "SETI",
            Self::SetC => "SETC",
            Self::Get => "GET",
            Self::Inf => "INF",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn esv_codes_roundtrip() {
        for esv in [Esv::SetI, Esv::SetC, Esv::Get, Esv::Inf] {
            assert_eq!(Esv::from_code(esv.code()), Some(esv));
        }
    }

    #[test]
    fn esv_unknown_code() {
        assert_eq!(Esv::from_code(0x74), None);
        assert_eq!(Esv::from_code(0x00), None);
    }

    #[test]
    fn esv_is_set() {
        assert!(Esv::SetI.is_set());
        assert!(Esv::SetC.is_set());
        assert!(!Esv::Get.is_set());
        assert!(!Esv::Inf.is_set());
    }

    #[test]
    fn esv_display() {
        assert_eq!(Esv::SetC.to_string(), "SETC");
        assert_eq!(Esv::Inf.to_string(), "INF");
    }
}
