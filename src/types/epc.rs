// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ECHONET Lite property codes.

use std::fmt;

/// An 8-bit property code (EPC).
///
/// An EPC identifies one addressable attribute of a device object, such as
/// the operation status or the temperature setpoint. Codes are unique within
/// a device's property store.
///
/// # Examples
///
/// ```
/// use echor_lib::types::Epc;
///
/// let epc = Epc::OPERATION_STATUS;
/// assert_eq!(epc.code(), 0x80);
/// assert_eq!(epc.to_string(), "0x80");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Epc(u8);

impl Epc {
    /// Operation status (power on/off).
    pub const OPERATION_STATUS: Self = Self(0x80);
    /// Installation location.
    pub const INSTALLATION_LOCATION: Self = Self(0x81);
    /// Standard version information.
    pub const SPEC_VERSION: Self = Self(0x82);
    /// Fault status.
    pub const FAULT_STATUS: Self = Self(0x88);
    /// Manufacturer code.
    pub const MANUFACTURER: Self = Self(0x8A);
    /// Production date.
    pub const PRODUCTION_DATE: Self = Self(0x8E);
    /// Power-saving operation setting.
    pub const ENERGY_SAVING: Self = Self(0x8F);
    /// Status-change announcement property map.
    pub const INF_PROPERTY_MAP: Self = Self(0x9D);
    /// SET property map.
    pub const SET_PROPERTY_MAP: Self = Self(0x9E);
    /// GET property map.
    pub const GET_PROPERTY_MAP: Self = Self(0x9F);
    /// Air flow rate setting (air conditioner).
    pub const AIR_FLOW: Self = Self(0xA0);
    /// Operation mode setting (air conditioner).
    pub const HVAC_MODE: Self = Self(0xB0);
    /// Illuminance level 0-100 (general lighting shares 0xB0 with the air
    /// conditioner mode; the profiles never overlap).
    pub const BRIGHTNESS: Self = Self(0xB0);
    /// Temperature setpoint (air conditioner).
    pub const SETPOINT: Self = Self(0xB3);
    /// Relative humidity setpoint for dehumidification.
    pub const HUMIDITY_SETPOINT: Self = Self(0xB4);
    /// Cooling-mode temperature setpoint mirror.
    pub const COOL_SETPOINT: Self = Self(0xB5);
    /// Heating-mode temperature setpoint mirror.
    pub const HEAT_SETPOINT: Self = Self(0xB6);
    /// Lighting mode setting (general lighting shares 0xB6 with the heating
    /// mirror of the air conditioner; the profiles never overlap).
    pub const LIGHTING_MODE: Self = Self(0xB6);
    /// Dehumidification-mode temperature setpoint mirror.
    pub const DRY_SETPOINT: Self = Self(0xB7);
    /// Measured relative humidity.
    pub const MEASURED_HUMIDITY: Self = Self(0xBA);
    /// Measured room temperature.
    pub const MEASURED_TEMPERATURE: Self = Self(0xBB);
    /// RGB color setting (general lighting).
    pub const RGB_COLOR: Self = Self(0xC0);
    /// Lock state (electric lock).
    pub const LOCK_STATE: Self = Self(0xE0);
    /// Door open/close state (electric lock).
    pub const DOOR_STATE: Self = Self(0xE3);

    /// Creates a property code from its raw byte.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Returns the raw code byte.
    #[must_use]
    pub const fn code(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Epc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

impl From<u8> for Epc {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epc_display() {
        assert_eq!(Epc::new(0x80).to_string(), "0x80");
        assert_eq!(Epc::new(0xB3).to_string(), "0xb3");
    }

    #[test]
    fn epc_constants() {
        assert_eq!(Epc::OPERATION_STATUS.code(), 0x80);
        assert_eq!(Epc::AIR_FLOW.code(), 0xA0);
        assert_eq!(Epc::LOCK_STATE.code(), 0xE0);
    }

    #[test]
    fn epc_from_u8() {
        let epc: Epc = 0xC0.into();
        assert_eq!(epc, Epc::RGB_COLOR);
    }

    #[test]
    fn epc_ordering() {
        assert!(Epc::OPERATION_STATUS < Epc::AIR_FLOW);
    }
}
