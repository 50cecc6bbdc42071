// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static per-device-kind configuration.
//!
//! A [`DeviceProfile`] is data, not code: it maps each settable property code
//! to a validation rule and a tagged effect, carries the operating-mode table
//! and the supported-property sets, and names the power-bearing property if
//! the device has one. The dispatcher interprets this table; the three
//! concrete profiles ([`climate`], [`lighting`], [`lock`]) only differ in
//! their tables.

mod climate;
mod lighting;
mod lock;

pub use climate::climate;
pub use lighting::lighting;
pub use lock::lock;

use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::error::ValueError;
use crate::property::PropertyValue;
use crate::types::{Eoj, Epc, Rgb};

/// Fan duty lookup table: one 16-bit PWM entry per level, index 0 = off,
/// indices 1-8 = levels L1-L8, monotonically increasing. Values are the
/// original 0-1023 calibration points scaled to the 16-bit duty range.
pub const FAN_DUTY_TABLE: [u16; 9] = fan_duty_table();

/// Table slot used for the AUTO fan level.
pub const AUTO_FAN_INDEX: usize = 5;

#[allow(clippy::cast_possible_truncation)]
const fn fan_duty_table() -> [u16; 9] {
    const POINTS: [u32; 9] = [0, 700, 750, 800, 850, 900, 950, 1000, 1023];
    let mut table = [0u16; 9];
    let mut i = 0;
    while i < POINTS.len() {
        table[i] = (POINTS[i] * 65535 / 1023) as u16;
        i += 1;
    }
    table
}

/// Maps a fan level code to its table index: 0x41 (AUTO) to slot 5,
/// 0x31-0x38 (L1-L8) to slots 1-8.
#[must_use]
pub fn fan_index(code: u8) -> Option<usize> {
    match code {
        0x41 => Some(AUTO_FAN_INDEX),
        0x31..=0x38 => Some(usize::from(code - 0x30)),
        _ => None,
    }
}

/// LED brightness for a fan table slot: `15 + 30 * index`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn fan_brightness(index: usize) -> u8 {
    (15 + 30 * index) as u8
}

/// Validation rule for one settable property.
#[derive(Debug, Clone)]
pub enum ValidationRule {
    /// Any payload is accepted.
    Any,
    /// The first payload byte must exist and fall in the range.
    FirstByteIn(RangeInclusive<u8>),
    /// The first payload byte must exist and be one of the listed codes.
    OneOf(&'static [u8]),
    /// The payload must have exactly this many bytes.
    ExactLength(usize),
    /// The first payload byte must be a code in the profile's mode table.
    ModeListed,
}

/// Effect applied when a validated SET reaches a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Store the value verbatim.
    Passthrough,
    /// Power on/off with hardware restore/shutdown.
    Power,
    /// Toggle the energy-saving rendering policy.
    EnergySaving,
    /// Fan level with duty and brightness derived from the lookup table.
    FanLevel,
    /// Air conditioner operating mode; derives color, fan level and setpoint.
    HvacMode,
    /// Temperature setpoint with per-mode mirror updates.
    Setpoint,
    /// Lighting mode; derives color and brightness level.
    LightingMode,
    /// Illuminance level 0-100.
    Brightness,
    /// Direct RGB write; forces the lighting mode to COLOR.
    RgbColor,
}

/// One row of the dispatch table.
#[derive(Debug, Clone)]
pub struct EpcHandler {
    /// Rule applied before the effect runs.
    pub rule: ValidationRule,
    /// Effect executed on success.
    pub effect: Effect,
}

/// One operating mode and the dependent properties it forces.
#[derive(Debug, Clone, Copy)]
pub struct ModeEntry {
    /// Display name.
    pub name: &'static str,
    /// Display color, `None` when the mode keeps the current color.
    pub color: Option<Rgb>,
    /// Default temperature setpoint (air conditioner modes).
    pub setpoint: Option<u8>,
    /// Illuminance level 0-100 (lighting modes).
    pub brightness: Option<u8>,
}

/// Power-bearing property configuration.
#[derive(Debug, Clone, Copy)]
pub struct PowerConfig {
    /// The on/off property code.
    pub epc: Epc,
    /// Byte value denoting "on".
    pub on: u8,
    /// Byte value denoting "off".
    pub off: u8,
}

/// Immutable configuration for one appliance kind.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    name: &'static str,
    eoj: Eoj,
    handlers: HashMap<Epc, EpcHandler>,
    mode_table: &'static [(u8, ModeEntry)],
    power: Option<PowerConfig>,
    initial: &'static [(u8, &'static [u8])],
    strip_len: usize,
    inf_epcs: &'static [u8],
    set_epcs: &'static [u8],
    get_epcs: &'static [u8],
}

impl DeviceProfile {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: &'static str,
        eoj: Eoj,
        handlers: HashMap<Epc, EpcHandler>,
        mode_table: &'static [(u8, ModeEntry)],
        power: Option<PowerConfig>,
        initial: &'static [(u8, &'static [u8])],
        strip_len: usize,
        inf_epcs: &'static [u8],
        set_epcs: &'static [u8],
        get_epcs: &'static [u8],
    ) -> Self {
        Self {
            name,
            eoj,
            handlers,
            mode_table,
            power,
            initial,
            strip_len,
            inf_epcs,
            set_epcs,
            get_epcs,
        }
    }

    /// Profile display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The object this profile answers for.
    #[must_use]
    pub fn eoj(&self) -> Eoj {
        self.eoj
    }

    /// Dispatch-table row for a property code, `None` when the code is not
    /// settable on this device.
    #[must_use]
    pub fn handler(&self, epc: Epc) -> Option<&EpcHandler> {
        self.handlers.get(&epc)
    }

    /// Mode table entry for a mode code.
    #[must_use]
    pub fn mode(&self, code: u8) -> Option<&ModeEntry> {
        self.mode_table
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, entry)| entry)
    }

    /// Power-bearing property configuration, if any.
    #[must_use]
    pub fn power(&self) -> Option<PowerConfig> {
        self.power
    }

    /// Boot-time property values.
    #[must_use]
    pub fn initial_properties(&self) -> &'static [(u8, &'static [u8])] {
        self.initial
    }

    /// Number of LED strip pixels driven by this device (0 when none).
    #[must_use]
    pub fn strip_len(&self) -> usize {
        self.strip_len
    }

    /// Codes announced on change (the 0x9D map).
    #[must_use]
    pub fn inf_epcs(&self) -> &'static [u8] {
        self.inf_epcs
    }

    /// Codes accepting SET (the 0x9E map).
    #[must_use]
    pub fn set_epcs(&self) -> &'static [u8] {
        self.set_epcs
    }

    /// Codes answering GET (the 0x9F map).
    #[must_use]
    pub fn get_epcs(&self) -> &'static [u8] {
        self.get_epcs
    }

    /// Applies the handler's rule to a payload.
    ///
    /// # Errors
    ///
    /// Returns the rule's [`ValueError`] on violation. Codes without a
    /// handler are the caller's concern; they never reach validation.
    pub fn validate(&self, epc: Epc, value: &PropertyValue) -> Result<(), ValueError> {
        let Some(handler) = self.handler(epc) else {
            return Ok(());
        };
        match &handler.rule {
            ValidationRule::Any => Ok(()),
            ValidationRule::FirstByteIn(range) => {
                let byte = value.first().ok_or(ValueError::EmptyPayload)?;
                if range.contains(&byte) {
                    Ok(())
                } else {
                    Err(ValueError::OutOfRange {
                        min: *range.start(),
                        max: *range.end(),
                        value: byte,
                    })
                }
            }
            ValidationRule::OneOf(codes) => {
                let byte = value.first().ok_or(ValueError::EmptyPayload)?;
                if codes.contains(&byte) {
                    Ok(())
                } else {
                    Err(ValueError::InvalidCode(byte))
                }
            }
            ValidationRule::ExactLength(expected) => {
                if value.len() == *expected {
                    Ok(())
                } else {
                    Err(ValueError::LengthMismatch {
                        expected: *expected,
                        actual: value.len(),
                    })
                }
            }
            ValidationRule::ModeListed => {
                let byte = value.first().ok_or(ValueError::EmptyPayload)?;
                if self.mode(byte).is_some() {
                    Ok(())
                } else {
                    Err(ValueError::UnknownMode(byte))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_duty_table_is_monotonic() {
        assert_eq!(FAN_DUTY_TABLE[0], 0);
        for pair in FAN_DUTY_TABLE.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(FAN_DUTY_TABLE[8], 65535);
    }

    #[test]
    fn fan_index_mapping() {
        assert_eq!(fan_index(0x41), Some(5));
        assert_eq!(fan_index(0x31), Some(1));
        assert_eq!(fan_index(0x38), Some(8));
        assert_eq!(fan_index(0x30), None);
        assert_eq!(fan_index(0x39), None);
    }

    #[test]
    fn fan_brightness_law() {
        assert_eq!(fan_brightness(0), 15);
        assert_eq!(fan_brightness(5), 165);
        assert_eq!(fan_brightness(8), 255);
    }

    #[test]
    fn validate_first_byte_range() {
        let profile = climate();
        let setpoint = Epc::SETPOINT;

        assert!(
            profile
                .validate(setpoint, &PropertyValue::from_bytes(&[0x19]))
                .is_ok()
        );
        assert_eq!(
            profile.validate(setpoint, &PropertyValue::from_bytes(&[0x40])),
            Err(ValueError::OutOfRange {
                min: 0x00,
                max: 0x32,
                value: 0x40
            })
        );
        assert_eq!(
            profile.validate(setpoint, &PropertyValue::empty()),
            Err(ValueError::EmptyPayload)
        );
    }

    #[test]
    fn validate_one_of() {
        let profile = climate();
        let power = Epc::OPERATION_STATUS;

        assert!(
            profile
                .validate(power, &PropertyValue::from_bytes(&[0x30]))
                .is_ok()
        );
        assert_eq!(
            profile.validate(power, &PropertyValue::from_bytes(&[0x32])),
            Err(ValueError::InvalidCode(0x32))
        );
    }

    #[test]
    fn validate_mode_listed() {
        let profile = climate();
        let mode = Epc::HVAC_MODE;

        assert!(
            profile
                .validate(mode, &PropertyValue::from_bytes(&[0x42]))
                .is_ok()
        );
        assert_eq!(
            profile.validate(mode, &PropertyValue::from_bytes(&[0x46])),
            Err(ValueError::UnknownMode(0x46))
        );
    }

    #[test]
    fn validate_exact_length() {
        let profile = lighting();
        let rgb = Epc::RGB_COLOR;

        assert!(
            profile
                .validate(rgb, &PropertyValue::from_bytes(&[10, 20, 30]))
                .is_ok()
        );
        assert_eq!(
            profile.validate(rgb, &PropertyValue::from_bytes(&[10, 20])),
            Err(ValueError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }
}
