// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! General lighting profile.

use std::collections::HashMap;

use crate::types::{Eoj, Epc, Rgb};

use super::{DeviceProfile, Effect, EpcHandler, ModeEntry, PowerConfig, ValidationRule};

/// Lighting modes: each fixes brightness and/or color. COLOR keeps whatever
/// RGB triple is currently set.
const MODES: &[(u8, ModeEntry)] = &[
    (
        0x41,
        ModeEntry {
            name: "AUTO",
            color: Some(Rgb::WHITE),
            setpoint: None,
            brightness: Some(70),
        },
    ),
    (
        0x42,
        ModeEntry {
            name: "NORMAL",
            color: Some(Rgb::WHITE),
            setpoint: None,
            brightness: Some(100),
        },
    ),
    (
        0x43,
        ModeEntry {
            name: "WARM",
            color: Some(Rgb::new(255, 150, 0)),
            setpoint: None,
            brightness: Some(20),
        },
    ),
    (
        0x45,
        ModeEntry {
            name: "COLOR",
            color: None,
            setpoint: None,
            brightness: Some(50),
        },
    ),
];

/// Boot-time property values.
const INITIAL: &[(u8, &[u8])] = &[
    (0x80, &[0x31]),                   // power: off
    (0x88, &[0x42]),                   // no fault
    (0x8A, &[0x00, 0x00, 0x77]),       // manufacturer code
    (0x8E, &[0x07, 0xE8, 0x01, 0x01]), // production date
    (0xB0, &[100]),                    // illuminance level: 100%
    (0xB6, &[0x42]),                   // mode: NORMAL
    (0xC0, &[255, 255, 255]),          // color: white
    (0x9D, &[0x80, 0xB6]),
    (0x9E, &[0x80, 0xB0, 0xB6, 0xC0]),
    (
        0x9F,
        &[
            0x80, 0x81, 0x82, 0x83, 0x88, 0x8A, 0x8E, 0xB0, 0xB6, 0xC0, 0x9D, 0x9E, 0x9F,
        ],
    ),
];

/// Builds the general lighting profile.
///
/// Fourteen-pixel LED strip; brightness is a 0-100 percentage, a direct RGB
/// write forces the mode to COLOR.
#[must_use]
pub fn lighting() -> DeviceProfile {
    let mut handlers = HashMap::new();
    handlers.insert(
        Epc::OPERATION_STATUS,
        EpcHandler {
            rule: ValidationRule::OneOf(&[0x30, 0x31]),
            effect: Effect::Power,
        },
    );
    handlers.insert(
        Epc::INSTALLATION_LOCATION,
        EpcHandler {
            rule: ValidationRule::Any,
            effect: Effect::Passthrough,
        },
    );
    handlers.insert(
        Epc::FAULT_STATUS,
        EpcHandler {
            rule: ValidationRule::Any,
            effect: Effect::Passthrough,
        },
    );
    handlers.insert(
        Epc::BRIGHTNESS,
        EpcHandler {
            rule: ValidationRule::FirstByteIn(0..=100),
            effect: Effect::Brightness,
        },
    );
    handlers.insert(
        Epc::LIGHTING_MODE,
        EpcHandler {
            rule: ValidationRule::ModeListed,
            effect: Effect::LightingMode,
        },
    );
    handlers.insert(
        Epc::RGB_COLOR,
        EpcHandler {
            rule: ValidationRule::ExactLength(3),
            effect: Effect::RgbColor,
        },
    );

    DeviceProfile::new(
        "general lighting",
        Eoj::GENERAL_LIGHTING,
        handlers,
        MODES,
        Some(PowerConfig {
            epc: Epc::OPERATION_STATUS,
            on: 0x30,
            off: 0x31,
        }),
        INITIAL,
        14,
        &[0x80, 0xB6],
        &[0x80, 0xB0, 0xB6, 0xC0],
        &[
            0x80, 0x81, 0x82, 0x83, 0x88, 0x8A, 0x8E, 0xB0, 0xB6, 0xC0, 0x9D, 0x9E, 0x9F,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_identity() {
        let profile = lighting();
        assert_eq!(profile.eoj(), Eoj::GENERAL_LIGHTING);
        assert_eq!(profile.strip_len(), 14);
    }

    #[test]
    fn mode_table_contents() {
        let profile = lighting();

        let warm = profile.mode(0x43).unwrap();
        assert_eq!(warm.color, Some(Rgb::new(255, 150, 0)));
        assert_eq!(warm.brightness, Some(20));

        let color = profile.mode(0x45).unwrap();
        assert!(color.color.is_none());
        assert_eq!(color.brightness, Some(50));

        // 0x44 is not a lighting mode.
        assert!(profile.mode(0x44).is_none());
    }

    #[test]
    fn rgb_has_exact_length_rule() {
        let profile = lighting();
        let handler = profile.handler(Epc::RGB_COLOR).unwrap();
        assert!(matches!(handler.rule, ValidationRule::ExactLength(3)));
        assert_eq!(handler.effect, Effect::RgbColor);
    }
}
