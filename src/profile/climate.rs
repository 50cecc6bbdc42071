// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home air conditioner profile.

use std::collections::HashMap;

use crate::types::{Eoj, Epc, Rgb};

use super::{DeviceProfile, Effect, EpcHandler, ModeEntry, PowerConfig, ValidationRule};

/// Operating modes: each forces a display color and a default setpoint.
/// FAN mode carries the "undefined" setpoint marker 0xFD.
const MODES: &[(u8, ModeEntry)] = &[
    (
        0x41,
        ModeEntry {
            name: "AUTO",
            color: Some(Rgb::WHITE),
            setpoint: Some(0x19),
            brightness: None,
        },
    ),
    (
        0x42,
        ModeEntry {
            name: "COOL",
            color: Some(Rgb::new(0, 0, 255)),
            setpoint: Some(0x19),
            brightness: None,
        },
    ),
    (
        0x43,
        ModeEntry {
            name: "HEAT",
            color: Some(Rgb::new(255, 35, 0)),
            setpoint: Some(0x19),
            brightness: None,
        },
    ),
    (
        0x44,
        ModeEntry {
            name: "DRY",
            color: Some(Rgb::new(0, 255, 255)),
            setpoint: Some(0x19),
            brightness: None,
        },
    ),
    (
        0x45,
        ModeEntry {
            name: "FAN",
            color: Some(Rgb::new(0, 250, 50)),
            setpoint: Some(0xFD),
            brightness: None,
        },
    ),
];

/// Fan level codes: L1-L8 plus AUTO.
const FAN_LEVELS: &[u8] = &[0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x41];

/// Boot-time property values.
const INITIAL: &[(u8, &[u8])] = &[
    (0x80, &[0x31]),                   // power: off
    (0x81, &[0xFF]),                   // installation location: undetermined
    (0x82, &[0x00, 0x00, 0x52, 0x01]), // spec version: Release R
    (0x88, &[0x42]),                   // no fault
    (0x8A, &[0x00, 0x00, 0x77]),       // manufacturer code
    (0x8E, &[0x07, 0xE8, 0x01, 0x01]), // production date
    (0x8F, &[0x42]),                   // energy saving: normal operation
    (0xA0, &[0x41]),                   // air flow: AUTO
    (0xB0, &[0x41]),                   // mode: AUTO
    (0xB3, &[0xFD]),                   // setpoint: undefined
    (0xB4, &[0x32]),                   // humidity setpoint: 50%
    (0xB5, &[0x1C]),                   // cool setpoint: 28 degrees
    (0xB6, &[0x14]),                   // heat setpoint: 20 degrees
    (0xB7, &[0x1C]),                   // dry setpoint: 28 degrees
    (0xBA, &[0x32]),                   // measured humidity: fixed 50%
    (0xBB, &[0x16]),                   // measured temperature: fixed 22 degrees
    (0x9D, &[0x80, 0x8F, 0xA0, 0xB0]),
    (0x9E, &[0x80, 0x8F, 0xA0, 0xB0, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7]),
    (
        0x9F,
        &[
            0x80, 0x81, 0x82, 0x83, 0x88, 0x8A, 0x8E, 0x8F, 0xA0, 0xB0, 0xB3, 0xB4, 0xB5, 0xB6,
            0xB7, 0xBA, 0xBB, 0x9D, 0x9E, 0x9F,
        ],
    ),
];

/// Builds the home air conditioner profile.
///
/// Nine-pixel LED strip for mode color display, PWM fan, power-gated: while
/// the stored operation status is "off", every SET except the power property
/// itself is ignored.
#[must_use]
pub fn climate() -> DeviceProfile {
    let mut handlers = HashMap::new();
    handlers.insert(
        Epc::OPERATION_STATUS,
        EpcHandler {
            rule: ValidationRule::OneOf(&[0x30, 0x31]),
            effect: Effect::Power,
        },
    );
    handlers.insert(
        Epc::ENERGY_SAVING,
        EpcHandler {
            rule: ValidationRule::OneOf(&[0x41, 0x42]),
            effect: Effect::EnergySaving,
        },
    );
    handlers.insert(
        Epc::AIR_FLOW,
        EpcHandler {
            rule: ValidationRule::OneOf(FAN_LEVELS),
            effect: Effect::FanLevel,
        },
    );
    handlers.insert(
        Epc::HVAC_MODE,
        EpcHandler {
            rule: ValidationRule::ModeListed,
            effect: Effect::HvacMode,
        },
    );
    handlers.insert(
        Epc::SETPOINT,
        EpcHandler {
            rule: ValidationRule::FirstByteIn(0x00..=0x32),
            effect: Effect::Setpoint,
        },
    );
    handlers.insert(
        Epc::HUMIDITY_SETPOINT,
        EpcHandler {
            rule: ValidationRule::FirstByteIn(0x00..=0x64),
            effect: Effect::Passthrough,
        },
    );
    for epc in [Epc::COOL_SETPOINT, Epc::HEAT_SETPOINT, Epc::DRY_SETPOINT] {
        handlers.insert(
            epc,
            EpcHandler {
                rule: ValidationRule::FirstByteIn(0x00..=0x32),
                effect: Effect::Passthrough,
            },
        );
    }

    DeviceProfile::new(
        "home air conditioner",
        Eoj::HOME_AIR_CONDITIONER,
        handlers,
        MODES,
        Some(PowerConfig {
            epc: Epc::OPERATION_STATUS,
            on: 0x30,
            off: 0x31,
        }),
        INITIAL,
        9,
        &[0x80, 0x8F, 0xA0, 0xB0],
        &[0x80, 0x8F, 0xA0, 0xB0, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7],
        &[
            0x80, 0x81, 0x82, 0x83, 0x88, 0x8A, 0x8E, 0x8F, 0xA0, 0xB0, 0xB3, 0xB4, 0xB5, 0xB6,
            0xB7, 0xBA, 0xBB, 0x9D, 0x9E, 0x9F,
        ],
    )
}
