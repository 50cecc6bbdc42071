// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the air conditioner profile, exercising the full
//! dispatch path through recording transport and actuator doubles.

mod common;

use common::{RecordingActuator, RecordingTransport, set_cmd};
use echor_lib::profile::{AUTO_FAN_INDEX, FAN_DUTY_TABLE};
use echor_lib::types::{Eoj, Epc, Rgb};
use echor_lib::{CommandDispatcher, Dispatch};

const AC: Eoj = Eoj::HOME_AIR_CONDITIONER;
const STRIP_LEN: usize = 9;

fn harness() -> (
    CommandDispatcher<RecordingTransport, RecordingActuator>,
    RecordingTransport,
    RecordingActuator,
) {
    let transport = RecordingTransport::new();
    let actuator = RecordingActuator::new();
    let dispatcher = CommandDispatcher::new(
        echor_lib::profile::climate(),
        transport.clone(),
        actuator.clone(),
    );
    (dispatcher, transport, actuator)
}

fn power_on(dispatcher: &mut CommandDispatcher<RecordingTransport, RecordingActuator>) {
    let cmd = set_cmd(AC, Epc::OPERATION_STATUS, &[0x30]);
    assert!(dispatcher.dispatch(&cmd).is_handled());
}

#[test]
fn cool_mode_publishes_the_full_bundle() {
    let (mut dispatcher, transport, actuator) = harness();
    power_on(&mut dispatcher);
    transport.clear();
    actuator.clear();

    let cmd = set_cmd(AC, Epc::HVAC_MODE, &[0x42]);
    assert!(dispatcher.dispatch(&cmd).is_handled());

    // Mode, forced fan level, and the mode's setpoint go out together.
    assert_eq!(
        transport.published_pairs(),
        vec![
            (Epc::HVAC_MODE, vec![0x42]),
            (Epc::AIR_FLOW, vec![0x35]),
            (Epc::SETPOINT, vec![0x19]),
        ]
    );
    assert_eq!(dispatcher.read(Epc::SETPOINT).unwrap().data(), &[0x19]);

    // COOL renders blue at the slot-5 brightness.
    let frame = actuator.last_frame();
    assert_eq!(frame.len(), STRIP_LEN);
    assert_eq!(frame[0], Rgb::new(0, 0, 255).scaled(165));
    assert_eq!(actuator.duties(), vec![FAN_DUTY_TABLE[AUTO_FAN_INDEX]]);
}

#[test]
fn fan_mode_keeps_the_auto_fan_code() {
    let (mut dispatcher, transport, _actuator) = harness();
    power_on(&mut dispatcher);
    transport.clear();

    let cmd = set_cmd(AC, Epc::HVAC_MODE, &[0x45]);
    assert!(dispatcher.dispatch(&cmd).is_handled());

    assert_eq!(dispatcher.read(Epc::AIR_FLOW).unwrap().data(), &[0x41]);
    assert_eq!(dispatcher.read(Epc::SETPOINT).unwrap().data(), &[0xFD]);
}

#[test]
fn unknown_mode_rejected_without_side_effects() {
    let (mut dispatcher, transport, _actuator) = harness();
    power_on(&mut dispatcher);
    transport.clear();

    let cmd = set_cmd(AC, Epc::HVAC_MODE, &[0x46]);
    assert_eq!(dispatcher.dispatch(&cmd), Dispatch::NotHandled);
    assert!(transport.published_pairs().is_empty());
    assert_eq!(dispatcher.read(Epc::HVAC_MODE).unwrap().data(), &[0x41]);
}

#[test]
fn power_gate_ignores_fan_writes_while_off() {
    let (mut dispatcher, transport, actuator) = harness();

    let cmd = set_cmd(AC, Epc::AIR_FLOW, &[0x33]);
    assert_eq!(dispatcher.dispatch(&cmd), Dispatch::NotHandled);

    assert_eq!(dispatcher.read(Epc::AIR_FLOW).unwrap().data(), &[0x41]);
    assert!(transport.published_pairs().is_empty());
    assert!(actuator.duties().is_empty());
}

#[test]
fn power_on_restores_the_stored_fan_level() {
    let (mut dispatcher, _transport, actuator) = harness();

    // A previous session left the fan at L3.
    dispatcher.preset(Epc::AIR_FLOW, &[0x33]);
    power_on(&mut dispatcher);

    assert_eq!(actuator.duties(), vec![FAN_DUTY_TABLE[3]]);
    // L3 brightness is 15 + 30 * 3.
    let frame = actuator.last_frame();
    assert_eq!(frame[0], Rgb::new(105, 105, 105));
}

#[test]
fn power_on_restores_the_setpoint_of_the_stored_mode() {
    let (mut dispatcher, transport, _actuator) = harness();

    // COOL was active with a custom setpoint when last powered off.
    dispatcher.preset(Epc::HVAC_MODE, &[0x42]);
    dispatcher.preset(Epc::COOL_SETPOINT, &[0x1E]);
    power_on(&mut dispatcher);

    assert_eq!(
        transport.published_pairs(),
        vec![
            (Epc::SETPOINT, vec![0x1E]),
            (Epc::OPERATION_STATUS, vec![0x30]),
        ]
    );
    assert_eq!(dispatcher.read(Epc::SETPOINT).unwrap().data(), &[0x1E]);
}

#[test]
fn power_off_zeroes_all_outputs() {
    let (mut dispatcher, _transport, actuator) = harness();
    power_on(&mut dispatcher);
    actuator.clear();

    let cmd = set_cmd(AC, Epc::OPERATION_STATUS, &[0x31]);
    assert!(dispatcher.dispatch(&cmd).is_handled());

    assert_eq!(actuator.last_frame(), vec![Rgb::BLACK; STRIP_LEN]);
    assert_eq!(actuator.duties(), vec![FAN_DUTY_TABLE[0]]);
}

#[test]
fn energy_saving_dims_to_every_fourth_pixel() {
    let (mut dispatcher, _transport, actuator) = harness();
    power_on(&mut dispatcher);
    actuator.clear();

    let cmd = set_cmd(AC, Epc::ENERGY_SAVING, &[0x41]);
    assert!(dispatcher.dispatch(&cmd).is_handled());
    assert!(dispatcher.is_energy_saving());

    // The policy re-renders immediately: pixels 0, 4, 8 stay lit.
    let frame = actuator.last_frame();
    assert_eq!(frame.len(), STRIP_LEN);
    for (i, pixel) in frame.iter().enumerate() {
        if i % 4 == 0 {
            assert_ne!(*pixel, Rgb::BLACK, "pixel {i} should stay lit");
        } else {
            assert_eq!(*pixel, Rgb::BLACK, "pixel {i} should go dark");
        }
    }

    // Switching back restores the full frame.
    let cmd = set_cmd(AC, Epc::ENERGY_SAVING, &[0x42]);
    assert!(dispatcher.dispatch(&cmd).is_handled());
    let frame = actuator.last_frame();
    assert!(frame.iter().all(|pixel| *pixel != Rgb::BLACK));
}

#[test]
fn fan_level_drives_duty_and_brightness() {
    let (mut dispatcher, transport, actuator) = harness();
    power_on(&mut dispatcher);
    transport.clear();
    actuator.clear();

    let cmd = set_cmd(AC, Epc::AIR_FLOW, &[0x38]);
    assert!(dispatcher.dispatch(&cmd).is_handled());

    assert_eq!(transport.published_pairs(), vec![(Epc::AIR_FLOW, vec![0x38])]);
    assert_eq!(actuator.duties(), vec![FAN_DUTY_TABLE[8]]);
    // L8 brightness is 15 + 30 * 8.
    assert_eq!(actuator.last_frame()[0], Rgb::new(255, 255, 255));
}

#[test]
fn setpoint_out_of_range_rejected() {
    let (mut dispatcher, transport, _actuator) = harness();
    power_on(&mut dispatcher);
    transport.clear();

    let cmd = set_cmd(AC, Epc::SETPOINT, &[0x33]);
    assert_eq!(dispatcher.dispatch(&cmd), Dispatch::NotHandled);
    assert!(transport.published_pairs().is_empty());
}

#[test]
fn restart_scenario_restores_previous_configuration() {
    let (mut dispatcher, transport, actuator) = harness();

    // Prior session: AUTO mode with setpoint 25 degrees.
    dispatcher.preset(Epc::SETPOINT, &[0x19]);
    power_on(&mut dispatcher);

    assert_eq!(
        transport.published_pairs(),
        vec![
            (Epc::SETPOINT, vec![0x19]),
            (Epc::OPERATION_STATUS, vec![0x30]),
        ]
    );
    assert_eq!(actuator.duties(), vec![FAN_DUTY_TABLE[AUTO_FAN_INDEX]]);
    // AUTO renders white at the slot-5 brightness.
    assert_eq!(actuator.last_frame(), vec![Rgb::new(165, 165, 165); STRIP_LEN]);
}
