// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recording doubles and command builders shared by the integration tests.

#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use parking_lot::Mutex;

use echor_lib::hardware::Actuator;
use echor_lib::transport::Transport;
use echor_lib::types::{Eoj, Epc, Esv, Rgb};
use echor_lib::{Command, PropertyValue};

/// Captures every published property as an `(eoj, epc, value)` triple.
///
/// Clones share one log, so a test keeps a handle while the dispatcher owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    log: Arc<Mutex<Vec<(Eoj, Epc, PropertyValue)>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    pub fn published(&self) -> Vec<(Eoj, Epc, PropertyValue)> {
        self.log.lock().clone()
    }

    /// The `(epc, bytes)` pairs published so far, for compact assertions.
    pub fn published_pairs(&self) -> Vec<(Epc, Vec<u8>)> {
        self.log
            .lock()
            .iter()
            .map(|(_, epc, value)| (*epc, value.data().to_vec()))
            .collect()
    }

    pub fn clear(&self) {
        self.log.lock().clear();
    }
}

impl Transport for RecordingTransport {
    fn publish(&mut self, eoj: Eoj, epc: Epc, value: &PropertyValue) {
        self.log.lock().push((eoj, epc, value.clone()));
    }
}

/// Captures every rendered frame and fan duty write.
#[derive(Debug, Clone, Default)]
pub struct RecordingActuator {
    frames: Arc<Mutex<Vec<Vec<Rgb>>>>,
    duties: Arc<Mutex<Vec<u16>>>,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Vec<Rgb>> {
        self.frames.lock().clone()
    }

    pub fn last_frame(&self) -> Vec<Rgb> {
        self.frames.lock().last().cloned().unwrap_or_default()
    }

    pub fn duties(&self) -> Vec<u16> {
        self.duties.lock().clone()
    }

    pub fn clear(&self) {
        self.frames.lock().clear();
        self.duties.lock().clear();
    }
}

impl Actuator for RecordingActuator {
    fn render(&mut self, pixels: &[Rgb]) {
        self.frames.lock().push(pixels.to_vec());
    }

    fn set_fan_duty(&mut self, duty: u16) {
        self.duties.lock().push(duty);
    }
}

/// A SETC addressed from the controller object.
pub fn set_cmd(deoj: Eoj, epc: Epc, bytes: &[u8]) -> Command {
    Command::new(
        IpAddr::V4(Ipv4Addr::LOCALHOST),
        1,
        Eoj::CONTROLLER,
        deoj,
        Esv::SetC,
        epc,
        PropertyValue::from_bytes(bytes),
    )
}

/// A GET addressed from the controller object.
pub fn get_cmd(deoj: Eoj, epc: Epc) -> Command {
    Command::new(
        IpAddr::V4(Ipv4Addr::LOCALHOST),
        1,
        Eoj::CONTROLLER,
        deoj,
        Esv::Get,
        epc,
        PropertyValue::empty(),
    )
}
