// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hardware collaborator interface.
//!
//! Actuation (LED strip driver, fan PWM) is external; the dispatcher hands a
//! fully computed pixel frame and a duty value through this trait. Calls are
//! expected to be non-blocking or bounded.

use crate::types::Rgb;

/// Output side of an appliance: LED strip and fan PWM.
///
/// Both methods default to no-ops so devices without one of the outputs only
/// implement what they drive.
pub trait Actuator {
    /// Writes one full frame to the LED strip. The frame already has
    /// brightness and the energy-saving policy applied per pixel.
    fn render(&mut self, pixels: &[Rgb]) {
        let _ = pixels;
    }

    /// Sets the fan PWM duty (16-bit scale, 0 = off).
    fn set_fan_duty(&mut self, duty: u16) {
        let _ = duty;
    }
}

/// Actuator with no outputs (the electric lock).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullActuator;

impl Actuator for NullActuator {}
