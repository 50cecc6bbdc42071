// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Derived device state owned by the dispatcher.

use crate::types::Rgb;

/// Hardware-facing state derived from the property store: the current render
/// color and brightness, the fan slot, and the power/render/energy-saving
/// flags.
///
/// This doubles as the dispatch state machine's memory; there is no other
/// persistent cross-command state besides the property store itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeviceState {
    /// Stored power property says "on".
    pub powered: bool,
    /// Outputs are live; hardware is refreshed on state changes.
    pub rendering: bool,
    /// Energy-saving rendering policy: light every 4th pixel only.
    pub energy_saving: bool,
    /// Current display color.
    pub color: Rgb,
    /// Render brightness on the 0-255 scale.
    pub brightness: u8,
    /// Current fan duty table slot.
    pub fan_index: usize,
}

impl DeviceState {
    pub(crate) fn new(brightness: u8) -> Self {
        Self {
            powered: false,
            rendering: false,
            energy_saving: false,
            color: Rgb::WHITE,
            brightness,
            fan_index: 0,
        }
    }
}
