// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Electric lock profile.

use std::collections::HashMap;

use crate::types::Eoj;

use super::DeviceProfile;

/// Boot-time property values. The lock reports its two sensor-driven states
/// (0xE0 lock, 0xE3 door) and is always powered.
const INITIAL: &[(u8, &[u8])] = &[
    (0x80, &[0x30]),                   // operation status: on
    (0x81, &[0xFF]),                   // installation location: undetermined
    (0x82, &[0x00, 0x00, 0x52, 0x01]), // spec version: Release R
    (0x88, &[0x42]),                   // no fault
    (0x8A, &[0x00, 0x00, 0x77]),       // manufacturer code
    (0x8E, &[0x07, 0xE8, 0x01, 0x01]), // production date
    (0xE0, &[0x42]),                   // locked
    (0xE3, &[0x42]),                   // door closed
    (0x9D, &[0x80, 0xE0, 0xE3]),
    (0x9E, &[]), // no settable properties
    (
        0x9F,
        &[
            0x80, 0x81, 0x82, 0x88, 0x8A, 0x8E, 0xE0, 0xE3, 0x9D, 0x9E, 0x9F,
        ],
    ),
];

/// Builds the electric lock profile.
///
/// The lock exposes no settable properties; its lock and door states are
/// driven by a sensor monitor and announced through
/// [`announce`](crate::CommandDispatcher::announce).
#[must_use]
pub fn lock() -> DeviceProfile {
    DeviceProfile::new(
        "electric lock",
        Eoj::ELECTRIC_LOCK,
        HashMap::new(),
        &[],
        None,
        INITIAL,
        0,
        &[0x80, 0xE0, 0xE3],
        &[],
        &[
            0x80, 0x81, 0x82, 0x88, 0x8A, 0x8E, 0xE0, 0xE3, 0x9D, 0x9E, 0x9F,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Epc;

    #[test]
    fn profile_identity() {
        let profile = lock();
        assert_eq!(profile.eoj(), Eoj::ELECTRIC_LOCK);
        assert_eq!(profile.strip_len(), 0);
        assert!(profile.power().is_none());
    }

    #[test]
    fn no_settable_properties() {
        let profile = lock();
        assert!(profile.set_epcs().is_empty());
        assert!(profile.handler(Epc::OPERATION_STATUS).is_none());
        assert!(profile.handler(Epc::LOCK_STATE).is_none());
    }

    #[test]
    fn announces_lock_and_door() {
        let profile = lock();
        assert!(profile.inf_epcs().contains(&0xE0));
        assert!(profile.inf_epcs().contains(&0xE3));
    }
}
