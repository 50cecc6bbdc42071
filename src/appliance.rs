// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared handle over a dispatcher.
//!
//! The lock runs two threads against one device: the transport thread feeds
//! inbound commands, the sensor thread announces debounced transitions. Both
//! go through an [`Appliance`], which serializes them behind one mutex, so
//! every announce and dispatch sees a consistent store.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::command::{Command, Dispatch};
use crate::dispatch::CommandDispatcher;
use crate::error::Result;
use crate::hardware::Actuator;
use crate::profile::DeviceProfile;
use crate::property::PropertyValue;
use crate::transport::Transport;
use crate::types::Epc;

/// Clonable, thread-safe handle to a [`CommandDispatcher`].
///
/// # Examples
///
/// ```
/// use echor_lib::{Appliance, profile};
/// use echor_lib::hardware::NullActuator;
/// use echor_lib::transport::NullTransport;
/// use echor_lib::types::Epc;
///
/// let appliance = Appliance::new(profile::lock(), NullTransport, NullActuator);
/// let sensor_side = appliance.clone();
/// sensor_side.announce(Epc::LOCK_STATE, &[0x41]);
/// assert_eq!(appliance.read(Epc::LOCK_STATE).unwrap().data(), &[0x41]);
/// ```
#[derive(Debug)]
pub struct Appliance<T: Transport, A: Actuator> {
    inner: Arc<Mutex<CommandDispatcher<T, A>>>,
}

impl<T: Transport, A: Actuator> Clone for Appliance<T, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport, A: Actuator> Appliance<T, A> {
    /// Wraps a fresh dispatcher for the given profile.
    #[must_use]
    pub fn new(profile: DeviceProfile, transport: T, actuator: A) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CommandDispatcher::new(
                profile, transport, actuator,
            ))),
        }
    }

    /// Dispatches one inbound command under the lock.
    pub fn dispatch(&self, cmd: &Command) -> Dispatch {
        self.inner.lock().dispatch(cmd)
    }

    /// Stores and publishes a spontaneous property change.
    pub fn announce(&self, epc: Epc, bytes: &[u8]) {
        self.inner.lock().announce(epc, bytes);
    }

    /// Current value of a property, cloned out from under the lock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertyNotFound`](crate::Error::PropertyNotFound)
    /// if the code was never set.
    pub fn read(&self, epc: Epc) -> Result<PropertyValue> {
        self.inner.lock().read(epc).cloned()
    }

    /// Returns `true` while the device is powered on.
    #[must_use]
    pub fn is_powered(&self) -> bool {
        self.inner.lock().is_powered()
    }

    /// Runs a closure with exclusive access to the dispatcher.
    pub fn with<R>(&self, f: impl FnOnce(&mut CommandDispatcher<T, A>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
