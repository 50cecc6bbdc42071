// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command dispatch state machine.
//!
//! For every inbound SET the dispatcher walks a fixed sequence: object
//! filter, kind filter, power gate, per-property validation, effect
//! application, publish. Validation failures reject the command with no
//! store mutation and no publish; the power gate silently ignores writes
//! while the device is off. A multi-property effect (mode application) is
//! committed as a single unit, so observers never see a partially applied
//! mode.

mod state;

use tracing::{debug, warn};

use crate::command::{Command, Dispatch};
use crate::error::Result;
use crate::hardware::Actuator;
use crate::profile::{
    AUTO_FAN_INDEX, DeviceProfile, Effect, FAN_DUTY_TABLE, fan_brightness, fan_index,
};
use crate::property::{PropertyStore, PropertyValue};
use crate::transport::Transport;
use crate::types::{Epc, Esv, Rgb};

use state::DeviceState;

/// Property mutations produced by one effect, committed and published as a
/// unit.
type Updates = Vec<(Epc, PropertyValue)>;

/// Dispatches inbound commands against one device profile.
///
/// Owns the property store (the single source of truth for current state),
/// the derived hardware state, and the two injected collaborators. All
/// mutation goes through [`dispatch`](Self::dispatch) and
/// [`announce`](Self::announce).
///
/// # Examples
///
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use echor_lib::{Command, CommandDispatcher, PropertyValue, profile};
/// use echor_lib::hardware::NullActuator;
/// use echor_lib::transport::NullTransport;
/// use echor_lib::types::{Eoj, Epc, Esv};
///
/// let mut dispatcher =
///     CommandDispatcher::new(profile::lighting(), NullTransport, NullActuator);
///
/// let cmd = Command::new(
///     IpAddr::V4(Ipv4Addr::LOCALHOST),
///     1,
///     Eoj::CONTROLLER,
///     Eoj::GENERAL_LIGHTING,
///     Esv::SetC,
///     Epc::OPERATION_STATUS,
///     PropertyValue::from_bytes(&[0x30]),
/// );
/// assert!(dispatcher.dispatch(&cmd).is_handled());
/// ```
#[derive(Debug)]
pub struct CommandDispatcher<T: Transport, A: Actuator> {
    profile: DeviceProfile,
    store: PropertyStore,
    state: DeviceState,
    transport: T,
    actuator: A,
}

impl<T: Transport, A: Actuator> CommandDispatcher<T, A> {
    /// Creates a dispatcher, seeding the store with the profile's boot-time
    /// property values.
    #[must_use]
    pub fn new(profile: DeviceProfile, transport: T, actuator: A) -> Self {
        let mut store = PropertyStore::new();
        for &(code, bytes) in profile.initial_properties() {
            store.update(Epc::new(code), PropertyValue::from_bytes(bytes));
        }

        // Devices with a fan derive brightness from a fan slot; pure lighting
        // renders at full scale until a level is set.
        let brightness = if profile.handler(Epc::AIR_FLOW).is_some() {
            fan_brightness(AUTO_FAN_INDEX)
        } else {
            255
        };

        let powered = match profile.power() {
            Some(power) => {
                store.get(power.epc).ok().and_then(PropertyValue::first) == Some(power.on)
            }
            None => true,
        };
        let mut state = DeviceState::new(brightness);
        state.powered = powered;
        state.rendering = powered && profile.strip_len() > 0;

        Self {
            profile,
            store,
            state,
            transport,
            actuator,
        }
    }

    /// The profile this dispatcher answers for.
    #[must_use]
    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Read-only view of the property store.
    #[must_use]
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Returns `true` while the stored power property says "on" (always
    /// `true` for devices without a power property).
    #[must_use]
    pub fn is_powered(&self) -> bool {
        self.state.powered
    }

    /// Returns `true` while the energy-saving rendering policy is active.
    #[must_use]
    pub fn is_energy_saving(&self) -> bool {
        self.state.energy_saving
    }

    /// Current value of a property.
    ///
    /// Transports use this to build GET responses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertyNotFound`](crate::Error::PropertyNotFound)
    /// if the code was never set.
    pub fn read(&self, epc: Epc) -> Result<&PropertyValue> {
        self.store.get(epc)
    }

    /// Seeds a property without publishing. Boot-time only; runtime changes
    /// go through [`dispatch`](Self::dispatch) or [`announce`](Self::announce).
    pub fn preset(&mut self, epc: Epc, bytes: &[u8]) {
        self.store.update(epc, PropertyValue::from_bytes(bytes));
    }

    /// Stores a new value and publishes it.
    ///
    /// This is the spontaneous-change path: sensor transitions and boot
    /// announcements, anything not triggered by an inbound command.
    pub fn announce(&mut self, epc: Epc, bytes: &[u8]) {
        let value = PropertyValue::from_bytes(bytes);
        debug!(profile = self.profile.name(), %epc, value = %value, "announce");
        self.transport.publish(self.profile.eoj(), epc, &value);
        self.store.update(epc, value);
    }

    /// Dispatches one inbound command.
    ///
    /// Commands addressed to another object, rejected by the power gate,
    /// failing validation, or naming an unsupported property all come back
    /// [`Dispatch::NotHandled`]; none of these mutate the store or publish.
    pub fn dispatch(&mut self, cmd: &Command) -> Dispatch {
        if cmd.deoj != self.profile.eoj() {
            debug!(
                profile = self.profile.name(),
                deoj = %cmd.deoj,
                "object not managed"
            );
            return Dispatch::NotHandled;
        }
        match cmd.esv {
            Esv::SetI | Esv::SetC => self.handle_set(cmd),
            Esv::Get => self.handle_get(cmd),
            Esv::Inf => self.handle_inf(cmd),
        }
    }

    fn handle_set(&mut self, cmd: &Command) -> Dispatch {
        debug!(
            profile = self.profile.name(),
            source = %cmd.source,
            epc = %cmd.epc,
            value = %cmd.value,
            "SET received"
        );

        // Power gate: while off, only the power property itself is writable.
        // Checked before validation so a bad payload while off is ignored,
        // not rejected.
        if let Some(power) = self.profile.power()
            && cmd.epc != power.epc
            && !self.state.powered
        {
            debug!(
                profile = self.profile.name(),
                epc = %cmd.epc,
                "powered off, operation ignored"
            );
            return Dispatch::NotHandled;
        }

        let Some(handler) = self.profile.handler(cmd.epc) else {
            warn!(profile = self.profile.name(), epc = %cmd.epc, "unsupported EPC");
            return Dispatch::NotHandled;
        };
        let effect = handler.effect;

        if let Err(err) = self.profile.validate(cmd.epc, &cmd.value) {
            warn!(
                profile = self.profile.name(),
                epc = %cmd.epc,
                value = %cmd.value,
                %err,
                "SET rejected"
            );
            return Dispatch::NotHandled;
        }

        let updates = match effect {
            Effect::Passthrough => vec![(cmd.epc, cmd.value.clone())],
            Effect::Power => self.apply_power(cmd),
            Effect::EnergySaving => self.apply_energy_saving(cmd),
            Effect::FanLevel => self.apply_fan_level(cmd),
            Effect::HvacMode => self.apply_hvac_mode(cmd),
            Effect::Setpoint => self.apply_setpoint(cmd),
            Effect::LightingMode => self.apply_lighting_mode(cmd),
            Effect::Brightness => self.apply_brightness(cmd),
            Effect::RgbColor => self.apply_rgb(cmd),
        };

        self.commit(updates);
        Dispatch::Handled
    }

    fn handle_get(&self, cmd: &Command) -> Dispatch {
        debug!(
            profile = self.profile.name(),
            source = %cmd.source,
            epc = %cmd.epc,
            "GET received"
        );
        if !self.profile.get_epcs().contains(&cmd.epc.code()) {
            warn!(profile = self.profile.name(), epc = %cmd.epc, "unsupported EPC");
            return Dispatch::NotHandled;
        }
        if self.store.contains(cmd.epc) {
            Dispatch::Handled
        } else {
            Dispatch::NotHandled
        }
    }

    fn handle_inf(&self, cmd: &Command) -> Dispatch {
        // Observer path: these appliances only react to their own object, so
        // an addressed notification is acknowledged and nothing else.
        debug!(
            profile = self.profile.name(),
            source = %cmd.source,
            epc = %cmd.epc,
            value = %cmd.value,
            "INF received"
        );
        Dispatch::Handled
    }

    // ========== Effects ==========
    //
    // Each effect computes the full set of property mutations up front and
    // returns them for a single commit; hardware is touched once, with the
    // fully resolved state.

    fn apply_power(&mut self, cmd: &Command) -> Updates {
        let power = self
            .profile
            .power()
            .expect("Power effect is only installed on profiles with a power config");
        if cmd.value.first() == Some(power.on) {
            self.power_on(cmd)
        } else {
            self.power_off(cmd)
        }
    }

    fn power_on(&mut self, cmd: &Command) -> Updates {
        debug!(profile = self.profile.name(), "power on");
        self.state.powered = true;
        self.state.rendering = self.profile.strip_len() > 0;

        let mut updates = Updates::new();

        let has_fan = self.profile.handler(Epc::AIR_FLOW).is_some();
        if has_fan {
            // Restore the previous configuration rather than resetting:
            // fan slot from the stored air-flow property (AUTO when unset),
            // setpoint from the mirror selected by the stored mode.
            let fan_code = self
                .store
                .get(Epc::AIR_FLOW)
                .ok()
                .and_then(PropertyValue::first)
                .unwrap_or(0x41);
            let index = fan_index(fan_code).unwrap_or(AUTO_FAN_INDEX);
            self.state.fan_index = index;
            self.state.brightness = fan_brightness(index);

            if let Some(setpoint) = self.restore_setpoint() {
                updates.push((Epc::SETPOINT, setpoint));
            }
        }

        self.render();
        if has_fan {
            self.actuator.set_fan_duty(FAN_DUTY_TABLE[self.state.fan_index]);
        }

        updates.push((cmd.epc, cmd.value.clone()));
        updates
    }

    /// Setpoint for the currently stored mode: COOL/HEAT/DRY read their
    /// mirror, AUTO and FAN read the setpoint itself. Best-effort: a missing
    /// property skips the restore, nothing else is swallowed.
    fn restore_setpoint(&self) -> Option<PropertyValue> {
        let mode = self.store.get(Epc::HVAC_MODE).ok()?.first()?;
        let source = match mode {
            0x42 => Epc::COOL_SETPOINT,
            0x43 => Epc::HEAT_SETPOINT,
            0x44 => Epc::DRY_SETPOINT,
            _ => Epc::SETPOINT,
        };
        self.store.get(source).ok().cloned()
    }

    fn power_off(&mut self, cmd: &Command) -> Updates {
        debug!(profile = self.profile.name(), "power off");
        self.state.powered = false;
        self.state.rendering = false;

        // All outputs go dark regardless of prior configuration.
        if self.profile.strip_len() > 0 {
            let frame = vec![Rgb::BLACK; self.profile.strip_len()];
            self.actuator.render(&frame);
        }
        if self.profile.handler(Epc::AIR_FLOW).is_some() {
            self.actuator.set_fan_duty(FAN_DUTY_TABLE[0]);
        }

        vec![(cmd.epc, cmd.value.clone())]
    }

    fn apply_energy_saving(&mut self, cmd: &Command) -> Updates {
        self.state.energy_saving = cmd.value.first() == Some(0x41);
        debug!(
            profile = self.profile.name(),
            enabled = self.state.energy_saving,
            "energy saving"
        );
        // The policy change is visible immediately, not at the next property
        // change.
        if self.state.rendering {
            self.render();
        }
        vec![(cmd.epc, cmd.value.clone())]
    }

    fn apply_fan_level(&mut self, cmd: &Command) -> Updates {
        let code = cmd.value.first().unwrap_or_default();
        let index = fan_index(code).unwrap_or(AUTO_FAN_INDEX);
        self.state.fan_index = index;
        self.state.brightness = fan_brightness(index);
        debug!(
            profile = self.profile.name(),
            level = format_args!("0x{code:02x}"),
            duty = FAN_DUTY_TABLE[index],
            "fan level"
        );
        if self.state.rendering {
            self.render();
            self.actuator.set_fan_duty(FAN_DUTY_TABLE[index]);
        }
        vec![(cmd.epc, cmd.value.clone())]
    }

    fn apply_hvac_mode(&mut self, cmd: &Command) -> Updates {
        let code = cmd.value.first().unwrap_or_default();
        // Copied out so the profile borrow ends before rendering.
        let entry = *self
            .profile
            .mode(code)
            .expect("mode validated against the table");

        if let Some(color) = entry.color {
            self.state.color = color;
        }
        // Every mode runs the fan at slot 5; AUTO and FAN report the AUTO
        // level, the temperature-controlled modes report L5.
        self.state.fan_index = AUTO_FAN_INDEX;
        self.state.brightness = fan_brightness(AUTO_FAN_INDEX);
        let fan_code: u8 = if code == 0x41 || code == 0x45 { 0x41 } else { 0x35 };

        debug!(
            profile = self.profile.name(),
            mode = entry.name,
            fan = format_args!("0x{fan_code:02x}"),
            "mode applied"
        );

        if self.state.rendering {
            self.render();
            self.actuator.set_fan_duty(FAN_DUTY_TABLE[AUTO_FAN_INDEX]);
        }

        let mut updates = vec![
            (cmd.epc, cmd.value.clone()),
            (Epc::AIR_FLOW, PropertyValue::from_bytes(&[fan_code])),
        ];
        if let Some(setpoint) = entry.setpoint {
            updates.push((Epc::SETPOINT, PropertyValue::from_bytes(&[setpoint])));
        }
        updates
    }

    fn apply_setpoint(&mut self, cmd: &Command) -> Updates {
        let mut updates = Updates::new();
        // Mirror the setpoint into the slot of the active mode, when that
        // mode has one. Best-effort: an unreadable mode skips the mirror.
        let mode = self
            .store
            .get(Epc::HVAC_MODE)
            .ok()
            .and_then(PropertyValue::first);
        let mirror = match mode {
            Some(0x42) => Some(Epc::COOL_SETPOINT),
            Some(0x43) => Some(Epc::HEAT_SETPOINT),
            Some(0x44) => Some(Epc::DRY_SETPOINT),
            _ => None,
        };
        if let Some(mirror) = mirror {
            updates.push((mirror, cmd.value.clone()));
        }
        updates.push((cmd.epc, cmd.value.clone()));
        updates
    }

    fn apply_lighting_mode(&mut self, cmd: &Command) -> Updates {
        let code = cmd.value.first().unwrap_or_default();
        // Copied out so the profile borrow ends before rendering.
        let entry = *self
            .profile
            .mode(code)
            .expect("mode validated against the table");

        if let Some(color) = entry.color {
            self.state.color = color;
        }
        if let Some(level) = entry.brightness {
            self.state.brightness = level_to_brightness(level);
        }
        debug!(profile = self.profile.name(), mode = entry.name, "mode applied");

        if self.state.rendering {
            self.render();
        }

        let color = self.state.color;
        vec![
            (cmd.epc, cmd.value.clone()),
            (
                Epc::RGB_COLOR,
                PropertyValue::from_bytes(&[color.r, color.g, color.b]),
            ),
        ]
    }

    fn apply_brightness(&mut self, cmd: &Command) -> Updates {
        let level = cmd.value.first().unwrap_or_default();
        self.state.brightness = level_to_brightness(level);
        debug!(profile = self.profile.name(), level, "brightness");
        if self.state.rendering {
            self.render();
        }
        vec![(cmd.epc, cmd.value.clone())]
    }

    fn apply_rgb(&mut self, cmd: &Command) -> Updates {
        let data = cmd.value.data();
        self.state.color = Rgb::new(data[0], data[1], data[2]);
        debug!(profile = self.profile.name(), color = %self.state.color, "rgb");
        if self.state.rendering {
            self.render();
        }
        // A direct color write switches the device into COLOR mode.
        vec![
            (cmd.epc, cmd.value.clone()),
            (Epc::LIGHTING_MODE, PropertyValue::from_bytes(&[0x45])),
        ]
    }

    // ========== Commit & render ==========

    /// Publishes every mutation through the transport and moves it into the
    /// store, so downstream observers see the full multi-property view.
    fn commit(&mut self, updates: Updates) {
        let eoj = self.profile.eoj();
        for (epc, value) in updates {
            self.transport.publish(eoj, epc, &value);
            self.store.update(epc, value);
        }
    }

    /// Computes the full pixel frame and hands it to the actuator. Under the
    /// energy-saving policy only every 4th pixel is lit.
    fn render(&mut self) {
        let len = self.profile.strip_len();
        if len == 0 {
            return;
        }
        let lit = self.state.color.scaled(self.state.brightness);
        let frame: Vec<Rgb> = (0..len)
            .map(|i| {
                if self.state.energy_saving && i % 4 != 0 {
                    Rgb::BLACK
                } else {
                    lit
                }
            })
            .collect();
        self.actuator.render(&frame);
    }
}

/// Converts a 0-100 illuminance level to the 0-255 render scale.
#[allow(clippy::cast_possible_truncation)]
fn level_to_brightness(level: u8) -> u8 {
    (u16::from(level) * 255 / 100) as u8
}
