// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `EchoR` Lib - A Rust library implementing ECHONET Lite appliance controllers.
//!
//! This library provides the property codec and command-dispatch core for
//! small smart-home appliances that present themselves as ECHONET Lite
//! objects: an air conditioner, an electric lock, and a general lighting
//! fixture. Transport and hardware bindings are injected through traits, so
//! the same dispatch logic runs on real devices and under test doubles.
//!
//! # Supported Features
//!
//! - **Property codec**: Length-prefixed PDC/EDT encoding and decoding
//! - **Command dispatch**: SET/GET/INF handling with per-property validation
//! - **Device profiles**: Air conditioner, electric lock, general lighting
//! - **State effects**: Mode tables, fan levels, setpoint mirroring, RGB output
//! - **Sensor monitoring**: Debounced key and door transitions for the lock
//!
//! # Supported Objects
//!
//! - Home air conditioner (`013001`): power, mode, fan, setpoints
//! - Electric lock (`026f01`): sensor-driven lock and door states
//! - General lighting (`029001`): power, brightness, lighting mode, RGB
//!
//! # Quick Start
//!
//! ## Dispatching a command
//!
//! ```
//! use std::net::{IpAddr, Ipv4Addr};
//! use echor_lib::{Command, CommandDispatcher, PropertyValue, profile};
//! use echor_lib::hardware::NullActuator;
//! use echor_lib::transport::NullTransport;
//! use echor_lib::types::{Eoj, Epc, Esv};
//!
//! let mut dispatcher =
//!     CommandDispatcher::new(profile::lighting(), NullTransport, NullActuator);
//!
//! // Power the fixture on.
//! let cmd = Command::new(
//!     IpAddr::V4(Ipv4Addr::LOCALHOST),
//!     1,
//!     Eoj::CONTROLLER,
//!     Eoj::GENERAL_LIGHTING,
//!     Esv::SetC,
//!     Epc::OPERATION_STATUS,
//!     PropertyValue::from_bytes(&[0x30]),
//! );
//! assert!(dispatcher.dispatch(&cmd).is_handled());
//! assert!(dispatcher.is_powered());
//! ```
//!
//! ## Sharing a device across threads
//!
//! The lock is driven by a transport thread and a sensor thread at once;
//! [`Appliance`] serializes both behind one handle:
//!
//! ```
//! use echor_lib::{Appliance, profile};
//! use echor_lib::hardware::NullActuator;
//! use echor_lib::transport::NullTransport;
//! use echor_lib::types::Epc;
//!
//! let appliance = Appliance::new(profile::lock(), NullTransport, NullActuator);
//! let sensor_side = appliance.clone();
//! sensor_side.announce(Epc::LOCK_STATE, &[0x41]);
//! assert_eq!(appliance.read(Epc::LOCK_STATE).unwrap().data(), &[0x41]);
//! ```

mod appliance;
pub mod command;
mod dispatch;
pub mod error;
pub mod hardware;
pub mod monitor;
pub mod profile;
pub mod property;
pub mod transport;
pub mod types;

pub use appliance::Appliance;
pub use command::{Command, Dispatch};
pub use dispatch::CommandDispatcher;
pub use error::{Error, Result, ValueError};
pub use monitor::{LockMonitor, LockTransition};
pub use profile::{DeviceProfile, Effect, EpcHandler, ValidationRule};
pub use property::{PropertyStore, PropertyValue};
pub use types::{Eoj, Epc, Esv, Rgb};
