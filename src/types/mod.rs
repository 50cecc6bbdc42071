// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for ECHONET Lite appliance control.
//!
//! This module provides type-safe representations of the protocol's small
//! identifiers. Each type ensures values are well-formed at construction
//! time, preventing runtime errors deeper in the dispatch path.
//!
//! # Types
//!
//! - [`Epc`] - 8-bit property code identifying one addressable attribute
//! - [`Eoj`] - 3-byte object identifier (class group, class, instance)
//! - [`Esv`] - command-kind code (SET, GET, notification)
//! - [`Rgb`] - LED color triple with brightness scaling

mod eoj;
mod epc;
mod esv;
mod rgb;

pub use eoj::Eoj;
pub use epc::Epc;
pub use esv::Esv;
pub use rgb::Rgb;
