// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound command representation.
//!
//! A [`Command`] is constructed per inbound message by the transport layer
//! and discarded after dispatch. The [`Dispatch`] outcome tells the transport
//! whether the command was handled, which decides the kind of response frame
//! it builds (out of scope here).

use std::net::IpAddr;

use crate::property::PropertyValue;
use crate::types::{Eoj, Epc, Esv};

/// One inbound property command.
///
/// # Examples
///
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use echor_lib::{Command, PropertyValue};
/// use echor_lib::types::{Eoj, Epc, Esv};
///
/// let cmd = Command::new(
///     IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10)),
///     0x0001,
///     Eoj::CONTROLLER,
///     Eoj::HOME_AIR_CONDITIONER,
///     Esv::SetC,
///     Epc::OPERATION_STATUS,
///     PropertyValue::from_bytes(&[0x30]),
/// );
/// assert!(cmd.esv.is_set());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Address the command arrived from.
    pub source: IpAddr,
    /// Transaction identifier for request/response correlation.
    pub tid: u16,
    /// Source object.
    pub seoj: Eoj,
    /// Destination object.
    pub deoj: Eoj,
    /// Command kind.
    pub esv: Esv,
    /// Target property code.
    pub epc: Epc,
    /// Property payload (empty for GET).
    pub value: PropertyValue,
}

impl Command {
    /// Creates a command from its parts.
    #[must_use]
    pub const fn new(
        source: IpAddr,
        tid: u16,
        seoj: Eoj,
        deoj: Eoj,
        esv: Esv,
        epc: Epc,
        value: PropertyValue,
    ) -> Self {
        Self {
            source,
            tid,
            seoj,
            deoj,
            esv,
            epc,
            value,
        }
    }
}

/// Outcome of dispatching one command.
///
/// `NotHandled` covers every routine rejection: wrong target object, power
/// gate, validation failure, unsupported property code. None of these are
/// errors at the dispatch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Dispatch {
    /// The command was validated and applied (or answered, for GET).
    Handled,
    /// The command was ignored; no state changed, nothing was published.
    NotHandled,
}

impl Dispatch {
    /// Returns `true` for [`Dispatch::Handled`].
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}
