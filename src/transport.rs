// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport collaborator interface.
//!
//! The underlying network transport (multicast framing, request/response
//! correlation, retransmission) lives outside this crate. The dispatcher
//! consumes it through this trait only: a fire-and-forget publish of a
//! property's current value. The inbound direction is the embedding runtime
//! feeding [`Command`](crate::Command)s into the dispatcher.

use crate::property::PropertyValue;
use crate::types::{Eoj, Epc};

/// Outbound notification channel to the home-automation network.
///
/// Implementations are expected to be non-blocking or bounded; a publish
/// must never stall the dispatch path indefinitely.
pub trait Transport {
    /// Announces the current value of one property of `eoj`.
    ///
    /// Fire and forget: no return value, delivery is best-effort at this
    /// layer.
    fn publish(&mut self, eoj: Eoj, epc: Epc, value: &PropertyValue);
}

/// Transport that drops every publish. Useful for standalone operation and
/// tests that only inspect the property store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTransport;

impl Transport for NullTransport {
    fn publish(&mut self, _eoj: Eoj, _epc: Epc, _value: &PropertyValue) {}
}
