// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property value codec and per-device property store.
//!
//! A [`PropertyValue`] is the length-prefixed byte payload (PDC + EDT) of one
//! property; the [`PropertyStore`] maps property codes to their current
//! values and is the single source of truth for device state.

mod store;
mod value;

pub use store::PropertyStore;
pub use value::PropertyValue;
