// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device property store.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::property::PropertyValue;
use crate::types::Epc;

/// Mapping from property code to current value.
///
/// The store is created at device startup and lives as long as the device.
/// It is mutated only through [`update`](Self::update); there is no delete,
/// property codes are fixed for the lifetime of a device instance.
///
/// The store itself does not push notifications. Publishing updated values to
/// the transport is the dispatcher's responsibility; both happen inside one
/// dispatch call, so readers never observe a half-committed effect.
///
/// # Examples
///
/// ```
/// use echor_lib::{PropertyStore, PropertyValue};
/// use echor_lib::types::Epc;
///
/// let mut store = PropertyStore::new();
/// store.update(Epc::OPERATION_STATUS, PropertyValue::from_bytes(&[0x31]));
/// assert_eq!(
///     store.get(Epc::OPERATION_STATUS).unwrap().data(),
///     &[0x31]
/// );
/// assert!(store.get(Epc::SETPOINT).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    properties: HashMap<Epc, PropertyValue>,
}

impl PropertyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional upsert; overwrites any prior value for the code.
    pub fn update(&mut self, epc: Epc, value: PropertyValue) {
        self.properties.insert(epc, value);
    }

    /// Returns the current value for a code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertyNotFound`] if the code was never set.
    pub fn get(&self, epc: Epc) -> Result<&PropertyValue> {
        self.properties
            .get(&epc)
            .ok_or(Error::PropertyNotFound { epc })
    }

    /// Returns `true` if the code has a value.
    #[must_use]
    pub fn contains(&self, epc: Epc) -> bool {
        self.properties.contains_key(&epc)
    }

    /// Returns the number of stored properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no property was ever set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over properties sorted by code. Ordering is for display
    /// only; correctness never depends on it.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (Epc, &PropertyValue)> {
        let mut entries: Vec<_> = self.properties.iter().map(|(&epc, v)| (epc, v)).collect();
        entries.sort_by_key(|(epc, _)| *epc);
        entries.into_iter()
    }
}
