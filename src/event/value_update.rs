// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded Miniserver value events.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::ControlUuid;

/// A decoded value event broadcast by the hub.
///
/// The Miniserver pushes state as batches of identifier/value pairs; the
/// (out-of-scope) websocket layer decodes them and publishes one
/// `ValueUpdate` per batch on the event bus. A single update routinely
/// carries values for many unrelated controls; entities filter out the
/// identifiers they track.
///
/// # Examples
///
/// ```
/// use loxr_lib::event::ValueUpdate;
/// use loxr_lib::types::ControlUuid;
///
/// let update = ValueUpdate::new().with_value(ControlUuid::new("temp-actual"), 21.3);
/// assert_eq!(update.get(&ControlUuid::new("temp-actual")), Some(21.3));
/// assert_eq!(update.get(&ControlUuid::new("unrelated")), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueUpdate {
    values: HashMap<ControlUuid, f64>,
}

impl ValueUpdate {
    /// Creates an empty value update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, builder-style.
    #[must_use]
    pub fn with_value(mut self, id: ControlUuid, value: f64) -> Self {
        self.values.insert(id, value);
        self
    }

    /// Inserts a value, replacing any previous value for the identifier.
    pub fn insert(&mut self, id: ControlUuid, value: f64) {
        self.values.insert(id, value);
    }

    /// Returns the value for an identifier, if present.
    #[must_use]
    pub fn get(&self, id: &ControlUuid) -> Option<f64> {
        self.values.get(id).copied()
    }

    /// Returns `true` if the update carries a value for the identifier.
    #[must_use]
    pub fn contains(&self, id: &ControlUuid) -> bool {
        self.values.contains_key(id)
    }

    /// Returns the number of identifier/value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the update carries no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the identifier/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&ControlUuid, f64)> {
        self.values.iter().map(|(id, v)| (id, *v))
    }
}

impl From<HashMap<ControlUuid, f64>> for ValueUpdate {
    fn from(values: HashMap<ControlUuid, f64>) -> Self {
        Self { values }
    }
}

impl FromIterator<(ControlUuid, f64)> for ValueUpdate {
    fn from_iter<T: IntoIterator<Item = (ControlUuid, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
