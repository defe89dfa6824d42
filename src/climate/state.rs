// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tracked state attributes and the last-observed value cache.

use std::collections::HashMap;

use crate::event::ValueUpdate;
use crate::types::ControlUuid;

/// Semantic state attributes a room controller reports.
///
/// Each attribute is bound to a Miniserver state identifier through the
/// control's structure-file `states` map; the keys here are the structure
/// file's key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateAttribute {
    /// The measured room temperature (`tempActual`).
    ActualTemperature,
    /// The temperature the controller steers towards (`tempTarget`).
    TargetTemperature,
    /// The comfort baseline used by the automatic regimes (`comfortTemperature`).
    ComfortTemperature,
    /// The raw operating-mode code (`operatingMode`).
    OperatingMode,
    /// The id of the active timer-mode preset (`activeMode`).
    ActiveMode,
}

impl StateAttribute {
    /// All attributes a room controller entity tracks.
    pub const ALL: [Self; 5] = [
        Self::ActualTemperature,
        Self::TargetTemperature,
        Self::ComfortTemperature,
        Self::OperatingMode,
        Self::ActiveMode,
    ];

    /// Returns the structure-file key for this attribute.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ActualTemperature => "tempActual",
            Self::TargetTemperature => "tempTarget",
            Self::ComfortTemperature => "comfortTemperature",
            Self::OperatingMode => "operatingMode",
            Self::ActiveMode => "activeMode",
        }
    }

    /// Returns the attribute for a structure-file key, if tracked.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.key() == key)
    }
}

/// Bindings from semantic state attributes to Miniserver identifiers.
///
/// A control may bind fewer than all attributes; unbound attributes simply
/// never observe a value.
///
/// # Examples
///
/// ```
/// use loxr_lib::climate::{StateAttribute, StateBindings};
/// use loxr_lib::types::ControlUuid;
///
/// let bindings = StateBindings::new()
///     .bind(StateAttribute::ActualTemperature, ControlUuid::new("state-1"));
///
/// assert!(bindings.is_bound(StateAttribute::ActualTemperature));
/// assert!(!bindings.is_bound(StateAttribute::OperatingMode));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateBindings {
    bindings: HashMap<StateAttribute, ControlUuid>,
}

impl StateBindings {
    /// Creates an empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds bindings from structure-file `states` entries.
    ///
    /// Keys that do not name a tracked attribute are ignored; this is how
    /// the entity filters the many state identifiers a control exposes
    /// down to the subset it cares about.
    pub fn from_states<'a, I>(states: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, ControlUuid)>,
    {
        let bindings = states
            .into_iter()
            .filter_map(|(key, id)| StateAttribute::from_key(key).map(|attr| (attr, id)))
            .collect();
        Self { bindings }
    }

    /// Adds a binding, builder-style.
    #[must_use]
    pub fn bind(mut self, attribute: StateAttribute, id: ControlUuid) -> Self {
        self.bindings.insert(attribute, id);
        self
    }

    /// Returns the identifier bound to an attribute.
    #[must_use]
    pub fn get(&self, attribute: StateAttribute) -> Option<&ControlUuid> {
        self.bindings.get(&attribute)
    }

    /// Returns `true` if the attribute has a binding.
    #[must_use]
    pub fn is_bound(&self, attribute: StateAttribute) -> bool {
        self.bindings.contains_key(&attribute)
    }

    /// Returns the number of bound attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no attribute is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the tracked identifiers.
    pub fn tracked_ids(&self) -> impl Iterator<Item = &ControlUuid> {
        self.bindings.values()
    }
}

/// Last-observed values for a set of tracked state attributes.
///
/// The cache starts empty; values appear as the hub broadcasts updates.
/// [`apply`](Self::apply) reports whether anything actually changed so the
/// caller can decide whether the host needs a refresh.
#[derive(Debug, Clone, Default)]
pub struct AttributeCache {
    bindings: StateBindings,
    values: HashMap<ControlUuid, f64>,
}

impl AttributeCache {
    /// Creates an empty cache over the given bindings.
    #[must_use]
    pub fn new(bindings: StateBindings) -> Self {
        Self {
            bindings,
            values: HashMap::new(),
        }
    }

    /// Returns the bindings this cache tracks.
    #[must_use]
    pub fn bindings(&self) -> &StateBindings {
        &self.bindings
    }

    /// Applies a value update, overwriting cached values for every tracked
    /// identifier present in the update.
    ///
    /// Returns `true` if any cached value actually changed. Updates that
    /// carry only unrelated identifiers leave the cache untouched.
    #[allow(clippy::float_cmp)]
    pub fn apply(&mut self, update: &ValueUpdate) -> bool {
        let mut changed = false;
        for id in self.bindings.tracked_ids() {
            if let Some(value) = update.get(id) {
                if self.values.get(id) != Some(&value) {
                    changed = true;
                }
                self.values.insert(id.clone(), value);
            }
        }
        changed
    }

    /// Returns the last-observed value for an attribute.
    ///
    /// Returns `None` if the attribute is unbound or was never observed.
    #[must_use]
    pub fn value(&self, attribute: StateAttribute) -> Option<f64> {
        let id = self.bindings.get(attribute)?;
        self.values.get(id).copied()
    }

    /// Returns the number of identifiers with an observed value.
    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.values.len()
    }

    /// Clears all observed values, resetting to unknown.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
