// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for entity state subscriptions.
//!
//! This module provides the core types for notifying the host about
//! entity state:
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Internal registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::types::HvacMode;

/// Unique identifier for a subscription.
///
/// This ID is returned when creating a subscription and can be used to
/// unsubscribe later. IDs are unique within an entity's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for state-refresh callbacks.
type RefreshCallback = Arc<dyn Fn() + Send + Sync>;

/// Type alias for HVAC mode callbacks.
type HvacModeCallback = Arc<dyn Fn(HvacMode) + Send + Sync>;

/// Registry for managing entity subscription callbacks.
///
/// The host registers a state-refresh callback to learn when an entity's
/// cached state changed and its representation should be re-rendered (the
/// equivalent of a scheduled state update in hub frameworks). Mode
/// callbacks additionally deliver the new semantic mode.
///
/// # Thread Safety
///
/// The registry is fully thread-safe; callbacks are wrapped in `Arc` so
/// they can be dispatched without holding the lock.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// State-refresh callbacks.
    refresh_callbacks: RwLock<HashMap<SubscriptionId, RefreshCallback>>,
    /// HVAC mode change callbacks.
    hvac_mode_callbacks: RwLock<HashMap<SubscriptionId, HvacModeCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            refresh_callbacks: RwLock::new(HashMap::new()),
            hvac_mode_callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Generates a new unique subscription ID.
    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a callback invoked when the entity's state changed.
    pub fn on_state_refresh<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.refresh_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback invoked when the semantic HVAC mode changed.
    pub fn on_hvac_mode_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(HvacMode) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.hvac_mode_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Removes a subscription.
    ///
    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.refresh_callbacks.write().remove(&id).is_some()
            || self.hvac_mode_callbacks.write().remove(&id).is_some()
    }

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.refresh_callbacks.read().len() + self.hvac_mode_callbacks.read().len()
    }

    /// Invokes all state-refresh callbacks.
    pub fn notify_state_refresh(&self) {
        let callbacks: Vec<RefreshCallback> =
            self.refresh_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Invokes all HVAC mode callbacks with the new mode.
    pub fn notify_hvac_mode_changed(&self, mode: HvacMode) {
        let callbacks: Vec<HvacModeCallback> =
            self.hvac_mode_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(mode);
        }
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("refresh_callbacks", &self.refresh_callbacks.read().len())
            .field("hvac_mode_callbacks", &self.hvac_mode_callbacks.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn refresh_callback_invoked() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        registry.on_state_refresh(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.notify_state_refresh();
        registry.notify_state_refresh();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn hvac_mode_callback_receives_mode() {
        let registry = CallbackRegistry::new();
        let seen = Arc::new(RwLock::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        registry.on_hvac_mode_changed(move |mode| {
            seen_clone.write().push(mode);
        });

        registry.notify_hvac_mode_changed(HvacMode::Heat);

        assert_eq!(seen.read().as_slice(), &[HvacMode::Heat]);
    }

    #[test]
    fn unsubscribe_removes_callback() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        let id = registry.on_state_refresh(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(registry.unsubscribe(id));
        registry.notify_state_refresh();

        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!registry.unsubscribe(id));
    }

    #[test]
    fn ids_are_unique() {
        let registry = CallbackRegistry::new();
        let id1 = registry.on_state_refresh(|| {});
        let id2 = registry.on_hvac_mode_changed(|_| {});
        assert_ne!(id1, id2);
    }

    #[test]
    fn callback_count() {
        let registry = CallbackRegistry::new();
        assert_eq!(registry.callback_count(), 0);

        registry.on_state_refresh(|| {});
        registry.on_hvac_mode_changed(|_| {});
        assert_eq!(registry.callback_count(), 2);
    }

    #[test]
    fn display_format() {
        assert_eq!(SubscriptionId::new(7).to_string(), "Sub(7)");
    }
}
