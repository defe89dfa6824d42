// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for broadcasting decoded value events.

use tokio::sync::broadcast;

use super::ValueUpdate;

/// Default channel capacity for the event bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Event bus carrying decoded value events to entity listeners.
///
/// The `EventBus` uses tokio's broadcast channel so that every entity
/// receives its own copy of each update. Publishing is fire-and-forget:
/// with no subscribers the update is discarded, and a subscriber that
/// falls behind the channel capacity loses the oldest events (it observes
/// a `RecvError::Lagged`).
///
/// # Examples
///
/// ```
/// use loxr_lib::event::{EventBus, ValueUpdate};
/// use loxr_lib::types::ControlUuid;
///
/// let bus = EventBus::new();
/// let mut rx = bus.subscribe();
///
/// bus.publish(ValueUpdate::new().with_value(ControlUuid::new("state-1"), 20.5));
/// ```
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<ValueUpdate>,
}

impl EventBus {
    /// Creates a new event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new event bus with the specified capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of updates buffered per subscriber
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to value updates.
    ///
    /// Returns a receiver that will observe all updates published after
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ValueUpdate> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes a value update to all subscribers.
    ///
    /// If there are no subscribers, the update is silently discarded.
    pub fn publish(&self, update: ValueUpdate) {
        // Ignore errors (no subscribers or channel closed)
        let _ = self.sender.send(update);
    }

    /// Publishes an update and returns the number of receivers that got it.
    ///
    /// Returns 0 if there are no subscribers.
    #[must_use]
    pub fn publish_counted(&self, update: ValueUpdate) -> usize {
        self.sender.send(update).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
