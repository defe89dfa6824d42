// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for entity state changes.
//!
//! The host hub does not poll entities; it registers callbacks and gets
//! told when a re-render is due. This module provides:
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`CallbackRegistry`] - Internal registry that manages callbacks and dispatches notifications
//!
//! Subscriptions are typically created through methods on the entity:
//!
//! ```
//! use loxr_lib::climate::{ClimateConfig, RoomController};
//! use loxr_lib::event::CommandSink;
//! use loxr_lib::registry::RoomControllerDescriptor;
//!
//! let entity = RoomController::new(
//!     RoomControllerDescriptor::named("Living room", "action-1"),
//!     &ClimateConfig::default(),
//!     CommandSink::new(),
//! );
//!
//! let sub_id = entity.on_state_refresh(|| {
//!     // schedule a state update in the host
//! });
//!
//! // Later, unsubscribe
//! entity.unsubscribe(sub_id);
//! ```

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
