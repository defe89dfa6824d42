// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system connecting the hub and its entities.
//!
//! Two channels make up the integration's data path. The [`EventBus`]
//! broadcasts decoded [`ValueUpdate`]s from the Miniserver to every entity;
//! the [`CommandSink`] carries [`CommandRequest`]s from entities back to
//! the transport. Both are fire-and-forget tokio broadcast channels.
//!
//! # Examples
//!
//! ```
//! use loxr_lib::event::{EventBus, ValueUpdate};
//! use loxr_lib::types::ControlUuid;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(ValueUpdate::new().with_value(ControlUuid::new("state-1"), 21.0));
//! ```

mod command_request;
mod event_bus;
mod value_update;

pub use command_request::{CommandRequest, CommandSink};
pub use event_bus::EventBus;
pub use value_update::ValueUpdate;
