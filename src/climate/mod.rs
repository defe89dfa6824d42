// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Climate entities for room controllers.
//!
//! A [`RoomController`] is the hub-facing view of one IRoomControllerV2
//! control: it caches the last-observed values of the state attributes it
//! tracks, answers the generic climate accessors from that cache, and
//! translates write requests into Miniserver commands.
//!
//! # Examples
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
//! assert_eq!(entity.name(), "Living room");
//! ```

mod config;
mod room_controller;
mod state;

pub use config::ClimateConfig;
pub use room_controller::{EntityAttributes, PLATFORM, RoomController};
pub use state::{AttributeCache, StateAttribute, StateBindings};
