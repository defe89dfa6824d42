// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `LoxR` Lib - A Rust library to integrate Loxone Miniserver room
//! controllers into smart-home hubs.
//!
//! This library maps IRoomControllerV2 controls onto a generic climate
//! entity: decoded value events flow in over an event bus, cached state
//! answers the climate accessors, and user requests flow back out as
//! Miniserver command strings on a send channel.
//!
//! The Miniserver transport itself (encrypted websocket session, token
//! refresh, binary event decoding) is a separate concern; this crate
//! consumes its outputs and produces its inputs.
//!
//! # Supported Features
//!
//! - **State tracking**: Current, target and comfort temperatures,
//!   operating mode, active preset
//! - **Mode control**: auto / heat / cool / heat+cool with a configurable
//!   automatic regime
//! - **Temperature control**: Absolute targets in manual regimes, comfort
//!   offsets in automatic regimes
//! - **Presets**: Schedule overrides from the controller's timer modes
//!
//! # Quick Start
//!
//! ```
//! use loxr_lib::{ClimateConfig, ClimatePlatform, CommandSink, EventBus, StructureFile,
//!                ValueUpdate};
//! use loxr_lib::types::{ControlUuid, HvacMode};
//!
//! #[tokio::main]
//! async fn main() -> loxr_lib::Result<()> {
//!     // The structure file comes from the Miniserver on connect
//!     let structure = StructureFile::parse(
//!         r#"{
//!             "rooms": {"room-1": {"name": "Living room"}},
//!             "controls": {
//!                 "ctl-1": {
//!                     "name": "Living room climate",
//!                     "type": "IRoomControllerV2",
//!                     "uuidAction": "act-1",
//!                     "room": "room-1",
//!                     "states": {"operatingMode": "state-mode"}
//!                 }
//!             }
//!         }"#,
//!     )?;
//!
//!     let bus = EventBus::new();
//!     let sink = CommandSink::new();
//!     let mut platform = ClimatePlatform::new(ClimateConfig::default(), bus.clone(), sink);
//!     platform.setup(&structure);
//!
//!     // The websocket layer publishes decoded events on the bus
//!     bus.publish(ValueUpdate::new().with_value(ControlUuid::new("state-mode"), 4.0));
//!
//!     // Entities answer the generic climate accessors and publish
//!     // command requests on the sink
//!     let entity = platform.entity(&ControlUuid::new("act-1")).unwrap();
//!     entity.set_hvac_mode(HvacMode::Cool);
//!     Ok(())
//! }
//! ```
//!
//! # Entity Subscriptions
//!
//! Hosts learn about state changes via callbacks instead of polling:
//!
//! ```
//! use loxr_lib::climate::{ClimateConfig, RoomController};
//! use loxr_lib::event::CommandSink;
//! use loxr_lib::registry::RoomControllerDescriptor;
//!
//! let entity = RoomController::new(
//!     RoomControllerDescriptor::named("Office", "act-9"),
//!     &ClimateConfig::default(),
//!     CommandSink::new(),
//! );
//!
//! entity.on_state_refresh(|| {
//!     // schedule a re-render in the host
//! });
//! ```

pub mod climate;
pub mod command;
pub mod error;
pub mod event;
pub mod platform;
pub mod registry;
pub mod subscription;
pub mod types;

pub use climate::{
    AttributeCache, ClimateConfig, EntityAttributes, RoomController, StateAttribute, StateBindings,
};
pub use command::{ClimateCommand, Command};
pub use error::{Error, ParseError, Result, ValueError};
pub use event::{CommandRequest, CommandSink, EventBus, ValueUpdate};
pub use platform::ClimatePlatform;
pub use registry::{Control, RoomControllerDescriptor, StructureFile};
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use types::{AutoModeCode, ControlUuid, HvacMode, OperatingMode, Preset, Temperature};
