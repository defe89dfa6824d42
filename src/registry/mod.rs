// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device registry backed by the Miniserver structure file.
//!
//! On connect, the Miniserver serves a structure file (`LoxAPP3.json`)
//! describing every room, category and control of the installation. This
//! module parses the sections the climate integration needs and turns the
//! room-controller controls into construction descriptors.
//!
//! # Examples
//!
//! ```
//! use loxr_lib::registry::StructureFile;
//!
//! let structure = StructureFile::parse(r#"{
//!     "rooms": {"room-1": {"name": "Living room"}},
//!     "cats": {},
//!     "controls": {
//!         "ctl-1": {
//!             "name": "Climate controller",
//!             "type": "IRoomControllerV2",
//!             "uuidAction": "act-1",
//!             "room": "room-1",
//!             "states": {"tempActual": "state-1"}
//!         }
//!     }
//! }"#).unwrap();
//!
//! let descriptors = structure.room_controllers();
//! assert_eq!(descriptors.len(), 1);
//! assert_eq!(descriptors[0].room.as_deref(), Some("Living room"));
//! ```

mod control;

pub use control::{Control, RoomControllerDescriptor};

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::ParseError;

/// The Miniserver control type implemented by this integration.
pub const ROOM_CONTROLLER_TYPE: &str = "IRoomControllerV2";

/// A named entry in the `rooms` or `cats` section.
#[derive(Debug, Clone, Deserialize)]
struct NamedEntry {
    name: String,
}

/// Parsed view of a Miniserver structure file.
///
/// Only the sections the climate integration consumes are modeled; the
/// rest of the (large) document is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructureFile {
    #[serde(default)]
    rooms: HashMap<String, NamedEntry>,
    #[serde(default)]
    cats: HashMap<String, NamedEntry>,
    #[serde(default)]
    controls: HashMap<String, Control>,
}

impl StructureFile {
    /// Parses a structure file from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the document is not valid JSON or a
    /// modeled section has an unexpected shape.
    pub fn parse(json: &str) -> Result<Self, ParseError> {
        let structure: Self = serde_json::from_str(json)?;
        tracing::debug!(
            rooms = structure.rooms.len(),
            categories = structure.cats.len(),
            controls = structure.controls.len(),
            "Parsed structure file"
        );
        Ok(structure)
    }

    /// Resolves a room uuid to its display name.
    #[must_use]
    pub fn room_name(&self, uuid: &str) -> Option<&str> {
        self.rooms.get(uuid).map(|entry| entry.name.as_str())
    }

    /// Resolves a category uuid to its display name.
    #[must_use]
    pub fn category_name(&self, uuid: &str) -> Option<&str> {
        self.cats.get(uuid).map(|entry| entry.name.as_str())
    }

    /// Iterates over all controls in the structure.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }

    /// Returns the number of controls in the structure.
    #[must_use]
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Returns descriptors for all room-controller controls.
    ///
    /// Room and category uuids are resolved to their display labels; a
    /// uuid without a matching entry yields no label. Descriptors are
    /// sorted by name for deterministic setup order.
    #[must_use]
    pub fn room_controllers(&self) -> Vec<RoomControllerDescriptor> {
        let mut descriptors: Vec<RoomControllerDescriptor> = self
            .controls
            .values()
            .filter(|control| control.is_room_controller())
            .map(|control| RoomControllerDescriptor {
                uuid_action: control.uuid_action().clone(),
                name: control.name().to_string(),
                device_type: control.control_type().to_string(),
                room: control
                    .room_uuid()
                    .and_then(|uuid| self.room_name(uuid))
                    .map(str::to_string),
                category: control
                    .category_uuid()
                    .and_then(|uuid| self.category_name(uuid))
                    .map(str::to_string),
                bindings: control.state_bindings(),
                presets: control.timer_modes().to_vec(),
            })
            .collect();

        descriptors.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(count = descriptors.len(), "Found room controllers");
        descriptors
    }
}
