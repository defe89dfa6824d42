// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control entries of the structure file.

use std::collections::HashMap;

use serde::Deserialize;

use crate::climate::StateBindings;
use crate::types::{ControlUuid, Preset};

use super::ROOM_CONTROLLER_TYPE;

/// One control entry from the structure file's `controls` section.
///
/// The structure file describes every control the Miniserver exposes;
/// only the fields this integration consumes are modeled. State values
/// are kept loosely typed because their shape varies between control
/// types (room controllers use plain identifier strings).
#[derive(Debug, Clone, Deserialize)]
pub struct Control {
    name: String,
    #[serde(rename = "type")]
    control_type: String,
    #[serde(rename = "uuidAction")]
    uuid_action: ControlUuid,
    #[serde(default)]
    room: Option<String>,
    #[serde(default)]
    cat: Option<String>,
    #[serde(default)]
    states: HashMap<String, serde_json::Value>,
    #[serde(default)]
    details: ControlDetails,
}

/// The `details` blob of a control entry.
#[derive(Debug, Clone, Default, Deserialize)]
struct ControlDetails {
    #[serde(rename = "timerModes", default)]
    timer_modes: Vec<Preset>,
}

impl Control {
    /// Returns the control's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the Miniserver control type.
    #[must_use]
    pub fn control_type(&self) -> &str {
        &self.control_type
    }

    /// Returns the identifier commands are addressed to.
    #[must_use]
    pub fn uuid_action(&self) -> &ControlUuid {
        &self.uuid_action
    }

    /// Returns the uuid of the room the control is assigned to.
    #[must_use]
    pub fn room_uuid(&self) -> Option<&str> {
        self.room.as_deref()
    }

    /// Returns the uuid of the category the control is assigned to.
    #[must_use]
    pub fn category_uuid(&self) -> Option<&str> {
        self.cat.as_deref()
    }

    /// Returns `true` if this control is a version-2 room controller.
    #[must_use]
    pub fn is_room_controller(&self) -> bool {
        self.control_type == ROOM_CONTROLLER_TYPE
    }

    /// Returns the state identifier registered under a key, if it is a
    /// plain identifier string.
    #[must_use]
    pub fn state_uuid(&self, key: &str) -> Option<ControlUuid> {
        self.states
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(ControlUuid::from)
    }

    /// Builds the tracked state bindings for this control.
    #[must_use]
    pub fn state_bindings(&self) -> StateBindings {
        StateBindings::from_states(self.states.iter().filter_map(|(key, value)| {
            value
                .as_str()
                .map(|id| (key.as_str(), ControlUuid::from(id)))
        }))
    }

    /// Returns the timer-mode presets from the control's details.
    #[must_use]
    pub fn timer_modes(&self) -> &[Preset] {
        &self.details.timer_modes
    }
}

/// Construction metadata for one room-controller climate entity.
///
/// Produced by [`StructureFile::room_controllers`](super::StructureFile::room_controllers)
/// with room and category uuids already resolved to their display labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomControllerDescriptor {
    /// The identifier commands are addressed to.
    pub uuid_action: ControlUuid,
    /// The control's display name.
    pub name: String,
    /// The Miniserver control type.
    pub device_type: String,
    /// Resolved room label.
    pub room: Option<String>,
    /// Resolved category label.
    pub category: Option<String>,
    /// Bindings from tracked state attributes to identifiers.
    pub bindings: StateBindings,
    /// Presets the controller can be overridden to.
    pub presets: Vec<Preset>,
}

impl RoomControllerDescriptor {
    /// Creates a minimal descriptor with a name and an action identifier.
    ///
    /// Bindings and presets start empty; useful for tests and for hosts
    /// that assemble metadata themselves.
    #[must_use]
    pub fn named(name: impl Into<String>, uuid_action: impl Into<ControlUuid>) -> Self {
        Self {
            uuid_action: uuid_action.into(),
            name: name.into(),
            device_type: ROOM_CONTROLLER_TYPE.to_string(),
            room: None,
            category: None,
            bindings: StateBindings::new(),
            presets: Vec::new(),
        }
    }
}
