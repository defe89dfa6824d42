// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room-controller presets (timer modes).

use std::fmt;

use serde::Deserialize;

/// A preset a room controller can be overridden to.
///
/// Presets come from the `timerModes` list in the control's structure-file
/// details; the Miniserver identifies them by numeric id, the hub by name.
///
/// # Examples
///
/// ```
/// use loxr_lib::types::Preset;
///
/// let preset: Preset = serde_json::from_str(
///     r#"{"id": 2, "name": "Comfort", "description": "Comfort temperature"}"#,
/// ).unwrap();
/// assert_eq!(preset.id(), 2);
/// assert_eq!(preset.name(), "Comfort");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Preset {
    id: u32,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl Preset {
    /// Creates a preset from an id and a display name.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    /// Returns the Miniserver preset id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the optional description from the structure file.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}
