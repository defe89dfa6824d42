// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control identifier type.

use std::fmt;

/// Identifier of a Miniserver control or control state.
///
/// Loxone identifiers look like UUIDs (`0f86a2fe-0378-3e15-ffff403fb0c34b9e`)
/// but are not valid RFC 4122, so they are kept as opaque strings. The
/// distinct type prevents action identifiers, state identifiers and room
/// identifiers from being mixed up.
///
/// # Examples
///
/// ```
/// use loxr_lib::types::ControlUuid;
///
/// let id = ControlUuid::new("0f86a2fe-0378-3e15-ffff403fb0c34b9e");
/// assert_eq!(id.as_str(), "0f86a2fe-0378-3e15-ffff403fb0c34b9e");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ControlUuid(String);

impl ControlUuid {
    /// Creates a control identifier from a Miniserver identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ControlUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show only the first group for readability
        let short = self.0.split('-').next().unwrap_or(&self.0);
        write!(f, "ControlUuid({short}...)")
    }
}

impl fmt::Display for ControlUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ControlUuid {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ControlUuid {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ControlUuid> for String {
    fn from(id: ControlUuid) -> Self {
        id.0
    }
}
