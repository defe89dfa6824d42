// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Miniserver command definitions.
//!
//! This module provides typed representations of the commands a hub sends
//! to a Miniserver control. A command consists of a name and an optional
//! payload, joined with `/` into the jog format the Miniserver expects
//! (e.g. `setOperatingMode/4`). The encoded string is addressed to a
//! control's action identifier when published on the send channel.
//!
//! # Examples
//!
//! ```
//! use loxr_lib::command::{ClimateCommand, Command};
//!
//! let cmd = ClimateCommand::operating_mode(4);
//! assert_eq!(cmd.name(), "setOperatingMode");
//! assert_eq!(cmd.payload(), Some("4".to_string()));
//! assert_eq!(cmd.encode(), "setOperatingMode/4");
//! ```

mod climate;

pub use climate::ClimateCommand;

/// A command that can be sent to a Miniserver control.
///
/// Commands are serialized to the slash-separated jog format for
/// transmission over the hub's send channel.
pub trait Command {
    /// Returns the command name.
    ///
    /// For example, `"setOperatingMode"` or `"override"`.
    fn name(&self) -> String;

    /// Returns the command payload, if any.
    ///
    /// The payload is the value appended to the command. For example,
    /// `setOperatingMode/4` has payload `Some("4")`.
    fn payload(&self) -> Option<String>;

    /// Returns the full command string.
    ///
    /// Format: `<name>/<payload>`, or just `<name>` if no payload.
    fn encode(&self) -> String {
        match self.payload() {
            Some(p) => format!("{}/{}", self.name(), p),
            None => self.name(),
        }
    }
}
