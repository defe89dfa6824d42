// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generic HVAC operating modes.
//!
//! The Miniserver reports a numeric operating mode; the hub side works with
//! the semantic modes defined here. The mapping is bidirectional but not
//! symmetric: three Miniserver codes collapse onto [`HvacMode::Auto`], and
//! the code emitted for `Auto` is a configured parameter rather than a fixed
//! table entry.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::AutoModeCode;

/// Semantic HVAC mode of a climate entity.
///
/// # Examples
///
/// ```
/// use loxr_lib::types::HvacMode;
///
/// assert_eq!(HvacMode::Heat.as_str(), "heat");
/// assert_eq!("heat_cool".parse::<HvacMode>().unwrap(), HvacMode::HeatCool);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HvacMode {
    /// The controller is off (operating mode never observed).
    Off,
    /// Automatic regime following the controller's schedule.
    Auto,
    /// Manual heating.
    Heat,
    /// Manual cooling.
    Cool,
    /// Manual heating and cooling.
    HeatCool,
}

impl HvacMode {
    /// The modes a room controller lets the user select.
    ///
    /// `Off` is reported but never selectable; the Miniserver has no
    /// command for it.
    pub const SELECTABLE: [Self; 4] = [Self::Auto, Self::Heat, Self::HeatCool, Self::Cool];

    /// Returns the hub-facing mode string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Auto => "auto",
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::HeatCool => "heat_cool",
        }
    }

    /// Returns the Miniserver operating-mode code for this mode.
    ///
    /// `Heat`, `Cool` and `HeatCool` have fixed codes; `Auto` maps to the
    /// configured automatic code (0-2). `Off` has no code: the reverse
    /// mapping does not cover it.
    #[must_use]
    pub const fn miniserver_code(&self, auto_mode: AutoModeCode) -> Option<u8> {
        match self {
            Self::Auto => Some(auto_mode.value()),
            Self::HeatCool => Some(3),
            Self::Heat => Some(4),
            Self::Cool => Some(5),
            Self::Off => None,
        }
    }

    /// Returns `true` if this mode is user-selectable.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "auto" => Ok(Self::Auto),
            "heat" => Ok(Self::Heat),
            "cool" => Ok(Self::Cool),
            "heat_cool" => Ok(Self::HeatCool),
            other => Err(ValueError::InvalidHvacMode(other.to_string())),
        }
    }
}
